//! Grouping of tagged listings into per-title product groups.
//!
//! Listings are keyed by their lowercased title. Each group holds at most
//! one listing per vendor; a later listing with the same key and vendor
//! replaces the earlier one. Groups come out in the order their key was
//! first seen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Listing, Vendor};

/// At most one listing per vendor under one normalised title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    /// Lowercased title shared by every listing in the group.
    pub key: String,
    /// Vendor A slot.
    pub amazon: Option<Listing>,
    /// Vendor B slot.
    pub flipkart: Option<Listing>,
}

impl ProductGroup {
    fn new(key: String) -> Self {
        Self {
            key,
            amazon: None,
            flipkart: None,
        }
    }

    /// The slot for `vendor`.
    pub fn slot(&self, vendor: Vendor) -> Option<&Listing> {
        match vendor {
            Vendor::Amazon => self.amazon.as_ref(),
            Vendor::Flipkart => self.flipkart.as_ref(),
        }
    }

    fn slot_mut(&mut self, vendor: Vendor) -> &mut Option<Listing> {
        match vendor {
            Vendor::Amazon => &mut self.amazon,
            Vendor::Flipkart => &mut self.flipkart,
        }
    }
}

/// Normalised grouping key for a title.
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}

/// Group `listings` by normalised title.
///
/// Listings without a usable title are skipped. Output order is the order
/// in which each key was first seen.
pub fn group_listings(listings: Vec<Listing>) -> Vec<ProductGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ProductGroup> = Vec::new();
    let mut skipped = 0usize;

    for listing in listings {
        let Some(title) = listing.usable_title() else {
            skipped += 1;
            continue;
        };
        let key = title_key(title);
        let position = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(ProductGroup::new(key));
            groups.len() - 1
        });

        let slot = groups[position].slot_mut(listing.source);
        if slot.is_some() {
            tracing::trace!(vendor = %listing.source, "replacing earlier listing with same title");
        }
        *slot = Some(listing);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "listings without a title skipped");
    }
    groups
}
