//! Result reconciliation: group, price, rank.
//!
//! Takes the flat vendor-tagged listing sequence produced by the
//! dispatcher, groups listings by normalised title, normalises each slot's
//! price, and returns the groups ordered by lowest price.

pub mod group;
pub mod price;

use serde::{Deserialize, Serialize};

use crate::types::Listing;

pub use group::{group_listings, title_key, ProductGroup};
pub use price::{format_price, normalize_price, parse_price_text, Price, NOT_AVAILABLE};

/// A product group together with its computed prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedProduct {
    /// The grouped listings.
    pub group: ProductGroup,
    /// Normalised vendor A price.
    pub amazon_price: Price,
    /// Normalised vendor B price.
    pub flipkart_price: Price,
    /// `min(amazon_price, flipkart_price)`, unavailable only if both are.
    pub lowest_price: Price,
}

impl MergedProduct {
    /// Compute the prices for `group`.
    pub fn from_group(group: ProductGroup) -> Self {
        let amazon_price = slot_price(group.amazon.as_ref());
        let flipkart_price = slot_price(group.flipkart.as_ref());
        Self {
            lowest_price: amazon_price.min(flipkart_price),
            amazon_price,
            flipkart_price,
            group,
        }
    }
}

fn slot_price(slot: Option<&Listing>) -> Price {
    slot.map_or(Price::Unavailable, |listing| {
        normalize_price(listing.source, listing.price.as_ref())
    })
}

/// Reconcile a flat tagged listing sequence into ranked products.
///
/// # Pipeline
///
/// 1. Group by lowercased title, skipping untitled listings
/// 2. Normalise each vendor slot's price
/// 3. Take the lowest price per group (unavailable counts as `+inf`)
/// 4. Stable sort ascending by lowest price, so ties keep grouping order
///
/// No group is dropped for lacking a price.
pub fn reconcile(listings: Vec<Listing>) -> Vec<MergedProduct> {
    let total = listings.len();
    let mut products: Vec<MergedProduct> = group_listings(listings)
        .into_iter()
        .map(MergedProduct::from_group)
        .collect();

    // `sort_by` is a stable merge sort.
    products.sort_by(|a, b| a.lowest_price.cmp_by_amount(&b.lowest_price));

    tracing::debug!(listings = total, products = products.len(), "reconciled");
    products
}
