//! Query dispatcher: two-vendor fan-out and fan-in.
//!
//! Sends the same keyword to both vendors concurrently, waits for both,
//! and concatenates the tagged listings (vendor A first, then vendor B).
//! Every dispatch carries a monotonically increasing request id so the
//! presentation layer can discard responses that arrive out of order.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::CompareConfig;
use crate::error::{CompareError, Result};
use crate::http;
use crate::reconcile::{reconcile, MergedProduct};
use crate::types::{Listing, Vendor};
use crate::vendor::VendorBackend;
use crate::vendors::{AmazonVendor, FlipkartVendor};

/// Raw result of one dispatch, before reconciliation.
#[derive(Debug, Clone)]
pub struct Dispatch {
    /// Sequence number assigned when the dispatch started.
    pub request_id: u64,
    /// The search term as the user entered it.
    pub search_term: String,
    /// Vendor A listings followed by vendor B listings.
    pub listings: Vec<Listing>,
}

impl Dispatch {
    /// Reconcile the listings into ranked products.
    pub fn reconcile(self) -> SearchOutcome {
        SearchOutcome {
            request_id: self.request_id,
            search_term: self.search_term,
            products: reconcile(self.listings),
        }
    }
}

/// Ranked products for one search, ready for presentation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchOutcome {
    /// Sequence number of the dispatch that produced this outcome.
    pub request_id: u64,
    /// The search term as the user entered it.
    pub search_term: String,
    /// Products ordered ascending by lowest price.
    pub products: Vec<MergedProduct>,
}

/// Issues search requests to both vendors.
///
/// Cheap to share behind an `Arc`; the HTTP client is reused across
/// dispatches and the request counter is atomic.
#[derive(Debug)]
pub struct QueryDispatcher {
    config: CompareConfig,
    client: reqwest::Client,
    last_request_id: AtomicU64,
}

impl QueryDispatcher {
    /// Create a dispatcher, validating `config` and building the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Config`] for an invalid configuration, or
    /// [`CompareError::Network`] if the HTTP client cannot be built.
    pub fn new(config: CompareConfig) -> Result<Self> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self {
            config,
            client,
            last_request_id: AtomicU64::new(0),
        })
    }

    /// The configuration this dispatcher was built with.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Id of the most recently started dispatch, or 0 if none.
    pub fn last_request_id(&self) -> u64 {
        self.last_request_id.load(Ordering::SeqCst)
    }

    /// Query both vendors for `term`.
    ///
    /// The term is trimmed before sending; both vendors receive the same
    /// keyword payload.
    ///
    /// # Errors
    ///
    /// - [`CompareError::EmptyQuery`] if `term` is blank (nothing is sent)
    /// - [`CompareError::Network`] / [`CompareError::Timeout`] if either
    ///   vendor fails, unless partial results are allowed
    /// - [`CompareError::AllVendorsFailed`] if partial results are allowed
    ///   and both vendors fail
    pub async fn dispatch(&self, term: &str) -> Result<Dispatch> {
        let keyword = checked_keyword(term)?;
        let request_id = self.next_request_id();
        self.dispatch_as(request_id, term, keyword).await
    }

    /// Dispatch and reconcile in one step.
    ///
    /// # Errors
    ///
    /// Same as [`QueryDispatcher::dispatch`].
    pub async fn search(&self, term: &str) -> Result<SearchOutcome> {
        Ok(self.dispatch(term).await?.reconcile())
    }

    /// Reserve the next request id without sending anything.
    ///
    /// Pair with [`QueryDispatcher::search_as`] to fix the order of
    /// searches before they start running.
    pub fn next_request_id(&self) -> u64 {
        self.last_request_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Dispatch and reconcile under an id from
    /// [`QueryDispatcher::next_request_id`].
    ///
    /// # Errors
    ///
    /// Same as [`QueryDispatcher::dispatch`]. A blank term still consumes
    /// the reserved id.
    pub async fn search_as(&self, request_id: u64, term: &str) -> Result<SearchOutcome> {
        let keyword = checked_keyword(term)?;
        Ok(self.dispatch_as(request_id, term, keyword).await?.reconcile())
    }

    async fn dispatch_as(&self, request_id: u64, term: &str, keyword: &str) -> Result<Dispatch> {
        tracing::trace!(request_id, keyword, "dispatching search");

        let (amazon, flipkart) = futures::future::join(
            AmazonVendor.search(&self.client, keyword, &self.config),
            FlipkartVendor.search(&self.client, keyword, &self.config),
        )
        .await;

        let listings = combine_outcomes(
            [(Vendor::Amazon, amazon), (Vendor::Flipkart, flipkart)],
            self.config.allow_partial_results,
        )?;

        tracing::debug!(request_id, count = listings.len(), "dispatch complete");
        Ok(Dispatch {
            request_id,
            search_term: term.to_owned(),
            listings,
        })
    }
}

fn checked_keyword(term: &str) -> Result<&str> {
    let keyword = term.trim();
    if keyword.is_empty() {
        return Err(CompareError::EmptyQuery);
    }
    Ok(keyword)
}

/// Concatenate per-vendor outcomes in the given order.
///
/// Strict mode returns the first vendor error. Partial mode logs failed
/// vendors and only errors when every vendor failed.
pub(crate) fn combine_outcomes<const N: usize>(
    outcomes: [(Vendor, Result<Vec<Listing>>); N],
    allow_partial: bool,
) -> Result<Vec<Listing>> {
    let mut listings = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for (vendor, outcome) in outcomes {
        match outcome {
            Ok(vendor_listings) => {
                tracing::debug!(%vendor, count = vendor_listings.len(), "vendor returned listings");
                listings.extend(vendor_listings);
            }
            Err(err) if !allow_partial => return Err(err),
            Err(err) => {
                tracing::warn!(%vendor, error = %err, "vendor query failed, continuing without it");
                errors.push(err.to_string());
            }
        }
    }

    if errors.len() == N {
        return Err(CompareError::AllVendorsFailed(errors.join("; ")));
    }
    Ok(listings)
}
