//! # compare-search
//!
//! Two-vendor product search and price reconciliation.
//!
//! A search term is sent to two product-search backends concurrently. The
//! returned listings are grouped into logical products by title, their
//! differently formatted prices are normalised, and the products are ranked
//! by lowest price.
//!
//! ## Design
//!
//! - Both vendors are queried in parallel with a single two-way join
//! - Each vendor has its own listing schema, adapted into one [`Listing`]
//!   shape at ingestion time
//! - A response body that is not a JSON array counts as no listings
//! - Missing titles, prices, images and ratings are never errors
//! - Every dispatch gets a request id; [`SearchSession`] discards outcomes
//!   that arrive after a newer one was shown
//!
//! ## Logging
//!
//! - Search terms are logged only at trace level

pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod http;
pub mod reconcile;
pub mod session;
pub mod types;
pub mod vendor;
pub mod vendors;

pub use config::CompareConfig;
pub use dispatch::{Dispatch, QueryDispatcher, SearchOutcome};
pub use display::{product_cards, ProductCard};
pub use error::{CompareError, Result};
pub use reconcile::{reconcile, MergedProduct, Price, ProductGroup};
pub use session::SearchSession;
pub use types::{Listing, Rating, Scalar, Vendor};
pub use vendor::VendorBackend;

/// Compare prices for `term` across both vendors.
///
/// Validates `config`, queries both vendors concurrently, and returns the
/// reconciled products ordered by lowest price.
///
/// # Errors
///
/// Returns [`CompareError::Config`] for an invalid configuration,
/// [`CompareError::EmptyQuery`] for a blank term, and
/// [`CompareError::Network`] / [`CompareError::Timeout`] if either vendor
/// fails (see [`CompareConfig::allow_partial_results`]).
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> compare_search::Result<()> {
/// let config = compare_search::CompareConfig::default();
/// let outcome = compare_search::compare("shampoo", &config).await?;
/// for product in &outcome.products {
///     println!("{}: {}", product.group.key, product.lowest_price.display("₹"));
/// }
/// # Ok(())
/// # }
/// ```
pub async fn compare(term: &str, config: &CompareConfig) -> Result<SearchOutcome> {
    QueryDispatcher::new(config.clone())?.search(term).await
}
