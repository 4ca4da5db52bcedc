//! Vendor backend implementations.
//!
//! Each module provides a struct implementing [`crate::vendor::VendorBackend`]
//! together with the serde record type for that vendor's listing schema.

pub mod amazon;
pub mod flipkart;

pub use amazon::{AmazonListing, AmazonVendor};
pub use flipkart::{FlipkartListing, FlipkartRating, FlipkartVendor};
