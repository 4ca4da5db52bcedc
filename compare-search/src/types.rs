//! Core types for vendor identification and normalised listings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two product-search backends that are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// Vendor A: string prices with a currency glyph, single photo URL.
    Amazon,
    /// Vendor B: numeric prices, image list, review count/average.
    Flipkart,
}

impl Vendor {
    /// Returns the human-readable name of this vendor.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Flipkart => "Flipkart",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A loosely typed JSON scalar.
///
/// Vendors are inconsistent about whether prices and ratings arrive as
/// numbers or strings, so both are accepted and kept as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A JSON number.
    Number(f64),
    /// A JSON string.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// An image reference that may be a single URL or a list of URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// A single URL string.
    One(String),
    /// A list of URL strings; only the first is used.
    Many(Vec<String>),
}

impl ImageRef {
    /// The first non-empty URL, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(url) => Some(url.as_str()),
            Self::Many(urls) => urls.first().map(String::as_str),
        }
        .filter(|url| !url.is_empty())
    }
}

/// Vendor-specific rating information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rating {
    /// No rating information was supplied.
    #[default]
    None,
    /// A raw star rating (vendor A).
    Stars {
        /// The star value exactly as received.
        value: Option<Scalar>,
    },
    /// A review count and average (vendor B).
    Reviews {
        /// Number of reviews.
        count: Option<Scalar>,
        /// Average review score.
        average: Option<Scalar>,
    },
}

/// One vendor listing, normalised into a vendor-independent shape.
///
/// Every field except `source` may be missing; missing fields are
/// rendered as "unavailable" or omitted, never treated as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Which vendor returned this listing.
    pub source: Vendor,
    /// Product title as returned by the vendor.
    pub title: Option<String>,
    /// Price exactly as returned by the vendor, before normalisation.
    pub price: Option<Scalar>,
    /// Primary product image URL.
    pub image: Option<String>,
    /// Outbound product page URL.
    pub url: Option<String>,
    /// Rating information.
    pub rating: Rating,
    /// Feature bullets or highlights.
    pub description: Vec<String>,
}

impl Listing {
    /// A listing from `source` with every optional field missing.
    pub fn empty(source: Vendor) -> Self {
        Self {
            source,
            title: None,
            price: None,
            image: None,
            url: None,
            rating: Rating::None,
            description: Vec::new(),
        }
    }

    /// The title, if present and non-empty.
    pub fn usable_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}
