//! Vendor A: the Amazon-style search endpoint.
//!
//! Prices arrive as display strings (`"₹1,299.00"`), the image is a single
//! photo URL, and the rating is a raw star value.

use serde::{Deserialize, Serialize};

use crate::config::CompareConfig;
use crate::error::CompareError;
use crate::types::{ImageRef, Listing, Rating, Scalar, Vendor};
use crate::vendor::{decode_body, decode_record, lenient, post_keyword, VendorBackend};

/// One listing as returned by the Amazon search endpoint.
///
/// Only the fields the comparison uses are declared; anything else in the
/// response is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmazonListing {
    #[serde(default, deserialize_with = "lenient")]
    pub product_title: Option<String>,
    /// Display price, e.g. `"₹1,299.00"`.
    #[serde(default, deserialize_with = "lenient")]
    pub product_minimum_offer_price: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub product_photo: Option<ImageRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub product_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub product_star_rating: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub feature_bullets: Option<Vec<String>>,
}

impl From<AmazonListing> for Listing {
    fn from(raw: AmazonListing) -> Self {
        Self {
            source: Vendor::Amazon,
            title: raw.product_title,
            price: raw.product_minimum_offer_price,
            image: raw
                .product_photo
                .as_ref()
                .and_then(ImageRef::first)
                .map(str::to_owned),
            url: raw.product_url.filter(|u| !u.is_empty()),
            rating: Rating::Stars {
                value: raw.product_star_rating,
            },
            description: raw.feature_bullets.unwrap_or_default(),
        }
    }
}

/// Amazon search backend.
pub struct AmazonVendor;

impl VendorBackend for AmazonVendor {
    async fn search(
        &self,
        client: &reqwest::Client,
        keyword: &str,
        config: &CompareConfig,
    ) -> Result<Vec<Listing>, CompareError> {
        tracing::trace!(keyword, "Amazon search");
        let endpoint = config.endpoint(Vendor::Amazon)?;
        let body = post_keyword(client, endpoint, Vendor::Amazon, keyword).await?;
        let listings = decode_body(self, &body);
        tracing::debug!(count = listings.len(), "Amazon listings decoded");
        Ok(listings)
    }

    fn vendor(&self) -> Vendor {
        Vendor::Amazon
    }

    fn decode_listing(&self, value: serde_json::Value) -> Listing {
        decode_record::<AmazonListing>(Vendor::Amazon, value).into()
    }
}
