//! Vendor B: the Flipkart-style search endpoint.
//!
//! Prices arrive as numbers, images as a list, and the rating as a review
//! count/average pair.

use serde::{Deserialize, Serialize};

use crate::config::CompareConfig;
use crate::error::CompareError;
use crate::types::{ImageRef, Listing, Rating, Scalar, Vendor};
use crate::vendor::{decode_body, decode_record, lenient, post_keyword, VendorBackend};

/// Review summary attached to a Flipkart listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlipkartRating {
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub average: Option<Scalar>,
}

/// One listing as returned by the Flipkart search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlipkartListing {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<ImageRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<FlipkartRating>,
    #[serde(default, deserialize_with = "lenient")]
    pub highlights: Option<Vec<String>>,
}

impl From<FlipkartListing> for Listing {
    fn from(raw: FlipkartListing) -> Self {
        let rating = raw.rating.unwrap_or_default();
        Self {
            source: Vendor::Flipkart,
            title: raw.title,
            price: raw.price,
            image: raw
                .images
                .as_ref()
                .and_then(ImageRef::first)
                .map(str::to_owned),
            url: raw.url.filter(|u| !u.is_empty()),
            rating: Rating::Reviews {
                count: rating.count,
                average: rating.average,
            },
            description: raw.highlights.unwrap_or_default(),
        }
    }
}

/// Flipkart search backend.
pub struct FlipkartVendor;

impl VendorBackend for FlipkartVendor {
    async fn search(
        &self,
        client: &reqwest::Client,
        keyword: &str,
        config: &CompareConfig,
    ) -> Result<Vec<Listing>, CompareError> {
        tracing::trace!(keyword, "Flipkart search");
        let endpoint = config.endpoint(Vendor::Flipkart)?;
        let body = post_keyword(client, endpoint, Vendor::Flipkart, keyword).await?;
        let listings = decode_body(self, &body);
        tracing::debug!(count = listings.len(), "Flipkart listings decoded");
        Ok(listings)
    }

    fn vendor(&self) -> Vendor {
        Vendor::Flipkart
    }

    fn decode_listing(&self, value: serde_json::Value) -> Listing {
        decode_record::<FlipkartListing>(Vendor::Flipkart, value).into()
    }
}
