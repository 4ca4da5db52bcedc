//! Trait definition for the vendor search backends, plus the request and
//! body handling they share.
//!
//! Each vendor implements [`VendorBackend`] to turn a keyword into a list of
//! normalised [`Listing`] values. The wire format is the same for both
//! (`POST {"keyword": ...}`, JSON array back); only the listing schema
//! differs, which is what [`VendorBackend::decode_listing`] adapts.

use serde::Serialize;
use url::Url;

use crate::config::CompareConfig;
use crate::error::CompareError;
use crate::types::{Listing, Vendor};

/// A pluggable vendor search backend.
///
/// All implementations must be `Send + Sync` so both vendors can be
/// queried concurrently.
pub trait VendorBackend: Send + Sync {
    /// Search this vendor for `keyword` and return its normalised listings,
    /// in response order.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Network`] or [`CompareError::Timeout`] if the
    /// request fails or the vendor answers with a non-success status. A body
    /// that is not a JSON array is not an error; it yields no listings.
    fn search(
        &self,
        client: &reqwest::Client,
        keyword: &str,
        config: &CompareConfig,
    ) -> impl std::future::Future<Output = Result<Vec<Listing>, CompareError>> + Send;

    /// Returns which [`Vendor`] this implementation represents.
    fn vendor(&self) -> Vendor;

    /// Convert one element of the response array into a [`Listing`].
    ///
    /// Must be total: elements of the wrong shape become a listing with
    /// every field missing, so they are counted but later skipped.
    fn decode_listing(&self, value: serde_json::Value) -> Listing;
}

/// JSON request body sent to both vendors.
#[derive(Debug, Serialize)]
struct KeywordRequest<'a> {
    keyword: &'a str,
}

/// POST `{"keyword": keyword}` to `endpoint` and return the response body.
pub(crate) async fn post_keyword(
    client: &reqwest::Client,
    endpoint: Url,
    vendor: Vendor,
    keyword: &str,
) -> Result<String, CompareError> {
    let response = client
        .post(endpoint)
        .json(&KeywordRequest { keyword })
        .send()
        .await
        .map_err(|e| CompareError::from_reqwest(vendor.name(), e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CompareError::Network(format!(
            "{vendor}: HTTP status {status}"
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CompareError::from_reqwest(vendor.name(), e))?;

    tracing::trace!(%vendor, bytes = body.len(), "vendor response received");
    Ok(body)
}

/// Decode a response body into listings using `backend`'s adapter.
///
/// Bodies that are empty, not JSON, or not a JSON array are logged and
/// treated as an empty result for that vendor.
pub fn decode_body<B: VendorBackend + ?Sized>(backend: &B, body: &str) -> Vec<Listing> {
    let vendor = backend.vendor();
    if body.trim().is_empty() {
        tracing::warn!(%vendor, "empty response body, treating as no listings");
        return Vec::new();
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| backend.decode_listing(item))
            .collect(),
        Ok(other) => {
            tracing::warn!(
                %vendor,
                kind = json_kind(&other),
                "response body is not a sequence, treating as no listings"
            );
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(%vendor, error = %err, "response body is not JSON, treating as no listings");
            Vec::new()
        }
    }
}

/// Decode `value` into a vendor record, falling back to its default.
pub(crate) fn decode_record<T>(vendor: Vendor, value: serde_json::Value) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    if !value.is_object() {
        tracing::debug!(%vendor, kind = json_kind(&value), "listing is not an object");
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::debug!(%vendor, error = %err, "listing fields have unexpected types");
        T::default()
    })
}

/// Field deserialiser that maps a value of the wrong type to `None`.
///
/// Lets one malformed field go missing without discarding the rest of
/// the listing.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
