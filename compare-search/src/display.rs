//! Presentation mapping from merged products to display strings.
//!
//! Everything here is pure and total: missing fields become fallback text
//! or are omitted, never errors.

use serde::Serialize;

use crate::reconcile::{MergedProduct, Price};
use crate::types::{Listing, Rating, Scalar, Vendor};

/// Fallback for a missing star rating or review count.
pub const NO_RATINGS: &str = "No ratings";
/// Fallback for a missing review average.
pub const NO_AVERAGE: &str = "No average";

/// A per-vendor display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorText {
    pub vendor: Vendor,
    pub text: String,
}

/// Display-ready view of one [`MergedProduct`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    /// Vendor A title if present, else vendor B title.
    pub title: String,
    /// Image URL per vendor, only for vendors that supplied one.
    pub images: Vec<VendorText>,
    /// Feature bullets or highlights joined by spaces.
    pub description: Option<String>,
    /// Rating text per populated vendor slot.
    pub ratings: Vec<VendorText>,
    /// Formatted price per populated vendor slot.
    pub prices: Vec<VendorText>,
    /// Outbound product URL per vendor, only for vendors that supplied one.
    pub links: Vec<VendorText>,
    /// Formatted lowest price across both vendors.
    pub lowest_price: String,
}

impl ProductCard {
    /// Build the card for `product`, formatting prices with `currency`.
    pub fn from_product(product: &MergedProduct, currency: &str) -> Self {
        let group = &product.group;
        let slots: Vec<(&Listing, Price)> = [
            (group.amazon.as_ref(), product.amazon_price),
            (group.flipkart.as_ref(), product.flipkart_price),
        ]
        .into_iter()
        .filter_map(|(slot, price)| slot.map(|listing| (listing, price)))
        .collect();

        let title = slots
            .first()
            .and_then(|(listing, _)| listing.usable_title())
            .unwrap_or(group.key.as_str())
            .to_owned();

        let description = slots.iter().find_map(|(listing, _)| {
            let joined = listing.description.join(" ");
            (!joined.is_empty()).then_some(joined)
        });

        Self {
            title,
            images: per_vendor(&slots, |l, _| l.image.clone()),
            description,
            ratings: per_vendor(&slots, |l, _| Some(rating_text(&l.rating))),
            prices: per_vendor(&slots, |_, p| Some(p.display(currency))),
            links: per_vendor(&slots, |l, _| l.url.clone()),
            lowest_price: product.lowest_price.display(currency),
        }
    }

    /// Single-line rating summary, e.g. `Amazon: 4.3 | Flipkart: 1200, 4.2`.
    ///
    /// Vendor B's review count is shown under the "rating" label as the
    /// storefront does.
    pub fn rating_line(&self) -> String {
        self.ratings
            .iter()
            .map(|r| format!("{}: {}", r.vendor, r.text))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn per_vendor<F>(slots: &[(&Listing, Price)], f: F) -> Vec<VendorText>
where
    F: Fn(&Listing, Price) -> Option<String>,
{
    slots
        .iter()
        .filter_map(|(listing, price)| {
            f(listing, *price).map(|text| VendorText {
                vendor: listing.source,
                text,
            })
        })
        .collect()
}

/// Rating text for one listing.
pub fn rating_text(rating: &Rating) -> String {
    match rating {
        Rating::None => NO_RATINGS.to_owned(),
        Rating::Stars { value } => scalar_or(value.as_ref(), NO_RATINGS),
        Rating::Reviews { count, average } => format!(
            "{}, {}",
            scalar_or(count.as_ref(), NO_RATINGS),
            scalar_or(average.as_ref(), NO_AVERAGE)
        ),
    }
}

fn scalar_or(value: Option<&Scalar>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_owned(), Scalar::to_string)
}

/// Cards for every product, in ranking order.
pub fn product_cards(products: &[MergedProduct], currency: &str) -> Vec<ProductCard> {
    products
        .iter()
        .map(|p| ProductCard::from_product(p, currency))
        .collect()
}
