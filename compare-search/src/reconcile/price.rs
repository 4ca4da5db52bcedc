//! Price normalisation and formatting.
//!
//! Vendor prices arrive either as display strings (`"₹1,299.00"`) or as
//! plain numbers. Both are normalised to a [`Price`], which is either a
//! finite amount or unavailable. Unavailable prices compare as
//! positive infinity so they sort after every real price, but are never
//! rendered as a number.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Scalar, Vendor};

/// Literal shown wherever a price cannot be displayed.
pub const NOT_AVAILABLE: &str = "Not available";

/// A normalised price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum Price {
    /// A finite amount.
    Available(f64),
    /// Missing, unparseable, or non-finite.
    #[default]
    Unavailable,
}

impl Price {
    /// Build a price from a raw amount. NaN and infinities are unavailable.
    pub fn from_amount(amount: f64) -> Self {
        if amount.is_finite() {
            Self::Available(amount)
        } else {
            Self::Unavailable
        }
    }

    /// The amount used for ordering: the value itself, or `+inf`.
    pub fn sort_key(&self) -> f64 {
        match self {
            Self::Available(amount) => *amount,
            Self::Unavailable => f64::INFINITY,
        }
    }

    /// The amount, if available.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Available(amount) => Some(*amount),
            Self::Unavailable => None,
        }
    }

    /// Total ordering by [`Price::sort_key`].
    pub fn cmp_by_amount(&self, other: &Self) -> Ordering {
        self.sort_key().total_cmp(&other.sort_key())
    }

    /// The lower of two prices; an available price always beats an
    /// unavailable one.
    pub fn min(self, other: Self) -> Self {
        if other.cmp_by_amount(&self) == Ordering::Less {
            other
        } else {
            self
        }
    }

    /// Render with `currency` and two decimals, or [`NOT_AVAILABLE`].
    pub fn display(&self, currency: &str) -> String {
        format_price(self.amount(), currency)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(amount) => write!(f, "{amount:.2}"),
            Self::Unavailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Normalise a raw price from `vendor`.
///
/// Strings go through [`parse_price_text`], so `"₹0.00"` is a real zero.
/// Numbers are taken as-is, except that a numeric zero from Flipkart means
/// the price is missing. A missing price is unavailable.
pub fn normalize_price(vendor: Vendor, raw: Option<&Scalar>) -> Price {
    match (vendor, raw) {
        (_, None) => Price::Unavailable,
        (_, Some(Scalar::Text(s))) => parse_price_text(s),
        (Vendor::Flipkart, Some(Scalar::Number(n))) if *n == 0.0 => Price::Unavailable,
        (_, Some(Scalar::Number(n))) => Price::from_amount(*n),
    }
}

/// Parse a display price string such as `"₹1,299.00"`.
///
/// Leading currency glyphs and whitespace are skipped, thousands
/// separators (`,`) are removed, and the longest leading decimal number is
/// parsed, so trailing text like `" onwards"` is ignored. Anything without
/// a leading number is unavailable.
pub fn parse_price_text(text: &str) -> Price {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    let bytes = cleaned.as_bytes();

    // First digit, or a '.' directly followed by a digit that does not end
    // an abbreviation such as "Rs.".
    let start = (0..bytes.len()).find(|&i| {
        bytes[i].is_ascii_digit()
            || (bytes[i] == b'.'
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
                && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric()))
    });
    let Some(start) = start else {
        return Price::Unavailable;
    };

    let mut end = start;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    cleaned[start..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .map_or(Price::Unavailable, Price::from_amount)
}

/// Format an optional amount as `"<currency><value to 2dp>"`.
///
/// Total: `None`, NaN and infinities all yield [`NOT_AVAILABLE`].
pub fn format_price(amount: Option<f64>, currency: &str) -> String {
    match amount {
        Some(value) if value.is_finite() => format!("{currency}{value:.2}"),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// Format a raw price string, parsing it first.
///
/// Unparseable input yields [`NOT_AVAILABLE`].
pub fn format_price_text(text: &str, currency: &str) -> String {
    parse_price_text(text).display(currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rupee_price() {
        assert_eq!(parse_price_text("₹199.00"), Price::Available(199.0));
    }

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_price_text("₹1,299.50"), Price::Available(1299.5));
        assert_eq!(parse_price_text("₹1,00,000"), Price::Available(100_000.0));
    }

    #[test]
    fn skips_other_currency_prefixes() {
        assert_eq!(parse_price_text("$24.99"), Price::Available(24.99));
        assert_eq!(parse_price_text("Rs. 450"), Price::Available(450.0));
        assert_eq!(parse_price_text("Rs.450"), Price::Available(450.0));
        assert_eq!(parse_price_text("Rs.1,250.50"), Price::Available(1250.5));
        assert_eq!(parse_price_text("  ₹ 89"), Price::Available(89.0));
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(parse_price_text("₹349 onwards"), Price::Available(349.0));
        assert_eq!(parse_price_text("12.5.3"), Price::Available(12.5));
        assert_eq!(parse_price_text("₹99."), Price::Available(99.0));
    }

    #[test]
    fn leading_decimal_point() {
        assert_eq!(parse_price_text(".75"), Price::Available(0.75));
        assert_eq!(parse_price_text("₹.75"), Price::Available(0.75));
        assert_eq!(parse_price_text("$ .5"), Price::Available(0.5));
    }

    #[test]
    fn unparseable_text_is_unavailable() {
        assert_eq!(parse_price_text(""), Price::Unavailable);
        assert_eq!(parse_price_text("₹"), Price::Unavailable);
        assert_eq!(parse_price_text("Currently unavailable"), Price::Unavailable);
        assert_eq!(parse_price_text("NaN"), Price::Unavailable);
    }

    #[test]
    fn amazon_zero_price_is_a_real_price() {
        assert_eq!(parse_price_text("₹0.00"), Price::Available(0.0));
        let zero = Scalar::Text("₹0.00".into());
        assert_eq!(
            normalize_price(Vendor::Amazon, Some(&zero)),
            Price::Available(0.0)
        );
        assert_eq!(Price::Available(0.0).display("₹"), "₹0.00");
    }

    #[test]
    fn flipkart_numeric_zero_is_unavailable() {
        assert_eq!(
            normalize_price(Vendor::Flipkart, Some(&Scalar::Number(0.0))),
            Price::Unavailable
        );
        assert_eq!(
            normalize_price(Vendor::Amazon, Some(&Scalar::Number(0.0))),
            Price::Available(0.0)
        );
    }

    #[test]
    fn normalize_number_and_missing() {
        for vendor in [Vendor::Amazon, Vendor::Flipkart] {
            assert_eq!(
                normalize_price(vendor, Some(&Scalar::Number(149.0))),
                Price::Available(149.0)
            );
            assert_eq!(normalize_price(vendor, None), Price::Unavailable);
            assert_eq!(
                normalize_price(vendor, Some(&Scalar::Number(f64::NAN))),
                Price::Unavailable
            );
        }
    }

    #[test]
    fn normalize_numeric_string() {
        assert_eq!(
            normalize_price(Vendor::Flipkart, Some(&Scalar::Text("149".into()))),
            Price::Available(149.0)
        );
    }

    #[test]
    fn unavailable_sorts_as_infinity() {
        assert_eq!(Price::Unavailable.sort_key(), f64::INFINITY);
        assert_eq!(
            Price::Available(10.0).cmp_by_amount(&Price::Unavailable),
            Ordering::Less
        );
        assert_eq!(
            Price::Unavailable.cmp_by_amount(&Price::Unavailable),
            Ordering::Equal
        );
    }

    #[test]
    fn min_prefers_available() {
        assert_eq!(
            Price::Unavailable.min(Price::Available(149.0)),
            Price::Available(149.0)
        );
        assert_eq!(
            Price::Available(199.0).min(Price::Unavailable),
            Price::Available(199.0)
        );
        assert_eq!(
            Price::Available(199.0).min(Price::Available(149.0)),
            Price::Available(149.0)
        );
        assert_eq!(Price::Unavailable.min(Price::Unavailable), Price::Unavailable);
    }

    #[test]
    fn format_price_two_decimals() {
        assert_eq!(format_price(Some(149.0), "₹"), "₹149.00");
        assert_eq!(format_price(Some(1299.456), "₹"), "₹1299.46");
        assert_eq!(format_price(Some(5.5), "$"), "$5.50");
    }

    #[test]
    fn format_price_is_total() {
        assert_eq!(format_price(None, "₹"), NOT_AVAILABLE);
        assert_eq!(format_price(Some(f64::NAN), "₹"), NOT_AVAILABLE);
        assert_eq!(format_price(Some(f64::INFINITY), "₹"), NOT_AVAILABLE);
        assert_eq!(format_price_text("not a price", "₹"), NOT_AVAILABLE);
        assert_eq!(format_price_text("₹199.00", "₹"), "₹199.00");
    }

    #[test]
    fn price_display() {
        assert_eq!(Price::Available(149.0).display("₹"), "₹149.00");
        assert_eq!(Price::Unavailable.display("₹"), NOT_AVAILABLE);
        assert_eq!(Price::Available(3.0).to_string(), "3.00");
        assert_eq!(Price::Unavailable.to_string(), NOT_AVAILABLE);
    }
}
