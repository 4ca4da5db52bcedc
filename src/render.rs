//! Plain-text and JSON rendering of search outcomes.

use compare_search::{product_cards, ProductCard, SearchOutcome};
use serde::Serialize;

use crate::error::{AppError, Result};

/// How search outcomes are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render `outcome` in `format`.
///
/// # Errors
///
/// Returns [`AppError::Output`] if JSON serialization fails.
pub fn render(outcome: &SearchOutcome, currency: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome, currency)),
        OutputFormat::Json => render_json(outcome, currency).map(|json| json + "\n"),
    }
}

/// Printed when a search produced no products.
pub const NO_RESULTS: &str = "No results found.";

/// Page header for a search term.
pub fn header(term: &str) -> String {
    format!("Search Results for \"{term}\"")
}

/// Render `outcome` as human-readable text.
pub fn render_text(outcome: &SearchOutcome, currency: &str) -> String {
    let mut output = format!("{}\n\n", header(&outcome.search_term));
    let cards = product_cards(&outcome.products, currency);
    if cards.is_empty() {
        output.push_str(NO_RESULTS);
        output.push('\n');
        return output;
    }
    for (i, card) in cards.iter().enumerate() {
        output.push_str(&render_card(i + 1, card));
        output.push('\n');
    }
    output
}

fn render_card(position: usize, card: &ProductCard) -> String {
    let mut output = format!("{position}. {}\n", card.title);
    for price in &card.prices {
        output.push_str(&format!("   {} price: {}\n", price.vendor, price.text));
    }
    output.push_str(&format!("   Lowest price: {}\n", card.lowest_price));
    output.push_str(&format!("   Rating: {}\n", card.rating_line()));
    if let Some(description) = &card.description {
        output.push_str(&format!("   {description}\n"));
    }
    for image in &card.images {
        output.push_str(&format!("   {} image: {}\n", image.vendor, image.text));
    }
    for link in &card.links {
        output.push_str(&format!("   View on {}: {}\n", link.vendor, link.text));
    }
    output
}

#[derive(Serialize)]
struct JsonPage<'a> {
    request_id: u64,
    search_term: &'a str,
    products: Vec<ProductCard>,
}

/// Render `outcome` as a pretty-printed JSON document of product cards.
///
/// # Errors
///
/// Returns [`AppError::Output`] if serialization fails.
pub fn render_json(outcome: &SearchOutcome, currency: &str) -> Result<String> {
    let page = JsonPage {
        request_id: outcome.request_id,
        search_term: &outcome.search_term,
        products: product_cards(&outcome.products, currency),
    };
    serde_json::to_string_pretty(&page).map_err(|e| AppError::Output(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use compare_search::{reconcile, Listing, Rating, Scalar, Vendor};

    fn outcome(listings: Vec<Listing>) -> SearchOutcome {
        SearchOutcome {
            request_id: 1,
            search_term: "shampoo".into(),
            products: reconcile(listings),
        }
    }

    fn shampoo() -> Vec<Listing> {
        vec![
            Listing {
                title: Some("Shampoo X".into()),
                price: Some(Scalar::Text("₹199.00".into())),
                url: Some("https://amazon.example/x".into()),
                rating: Rating::Stars {
                    value: Some(Scalar::Text("4.3".into())),
                },
                ..Listing::empty(Vendor::Amazon)
            },
            Listing {
                title: Some("Shampoo X".into()),
                price: Some(Scalar::Number(149.0)),
                ..Listing::empty(Vendor::Flipkart)
            },
        ]
    }

    #[test]
    fn empty_outcome_prints_no_results() {
        let text = render_text(&outcome(vec![]), "₹");
        assert_eq!(text, "Search Results for \"shampoo\"\n\nNo results found.\n");
    }

    #[test]
    fn text_lists_prices_and_rating_line() {
        let text = render_text(&outcome(shampoo()), "₹");
        assert!(text.starts_with("Search Results for \"shampoo\"\n\n1. Shampoo X\n"));
        assert!(text.contains("   Amazon price: ₹199.00\n"));
        assert!(text.contains("   Flipkart price: ₹149.00\n"));
        assert!(text.contains("   Lowest price: ₹149.00\n"));
        assert!(text.contains("   Rating: Amazon: 4.3 | Flipkart: No ratings, No average\n"));
        assert!(text.contains("   View on Amazon: https://amazon.example/x\n"));
        assert!(!text.contains("image:"));
    }

    #[test]
    fn json_contains_cards() {
        let json = render_json(&outcome(shampoo()), "₹").expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["search_term"], "shampoo");
        assert_eq!(value["request_id"], 1);
        assert_eq!(value["products"][0]["title"], "Shampoo X");
        assert_eq!(value["products"][0]["lowest_price"], "₹149.00");
        assert_eq!(value["products"][0]["prices"][1]["vendor"], "flipkart");
    }

    #[test]
    fn render_dispatches_on_format() {
        let outcome = outcome(shampoo());
        let text = render(&outcome, "₹", OutputFormat::Text).expect("text");
        assert_eq!(text, render_text(&outcome, "₹"));
        let json = render(&outcome, "₹", OutputFormat::Json).expect("json");
        assert!(json.ends_with("}\n"));
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
