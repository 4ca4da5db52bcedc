//! compare-products: search two storefronts at once and compare prices.
//!
//! The search, grouping and ranking live in the `compare-search` crate.
//! This crate adds the application layer around it:
//! - **Config**: TOML file with a `[search]` table ([`AppConfig`])
//! - **Rendering**: plain text or JSON product cards ([`render`])
//! - **Interactive mode**: overlapping searches from input lines ([`interactive`])
//! - **CLI**: the `compare-products` binary

pub mod config;
pub mod error;
pub mod interactive;
pub mod render;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use interactive::{run_lines, InteractiveSummary, SessionEvent};
pub use render::OutputFormat;
