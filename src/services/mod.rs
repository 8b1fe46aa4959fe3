//! Domain services: list state, featured-product selection, and price
//! formatting.
//!
//! These are pure, independently testable building blocks; the TUI and
//! the HTML exporter both sit on top of them.

pub mod catalog;
pub mod featured;
pub mod price;

pub use catalog::{distinct_brands, ListState, SortMode};
pub use featured::pick_featured;
pub use price::format_price;
