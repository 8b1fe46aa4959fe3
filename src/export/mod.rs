//! Export functionality for catalog views.
//!
//! This module renders the currently browsed view as a standalone HTML
//! page: the same cards, links, and detail layout the store front shows,
//! written to disk for sharing or inspection.

pub mod html;

pub use html::{render_detail_page, render_listing_page, render_message_page};
