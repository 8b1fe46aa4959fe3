//! Application-wide constants.
//!
//! This module defines constants used throughout the application: the
//! application name, the default API endpoint, and the Danish user-facing
//! strings shared by the terminal renderer and the HTML exporter.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Butik";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "butik";

/// Base URL of the remote product API.
pub const DEFAULT_API_BASE: &str = "https://dummyjson.com/products";

/// Default item cap for the unscoped "all" listing.
pub const DEFAULT_LIST_LIMIT: u32 = 12;

/// Highest product id (inclusive) requested by the per-id loading strategy.
pub const PER_ID_MAX: u64 = 10;

/// Default output file for the in-app HTML export.
pub const EXPORT_FILE: &str = "butik-eksport.html";

/// Currency suffix appended to every formatted price.
pub const CURRENCY_SUFFIX: &str = " kr";

/// Placeholder shown while the initial fetch is in flight.
pub const MSG_LOADING: &str = "Indlæser produkter…";

/// Empty-state line shown when a listing contains no products.
pub const MSG_EMPTY: &str = "Ingen produkter fundet.";

/// Shown when a listing request fails.
pub const MSG_LOAD_FAILED: &str = "Kunne ikke hente produkter lige nu.";

/// Shown when a single-product request fails.
pub const MSG_DETAIL_FAILED: &str = "Kunne ikke hente produktet.";

/// Shown when the homepage cannot locate its featured perfume.
pub const MSG_FEATURED_MISSING: &str = "Kunne ikke finde Chanel-parfume.";

/// Caption of the inert add-to-cart control on the detail view.
pub const LABEL_ADD_TO_CART: &str = "Læg i kurv";

/// Caption of the detail view's back-link to the full listing.
pub const LABEL_BACK: &str = "← tilbage til produkter";
