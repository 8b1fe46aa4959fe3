//! View routing: which mode a run starts in, derived from query
//! parameters.
//!
//! The app accepts the same query-string syntax its own exporter writes
//! into links (`?product=7`, `?view=all`), so a link target taken from an
//! exported page can be pasted straight back onto the command line. The
//! resolved route is fixed for the lifetime of the run.

/// Scope of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// The capped, unscoped catalog listing.
    All,
    /// The fragrance category.
    Perfume,
    /// The beauty category.
    Makeup,
}

impl ListScope {
    /// The `view` query value naming this scope.
    #[must_use]
    pub const fn view_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Perfume => "perfume",
            Self::Makeup => "makeup",
        }
    }

    /// The API category slug, or `None` for the unscoped listing.
    #[must_use]
    pub const fn category(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Perfume => Some("fragrances"),
            Self::Makeup => Some("beauty"),
        }
    }
}

/// The page mode selected for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Homepage with the promoted perfume.
    Home,
    /// A product listing with sort/filter controls.
    List(ListScope),
    /// Detail view for one product id.
    Detail(String),
}

impl Route {
    /// Resolves a route from the two query parameters.
    ///
    /// A present product id always wins; otherwise a known `view` value
    /// selects its list, and anything else (including absence) lands on
    /// the homepage.
    #[must_use]
    pub fn resolve(view: Option<&str>, product: Option<&str>) -> Self {
        if let Some(id) = product {
            if !id.is_empty() {
                return Self::Detail(id.to_string());
            }
        }
        match view {
            Some("all") => Self::List(ListScope::All),
            Some("perfume") => Self::List(ListScope::Perfume),
            Some("makeup") => Self::List(ListScope::Makeup),
            _ => Self::Home,
        }
    }

    /// Whether prices are rendered in this mode (lists and detail, not
    /// the homepage).
    #[must_use]
    pub const fn shows_price(&self) -> bool {
        matches!(self, Self::List(_) | Self::Detail(_))
    }

    /// Whether the sort toolbar and brand-filter panel are available
    /// (list modes only).
    #[must_use]
    pub const fn shows_toolbar(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The `view` value whose nav tab is marked active, if any.
    ///
    /// The marker is derived from the `view` parameter alone, so home and
    /// detail modes highlight no tab.
    #[must_use]
    pub const fn active_view(&self) -> Option<&'static str> {
        match self {
            Self::List(scope) => Some(scope.view_value()),
            Self::Home | Self::Detail(_) => None,
        }
    }
}

/// Extracts the `view` and `product` parameters from a query string.
///
/// Accepts an optional leading `?`; pairs are `&`-separated `key=value`
/// entries. The first occurrence of each parameter wins, other keys are
/// ignored, and a key without `=` reads as an empty value.
#[must_use]
pub fn parse_query(query: &str) -> (Option<String>, Option<String>) {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut view = None;
    let mut product = None;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "view" if view.is_none() => view = Some(value.to_string()),
            "product" if product.is_none() => product = Some(value.to_string()),
            _ => {}
        }
    }
    (view, product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_always_wins() {
        let route = Route::resolve(Some("all"), Some("42"));
        assert_eq!(route, Route::Detail("42".to_string()));
    }

    #[test]
    fn test_known_views_select_their_lists() {
        assert_eq!(Route::resolve(Some("all"), None), Route::List(ListScope::All));
        assert_eq!(
            Route::resolve(Some("perfume"), None),
            Route::List(ListScope::Perfume)
        );
        assert_eq!(
            Route::resolve(Some("makeup"), None),
            Route::List(ListScope::Makeup)
        );
    }

    #[test]
    fn test_absent_or_unknown_view_is_home() {
        assert_eq!(Route::resolve(None, None), Route::Home);
        assert_eq!(Route::resolve(Some("sale"), None), Route::Home);
        assert_eq!(Route::resolve(Some(""), None), Route::Home);
    }

    #[test]
    fn test_empty_product_id_is_ignored() {
        assert_eq!(Route::resolve(Some("all"), Some("")), Route::List(ListScope::All));
    }

    #[test]
    fn test_price_visible_in_lists_and_detail_only() {
        assert!(Route::List(ListScope::Perfume).shows_price());
        assert!(Route::Detail("1".to_string()).shows_price());
        assert!(!Route::Home.shows_price());
    }

    #[test]
    fn test_toolbar_visible_in_lists_only() {
        assert!(Route::List(ListScope::All).shows_toolbar());
        assert!(!Route::Detail("1".to_string()).shows_toolbar());
        assert!(!Route::Home.shows_toolbar());
    }

    #[test]
    fn test_active_tab_follows_view_value() {
        assert_eq!(Route::List(ListScope::Makeup).active_view(), Some("makeup"));
        assert_eq!(Route::Home.active_view(), None);
        assert_eq!(Route::Detail("1".to_string()).active_view(), None);
    }

    #[test]
    fn test_category_slugs() {
        assert_eq!(ListScope::Perfume.category(), Some("fragrances"));
        assert_eq!(ListScope::Makeup.category(), Some("beauty"));
        assert_eq!(ListScope::All.category(), None);
    }

    #[test]
    fn test_parse_query_basic() {
        assert_eq!(
            parse_query("?view=perfume"),
            (Some("perfume".to_string()), None)
        );
        assert_eq!(parse_query("product=3"), (None, Some("3".to_string())));
    }

    #[test]
    fn test_parse_query_both_parameters() {
        let (view, product) = parse_query("view=all&product=12");
        assert_eq!(view.as_deref(), Some("all"));
        assert_eq!(product.as_deref(), Some("12"));
    }

    #[test]
    fn test_parse_query_first_occurrence_wins() {
        let (view, _) = parse_query("view=all&view=makeup");
        assert_eq!(view.as_deref(), Some("all"));
    }

    #[test]
    fn test_parse_query_ignores_unknown_keys() {
        let (view, product) = parse_query("utm_source=mail&view=makeup");
        assert_eq!(view.as_deref(), Some("makeup"));
        assert!(product.is_none());
    }

    #[test]
    fn test_parse_query_key_without_value() {
        let (view, _) = parse_query("view");
        assert_eq!(view.as_deref(), Some(""));
    }
}
