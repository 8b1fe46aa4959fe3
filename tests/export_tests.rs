//! Integration tests for the HTML exporter: the written markup has to
//! match the store front's DOM contract.

mod fixtures;

use butik::api::loader::{FetchMessage, FetchPayload, FetchState};
use butik::config::{Config, ThemeMode};
use butik::export::{render_detail_page, render_listing_page, render_message_page};
use butik::routing::{ListScope, Route};
use butik::tui::AppState;
use fixtures::{catalog, product};

fn app_state(route: Route) -> AppState {
    let mut config = Config::default();
    config.ui.theme_mode = ThemeMode::Dark;
    AppState::new(route, config, FetchState::idle())
}

#[test]
fn test_listing_page_links_every_card_to_its_product() {
    let html = render_listing_page(&catalog(), true);
    for p in catalog() {
        assert!(
            html.contains(&format!(r#"href="?product={}""#, p.id)),
            "missing link for product {}",
            p.id
        );
    }
}

#[test]
fn test_listing_page_inserts_price_after_title_when_enabled() {
    let html = render_listing_page(&catalog(), true);
    let title_pos = html.find("product-card__title").expect("title");
    let price_pos = html.find("product-card__price").expect("price");
    assert!(price_pos > title_pos);

    let without = render_listing_page(&catalog(), false);
    assert!(!without.contains("product-card__price"));
}

#[test]
fn test_image_source_falls_back_from_thumbnail_to_first_image() {
    let mut p = product(9, "Lipstick", Some("Dior"), Some(20.0));
    p.thumbnail = None;
    let html = render_listing_page(&[p], true);
    assert!(html.contains(r#"src="https://img.example/9/1.jpg""#));
}

#[test]
fn test_alt_text_joins_brand_and_title() {
    let html = render_listing_page(&[product(2, "Coco Noir", Some("Chanel"), None)], true);
    assert!(html.contains(r#"alt="Chanel — Coco Noir""#));
}

#[test]
fn test_attribute_values_cannot_break_out_of_quotes() {
    let mut p = product(3, r#"Rouge "Intense""#, Some("Dior"), Some(10.0));
    p.thumbnail = Some(r#"https://img.example/3.jpg?x="y""#.to_string());
    let html = render_listing_page(&[p], true);

    assert!(!html.contains(r#"alt="Dior — Rouge "Intense"#));
    assert!(html.contains("Rouge &quot;Intense&quot;"));
    assert!(html.contains(r#"src="https://img.example/3.jpg?x=&quot;y&quot;""#));
}

#[test]
fn test_empty_listing_page_has_the_empty_state_line() {
    let html = render_listing_page(&[], true);
    assert!(html.contains("Ingen produkter fundet."));
    assert!(!html.contains("product-card__link"));
}

#[test]
fn test_detail_page_contract() {
    let html = render_detail_page(&product(2, "Coco Noir", Some("Chanel"), Some(129.99)));

    assert!(html.contains(r#"<a class="product-detail__back" href="?view=all">"#));
    assert!(html.contains("Chanel"));
    assert!(html.contains("Coco Noir"));
    assert!(html.contains("130 kr"));
    assert!(html.contains("Læg i kurv"));
    assert!(html.contains("Beskrivelse af Coco Noir"));
    assert!(html.contains(r#"loading="lazy""#));
}

#[test]
fn test_message_page_escapes_its_text() {
    let html = render_message_page("a < b");
    assert!(html.contains("a &lt; b"));
}

#[test]
fn test_homepage_export_repeats_the_featured_card_without_prices() {
    let mut state = app_state(Route::Home);
    state.apply_fetch_message(FetchMessage::Loaded(FetchPayload::Featured(Some(product(
        6,
        "Coco Noir",
        Some("Chanel"),
        Some(129.99),
    )))));

    let html = state.export_html();
    assert_eq!(html.matches(r#"href="?product=6""#).count(), 4);
    assert!(!html.contains("product-card__price"));
}

#[test]
fn test_list_export_respects_current_filter_and_sort() {
    let mut state = app_state(Route::List(ListScope::All));
    state.apply_fetch_message(FetchMessage::Loaded(FetchPayload::Listing(catalog())));
    state.list.apply_filter(&["Chanel".to_string()]);

    let html = state.export_html();
    assert!(html.contains(r#"href="?product=2""#));
    assert!(html.contains(r#"href="?product=5""#));
    assert!(!html.contains(r#"href="?product=3""#));
}

#[test]
fn test_failed_state_exports_the_failure_message_only() {
    let mut state = app_state(Route::List(ListScope::Makeup));
    state.apply_fetch_message(FetchMessage::Failed("HTTP 502 Bad Gateway".into()));

    let html = state.export_html();
    assert!(html.contains("Kunne ikke hente produkter lige nu."));
    assert!(!html.contains("product-card__link"));
}
