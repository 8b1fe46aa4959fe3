//! HTML rendering for exported pages.
//!
//! The markup mirrors the store front's DOM: one card per product with a
//! `?product=<id>` link, image with trimmed alt text, brand and title
//! labels, and a price element directly after the title when the view
//! shows prices. The detail layout carries the `?view=all` back-link and
//! the inert add-to-cart button. Every interpolated value is escaped;
//! attribute values additionally escape double quotes so no value can
//! break out of its attribute.

use std::fmt::Write;

use crate::constants::{APP_NAME, LABEL_ADD_TO_CART, LABEL_BACK, MSG_EMPTY};
use crate::models::Product;
use crate::services::format_price;

/// Escapes text content: `&`, `<`, `>`.
#[must_use]
pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes an attribute value: text escapes plus `"` as `&quot;`.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Renders one product card.
#[must_use]
pub fn render_card(product: &Product, show_price: bool) -> String {
    let mut out = String::new();

    writeln!(out, r#"<article class="product-card">"#).unwrap();
    writeln!(
        out,
        r#"  <a class="product-card__link" href="{}">"#,
        escape_attr(&product.link_query())
    )
    .unwrap();
    writeln!(
        out,
        r#"    <img class="product-card__image" src="{}" alt="{}" loading="lazy" />"#,
        escape_attr(product.image_url()),
        escape_attr(&product.alt_text())
    )
    .unwrap();
    writeln!(
        out,
        r#"    <p class="product-card__brand">{}</p>"#,
        escape_text(product.display_brand())
    )
    .unwrap();
    writeln!(
        out,
        r#"    <h3 class="product-card__title">{}</h3>"#,
        escape_text(&product.title)
    )
    .unwrap();
    if show_price {
        writeln!(
            out,
            r#"    <p class="product-card__price">{}</p>"#,
            escape_text(&format_price(product.price))
        )
        .unwrap();
    }
    writeln!(out, "  </a>").unwrap();
    write!(out, "</article>").unwrap();

    out
}

/// Renders the card grid, or the empty-state line when there is nothing
/// to show.
#[must_use]
pub fn render_cards(products: &[Product], show_price: bool) -> String {
    if products.is_empty() {
        return render_message(MSG_EMPTY);
    }

    let mut out = String::new();
    for product in products {
        writeln!(out, "{}", render_card(product, show_price)).unwrap();
    }
    out
}

/// Renders the single-product detail layout.
#[must_use]
pub fn render_detail(product: &Product) -> String {
    let mut out = String::new();

    writeln!(
        out,
        r#"<section class="product-detail" role="region" aria-labelledby="productTitle">"#
    )
    .unwrap();
    writeln!(out, r#"  <div class="product-detail__media">"#).unwrap();
    writeln!(
        out,
        r#"    <img class="product-detail__image" src="{}" alt="{}" loading="lazy" />"#,
        escape_attr(product.image_url()),
        escape_attr(&product.alt_text())
    )
    .unwrap();
    writeln!(out, "  </div>").unwrap();
    writeln!(out, r#"  <div class="product-detail__info">"#).unwrap();
    writeln!(
        out,
        r#"    <a class="product-detail__back" href="?view=all">{LABEL_BACK}</a>"#
    )
    .unwrap();
    writeln!(
        out,
        r#"    <h3 class="product-detail__brand" id="productBrand">{}</h3>"#,
        escape_text(product.display_brand())
    )
    .unwrap();
    writeln!(
        out,
        r#"    <h2 class="product-detail__title" id="productTitle">{}</h2>"#,
        escape_text(&product.title)
    )
    .unwrap();
    writeln!(
        out,
        r#"    <p class="product-detail__price" aria-live="polite">{}</p>"#,
        escape_text(&format_price(product.price))
    )
    .unwrap();
    writeln!(
        out,
        r#"    <button class="btn btn--primary product-detail__add" type="button">{LABEL_ADD_TO_CART}</button>"#
    )
    .unwrap();
    writeln!(
        out,
        r#"    <p class="product-detail__description">{}</p>"#,
        escape_text(&product.description)
    )
    .unwrap();
    writeln!(out, "  </div>").unwrap();
    write!(out, "</section>").unwrap();

    out
}

/// Renders a display-area message line.
#[must_use]
pub fn render_message(text: &str) -> String {
    format!(r#"<p style="margin:8px 0">{}</p>"#, escape_text(text))
}

/// Wraps display-area content in a standalone document.
#[must_use]
pub fn render_page(body: &str) -> String {
    let mut out = String::new();

    writeln!(out, "<!doctype html>").unwrap();
    writeln!(out, r#"<html lang="da">"#).unwrap();
    writeln!(out, "<head>").unwrap();
    writeln!(out, r#"  <meta charset="utf-8" />"#).unwrap();
    writeln!(out, "  <title>{}</title>", escape_text(APP_NAME)).unwrap();
    writeln!(out, "</head>").unwrap();
    writeln!(out, "<body>").unwrap();
    writeln!(out, r#"<main class="content">"#).unwrap();
    writeln!(out, r#"<div class="container" role="list">"#).unwrap();
    writeln!(out, "{body}").unwrap();
    writeln!(out, "</div>").unwrap();
    writeln!(out, "</main>").unwrap();
    writeln!(out, "</body>").unwrap();
    write!(out, "</html>").unwrap();

    out
}

/// Full page for a list view (or the homepage's repeated cards).
#[must_use]
pub fn render_listing_page(products: &[Product], show_price: bool) -> String {
    render_page(&render_cards(products, show_price))
}

/// Full page for a detail view.
#[must_use]
pub fn render_detail_page(product: &Product) -> String {
    render_page(&render_detail(product))
}

/// Full page carrying only a message (failure, not-found).
#[must_use]
pub fn render_message_page(text: &str) -> String {
    render_page(&render_message(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 5,
            title: "Coco Noir".to_string(),
            brand: Some("Chanel".to_string()),
            category: "fragrances".to_string(),
            price: Some(1299.0),
            thumbnail: Some("https://img.example/5.jpg".to_string()),
            images: Vec::new(),
            description: "Mørk og elegant.".to_string(),
        }
    }

    #[test]
    fn test_escape_attr_neutralizes_quotes() {
        assert_eq!(
            escape_attr(r#"a "b" & <c>"#),
            "a &quot;b&quot; &amp; &lt;c&gt;"
        );
    }

    #[test]
    fn test_card_links_to_product_query() {
        let card = render_card(&product(), true);
        assert!(card.contains(r#"href="?product=5""#));
    }

    #[test]
    fn test_card_price_follows_title_only_when_enabled() {
        let with_price = render_card(&product(), true);
        let title_pos = with_price.find("product-card__title").unwrap();
        let price_pos = with_price.find("product-card__price").unwrap();
        assert!(price_pos > title_pos);
        assert!(with_price.contains("1.299 kr"));

        let without_price = render_card(&product(), false);
        assert!(!without_price.contains("product-card__price"));
    }

    #[test]
    fn test_card_escapes_malicious_alt_text() {
        let mut p = product();
        p.brand = Some(r#"Ch"anel"#.to_string());
        let card = render_card(&p, false);
        assert!(card.contains("Ch&quot;anel"));
        assert!(!card.contains(r#"alt="Ch"anel"#));
    }

    #[test]
    fn test_empty_listing_renders_message_not_empty_container() {
        let html = render_cards(&[], true);
        assert!(html.contains("Ingen produkter fundet."));
    }

    #[test]
    fn test_detail_carries_back_link_and_cart_button() {
        let html = render_detail(&product());
        assert!(html.contains(r#"href="?view=all""#));
        assert!(html.contains("Læg i kurv"));
        assert!(html.contains(r#"aria-labelledby="productTitle""#));
        assert!(html.contains(r#"aria-live="polite""#));
        assert!(html.contains("Mørk og elegant."));
    }

    #[test]
    fn test_page_wrapper_marks_grid_as_list() {
        let html = render_listing_page(&[product()], true);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains(r#"<div class="container" role="list">"#));
        assert!(html.ends_with("</html>"));
    }
}
