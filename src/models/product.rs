//! Product records as delivered by the remote catalog API.
//!
//! The API owns these records; the client holds read-only copies for the
//! duration of a run. Absent fields decode to defaults rather than failing,
//! so a sparse record still renders.

use serde::{Deserialize, Serialize};

/// A single product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Numeric product id, also used in generated `?product=<id>` links.
    pub id: u64,
    /// Product title.
    #[serde(default)]
    pub title: String,
    /// Brand name; many records (e.g. groceries) omit it.
    #[serde(default)]
    pub brand: Option<String>,
    /// API category slug (e.g. "fragrances", "beauty").
    #[serde(default)]
    pub category: String,
    /// Price in the store currency; absent prices render as empty.
    #[serde(default)]
    pub price: Option<f64>,
    /// Primary image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Additional image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Long-form description shown on the detail view.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Label shown on the brand line: brand, else category, else empty.
    #[must_use]
    pub fn display_brand(&self) -> &str {
        match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() => brand,
            _ => &self.category,
        }
    }

    /// Image source: thumbnail, else the first gallery image, else empty.
    #[must_use]
    pub fn image_url(&self) -> &str {
        match self.thumbnail.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => self.images.first().map_or("", String::as_str),
        }
    }

    /// Alternative text: `"{brand} — {title}"`, the dash omitted when the
    /// brand is absent, trimmed.
    #[must_use]
    pub fn alt_text(&self) -> String {
        let text = match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() => format!("{brand} — {}", self.title),
            _ => self.title.clone(),
        };
        text.trim().to_string()
    }

    /// Query string that opens this product's detail view.
    #[must_use]
    pub fn link_query(&self) -> String {
        format!("?product={}", self.id)
    }

    /// Price key used for ordering; a missing price sorts as zero.
    #[must_use]
    pub fn sort_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Collection envelope returned by listing endpoints: `{ "products": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPage {
    /// The products of this page; absent decodes as empty.
    #[serde(default)]
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 7,
            title: "Coco Noir".to_string(),
            brand: Some("Chanel".to_string()),
            category: "fragrances".to_string(),
            price: Some(129.99),
            thumbnail: Some("https://img.example/7/thumb.jpg".to_string()),
            images: vec!["https://img.example/7/1.jpg".to_string()],
            description: "Eau de parfum".to_string(),
        }
    }

    #[test]
    fn test_display_brand_prefers_brand() {
        assert_eq!(product().display_brand(), "Chanel");
    }

    #[test]
    fn test_display_brand_falls_back_to_category() {
        let mut p = product();
        p.brand = None;
        assert_eq!(p.display_brand(), "fragrances");

        p.brand = Some(String::new());
        assert_eq!(p.display_brand(), "fragrances");
    }

    #[test]
    fn test_image_url_fallback_order() {
        let mut p = product();
        assert_eq!(p.image_url(), "https://img.example/7/thumb.jpg");

        p.thumbnail = None;
        assert_eq!(p.image_url(), "https://img.example/7/1.jpg");

        p.images.clear();
        assert_eq!(p.image_url(), "");
    }

    #[test]
    fn test_alt_text_with_and_without_brand() {
        let mut p = product();
        assert_eq!(p.alt_text(), "Chanel — Coco Noir");

        p.brand = None;
        assert_eq!(p.alt_text(), "Coco Noir");

        p.title = String::new();
        assert_eq!(p.alt_text(), "");
    }

    #[test]
    fn test_link_query_encodes_id() {
        assert_eq!(product().link_query(), "?product=7");
    }

    #[test]
    fn test_sparse_record_decodes_with_defaults() {
        let p: Product = serde_json::from_str(r#"{"id": 3}"#).expect("decode");
        assert_eq!(p.id, 3);
        assert_eq!(p.title, "");
        assert!(p.brand.is_none());
        assert!(p.price.is_none());
        assert!(p.images.is_empty());
    }

    #[test]
    fn test_page_decodes_missing_products_as_empty() {
        let page: ProductPage = serde_json::from_str("{}").expect("decode");
        assert!(page.products.is_empty());
    }
}
