//! Featured-product selection for the homepage.
//!
//! The homepage promotes one specific perfume, found in the fragrance
//! listing by a three-stage priority search. The repeated display of that
//! single product is deliberate.

use regex::Regex;

use crate::models::Product;

/// Picks the promoted perfume from the fragrance listing.
///
/// Priority order:
/// 1. title matches the fragrance name pattern and brand-or-title matches
///    the brand pattern,
/// 2. brand equals the brand name, case-insensitively,
/// 3. title matches the brand pattern.
///
/// Returns `None` when no stage matches, in which case the homepage shows
/// its not-found message and renders nothing else.
#[must_use]
pub fn pick_featured(products: &[Product]) -> Option<&Product> {
    let name_pattern = Regex::new(r"(?i)coco\s*noir").unwrap();
    let brand_pattern = Regex::new(r"(?i)chanel").unwrap();

    products
        .iter()
        .find(|p| {
            name_pattern.is_match(&p.title)
                && brand_pattern.is_match(p.brand.as_deref().unwrap_or(&p.title))
        })
        .or_else(|| {
            products
                .iter()
                .find(|p| p.brand.as_deref().unwrap_or("").eq_ignore_ascii_case("chanel"))
        })
        .or_else(|| products.iter().find(|p| brand_pattern.is_match(&p.title)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, brand: Option<&str>) -> Product {
        Product {
            id,
            title: title.to_string(),
            brand: brand.map(String::from),
            category: "fragrances".to_string(),
            price: Some(100.0),
            thumbnail: None,
            images: Vec::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_prefers_named_fragrance_with_matching_brand() {
        let products = vec![
            product(1, "Sauvage", Some("Dior")),
            product(2, "No 5", Some("Chanel")),
            product(3, "Coco  Noir Eau de Parfum", Some("CHANEL")),
        ];
        assert_eq!(pick_featured(&products).map(|p| p.id), Some(3));
    }

    #[test]
    fn test_name_pattern_falls_back_to_title_for_brand_match() {
        let products = vec![product(4, "Chanel Coco Noir", None)];
        assert_eq!(pick_featured(&products).map(|p| p.id), Some(4));
    }

    #[test]
    fn test_second_stage_matches_brand_case_insensitively() {
        let products = vec![
            product(1, "Sauvage", Some("Dior")),
            product(2, "No 5", Some("chanel")),
        ];
        assert_eq!(pick_featured(&products).map(|p| p.id), Some(2));
    }

    #[test]
    fn test_third_stage_matches_brand_in_title() {
        let products = vec![
            product(1, "Sauvage", Some("Dior")),
            product(2, "Inspired by Chanel", Some("Generic")),
        ];
        assert_eq!(pick_featured(&products).map(|p| p.id), Some(2));
    }

    #[test]
    fn test_no_stage_matches_yields_none() {
        let products = vec![
            product(1, "Sauvage", Some("Dior")),
            product(2, "Acqua di Gio", Some("Armani")),
        ];
        assert!(pick_featured(&products).is_none());
    }

    #[test]
    fn test_empty_listing_yields_none() {
        assert!(pick_featured(&[]).is_none());
    }
}
