//! Shared test fixtures: hand-built product records shaped like the
//! catalog API's responses.

#![allow(dead_code)]

use butik::models::Product;

/// Builds a product with the fields the tests care about.
pub fn product(id: u64, title: &str, brand: Option<&str>, price: Option<f64>) -> Product {
    Product {
        id,
        title: title.to_string(),
        brand: brand.map(String::from),
        category: "beauty".to_string(),
        price,
        thumbnail: Some(format!("https://img.example/{id}/thumb.jpg")),
        images: vec![format!("https://img.example/{id}/1.jpg")],
        description: format!("Beskrivelse af {title}"),
    }
}

/// A small mixed catalog: three brands, one brandless item, one missing
/// price.
pub fn catalog() -> Vec<Product> {
    vec![
        product(1, "Essence Mascara", Some("Essence"), Some(9.99)),
        product(2, "Coco Noir", Some("Chanel"), Some(129.99)),
        product(3, "Rouge", Some("Dior"), Some(89.0)),
        product(4, "Powder", None, Some(14.99)),
        product(5, "No 5", Some("Chanel"), None),
    ]
}

/// The fragrance listing used by homepage tests.
pub fn fragrances() -> Vec<Product> {
    let mut coco = product(6, "Coco Noir Eau de Parfum", Some("Chanel"), Some(129.99));
    coco.category = "fragrances".to_string();
    let mut sauvage = product(7, "Sauvage", Some("Dior"), Some(99.0));
    sauvage.category = "fragrances".to_string();
    vec![sauvage, coco]
}
