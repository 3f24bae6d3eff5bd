//! Read-only reference catalog: products and brands.

use serde::{Deserialize, Serialize};

use crate::id::{BrandId, ProductId};

/// A product in the reference catalog.
///
/// Only `id` matters to cart rules; the remaining fields are descriptive and
/// carried through from fixture data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub category_id: Option<BrandId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// A brand, exposed verbatim by the public brands endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_reads_camel_case_fixture_fields() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "1",
                "categoryId": "2",
                "name": "Superglasses",
                "description": "The best glasses in the world",
                "price": 150,
                "imageUrls": ["https://example.com/1.jpg"]
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.category_id, Some(BrandId::new("2")));
        assert_eq!(product.price, 150.0);
        assert_eq!(product.image_urls.len(), 1);
    }

    #[test]
    fn product_descriptive_fields_are_optional() {
        let product: Product = serde_json::from_str(r#"{"id":"9","name":"Bare"}"#).unwrap();
        assert!(product.category_id.is_none());
        assert!(product.description.is_empty());
        assert!(product.image_urls.is_empty());
    }
}
