//! Catalog record types shared by the storefront, the admin panel and the
//! document-store interfaces. Records mirror the hosted store's documents;
//! prices are kept as `Decimal` to avoid float drift.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored product document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Document id assigned by the hosted store.
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub subcategory: String,
    /// Hosted image URLs, in display order.
    pub images: Vec<String>,
    pub main_image: Option<String>,
    pub in_stock: bool,
    pub stock_count: u32,
    /// `None` for products without a size dimension (e.g. perfume).
    pub sizes: Option<Vec<String>>,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductRecord {
    /// The image shown on cards: the designated main image, else the first
    /// uploaded one.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.main_image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// `true` when the product either has no size dimension or carries the
    /// requested size.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        match &self.sizes {
            None => true,
            Some(sizes) if sizes.is_empty() => true,
            Some(sizes) => sizes.iter().any(|s| s == size),
        }
    }
}

/// Creation payload for a product document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub stock_count: u32,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

// Option<Option<T>> is intentional: outer None = "not in request" (keep current),
// Some(None) = "explicitly cleared", Some(Some(v)) = "set to value" (PATCH semantics).
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub images: Option<Vec<String>>,
    pub main_image: Option<Option<String>>,
    pub in_stock: Option<bool>,
    pub stock_count: Option<u32>,
    pub sizes: Option<Option<Vec<String>>>,
    pub features: Option<Vec<String>>,
}

/// A stored category document with its embedded subcategory list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub slug: String,
    pub is_active: bool,
    pub subcategories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload for a category document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Derived from the name when absent.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default = "default_in_stock")]
    pub is_active: bool,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

fn default_icon() -> String {
    "📦".to_string()
}

/// Derive a URL slug from a display name: lowercase, whitespace runs become
/// one dash, everything outside `[a-z0-9-]` is dropped (accented letters
/// included, matching the stored slugs).
#[must_use]
pub fn slug_from_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            pending_dash = !slug.is_empty();
        } else if c.is_ascii_alphanumeric() || c == '-' {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.push(c);
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sizes: Option<Vec<String>>) -> ProductRecord {
        ProductRecord {
            id: "p1".to_string(),
            name: "Nike Air Max 270".to_string(),
            description: String::new(),
            price: Decimal::new(15999, 2),
            category: "Zapatillas".to_string(),
            subcategory: "Urbanas".to_string(),
            images: vec![
                "https://cdn.example.com/a.jpg".to_string(),
                "https://cdn.example.com/b.jpg".to_string(),
            ],
            main_image: None,
            in_stock: true,
            stock_count: 3,
            sizes,
            features: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn primary_image_prefers_main_image() {
        let mut record = product(None);
        record.main_image = Some("https://cdn.example.com/main.jpg".to_string());
        assert_eq!(record.primary_image(), Some("https://cdn.example.com/main.jpg"));
    }

    #[test]
    fn primary_image_falls_back_to_first_upload() {
        let record = product(None);
        assert_eq!(record.primary_image(), Some("https://cdn.example.com/a.jpg"));
    }

    #[test]
    fn primary_image_none_when_no_images() {
        let mut record = product(None);
        record.images.clear();
        assert_eq!(record.primary_image(), None);
    }

    #[test]
    fn sizeless_product_offers_any_size() {
        let record = product(None);
        assert!(record.offers_size("42"));
    }

    #[test]
    fn empty_size_list_offers_any_size() {
        let record = product(Some(vec![]));
        assert!(record.offers_size("42"));
    }

    #[test]
    fn sized_product_matches_exactly() {
        let record = product(Some(vec!["41".to_string(), "42".to_string()]));
        assert!(record.offers_size("42"));
        assert!(!record.offers_size("43"));
    }

    #[test]
    fn slug_simple_name() {
        assert_eq!(slug_from_name("Carteras y Bolsos"), "carteras-y-bolsos");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slug_from_name("Juguetes   y  Peluches"), "juguetes-y-peluches");
    }

    #[test]
    fn slug_drops_accented_characters() {
        // Accented letters fall outside [a-z0-9-] and are dropped, matching
        // the slugs already stored by the hosted backend.
        assert_eq!(slug_from_name("Perfumería"), "perfumera");
    }

    #[test]
    fn slug_ignores_leading_and_trailing_whitespace() {
        assert_eq!(slug_from_name("  Ropa  "), "ropa");
    }

    #[test]
    fn new_product_defaults_apply_on_deserialize() {
        let payload: NewProduct = serde_json::from_str(
            r#"{"name":"Gorra","price":"19.99","category":"Ropa"}"#,
        )
        .expect("deserialize");
        assert!(payload.in_stock);
        assert_eq!(payload.stock_count, 0);
        assert!(payload.images.is_empty());
        assert!(payload.sizes.is_none());
    }

    #[test]
    fn new_category_defaults_apply_on_deserialize() {
        let payload: NewCategory =
            serde_json::from_str(r#"{"name":"Ropa"}"#).expect("deserialize");
        assert_eq!(payload.icon, "📦");
        assert!(payload.is_active);
        assert!(payload.slug.is_none());
        assert!(payload.subcategories.is_empty());
    }

    #[test]
    fn product_price_serializes_as_string() {
        let record = product(None);
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"price\":\"159.99\""));
    }
}
