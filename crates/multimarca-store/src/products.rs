//! Product-store interface and the in-memory filter applied to fetched
//! documents. The hosted store only supports broad fetches, so every filter
//! dimension is evaluated on this side, record by record.

use async_trait::async_trait;
use multimarca_core::{NewProduct, ProductRecord, ProductUpdate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// CRUD surface of the hosted product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, product: NewProduct) -> Result<ProductRecord, StoreError>;
    async fn get(&self, id: &str) -> Result<ProductRecord, StoreError>;
    /// Fetch then filter in memory; results keep newest-first order.
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<ProductRecord>, StoreError>;
    /// Sparse update: `None` fields keep their current value.
    async fn update(&self, id: &str, update: ProductUpdate) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Storefront filter set. All dimensions are optional and combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub size: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    /// Sentinel the storefront sends for "any category/subcategory".
    pub const ANY_CATEGORY: &'static str = "Todas";
    /// Sentinel the storefront sends for "any size".
    pub const ANY_SIZE: &'static str = "Todos";

    /// Whether a record passes every requested dimension.
    ///
    /// Semantics follow the storefront: the sentinels disable their
    /// dimension, products without a size list pass any size filter, search
    /// is a case-insensitive substring over name/category/subcategory/
    /// description, and price bounds are inclusive.
    #[must_use]
    pub fn matches(&self, product: &ProductRecord) -> bool {
        if let Some(in_stock) = self.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if category != Self::ANY_CATEGORY && product.category != category {
                return false;
            }
        }
        if let Some(subcategory) = self.subcategory.as_deref() {
            if subcategory != Self::ANY_CATEGORY && product.subcategory != subcategory {
                return false;
            }
        }
        if let Some(size) = self.size.as_deref() {
            if size != Self::ANY_SIZE && !product.offers_size(size) {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref() {
            let needle = search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle)
                || product.subcategory.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}
