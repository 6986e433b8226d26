//! Category-store interface. Subcategories are plain strings embedded in the
//! category document, so add/remove operate on that list rather than on
//! documents of their own.

use async_trait::async_trait;
use multimarca_core::{CategoryRecord, NewCategory};

use crate::StoreError;

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn create(&self, category: NewCategory) -> Result<CategoryRecord, StoreError>;
    /// All categories, sorted by name.
    async fn list(&self) -> Result<Vec<CategoryRecord>, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
    /// Append a subcategory to the embedded list; duplicates (after trim) are
    /// rejected with [`StoreError::DuplicateSubcategory`]. Returns the
    /// updated list.
    async fn add_subcategory(
        &self,
        category_id: &str,
        name: &str,
    ) -> Result<Vec<String>, StoreError>;
    /// Remove a subcategory from the embedded list; a name not present is
    /// rejected with [`StoreError::SubcategoryNotFound`]. Returns the updated
    /// list.
    async fn remove_subcategory(
        &self,
        category_id: &str,
        name: &str,
    ) -> Result<Vec<String>, StoreError>;
}
