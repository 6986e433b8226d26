//! Detection, template resolution and composition over the knowledge tables.

use crate::compose;
use crate::error::GenerateError;
use crate::knowledge::{BrandEntry, CategoryTemplate, BRAND_DATABASE, CATEGORY_TEMPLATES, FALLBACK_TEMPLATE};
use crate::types::{GeneratedDescription, GenerationRequest};

/// A brand detected in a product name, with the first matching model keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandMatch {
    pub brand: &'static str,
    pub model: Option<&'static str>,
    pub entry: &'static BrandEntry,
}

/// The description generator: read-only knowledge tables plus the fallback
/// template, injected wherever descriptions are produced. Copyable and safe
/// to share across concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionEngine {
    brands: &'static [BrandEntry],
    templates: &'static [CategoryTemplate],
    fallback: &'static CategoryTemplate,
}

impl Default for DescriptionEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DescriptionEngine {
    #[must_use]
    pub const fn new(
        brands: &'static [BrandEntry],
        templates: &'static [CategoryTemplate],
        fallback: &'static CategoryTemplate,
    ) -> Self {
        Self {
            brands,
            templates,
            fallback,
        }
    }

    /// Engine over the builtin retail knowledge tables.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(BRAND_DATABASE, CATEGORY_TEMPLATES, FALLBACK_TEMPLATE)
    }

    /// Detect a brand (and optionally a model) in a product name.
    ///
    /// The name is lowercased once, then brands are scanned in table order;
    /// the first brand whose key is contained in the name wins and the scan
    /// stops there, even if a later brand's key also appears. Within the
    /// winning brand, model keywords are scanned the same way. Matching is
    /// plain substring containment with no word-boundary check.
    #[must_use]
    pub fn detect(&self, product_name: &str) -> Option<BrandMatch> {
        let name = product_name.to_lowercase();
        self.brands
            .iter()
            .find(|entry| name.contains(entry.key))
            .map(|entry| BrandMatch {
                brand: entry.key,
                model: entry.model_keywords.iter().copied().find(|kw| name.contains(kw)),
                entry,
            })
    }

    /// Exact, case-sensitive template lookup; anything else (empty string,
    /// categories known only to the external category store) resolves to the
    /// clothing fallback. Total.
    #[must_use]
    pub fn resolve_template(&self, category: &str) -> &'static CategoryTemplate {
        self.templates
            .iter()
            .find(|template| template.category == category)
            .unwrap_or(self.fallback)
    }

    /// Compose a description from already-validated inputs.
    ///
    /// Total over all string inputs and deterministic: the output is an
    /// ordered concatenation of opening, body, features block, closing,
    /// boilerplate and call to action, with no randomness or timestamps.
    #[must_use]
    pub fn compose(&self, name: &str, category: &str, subcategory: &str) -> GeneratedDescription {
        let detected = self.detect(name);
        let template = self.resolve_template(category);

        let mut description = compose::opening(template, name);
        if let Some(found) = detected {
            description.push_str(&compose::brand_body(&found));
            description.push_str(&compose::features_block(found.entry.features));
        } else {
            description.push_str(&compose::generic_body(category, subcategory));
            description.push_str(&compose::features_block(template.features));
        }
        description.push_str(&compose::closing(template));
        description.push_str(compose::BOILERPLATE);
        description.push_str(compose::CALL_TO_ACTION);

        GeneratedDescription {
            description,
            detected_brand: detected.map(|found| found.brand),
        }
    }

    /// Validate a request and compose its description.
    ///
    /// # Errors
    ///
    /// `MissingName`/`MissingCategory` when the trimmed field is empty, and
    /// `EmptyDescription` if composition somehow produced a blank result.
    pub fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedDescription, GenerateError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(GenerateError::MissingName);
        }
        let category = request.category.trim();
        if category.is_empty() {
            return Err(GenerateError::MissingCategory);
        }

        let generated = self.compose(name, category, request.subcategory.trim());
        if generated.description.trim().is_empty() {
            return Err(GenerateError::EmptyDescription);
        }
        Ok(generated)
    }
}
