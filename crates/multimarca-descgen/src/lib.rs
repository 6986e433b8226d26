//! Rule-based product description generation for the multimarca catalog.
//!
//! Detects brand and model identity from a free-text product name against a
//! fixed knowledge base, resolves a per-category template, and composes a
//! deterministic Spanish-language marketing description. Pure and
//! synchronous: no I/O, no shared mutable state, identical inputs always
//! produce byte-identical output.

pub mod compose;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod types;

pub use engine::{BrandMatch, DescriptionEngine};
pub use error::GenerateError;
pub use knowledge::{BrandEntry, CategoryTemplate, BRAND_DATABASE, CATEGORY_TEMPLATES};
pub use types::{GeneratedDescription, GenerationRequest};
