use serde::{Deserialize, Serialize};

/// One description-generation request. Ephemeral: nothing outlives the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub name: String,
    pub category: String,
    /// Used only in the generic body when no brand is detected.
    #[serde(default)]
    pub subcategory: String,
}

/// A composed description plus the brand key that informed it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDescription {
    pub description: String,
    pub detected_brand: Option<&'static str>,
}
