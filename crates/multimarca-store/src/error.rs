use thiserror::Error;

/// Document-store failures. Display strings double as the human-readable
/// messages shown in the admin panel, hence Spanish.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("producto no encontrado: {0}")]
    ProductNotFound(String),

    #[error("categoría no encontrada: {0}")]
    CategoryNotFound(String),

    #[error("la subcategoría ya existe: {0}")]
    DuplicateSubcategory(String),

    #[error("subcategoría no encontrada: {0}")]
    SubcategoryNotFound(String),

    #[error("registro inválido: {0}")]
    Invalid(String),

    #[error("error del almacén de documentos: {0}")]
    Backend(String),
}

/// Image-CDN failures.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no image host configured")]
    NotConfigured,

    #[error("upload rejected by host: {0}")]
    Rejected(String),
}
