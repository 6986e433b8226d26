use thiserror::Error;

/// Request-boundary failures. Display strings are the user-facing messages
/// shown by the admin panel, hence Spanish.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("El nombre del producto es requerido")]
    MissingName,

    #[error("La categoría es requerida")]
    MissingCategory,

    /// Unreachable by construction (the boilerplate block alone is non-empty),
    /// checked anyway so an empty result can never be returned as a success.
    #[error("No se pudo generar la descripción")]
    EmptyDescription,
}
