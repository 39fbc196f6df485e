use thiserror::Error;

/// Errors surfaced by the recommendation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Fragrance not found: {id}")]
    NotFound { id: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MatchError {
    /// HTTP status the boundary reports for this error
    pub fn status_code(&self) -> u16 {
        match self {
            MatchError::NotFound { .. } => 404,
            MatchError::InvalidInput(_) => 400,
            MatchError::Internal(_) => 500,
        }
    }

    /// Short machine-readable error label
    pub fn label(&self) -> &'static str {
        match self {
            MatchError::NotFound { .. } => "not_found",
            MatchError::InvalidInput(_) => "invalid_input",
            MatchError::Internal(_) => "internal_error",
        }
    }
}

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate fragrance id: {0}")]
    DuplicateId(u32),

    #[error("Fragrance {id} has an empty {field} list")]
    EmptyAttribute { id: u32, field: &'static str },

    #[error("Fragrance {id} has a negative price: {price}")]
    NegativePrice { id: u32, price: f64 },
}
