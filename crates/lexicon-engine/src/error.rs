use thiserror::Error;

/// Errors raised while building a rule catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read rule catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed rule catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rule '{0}' has an empty pattern")]
    EmptyPattern(String),

    #[error("Rule '{id}' has an invalid regular expression: {message}")]
    InvalidRegex { id: String, message: String },

    #[error("Rule id '{0}' is already defined")]
    DuplicateId(String),
}
