use thiserror::Error;

/// Errors that can occur during invoice validation or generation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZugferdError {
    /// One or more mandatory fields are missing. Carries every violation
    /// found in a single pass, in checklist order.
    #[error("missing required field(s): {}", .0.join(", "))]
    Validation(Vec<String>),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),

    /// PDF loading or writing error.
    #[error("PDF error: {0}")]
    Pdf(String),
}

impl ZugferdError {
    /// The missing-field paths if this is a validation error.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            Self::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}
