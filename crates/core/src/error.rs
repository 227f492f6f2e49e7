//! Error type shared by every fallible engine operation.

use crate::types::NumerologyType;

/// All errors that can be returned by the numerology engine.
///
/// Name normalization and meaning lookup never fail; the only runtime
/// failures are incomplete input and malformed dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumerologyError {
    /// A field required by the requested operation was not supplied.
    #[error("missing required field '{field}' for {numerology_type}")]
    MissingField {
        numerology_type: NumerologyType,
        field: &'static str,
    },

    /// A date string does not decompose into `YYYY-MM-DD`.
    #[error("invalid date '{value}': {reason}")]
    DateFormat { value: String, reason: String },

    /// A numerology type name that is not one of the nine supported operations.
    #[error("unknown numerology type: {name}")]
    UnknownType { name: String },

    /// A meanings resource that cannot be parsed or leaves lookups partial.
    #[error("invalid meanings resource: {message}")]
    InvalidMeanings { message: String },
}

impl NumerologyError {
    pub(crate) fn date_format(value: &str, reason: impl Into<String>) -> Self {
        NumerologyError::DateFormat {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
