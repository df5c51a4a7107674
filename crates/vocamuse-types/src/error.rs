/// Rejected input for an entry or quote. Nothing is written when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid word type: '{0}' (expected noun, verb, adjective or adverb)")]
    InvalidWordType(String),

    #[error("Invalid level: '{0}' (expected 1, 2 or 3)")]
    InvalidLevel(String),

    #[error("Quote text cannot be empty")]
    EmptyQuote,
}
