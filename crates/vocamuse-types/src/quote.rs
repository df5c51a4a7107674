use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A saved quote. The author, if any, is already folded into the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quote(String);

impl Quote {
    /// Build the stored form: `"<quote> - <author>"`, or just the quote without an author
    pub fn compose(text: &str, author: Option<&str>) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuote);
        }

        let combined = match author.map(str::trim).filter(|a| !a.is_empty()) {
            Some(author) => format!("{text} - {author}"),
            None => text.to_string(),
        };

        Ok(Self(combined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
