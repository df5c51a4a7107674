use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::lexicon::{LegacyLevel, Lexicon};

/// Grammatical type of a vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Noun => "noun",
            WordType::Verb => "verb",
            WordType::Adjective => "adjective",
            WordType::Adverb => "adverb",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordType {
    type Err = ValidationError;

    /// Accepts the English names and their Spanish labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" | "sustantivo" => Ok(WordType::Noun),
            "verb" | "verbo" => Ok(WordType::Verb),
            "adjective" | "adjetivo" => Ok(WordType::Adjective),
            "adverb" | "adverbio" => Ok(WordType::Adverb),
            _ => Err(ValidationError::InvalidWordType(s.trim().to_string())),
        }
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A vocabulary entry as persisted in the words collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Assigned once at creation, never reused. Empty only for legacy records
    /// read without one, until [`Entry::ensure_id`] runs.
    #[serde(default)]
    pub id: String,

    pub word: String,

    pub translation: String,

    #[serde(rename = "type")]
    pub word_type: WordType,

    #[serde(default)]
    pub semantic_field: String,

    /// `None` means no example was given, which is not the same as `Some("")`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default)]
    pub lexicon: Lexicon,
}

impl Entry {
    /// Validate a draft and give it a fresh id
    pub fn create(draft: EntryDraft) -> Result<Self, ValidationError> {
        draft.into_entry(new_id())
    }

    /// Give an id-less record a fresh id. Returns whether one was assigned.
    pub fn ensure_id(&mut self) -> bool {
        if !self.id.is_empty() {
            return false;
        }
        self.id = new_id();
        true
    }

    /// Same rules as [`EntryDraft::validate`], for records coming from outside (imports)
    pub fn validate(&self) -> Result<(), ValidationError> {
        EntryDraft::from(self).validate().map(|_| ())
    }

    pub fn legacy_level(&self) -> LegacyLevel {
        self.lexicon.legacy_level()
    }

    /// Case-insensitive exact match on `word`, as used by the terminal commands
    pub fn matches_word(&self, text: &str) -> bool {
        normalize_word(&self.word) == normalize_word(text)
    }
}

/// Canonical form used for word lookups: trimmed, NFC, lowercase
pub fn normalize_word(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Mutable field set used while an entry is being created or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub word: String,
    pub translation: String,
    pub word_type: Option<WordType>,
    pub semantic_field: String,
    pub example: Option<String>,
    pub favorite: bool,
    pub lexicon: Lexicon,
}

impl EntryDraft {
    /// Required fields: word, translation, type and semantic field
    pub fn validate(&self) -> Result<WordType, ValidationError> {
        if self.word.trim().is_empty() {
            return Err(ValidationError::MissingField("word"));
        }
        if self.translation.trim().is_empty() {
            return Err(ValidationError::MissingField("translation"));
        }
        let word_type = self
            .word_type
            .ok_or(ValidationError::MissingField("type"))?;
        if self.semantic_field.trim().is_empty() {
            return Err(ValidationError::MissingField("semantic field"));
        }
        Ok(word_type)
    }

    pub fn into_entry(self, id: String) -> Result<Entry, ValidationError> {
        let word_type = self.validate()?;

        Ok(Entry {
            id,
            word: self.word.trim().to_string(),
            translation: self.translation.trim().to_string(),
            word_type,
            semantic_field: self.semantic_field.trim().to_string(),
            example: self.example,
            favorite: self.favorite,
            lexicon: self.lexicon,
        })
    }
}

impl From<&Entry> for EntryDraft {
    fn from(entry: &Entry) -> Self {
        Self {
            word: entry.word.clone(),
            translation: entry.translation.clone(),
            word_type: Some(entry.word_type),
            semantic_field: entry.semantic_field.clone(),
            example: entry.example.clone(),
            favorite: entry.favorite,
            lexicon: entry.lexicon,
        }
    }
}
