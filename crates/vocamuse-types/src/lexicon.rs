use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How deep a word sits in the learner's lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LexiconLevel {
    Deep,
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurfaceSubtype {
    General,
    VerbalBrand,
}

/// Lexicon classification of an entry.
///
/// Stored as `{ "level": "deep" }` or `{ "level": "surface", "subtype": "general" }`.
/// A subtype only exists for surface words, which the enum shape enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LexiconRecord", into = "LexiconRecord")]
pub enum Lexicon {
    Deep,
    Surface(SurfaceSubtype),
}

#[derive(Serialize, Deserialize)]
struct LexiconRecord {
    level: LexiconLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtype: Option<SurfaceSubtype>,
}

impl From<LexiconRecord> for Lexicon {
    fn from(record: LexiconRecord) -> Self {
        match record.level {
            // A stray subtype on a deep word is dropped
            LexiconLevel::Deep => Lexicon::Deep,
            LexiconLevel::Surface => {
                Lexicon::Surface(record.subtype.unwrap_or(SurfaceSubtype::General))
            }
        }
    }
}

impl From<Lexicon> for LexiconRecord {
    fn from(lexicon: Lexicon) -> Self {
        Self {
            level: lexicon.level(),
            subtype: lexicon.subtype(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::Surface(SurfaceSubtype::General)
    }
}

impl Lexicon {
    pub fn level(&self) -> LexiconLevel {
        match self {
            Lexicon::Deep => LexiconLevel::Deep,
            Lexicon::Surface(_) => LexiconLevel::Surface,
        }
    }

    pub fn subtype(&self) -> Option<SurfaceSubtype> {
        match self {
            Lexicon::Deep => None,
            Lexicon::Surface(subtype) => Some(*subtype),
        }
    }

    /// Numeric level used by the wizard and the level filter
    pub fn legacy_level(&self) -> LegacyLevel {
        LegacyLevel::from(*self)
    }

    /// Apply a typed numeric level. On error `self` is left untouched.
    pub fn set_legacy_level(&mut self, raw: &str) -> Result<(), ValidationError> {
        let level: LegacyLevel = raw.parse()?;
        *self = level.into();
        Ok(())
    }
}

/// The `1`/`2`/`3` encoding of [`Lexicon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LegacyLevel {
    Deep = 1,
    General = 2,
    VerbalBrand = 3,
}

impl LegacyLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Label shown in listings
    pub fn label(self) -> &'static str {
        match self {
            LegacyLevel::Deep => "1 - Deep",
            LegacyLevel::General => "2 - General",
            LegacyLevel::VerbalBrand => "3 - Verbal Brand",
        }
    }
}

impl fmt::Display for LegacyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for LegacyLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LegacyLevel::Deep),
            2 => Ok(LegacyLevel::General),
            3 => Ok(LegacyLevel::VerbalBrand),
            other => Err(ValidationError::InvalidLevel(other.to_string())),
        }
    }
}

impl FromStr for LegacyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| ValidationError::InvalidLevel(trimmed.to_string()))
            .and_then(LegacyLevel::try_from)
    }
}

impl From<LegacyLevel> for Lexicon {
    fn from(level: LegacyLevel) -> Self {
        match level {
            LegacyLevel::Deep => Lexicon::Deep,
            LegacyLevel::General => Lexicon::Surface(SurfaceSubtype::General),
            LegacyLevel::VerbalBrand => Lexicon::Surface(SurfaceSubtype::VerbalBrand),
        }
    }
}

impl From<Lexicon> for LegacyLevel {
    fn from(lexicon: Lexicon) -> Self {
        match lexicon {
            Lexicon::Deep => LegacyLevel::Deep,
            Lexicon::Surface(SurfaceSubtype::General) => LegacyLevel::General,
            Lexicon::Surface(SurfaceSubtype::VerbalBrand) => LegacyLevel::VerbalBrand,
        }
    }
}
