use std::mem;

use vocamuse_types::{Entry, LegacyLevel, WordType};

/// One filter condition on an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Type(WordType),
    /// Only favorites pass
    Favorite,
    /// Case-insensitive substring of the semantic field
    SemanticField(String),
    Level(LegacyLevel),
}

impl Predicate {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Predicate::Type(word_type) => entry.word_type == *word_type,
            Predicate::Favorite => entry.favorite,
            Predicate::SemanticField(text) => entry
                .semantic_field
                .to_lowercase()
                .contains(&text.to_lowercase()),
            Predicate::Level(level) => entry.legacy_level() == *level,
        }
    }

    fn same_kind(&self, other: &Predicate) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    pub fn describe(&self) -> String {
        match self {
            Predicate::Type(word_type) => format!("type = {word_type}"),
            Predicate::Favorite => "favorites only".to_string(),
            Predicate::SemanticField(text) => format!("field contains '{text}'"),
            Predicate::Level(level) => format!("level = {level}"),
        }
    }
}

/// Conjunction of predicates. No predicates means everything passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    predicates: Vec<Predicate>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn with_type(self, word_type: WordType) -> Self {
        self.with(Predicate::Type(word_type))
    }

    pub fn favorites_only(self) -> Self {
        self.with(Predicate::Favorite)
    }

    /// Blank text adds nothing, since every field contains it
    pub fn field_contains(self, text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return self;
        }
        self.with(Predicate::SemanticField(text.to_string()))
    }

    pub fn with_level(self, level: LegacyLevel) -> Self {
        self.with(Predicate::Level(level))
    }

    /// `self AND other`
    pub fn and(mut self, other: Criteria) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    /// Replace any predicate of the same kind
    pub fn set(&mut self, predicate: Predicate) {
        self.predicates.retain(|p| !p.same_kind(&predicate));
        self.predicates.push(predicate);
    }

    /// Flip the favorites-only condition, returning whether it is now active
    pub fn toggle_favorites(&mut self) -> bool {
        let before = self.predicates.len();
        self.predicates.retain(|p| *p != Predicate::Favorite);
        if self.predicates.len() == before {
            self.predicates.push(Predicate::Favorite);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.predicates.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.predicates.iter().all(|p| p.matches(entry))
    }

    pub fn describe(&self) -> String {
        self.predicates
            .iter()
            .map(Predicate::describe)
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Borrowing filter, input order preserved
pub fn select<'a>(entries: &'a [Entry], criteria: &Criteria) -> Vec<&'a Entry> {
    entries.iter().filter(|e| criteria.matches(e)).collect()
}

/// Owned filter, input order preserved
pub fn filter(entries: &[Entry], criteria: &Criteria) -> Vec<Entry> {
    select(entries, criteria).into_iter().cloned().collect()
}
