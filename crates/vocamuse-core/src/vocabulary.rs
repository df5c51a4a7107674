use std::collections::HashSet;

use serde_json::Value;
use vocamuse_config::storage::StorageConfig;
use vocamuse_types::{Entry, EntryDraft, Quote};

use crate::error::{StorageError, VocabError};
use crate::query::{self, Criteria};
use crate::store::{BlobStore, Collection};

/// Default file name for exported words
pub const EXPORT_FILE_NAME: &str = "vocamuse-words.json";

/// A mutation that has been applied in memory.
///
/// `persisted` tells whether the full collection also reached storage.
#[derive(Debug)]
pub struct Applied<T> {
    pub value: T,
    pub persisted: Result<(), StorageError>,
}

impl<T> Applied<T> {
    pub fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }

    /// User-facing line when the write failed
    pub fn storage_warning(&self) -> Option<String> {
        self.persisted
            .as_ref()
            .err()
            .map(|e| format!("Warning: change kept in memory but not saved ({e})"))
    }
}

/// Words and quotes collections backed by an injected blob store.
///
/// Every mutation is applied to the whole in-memory collection first and then
/// the whole collection is written back.
pub struct Vocabulary<S: BlobStore> {
    store: S,
    words: Collection<Entry>,
    quote_log: Collection<Quote>,
    entries: Vec<Entry>,
    quotes: Vec<Quote>,
}

impl<S: BlobStore> Vocabulary<S> {
    pub fn open(store: S, config: &StorageConfig) -> Self {
        Self::with_keys(store, &config.entries_key, &config.quotes_key)
    }

    pub fn with_keys(store: S, entries_key: &str, quotes_key: &str) -> Self {
        let words = Collection::new(entries_key);
        let quote_log = Collection::new(quotes_key);
        let entries = words.load(&store);
        let quotes = quote_log.load(&store);

        let mut vocab = Self {
            store,
            words,
            quote_log,
            entries,
            quotes,
        };
        vocab.persist_assigned_ids();
        vocab
    }

    /// Legacy records without an id get one now and the collection is saved
    /// once, so the id stays the same on the next load.
    fn persist_assigned_ids(&mut self) {
        let assigned = self
            .entries
            .iter_mut()
            .map(Entry::ensure_id)
            .filter(|assigned| *assigned)
            .count();
        if assigned == 0 {
            return;
        }

        tracing::info!("Assigned ids to {} stored entries", assigned);
        self.applied_entries(());
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// First entry whose word matches; later duplicates are unreachable by word
    pub fn find_by_word(&self, word: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.matches_word(word))
    }

    pub fn select(&self, criteria: &Criteria) -> Vec<&Entry> {
        query::select(&self.entries, criteria)
    }

    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<Applied<Entry>, VocabError> {
        let entry = Entry::create(draft)?;
        tracing::debug!("Adding entry '{}' ({})", entry.word, entry.id);

        self.entries.push(entry.clone());
        Ok(self.applied_entries(entry))
    }

    /// Replace the fields of an entry, keeping its id and position
    pub fn update_entry(
        &mut self,
        id: &str,
        draft: EntryDraft,
    ) -> Result<Applied<Entry>, VocabError> {
        let index = self.index_of(id)?;
        let entry = draft.into_entry(id.to_string())?;
        tracing::debug!("Updating entry '{}' ({})", entry.word, entry.id);

        self.entries[index] = entry.clone();
        Ok(self.applied_entries(entry))
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<Applied<Entry>, VocabError> {
        let index = self.index_of(id)?;
        Ok(self.toggle_at(index))
    }

    pub fn toggle_favorite_by_word(&mut self, word: &str) -> Result<Applied<Entry>, VocabError> {
        let index = self.index_of_word(word)?;
        Ok(self.toggle_at(index))
    }

    pub fn delete_entry(&mut self, id: &str) -> Result<Applied<Entry>, VocabError> {
        let index = self.index_of(id)?;
        Ok(self.remove_at(index))
    }

    pub fn delete_by_word(&mut self, word: &str) -> Result<Applied<Entry>, VocabError> {
        let index = self.index_of_word(word)?;
        Ok(self.remove_at(index))
    }

    pub fn add_quote(
        &mut self,
        text: &str,
        author: Option<&str>,
    ) -> Result<Applied<Quote>, VocabError> {
        let quote = Quote::compose(text, author)?;
        self.quotes.push(quote.clone());
        Ok(self.applied_quotes(quote))
    }

    /// Remove the quote at a zero-based position
    pub fn delete_quote(&mut self, index: usize) -> Result<Applied<Quote>, VocabError> {
        if index >= self.quotes.len() {
            return Err(VocabError::NotFound(format!("quote #{}", index + 1)));
        }
        let quote = self.quotes.remove(index);
        Ok(self.applied_quotes(quote))
    }

    /// Replace the whole words collection with the entries in `payload`.
    ///
    /// Nothing changes unless every entry parses and validates.
    pub fn import_entries(&mut self, payload: &str) -> Result<Applied<usize>, VocabError> {
        let imported = parse_import(payload)?;
        let count = imported.len();
        tracing::info!("Importing {} entries (replacing {})", count, self.entries.len());

        self.entries = imported;
        Ok(self.applied_entries(count))
    }

    /// Pretty JSON array of all entries, the same shape `import_entries` accepts
    pub fn export_entries(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    fn index_of(&self, id: &str) -> Result<usize, VocabError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| VocabError::NotFound(format!("id '{id}'")))
    }

    fn index_of_word(&self, word: &str) -> Result<usize, VocabError> {
        self.entries
            .iter()
            .position(|e| e.matches_word(word))
            .ok_or_else(|| VocabError::NotFound(format!("word '{}'", word.trim())))
    }

    fn toggle_at(&mut self, index: usize) -> Applied<Entry> {
        let entry = &mut self.entries[index];
        entry.favorite = !entry.favorite;
        tracing::debug!("Favorite on '{}' is now {}", entry.word, entry.favorite);

        let entry = entry.clone();
        self.applied_entries(entry)
    }

    fn remove_at(&mut self, index: usize) -> Applied<Entry> {
        let entry = self.entries.remove(index);
        tracing::debug!("Deleted entry '{}' ({})", entry.word, entry.id);
        self.applied_entries(entry)
    }

    fn applied_entries<T>(&mut self, value: T) -> Applied<T> {
        let persisted = self.words.save(&mut self.store, &self.entries);
        if let Err(e) = &persisted {
            tracing::warn!("Words kept in memory only: {}", e);
        }
        Applied { value, persisted }
    }

    fn applied_quotes<T>(&mut self, value: T) -> Applied<T> {
        let persisted = self.quote_log.save(&mut self.store, &self.quotes);
        if let Err(e) = &persisted {
            tracing::warn!("Quotes kept in memory only: {}", e);
        }
        Applied { value, persisted }
    }
}

/// Strict parse of an import document: a JSON array of valid, uniquely identified entries
pub fn parse_import(payload: &str) -> Result<Vec<Entry>, VocabError> {
    let document: Value = serde_json::from_str(payload)
        .map_err(|e| VocabError::ImportFormat(format!("invalid JSON: {e}")))?;

    let Value::Array(items) = document else {
        return Err(VocabError::ImportFormat(format!(
            "top-level value must be an array, found {}",
            json_kind(&document)
        )));
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut seen_ids = HashSet::new();

    for (i, item) in items.into_iter().enumerate() {
        let mut entry: Entry = serde_json::from_value(item)
            .map_err(|e| VocabError::ImportFormat(format!("invalid entry at index {i}: {e}")))?;
        entry.ensure_id();
        entry
            .validate()
            .map_err(|e| VocabError::ImportFormat(format!("invalid entry at index {i}: {e}")))?;
        if !seen_ids.insert(entry.id.clone()) {
            return Err(VocabError::ImportFormat(format!(
                "duplicate id '{}' at index {i}",
                entry.id
            )));
        }
        entries.push(entry);
    }

    Ok(entries)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
