use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Key-value blob storage the collections are persisted into
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Atomic write: temp file, fsync, rename
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(key);
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &path).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })?;

        tracing::debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}

/// In-memory store, used by tests and as a scratch backend
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    read_only: bool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw blob, bypassing serialization
    pub fn with_blob(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }

    /// When set, every write fails as if the quota were exhausted
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::QuotaExceeded(key.to_string()));
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Outcome of reading a collection, keeping apart the reasons it may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    Present(Vec<T>),
    /// Nothing stored under the key
    Absent,
    /// Stored payload is not an array of the expected shape
    Malformed(String),
    /// The store itself failed to read
    Unreadable(String),
}

/// Parse a stored payload as a JSON array of `T`
pub fn parse_or_default<T: DeserializeOwned>(raw: Option<&str>) -> Loaded<T> {
    match raw {
        None => Loaded::Absent,
        Some(text) if text.trim().is_empty() => Loaded::Absent,
        Some(text) => match serde_json::from_str::<Vec<T>>(text) {
            Ok(items) => Loaded::Present(items),
            Err(e) => Loaded::Malformed(e.to_string()),
        },
    }
}

/// A named collection persisted as a whole under one storage key
#[derive(Debug, Clone)]
pub struct Collection<T> {
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn load_tagged<S: BlobStore + ?Sized>(&self, store: &S) -> Loaded<T> {
        match store.get(&self.key) {
            Ok(raw) => parse_or_default(raw.as_deref()),
            Err(e) => Loaded::Unreadable(e.to_string()),
        }
    }

    /// Never fails: absent, malformed or unreadable data loads as empty
    pub fn load<S: BlobStore + ?Sized>(&self, store: &S) -> Vec<T> {
        match self.load_tagged(store) {
            Loaded::Present(items) => {
                tracing::info!("Loaded {} items from '{}'", items.len(), self.key);
                items
            }
            Loaded::Absent => {
                tracing::debug!("No data under '{}', starting empty", self.key);
                Vec::new()
            }
            Loaded::Malformed(reason) => {
                tracing::warn!(
                    "Unexpected format under '{}', starting empty: {}",
                    self.key,
                    reason
                );
                Vec::new()
            }
            Loaded::Unreadable(reason) => {
                tracing::error!("Failed reading '{}', starting empty: {}", self.key, reason);
                Vec::new()
            }
        }
    }

    pub fn save<S>(&self, store: &mut S, items: &[T]) -> Result<(), StorageError>
    where
        S: BlobStore + ?Sized,
    {
        let payload = serde_json::to_string(items)?;
        store.set(&self.key, &payload)?;
        tracing::debug!("Persisted {} items to '{}'", items.len(), self.key);
        Ok(())
    }
}
