use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from("vocamuse-data")
}

fn default_entries_key() -> String {
    "vocaMuseWords".to_string()
}

fn default_quotes_key() -> String {
    "vocaMuseQuotes".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Key of the words collection
    #[serde(default = "default_entries_key")]
    pub entries_key: String,
    /// Key of the quotes collection
    #[serde(default = "default_quotes_key")]
    pub quotes_key: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("VOCAMUSE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self {
            data_dir,
            ..Self::default()
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            entries_key: default_entries_key(),
            quotes_key: default_quotes_key(),
        }
    }
}
