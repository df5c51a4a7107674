use serde::{Deserialize, Serialize};

use self::log::LogConfig;
use self::storage::StorageConfig;
use self::terminal::TerminalConfig;

pub mod log;
pub mod storage;
pub mod terminal;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub terminal: TerminalConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            storage: StorageConfig::new(),
            terminal: TerminalConfig::new(),
            log: LogConfig::new(),
        }
    }
}
