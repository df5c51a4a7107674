use std::env;

use serde::{Deserialize, Serialize};

fn default_history_limit() -> usize {
    100
}

fn default_commit_pause_ms() -> u64 {
    600
}

fn default_prompt() -> String {
    "> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TerminalConfig {
    /// Submitted lines kept for previous/next navigation
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Cosmetic pause between a commit message and the next screen
    #[serde(default = "default_commit_pause_ms")]
    pub commit_pause_ms: u64,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl TerminalConfig {
    pub fn new() -> Self {
        let history_limit = env::var("VOCAMUSE_HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_history_limit);

        let commit_pause_ms = env::var("VOCAMUSE_COMMIT_PAUSE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_commit_pause_ms);

        Self {
            history_limit,
            commit_pause_ms,
            prompt: default_prompt(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            commit_pause_ms: default_commit_pause_ms(),
            prompt: default_prompt(),
        }
    }
}
