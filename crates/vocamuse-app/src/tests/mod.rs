use std::io::Cursor;
use std::path::Path;

use vocamuse_config::Config;

use crate::cli::Commands;
use crate::commands;

mod commands_tests;

fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.data_dir = dir.to_path_buf();
    config
}

/// Run one command with `answer` on stdin, returning what it printed
fn run(config: &Config, command: Commands, answer: &str) -> anyhow::Result<String> {
    let mut input = Cursor::new(answer.as_bytes().to_vec());
    let mut out = Vec::new();
    commands::run(command, config, &mut input, &mut out)?;
    Ok(String::from_utf8(out)?)
}
