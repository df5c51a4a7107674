use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use vocamuse_config::Config;

use crate::cli::Cli;

/// Environment defaults, then the config file, then command line flags
pub fn load(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_file(path)?,
        None => Config::new(),
    };

    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    if let Some(format) = cli.log_format {
        config.log.format = format.into();
    }

    Ok(config)
}

/// Read a config file over the environment defaults. Keys the file leaves out
/// keep their environment value.
pub fn load_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)
        .with_context(|| format!("failed to open config {}", path.display()))?;
    let overlay: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config {}", path.display()))?;

    let mut base = serde_json::to_value(Config::new())?;
    merge(&mut base, overlay);

    serde_json::from_value(base).with_context(|| format!("invalid config {}", path.display()))
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
