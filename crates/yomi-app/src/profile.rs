use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use yomi_config::Config;

/// Config from a JSON file, or defaults with environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: Config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}
