use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use multicomplete_core::{Dataset, Options};
use serde::Deserialize;

/// Contents of a config file: widget options plus a `[datasets]` table
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub options: Options,
    pub datasets: Dataset,
}

impl Config {
    pub fn parse(input: &str) -> Result<Self> {
        let config: Config = toml::from_str(input).context("invalid config")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&input).with_context(|| format!("in {}", path.display()))
    }
}
