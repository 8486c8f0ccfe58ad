//! Configuration loading from a TOML file.
//!
//! Only read when `--config` is given; the built-in defaults produce the
//! canonical table. Nothing here can change the test data itself.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use cmplxdiv_core::OutputSettings;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputSettings,
}

/// Load config from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(p) = path else {
        return Ok(Config::default());
    };

    let content =
        std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
    Ok(config)
}
