//! Subcommands.

pub mod config;
pub mod process;
pub mod run;

use std::path::Path;

use darf_core::DarfConfig;
use tracing::debug;

/// Load the config from `path`, else from the default location, else defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<DarfConfig> {
    if let Some(path) = path {
        return Ok(DarfConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        return Ok(DarfConfig::from_file(&default_path)?);
    }

    Ok(DarfConfig::default())
}
