//! CLI command implementations.

pub mod clean;
pub mod process;
pub mod validate;

use anyhow::{Context, Result};
use feature_config::{default_config, load_config, AppConfig};
use std::path::Path;

/// Load the configuration file, falling back to defaults when the
/// default path does not exist.
fn load_or_default(config_path: &Path) -> Result<AppConfig> {
    if config_path.exists() {
        load_config(config_path).context("Failed to load configuration")
    } else {
        Ok(default_config())
    }
}
