//! Configuration file loading

use super::schema::ProjectConfig;
use crate::error::{Error, ErrorCode, Result};
use std::path::Path;

/// Default configuration file name, relative to the project root
pub const CONFIG_FILE: &str = "build-config.json";

/// Load and parse a `build-config.json`
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    if !path.is_file() {
        return Err(Error::config_not_found(path)
            .with_suggestion(format!("Make sure {} exists in the project root", CONFIG_FILE)));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

    let config: ProjectConfig = serde_json::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse {}: {}", path.display(), e),
        )
        .with_suggestion("Check build-config.json for JSON syntax errors")
    })?;

    tracing::debug!(path = %path.display(), app = %config.app_name, "Configuration loaded");
    Ok(config)
}
