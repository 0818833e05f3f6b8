pub mod schema;
pub mod watcher;

pub use schema::{Alignment, BarConfig, ComponentConfig, GlobalConfig};
pub use watcher::ConfigWatcher;

use sbar_core::{BarError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `BarConfig::default()` if
/// the file doesn't exist so the bar always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<BarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BarConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| BarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from a TOML string.
pub fn parse(raw: &str) -> Result<BarConfig> {
    toml::from_str(raw).map_err(|e| BarError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("sbar").join("sbar.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load("/definitely/not/here/sbar.toml").unwrap();
        assert_eq!(config.components.len(), BarConfig::default().components.len());
    }

    #[test]
    fn parse_error_is_config_error() {
        let err = parse("components = 3").unwrap_err();
        assert!(matches!(err, BarError::Config(_)));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        assert!(default_path().ends_with("sbar/sbar.toml"));
    }
}
