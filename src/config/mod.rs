// src/config/mod.rs
pub mod app;

pub use app::{
    AnthropicConfig, AppConfig, ArenaConfig, HttpConfig, SanityConfig, FALLBACK_VENUE_ID,
};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ImportError, Result};

pub const ENV_CONFIG_PATH: &str = "IMPORTER_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/importer.toml";

/// Load settings from an explicit TOML file.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path).map_err(|e| ImportError::Settings {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_settings(&content).map_err(|message| ImportError::Settings {
        path: path.display().to_string(),
        message,
    })
}

/// Load settings using env var + fallbacks:
/// 1) $IMPORTER_CONFIG_PATH (must exist)
/// 2) config/importer.toml
/// 3) built-in defaults
pub fn load_default() -> Result<AppConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(ImportError::Configuration(format!(
                "{ENV_CONFIG_PATH} points to non-existent path {}",
                pb.display()
            )));
        }
        return load_from(&pb);
    }
    let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
    if fallback.exists() {
        return load_from(&fallback);
    }
    Ok(AppConfig::default())
}

fn parse_settings(s: &str) -> std::result::Result<AppConfig, String> {
    toml::from_str(s).map_err(|e| e.to_string())
}
