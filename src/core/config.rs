//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.marquee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Credentials and endpoints are injected from here — nothing network-facing
//! is a hardcoded literal.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::catalog::ImageConfig;
use crate::catalog::tmdb::DEFAULT_TMDB_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ImagesConfig {
    pub base_url: Option<String>,
    pub backdrop_size: Option<String>,
    pub poster_size: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://www.themoviedb.org/t/p/";
pub const DEFAULT_BACKDROP_SIZE: &str = "w533_and_h300_bestv2";
pub const DEFAULT_POSTER_SIZE: &str = "w220_and_h330_face";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Required to build the client; checked at startup, not here.
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub image_base_url: String,
    pub backdrop_size: String,
    pub poster_size: String,
}

impl ResolvedConfig {
    pub fn image_config(&self) -> ImageConfig {
        ImageConfig::new(
            self.image_base_url.clone(),
            self.backdrop_size.clone(),
            self.poster_size.clone(),
        )
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `~/.marquee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MarqueeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MarqueeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MarqueeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Marquee Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [tmdb]
# api_key = "..."                    # Or set TMDB_API_KEY env var
# base_url = "https://api.themoviedb.org/3"
# language = "en-US"

# [images]
# base_url = "https://www.themoviedb.org/t/p/"
# backdrop_size = "w533_and_h300_bestv2"
# poster_size = "w220_and_h330_face"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &MarqueeConfig) -> ResolvedConfig {
    // API key: env → config
    let api_key = std::env::var("TMDB_API_KEY")
        .ok()
        .or_else(|| config.tmdb.api_key.clone());

    // Base URL: env → config → default
    let base_url = std::env::var("TMDB_BASE_URL")
        .ok()
        .or_else(|| config.tmdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());

    ResolvedConfig {
        api_key,
        base_url,
        language: config
            .tmdb
            .language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        image_base_url: config
            .images
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
        backdrop_size: config
            .images
            .backdrop_size
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKDROP_SIZE.to_string()),
        poster_size: config
            .images
            .poster_size
            .clone()
            .unwrap_or_else(|| DEFAULT_POSTER_SIZE.to_string()),
    }
}
