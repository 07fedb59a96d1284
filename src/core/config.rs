//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.aurora/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::highlight::HighlightOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuroraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub learner_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub api_token: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HighlightConfig {
    pub max_highlights: Option<usize>,
    pub preferred_length: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://tutor.brainink.app/api";
pub const DEFAULT_LEARNER_ID: &str = "guest";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub learner_id: String,
    pub highlight: HighlightOptions,
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

/// Returns the path to `~/.aurora/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".aurora").join("config.toml"))
}

/// Load config from `~/.aurora/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AuroraConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AuroraConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AuroraConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AuroraConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: AuroraConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Aurora Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# learner_id = "guest"

# [backend]
# base_url = "https://tutor.brainink.app/api"
# api_token = "tok-..."              # Or set AURORA_API_TOKEN env var

# [highlight]
# max_highlights = 4                 # Cap on emphasized spans per block
# preferred_length = 140             # Longer sentences get bisected
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the CLI flag (None = not specified).
pub fn resolve(config: &AuroraConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("AURORA_BASE_URL").ok())
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // API token: env → config (no default — unauthenticated dev setups exist)
    let api_token = std::env::var("AURORA_API_TOKEN")
        .ok()
        .or_else(|| config.backend.api_token.clone());

    // Learner: env → config → default
    let learner_id = std::env::var("AURORA_LEARNER_ID")
        .ok()
        .or_else(|| config.general.learner_id.clone())
        .unwrap_or_else(|| DEFAULT_LEARNER_ID.to_string());

    let defaults = HighlightOptions::default();
    let highlight = HighlightOptions {
        max_highlights: config.highlight.max_highlights.unwrap_or(defaults.max_highlights),
        preferred_length: config
            .highlight
            .preferred_length
            .unwrap_or(defaults.preferred_length),
        tone: defaults.tone,
    };

    ResolvedConfig {
        base_url,
        api_token,
        learner_id,
        highlight,
    }
}
