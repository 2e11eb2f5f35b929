//! Configuration management for the Pagemill service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{PagemillError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Chunking configuration
///
/// `max_chars` is the only tunable the chunking core consumes. The
/// remaining tolerances (line grouping, paragraph gap, image dedup,
/// sentence packing) are fixed constants of the design.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Chunk length budget in characters (not bytes!)
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

/// Document fetch configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub timeout_sec: u64,

    /// Maximum layout document size in bytes
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret required in the x-shared-secret header.
    /// Requests are unauthenticated when unset.
    #[serde(default)]
    pub shared_secret: Option<String>,
}

// Default value functions
fn default_max_chars() -> usize {
    200
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_max_document_bytes() -> usize {
    32 * 1024 * 1024
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_sec: default_fetch_timeout(),
            max_document_bytes: default_max_document_bytes(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shared_secret: None,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PagemillError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. PAGEMILL_CONFIG or PAGEMILL_CONFIG_FILE env var
    /// 2. XDG config file (~/.config/pagemill/config.toml)
    /// 3. Legacy ./pagemill.toml (for backward compatibility)
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PAGEMILL_CONFIG") {
            // Load from file if PAGEMILL_CONFIG is set (legacy)
            Self::from_file(config_path)?
        } else {
            // Try XDG config file
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("pagemill.toml").exists() {
                // Fall back to legacy location for backward compatibility
                Self::from_file("pagemill.toml")?
            } else {
                Self::default()
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Chunking configuration
        if let Ok(max_chars) = env::var("PAGEMILL_MAX_CHARS") {
            if let Ok(n) = max_chars.parse() {
                self.chunking.max_chars = n;
            }
        }

        // Fetch configuration
        if let Ok(timeout) = env::var("PAGEMILL_FETCH_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.fetch.timeout_sec = t;
            }
        }
        if let Ok(max_bytes) = env::var("PAGEMILL_MAX_DOCUMENT_BYTES") {
            if let Ok(n) = max_bytes.parse() {
                self.fetch.max_document_bytes = n;
            }
        }

        // Server configuration
        if let Ok(host) = env::var("PAGEMILL_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PAGEMILL_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(secret) = env::var("PAGEMILL_SHARED_SECRET") {
            if !secret.is_empty() {
                self.server.shared_secret = Some(secret);
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_chars == 0 {
            return Err(PagemillError::ConfigError(
                "max_chars must be non-zero".to_string(),
            ));
        }

        if self.fetch.timeout_sec == 0 {
            return Err(PagemillError::ConfigError(
                "Fetch timeout must be non-zero".to_string(),
            ));
        }

        if self.fetch.max_document_bytes == 0 {
            return Err(PagemillError::ConfigError(
                "Max document size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max chars: {} chars", self.chunking.max_chars);
        tracing::info!("  Fetch timeout: {}s", self.fetch.timeout_sec);
        tracing::info!(
            "  Max document size: {} bytes",
            self.fetch.max_document_bytes
        );
        tracing::info!("  Bind: {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  Shared secret: {}",
            if self.server.shared_secret.is_some() {
                "configured"
            } else {
                "disabled"
            }
        );
    }
}
