//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show all configuration including defaults
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub chunking: ChunkingConfig,
    pub fetch: FetchConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Serialize)]
pub struct ChunkingConfig {
    pub max_chars: usize,
}

#[derive(Debug, Serialize)]
pub struct FetchConfig {
    pub timeout_sec: u64,
    pub max_document_bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shared_secret: bool,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    // Get config file path from XDG
    let xdg = crate::core::xdg::XdgDirs::new();
    let config_file = xdg.config_file().to_string_lossy().into_owned();

    let response = ConfigResponse {
        config_file,
        chunking: ChunkingConfig {
            max_chars: config.chunking.max_chars,
        },
        fetch: FetchConfig {
            timeout_sec: config.fetch.timeout_sec,
            max_document_bytes: config.fetch.max_document_bytes,
        },
        server: ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            // Presence only; never print the secret itself
            shared_secret: config.server.shared_secret.is_some(),
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  chunking:");
            println!("    max_chars: {}", response.chunking.max_chars);
            println!("  fetch:");
            println!("    timeout_sec: {}", response.fetch.timeout_sec);
            println!(
                "    max_document_bytes: {}",
                response.fetch.max_document_bytes
            );
            println!("  server:");
            println!("    host: {}", response.server.host);
            println!("    port: {}", response.server.port);
            println!(
                "    shared_secret: {}",
                if response.server.shared_secret {
                    "configured"
                } else {
                    "disabled"
                }
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
