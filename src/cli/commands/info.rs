//! Info command - show version and server information

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed information
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Server information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub state_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Get state directory from XDG
    let xdg = crate::core::xdg::XdgDirs::new();
    let state_dir = xdg.state_dir.to_string_lossy().into_owned();

    let max_chars = if args.detailed {
        Some(services.config.chunking.max_chars)
    } else {
        None
    };

    let info = InfoResponse {
        name: "pagemill".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        state_dir,
        max_chars,
    };

    match format {
        OutputFormat::Human => {
            println!("pagemill {}", info.version);
            println!("State: {}", info.state_dir);
            if let Some(max_chars) = info.max_chars {
                println!("Max chars: {max_chars}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
