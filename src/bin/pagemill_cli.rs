//! Pagemill CLI - Command-line interface for document chunking
//!
//! A direct command-line interface for Pagemill's chunking capabilities.
//! Use this for scripting, automation, or manual operations without the
//! HTTP server.
//!
//! # Examples
//!
//! ```bash
//! # Chunk a layout document
//! pagemill chunk-document layout.json
//!
//! # Tighter budget, JSON output
//! pagemill chunk-document layout.json --max-chars 120 --format json
//!
//! # Show configuration
//! pagemill show-config
//! ```

use clap::Parser;
use pagemill::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
