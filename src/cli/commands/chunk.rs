//! Chunk command - chunk a local layout document

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::layout::{extract_images, extract_words, LayoutDocument};
use crate::core::services::Services;
use crate::core::types::{ChunkStats, SemanticChunk};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// Path to a layout document JSON file
    pub file: PathBuf,

    /// Chunk length budget in characters (overrides config)
    #[arg(long, short = 'm')]
    pub max_chars: Option<usize>,

    /// Print full chunk content instead of a preview
    #[arg(long)]
    pub full: bool,
}

/// Chunk command response
#[derive(Debug, Serialize)]
pub struct ChunkOutput {
    pub file: String,
    pub pages_processed: usize,
    pub words_extracted: usize,
    pub images_extracted: usize,
    pub chunks_created: usize,
    pub chunks: Vec<SemanticChunk>,
}

/// Execute the chunk command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(&args.file)
        .map_err(|e| format!("Failed to read {}: {e}", args.file.display()))?;
    let document: LayoutDocument = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse {}: {e}", args.file.display()))?;

    let words = extract_words(&document);
    let images = extract_images(&document);

    if words.is_empty() && images.is_empty() {
        return Err(format!(
            "No words or images extracted from {}",
            args.file.display()
        )
        .into());
    }

    let pipeline = services.create_pipeline(args.max_chars)?;
    let (chunks, stats) = pipeline.process(words, images);

    let output = ChunkOutput {
        file: args.file.display().to_string(),
        pages_processed: stats.pages_processed,
        words_extracted: stats.words_extracted,
        images_extracted: stats.images_extracted,
        chunks_created: stats.chunks_created,
        chunks,
    };

    match format {
        OutputFormat::Human => print_human(&output, &stats, args.full),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human(output: &ChunkOutput, stats: &ChunkStats, full: bool) {
    println!(
        "Chunked {} into {} chunk(s) across {} page(s) in {}ms\n",
        colors::label(&output.file),
        colors::number(&output.chunks_created.to_string()),
        colors::number(&output.pages_processed.to_string()),
        stats.duration_ms
    );

    for chunk in &output.chunks {
        let marker = if chunk.is_image {
            format!(" {}", colors::image_marker("[image]"))
        } else {
            String::new()
        };

        println!(
            "[{}] page {} ({:.0},{:.0})..({:.0},{:.0}){}",
            colors::rank(&chunk.chunk_index.to_string()),
            colors::page(&chunk.page_number.to_string()),
            chunk.x_min,
            chunk.y_min,
            chunk.x_max,
            chunk.y_max,
            marker
        );

        let content = if full {
            chunk.content.clone()
        } else {
            preview(&chunk.content, 100)
        };
        println!("    {}\n", colors::dim(&content));
    }
}

/// Truncate content to a character budget for display
fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{truncated}...")
}
