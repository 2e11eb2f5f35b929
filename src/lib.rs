//! Pagemill - Layout-Aware Document Chunking Service
//!
//! Converts page-structured documents (words and images with
//! spatial coordinates) into an ordered sequence of semantically
//! coherent chunks for retrieval/embedding pipelines.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - layout (document model, word/image extraction)
//!   - chunker (lines, heuristics, accumulation, splitting,
//!     image chunks, reading-order merge)
//!   - fetch (remote layout documents)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, error mapping
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - chunk-document, show-config, get-server-info
//!
//! # Key Features
//!
//! - Layout-aware chunking (lines, bullets, paragraph gaps,
//!   sentence boundaries, length budget)
//! - Deterministic global reading order across pages
//! - Image deduplication and per-image chunks
//! - REST API with shared-secret authentication
//! - Structured logging throughout

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::chunker::ChunkingPipeline;
pub use core::config::Config;
pub use core::error::{PagemillError, Result};
pub use core::layout::{extract_images, extract_words, LayoutDocument};
pub use core::services::Services;
pub use core::types::*;
