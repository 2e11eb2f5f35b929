//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, CLI, etc).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **layout**: Layout document model and item extraction
//! - **chunker**: Line grouping and chunk construction pipeline
//! - **fetch**: Remote layout-document retrieval
//! - **services**: Unified service container

pub mod chunker;
pub mod config;
pub mod error;
pub mod fetch;
pub mod layout;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PagemillError, Result};
pub use services::Services;
