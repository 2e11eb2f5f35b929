//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides HTTP endpoints for document chunking and health checks
//! via Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;
