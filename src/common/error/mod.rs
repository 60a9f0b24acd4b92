//! Unified error types for sheetdeck.
//!
//! This module provides a single error type shared by the content model,
//! the deck builder and the table summary, presenting a consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
