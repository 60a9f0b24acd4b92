//! Common types and utilities shared across the crate.
//!
//! This module provides the error type, color and length primitives used by
//! both the content model and the presentation model.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use style::{Length, RGBColor};
