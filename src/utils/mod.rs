//! Utils module - Shared helpers used by the extension traits and settings

/// Argument validation shared by every extension
pub mod validation;

/// Environment variable overrides
pub mod input;
