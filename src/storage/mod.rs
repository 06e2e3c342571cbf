//! Storage module - persisted defaults for the extension helpers

pub mod config;

pub use crate::Result;
