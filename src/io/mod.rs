//! Input/output: errors, configuration, CLI, rendering, progress and logging

/// Command-line interface and batch rendering
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of charts
pub mod image;
/// Logger installation for the binary
pub mod logging;
/// Batch progress display
pub mod progress;
