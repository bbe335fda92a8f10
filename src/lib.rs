//! Plain-text knitting colour-work charts with shareable compressed links
//!
//! Chart text is parsed into a stitch matrix, coloured by a deterministic
//! greyscale palette with optional per-symbol overrides, and persisted
//! entirely in a link: the pattern as compressed base64, each override as its
//! own query parameter.

#![forbid(unsafe_code)]

/// Grid parsing, stitch symbols and default palettes
pub mod chart;
/// Link encoding of pattern text and tolerant decoding of untrusted values
pub mod codec;
/// Input/output operations and error handling
pub mod io;
/// Pattern state and persisted link layout
pub mod state;

pub use io::error::{ChartError, Result};
