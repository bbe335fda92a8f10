//! Stateful composition of parser, palette and link codec

/// Query-string layout of shared links
pub mod link;
/// Current chart and colour overrides
pub mod pattern;

pub use link::{LinkState, parse_link};
pub use pattern::{PatternState, StateChange};
