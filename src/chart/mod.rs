//! Chart text parsing and default colouring

/// Default palette derivation and colour values
pub mod palette;
/// Grid parser for free-form chart text
pub mod parser;
/// Stitch symbol type and blank-character rules
pub mod symbol;

pub use palette::{ColorMap, HexColor, derive_palette};
pub use parser::{StitchMatrix, parse_chart};
pub use symbol::StitchSymbol;
