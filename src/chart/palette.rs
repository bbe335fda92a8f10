//! Deterministic default palette and hex colour values

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::chart::parser::StitchMatrix;
use crate::chart::symbol::StitchSymbol;
use crate::io::configuration::{PALETTE_FLOOR, PALETTE_SPAN};

/// An opaque RGB colour, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// Colour from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Grey with the same value on every channel
    pub const fn grey(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Opaque RGBA bytes for image export
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Rejected colour text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    /// The text that is not a hex colour
    pub input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a hex colour (expected #rrggbb or #rgb)",
            self.input
        )
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for HexColor {
    type Err = ColorParseError;

    /// Accepts `#rrggbb` and the shorthand `#rgb`, in either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(err)?;

        match nibbles.as_slice() {
            &[r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => {
                Ok(Self::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
            }
            _ => Err(err()),
        }
    }
}

/// Colour assignment per stitch symbol, enumerated in symbol order
pub type ColorMap = BTreeMap<StitchSymbol, HexColor>;

/// Greyscale colour for the symbol at `index` of `count` sorted symbols
///
/// Spreads from a quarter to three quarters brightness, darker first.
pub fn default_shade(index: usize, count: usize) -> HexColor {
    let value = ((index as f64 / count as f64) * PALETTE_SPAN + PALETTE_FLOOR).floor();
    HexColor::grey(value as u8)
}

/// Derive the default colour of every distinct symbol in a matrix
///
/// Colours depend only on the set of symbols, never on where they first appear.
pub fn derive_palette(matrix: &StitchMatrix) -> ColorMap {
    let symbols = matrix.distinct_symbols();
    let count = symbols.len();
    symbols
        .into_iter()
        .enumerate()
        .map(|(index, symbol)| (symbol, default_shade(index, count)))
        .collect()
}
