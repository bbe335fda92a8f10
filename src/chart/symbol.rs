//! Stitch symbols and the separator rules shared by the parser and link layout

use std::cmp::Ordering;
use std::fmt;

/// One stitch of a chart: a single Unicode scalar value with no further meaning
///
/// Symbols order by their UTF-16 code units so palettes line up with charts
/// shared from browsers, where astral characters sort before the top of the
/// Basic Multilingual Plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StitchSymbol(char);

impl StitchSymbol {
    /// Wrap a character as a stitch symbol
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    /// The underlying character
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Parse text that must hold exactly one symbol
    pub fn from_single(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(Self(ch)),
            _ => None,
        }
    }

    /// Whether this symbol is dropped as blank when parsing a row
    pub fn is_blank(self) -> bool {
        is_blank(self.0)
    }
}

impl Ord for StitchSymbol {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs_units = [0u16; 2];
        let mut rhs_units = [0u16; 2];
        let lhs: &[u16] = self.0.encode_utf16(&mut lhs_units);
        let rhs: &[u16] = other.0.encode_utf16(&mut rhs_units);
        lhs.cmp(rhs)
    }
}

impl PartialOrd for StitchSymbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StitchSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for StitchSymbol {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

/// Characters removed by trimming: Unicode white space plus the byte order mark,
/// excluding NEXT LINE
pub fn is_blank(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}
