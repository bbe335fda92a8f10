//! Free-form chart text to stitch matrix conversion
//!
//! Rows are separated by newlines. Within a row, commas and blank characters
//! separate stitches, and every remaining character is a stitch of its own, so
//! `"AABB"`, `"A,A,B,B"` and `"AA BB"` all describe the same four stitches.
//! Malformed input never fails: it degrades to fewer stitches or rows.

use std::collections::BTreeSet;

use ndarray::Array2;

use crate::chart::symbol::StitchSymbol;

/// Row separator of chart text
pub const ROW_SEPARATOR: char = '\n';
/// Explicit stitch separator within a row
pub const STITCH_SEPARATOR: char = ',';

/// Parsed chart: ordered rows of stitches, possibly ragged, never holding an empty row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StitchMatrix {
    rows: Vec<Vec<StitchSymbol>>,
}

impl StitchMatrix {
    /// Build a matrix from rows, dropping any that are empty
    pub fn from_rows(rows: Vec<Vec<StitchSymbol>>) -> Self {
        Self {
            rows: rows.into_iter().filter(|row| !row.is_empty()).collect(),
        }
    }

    /// Rows in chart order
    pub fn rows(&self) -> &[Vec<StitchSymbol>] {
        &self.rows
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row (0 for an empty chart)
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the chart has no rows
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stitch at a row and column, if that row reaches the column
    pub fn get(&self, row: usize, col: usize) -> Option<StitchSymbol> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Distinct symbols in sorted order
    pub fn distinct_symbols(&self) -> Vec<StitchSymbol> {
        self.rows
            .iter()
            .flatten()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rectangular view with short rows padded by `None` up to [`Self::width`]
    pub fn to_padded_array(&self) -> Array2<Option<StitchSymbol>> {
        Array2::from_shape_fn((self.height(), self.width()), |(row, col)| {
            self.get(row, col)
        })
    }
}

/// Parse chart text into a stitch matrix
pub fn parse_chart(text: &str) -> StitchMatrix {
    let rows = text.split(ROW_SEPARATOR).map(parse_row).collect();
    StitchMatrix::from_rows(rows)
}

fn parse_row(row: &str) -> Vec<StitchSymbol> {
    row.split(STITCH_SEPARATOR)
        .flat_map(str::chars)
        .map(StitchSymbol::new)
        .filter(|symbol| !symbol.is_blank())
        .collect()
}
