//! Current chart, colour overrides and the changes they produce

use log::debug;

use crate::chart::palette::{ColorMap, HexColor, derive_palette};
use crate::chart::parser::{StitchMatrix, parse_chart};
use crate::chart::symbol::StitchSymbol;
use crate::codec::link::decode_or_default;
use crate::state::link::LinkState;

/// What a persistence layer must write after a state mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Replace the stored pattern text
    Stitches {
        /// Revision of the state that produced this text
        revision: u64,
        /// Full pattern text
        text: String,
    },
    /// Store these colour overrides
    ColorsSet(Vec<(StitchSymbol, HexColor)>),
    /// Drop the override for one symbol
    ColorRemoved(StitchSymbol),
    /// Drop every colour override
    ColorsCleared,
}

/// Owns the parsed chart and user colour choices
///
/// The matrix and default palette are rederived from the text on every edit;
/// only the custom overrides change incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternState {
    text: String,
    matrix: StitchMatrix,
    defaults: ColorMap,
    custom: ColorMap,
    revision: u64,
}

impl Default for PatternState {
    fn default() -> Self {
        Self::new("")
    }
}

impl PatternState {
    /// State for the given pattern text with no overrides
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let matrix = parse_chart(&text);
        let defaults = derive_palette(&matrix);
        Self {
            text,
            matrix,
            defaults,
            custom: ColorMap::new(),
            revision: 0,
        }
    }

    /// Restore state from a stored link
    pub fn from_link(link: &LinkState) -> Self {
        let mut state = Self::new(decode_or_default(link.stitches()));
        state.custom = link.colors().clone();
        state.revision = link.applied_revision().unwrap_or(0);
        state
    }

    /// Pattern text as entered
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed chart
    pub const fn matrix(&self) -> &StitchMatrix {
        &self.matrix
    }

    /// Palette derived from the chart alone
    pub const fn default_colors(&self) -> &ColorMap {
        &self.defaults
    }

    /// User colour overrides
    pub const fn custom_colors(&self) -> &ColorMap {
        &self.custom
    }

    /// Number of text edits applied so far
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the pattern text and reparse
    pub fn set_text(&mut self, text: impl Into<String>) -> StateChange {
        self.text = text.into();
        self.matrix = parse_chart(&self.text);
        self.defaults = derive_palette(&self.matrix);
        self.revision += 1;
        debug!(
            "pattern revision {}: {} rows, {} symbols",
            self.revision,
            self.matrix.height(),
            self.defaults.len()
        );
        StateChange::Stitches {
            revision: self.revision,
            text: self.text.clone(),
        }
    }

    /// Override the colour of one symbol
    pub fn set_color(&mut self, symbol: StitchSymbol, color: HexColor) -> StateChange {
        self.custom.insert(symbol, color);
        StateChange::ColorsSet(vec![(symbol, color)])
    }

    /// Return one symbol to its default colour
    pub fn remove_color(&mut self, symbol: StitchSymbol) -> StateChange {
        self.custom.remove(&symbol);
        StateChange::ColorRemoved(symbol)
    }

    /// Drop all colour overrides
    pub fn reset_colors(&mut self) -> StateChange {
        self.custom.clear();
        StateChange::ColorsCleared
    }

    /// Exchange the effective colours of two symbols
    ///
    /// Both colours become explicit overrides so the swap survives a reload
    /// even where one side was a default. Returns `None` when the symbols are
    /// equal or either has no colour.
    pub fn swap_colors(&mut self, first: StitchSymbol, second: StitchSymbol) -> Option<StateChange> {
        if first == second {
            return None;
        }
        let first_color = self.effective_color(first)?;
        let second_color = self.effective_color(second)?;

        self.custom.insert(first, second_color);
        self.custom.insert(second, first_color);
        Some(StateChange::ColorsSet(vec![
            (first, second_color),
            (second, first_color),
        ]))
    }

    /// Override if present, otherwise the default colour
    pub fn effective_color(&self, symbol: StitchSymbol) -> Option<HexColor> {
        self.custom
            .get(&symbol)
            .or_else(|| self.defaults.get(&symbol))
            .copied()
    }

    /// Effective colour of every symbol in the chart
    pub fn effective_colors(&self) -> ColorMap {
        self.defaults
            .iter()
            .map(|(&symbol, &default)| {
                (symbol, self.custom.get(&symbol).copied().unwrap_or(default))
            })
            .collect()
    }
}
