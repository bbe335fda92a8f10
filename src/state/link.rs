//! Query-string layout of a shared chart link
//!
//! A link carries the encoded pattern under `stitches` and one `color_<symbol>`
//! entry per colour override. Unrelated query parameters are left alone.

use std::str::FromStr;

use log::{debug, warn};
use url::{Url, form_urlencoded};

use crate::chart::palette::{ColorMap, HexColor};
use crate::chart::symbol::StitchSymbol;
use crate::codec::link::encode;
use crate::io::configuration::{COLOR_PARAM_PREFIX, STITCHES_PARAM};
use crate::io::error::{ChartError, Result};
use crate::state::pattern::{PatternState, StateChange};

/// Persisted chart state as stored in a link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkState {
    stitches: Option<String>,
    colors: ColorMap,
    applied_revision: Option<u64>,
}

/// Parse link text into a URL
///
/// # Errors
///
/// Returns [`ChartError::InvalidLink`] if the text is not an absolute URL
pub fn parse_link(text: &str) -> Result<Url> {
    Url::parse(text).map_err(|source| ChartError::InvalidLink {
        url: text.to_string(),
        source,
    })
}

fn is_owned_key(key: &str) -> bool {
    key == STITCHES_PARAM || key.starts_with(COLOR_PARAM_PREFIX)
}

impl LinkState {
    /// Read the state held by a URL
    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or_default())
    }

    /// Read the state held by a raw query string (without the leading `?`)
    ///
    /// Colour entries naming more than one symbol or holding something other
    /// than a hex colour are skipped.
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key == STITCHES_PARAM {
                if state.stitches.is_none() {
                    state.stitches = Some(value.into_owned());
                }
                continue;
            }
            let Some(name) = key.strip_prefix(COLOR_PARAM_PREFIX) else {
                continue;
            };
            let Some(symbol) = StitchSymbol::from_single(name) else {
                warn!("skipping colour entry '{key}': not a single stitch symbol");
                continue;
            };
            match HexColor::from_str(&value) {
                Ok(color) => {
                    state.colors.insert(symbol, color);
                }
                Err(err) => warn!("skipping colour entry '{key}': {err}"),
            }
        }
        state
    }

    /// Complete link for a pattern state
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern text cannot be encoded
    pub fn capture(state: &PatternState) -> Result<Self> {
        Ok(Self {
            stitches: Some(encode(state.text())?),
            colors: state.custom_colors().clone(),
            applied_revision: Some(state.revision()),
        })
    }

    /// Stored pattern value, encoded or literal
    pub fn stitches(&self) -> Option<&str> {
        self.stitches.as_deref()
    }

    /// Stored colour overrides
    pub const fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// Revision of the last pattern text written, if any
    pub const fn applied_revision(&self) -> Option<u64> {
        self.applied_revision
    }

    /// Store a literal, unencoded pattern value
    pub fn set_literal_stitches(&mut self, text: impl Into<String>) {
        self.stitches = Some(text.into());
    }

    /// Write a state change into the link
    ///
    /// Pattern text older than the last applied revision is stale and ignored,
    /// so the newest edit wins regardless of completion order.
    /// Returns whether the link changed.
    ///
    /// # Errors
    ///
    /// Returns an error if new pattern text cannot be encoded
    pub fn apply(&mut self, change: &StateChange) -> Result<bool> {
        match change {
            StateChange::Stitches { revision, text } => {
                if self.applied_revision.is_some_and(|last| *revision < last) {
                    debug!(
                        "ignoring stale pattern revision {revision} (link holds {:?})",
                        self.applied_revision
                    );
                    return Ok(false);
                }
                self.stitches = Some(encode(text)?);
                self.applied_revision = Some(*revision);
            }
            StateChange::ColorsSet(entries) => {
                self.colors.extend(entries.iter().copied());
            }
            StateChange::ColorRemoved(symbol) => {
                self.colors.remove(symbol);
            }
            StateChange::ColorsCleared => self.colors.clear(),
        }
        Ok(true)
    }

    /// Write this state into `base`, replacing only the parameters it owns
    pub fn to_url(&self, base: &Url) -> Url {
        let kept: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(key, _)| !is_owned_key(key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = base.clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &kept {
                pairs.append_pair(key, value);
            }
            if let Some(stitches) = &self.stitches {
                pairs.append_pair(STITCHES_PARAM, stitches);
            }
            for (symbol, color) in &self.colors {
                pairs.append_pair(&format!("{COLOR_PARAM_PREFIX}{symbol}"), &color.to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        url
    }
}
