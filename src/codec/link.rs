//! Pattern text compression for shareable links
//!
//! Text is compressed into a gzip member and wrapped in standard base64.
//! The host escapes the result when placing it in a URL.

use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::{debug, warn};

use crate::codec::DecodeError;
use crate::codec::heuristic::{Classification, classify};
use crate::io::configuration::{COMPRESSION_LEVEL, DEFAULT_PATTERN, MAX_DECODED_BYTES};
use crate::io::error::{ChartError, Result};

/// Compress pattern text into its link form
///
/// # Errors
///
/// Returns [`ChartError::Encode`] if the compressor fails
pub fn encode(text: &str) -> Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(COMPRESSION_LEVEL));
    encoder
        .write_all(text.as_bytes())
        .map_err(|source| ChartError::Encode { source })?;
    let compressed = encoder
        .finish()
        .map_err(|source| ChartError::Encode { source })?;
    let encoded = general_purpose::STANDARD.encode(&compressed);
    debug!(
        "encoded {} bytes of pattern text into {} characters",
        text.len(),
        encoded.len()
    );
    Ok(encoded)
}

/// Reverse [`encode`]
///
/// # Errors
///
/// Returns a [`DecodeError`] if:
/// - The text is not valid base64
/// - The bytes are not a complete gzip stream
/// - The decompressed text exceeds [`MAX_DECODED_BYTES`]
/// - The decompressed bytes are not UTF-8
pub fn decode(encoded: &str) -> std::result::Result<String, DecodeError> {
    let compressed = general_purpose::STANDARD
        .decode(encoded)
        .map_err(DecodeError::InvalidAlphabet)?;
    let bytes = decompress_limited(&compressed, MAX_DECODED_BYTES)?;
    String::from_utf8(bytes).map_err(DecodeError::InvalidUtf8)
}

fn decompress_limited(bytes: &[u8], limit: usize) -> std::result::Result<Vec<u8>, DecodeError> {
    let decoder = GzDecoder::new(bytes);

    // One byte past the limit is enough to tell an oversized pattern apart
    let mut out = Vec::new();
    decoder
        .take(limit as u64 + 1)
        .read_to_end(&mut out)
        .map_err(DecodeError::InvalidStream)?;

    if out.len() > limit {
        return Err(DecodeError::TooLarge { limit });
    }
    Ok(out)
}

/// How a link value was turned into pattern text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No value was given; the built-in pattern applies
    Default,
    /// The value decoded cleanly
    Decoded(String),
    /// The value did not decode and reads as a literal chart
    Literal(String),
    /// The value did not decode and looks like damaged compressed data
    Unrecoverable,
}

impl LoadOutcome {
    /// Pattern text for this outcome (empty when unrecoverable)
    pub fn into_text(self) -> String {
        match self {
            Self::Default => DEFAULT_PATTERN.to_string(),
            Self::Decoded(text) | Self::Literal(text) => text,
            Self::Unrecoverable => String::new(),
        }
    }
}

/// Interpret an untrusted link value as pattern text
///
/// Tries [`decode`] first; on failure, [`classify`] decides between a literal
/// chart and unrecoverable noise.
pub fn load(encoded: Option<&str>) -> LoadOutcome {
    let Some(encoded) = encoded.filter(|value| !value.is_empty()) else {
        return LoadOutcome::Default;
    };

    match decode(encoded) {
        Ok(text) => LoadOutcome::Decoded(text),
        Err(err) => match classify(encoded) {
            Classification::Literal => {
                debug!("link value did not decode ({err}); using it as a literal chart");
                LoadOutcome::Literal(encoded.to_string())
            }
            Classification::Corrupted => {
                warn!("link value looks like a damaged encoded chart: {err}");
                LoadOutcome::Unrecoverable
            }
        },
    }
}

/// Total form of [`load`]: always yields pattern text, possibly empty
pub fn decode_or_default(encoded: Option<&str>) -> String {
    load(encoded).into_text()
}
