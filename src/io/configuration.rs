//! Codec constants and runtime configuration defaults

/// Pattern shown when a link carries no stitches
pub const DEFAULT_PATTERN: &str =
    "A A A B A A A B\nA A B A A A B A\nA B A A A B A A\nB A A A B A A A\n";

// Query layout of a shared link
/// Query parameter holding the encoded pattern text
pub const STITCHES_PARAM: &str = "stitches";
/// Prefix of the query parameters holding per-symbol colour overrides
pub const COLOR_PARAM_PREFIX: &str = "color_";

/// Gzip level used for link encoding (links favour size over speed)
pub const COMPRESSION_LEVEL: u32 = 9;

// Safety limit so a hostile link cannot inflate into an unbounded allocation
/// Maximum number of bytes a decoded pattern may occupy
pub const MAX_DECODED_BYTES: usize = 1024 * 1024;

// Compressed base64 noise has many symbols and no dominant one
/// Inputs with at most this many distinct characters are read as literal patterns
pub const LITERAL_MAX_DISTINCT_CHARS: usize = 12;
/// Inputs whose most common character reaches this share are read as literal patterns
pub const LITERAL_MAX_FREQUENCY: f64 = 0.1;

/// Greyscale range covered by the default palette
pub const PALETTE_SPAN: f64 = 128.0;
/// Darkest channel value of the default palette
pub const PALETTE_FLOOR: f64 = 64.0;

// Rendering settings
/// Default side length of one stitch in pixels
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Largest accepted stitch side length in pixels
pub const MAX_CELL_SIZE: u32 = 256;
/// Largest accepted number of chart repeats along one axis
pub const MAX_REPEAT: u32 = 32;
/// Largest accepted rendered image area in pixels
pub const MAX_RENDER_PIXELS: u64 = 64 * 1024 * 1024;

// File handling
/// Extension of plain-text pattern files
pub const PATTERN_EXTENSION: &str = "txt";
/// Extension of rendered chart images
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
