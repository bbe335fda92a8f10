//! Tests for codec constants and configuration defaults

#[cfg(test)]
mod tests {
    use stitchlink::io::configuration::{
        COLOR_PARAM_PREFIX, DEFAULT_CELL_SIZE, DEFAULT_PATTERN, LITERAL_MAX_DISTINCT_CHARS,
        LITERAL_MAX_FREQUENCY, MAX_CELL_SIZE, MAX_DECODED_BYTES, OUTPUT_EXTENSION,
        PALETTE_FLOOR, PALETTE_SPAN, PATTERN_EXTENSION, STITCHES_PARAM,
    };

    // Tests the default pattern matches the shared literal byte for byte
    #[test]
    fn test_default_pattern_literal() {
        assert_eq!(
            DEFAULT_PATTERN,
            "A A A B A A A B\nA A B A A A B A\nA B A A A B A A\nB A A A B A A A\n"
        );
    }

    // Tests link parameter names
    #[test]
    fn test_parameter_names() {
        assert_eq!(STITCHES_PARAM, "stitches");
        assert_eq!(COLOR_PARAM_PREFIX, "color_");
    }

    // Tests literal-detection thresholds
    #[test]
    fn test_literal_thresholds() {
        assert_eq!(LITERAL_MAX_DISTINCT_CHARS, 12);
        assert!((LITERAL_MAX_FREQUENCY - 0.1).abs() < f64::EPSILON);
    }

    // Tests the palette spans a quarter to three quarters brightness
    #[test]
    fn test_palette_range() {
        assert!((PALETTE_FLOOR - 64.0).abs() < f64::EPSILON);
        assert!((PALETTE_FLOOR + PALETTE_SPAN - 192.0).abs() < f64::EPSILON);
    }

    // Tests size limits are sane
    #[test]
    fn test_limits() {
        assert!(MAX_DECODED_BYTES >= 64 * 1024);
        assert!(DEFAULT_CELL_SIZE <= MAX_CELL_SIZE);
        assert!(DEFAULT_CELL_SIZE > 0);
    }

    // Tests file extensions carry no leading dot
    #[test]
    fn test_extensions() {
        assert!(!PATTERN_EXTENSION.starts_with('.'));
        assert!(!OUTPUT_EXTENSION.starts_with('.'));
        assert_ne!(PATTERN_EXTENSION, OUTPUT_EXTENSION);
    }
}
