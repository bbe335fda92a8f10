//! Tests for chart text parsing into stitch matrices

#[cfg(test)]
mod tests {
    use stitchlink::chart::parser::{StitchMatrix, parse_chart};
    use stitchlink::chart::symbol::StitchSymbol;

    fn rows(matrix: &StitchMatrix) -> Vec<Vec<String>> {
        matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    fn expected(grid: &[&[&str]]) -> Vec<Vec<String>> {
        grid.iter()
            .map(|row| row.iter().map(|s| (*s).to_string()).collect())
            .collect()
    }

    // Tests adjacent characters become one stitch each
    #[test]
    fn test_parses_simple_grid() {
        let matrix = parse_chart("ABC\nDEF");
        assert_eq!(
            rows(&matrix),
            expected(&[&["A", "B", "C"], &["D", "E", "F"]])
        );
    }

    // Tests commas separate stitches
    #[test]
    fn test_parses_grid_with_commas() {
        let matrix = parse_chart("A,B,C\nD,E,F");
        assert_eq!(
            rows(&matrix),
            expected(&[&["A", "B", "C"], &["D", "E", "F"]])
        );
    }

    // Tests commas and spaces mix freely within one row
    // Verified by treating spaces as stitches
    #[test]
    fn test_parses_grid_with_mixed_separators() {
        let matrix = parse_chart("A B,C\nD,E F");
        assert_eq!(
            rows(&matrix),
            expected(&[&["A", "B", "C"], &["D", "E", "F"]])
        );
    }

    // Tests blank lines and the trailing newline produce no rows
    #[test]
    fn test_filters_out_empty_rows() {
        let matrix = parse_chart("A B C\n\nD E F\n");
        assert_eq!(matrix.height(), 2);
        assert_eq!(
            rows(&matrix),
            expected(&[&["A", "B", "C"], &["D", "E", "F"]])
        );
    }

    // Tests runs of spaces and trailing separators produce no empty stitches
    #[test]
    fn test_filters_out_empty_cells() {
        let matrix = parse_chart("A  B   C \nD E F  ,,");
        assert_eq!(
            rows(&matrix),
            expected(&[&["A", "B", "C"], &["D", "E", "F"]])
        );
    }

    // Tests whitespace never merges characters into multi-character stitches
    #[test]
    fn test_parses_one_character_per_stitch() {
        let matrix = parse_chart("AA BB CC\nDD EE FF");
        assert_eq!(
            rows(&matrix),
            expected(&[
                &["A", "A", "B", "B", "C", "C"],
                &["D", "D", "E", "E", "F", "F"]
            ])
        );
    }

    // Tests characters outside the Basic Multilingual Plane stay whole
    #[test]
    fn test_parses_unicode_character_sequences() {
        let matrix = parse_chart("A\u{1f496}A\n");
        assert_eq!(
            rows(&matrix),
            expected(&[&["A", "\u{1f496}", "A"]])
        );
    }

    // Tests multi-code-point graphemes split into one stitch per code point
    #[test]
    fn test_does_not_join_graphemes() {
        let matrix = parse_chart("\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}");
        assert_eq!(matrix.rows().first().map(Vec::len), Some(4));
    }

    // Tests empty and blank-only input produce an empty matrix
    #[test]
    fn test_returns_empty_matrix_for_blank_input() {
        assert!(parse_chart("").is_empty());
        assert!(parse_chart("\n\n").is_empty());
        assert!(parse_chart(" , \n\t\n").is_empty());
        assert_eq!(parse_chart(""), StitchMatrix::default());
    }

    // Tests carriage returns from Windows line endings are trimmed away
    #[test]
    fn test_ignores_carriage_returns() {
        let matrix = parse_chart("AB\r\nBA\r\n");
        assert_eq!(rows(&matrix), expected(&[&["A", "B"], &["B", "A"]]));
    }

    // Tests byte order marks are blank while NEXT LINE is a stitch
    #[test]
    fn test_blank_rules_follow_trimming() {
        let matrix = parse_chart("\u{feff}A\u{85}B\u{a0}");
        assert_eq!(
            rows(&matrix),
            expected(&[&["A", "\u{85}", "B"]])
        );
    }

    // Tests ragged rows keep their lengths and width reports the longest
    #[test]
    fn test_ragged_rows_are_preserved() {
        let matrix = parse_chart("ABC\nA\nAB");
        let lengths: Vec<usize> = matrix.rows().iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![3, 1, 2]);
        assert_eq!(matrix.width(), 3);
        assert_eq!(matrix.height(), 3);
        assert_eq!(parse_chart("").width(), 0);
    }

    // Tests padded arrays fill short rows with None
    #[test]
    fn test_to_padded_array_pads_short_rows() {
        let matrix = parse_chart("AB\nC");
        let grid = matrix.to_padded_array();

        assert_eq!(grid.dim(), (2, 2));
        assert_eq!(grid.get((0, 1)).copied().flatten(), Some(StitchSymbol::new('B')));
        assert_eq!(grid.get((1, 0)).copied().flatten(), Some(StitchSymbol::new('C')));
        assert_eq!(grid.get((1, 1)).copied().flatten(), None);
    }

    // Tests distinct symbols are sorted and deduplicated
    #[test]
    fn test_distinct_symbols_sorted() {
        let matrix = parse_chart("CAB\nBAC");
        let symbols: Vec<char> = matrix
            .distinct_symbols()
            .into_iter()
            .map(StitchSymbol::as_char)
            .collect();
        assert_eq!(symbols, vec!['A', 'B', 'C']);
    }

    // Tests from_rows drops empty rows
    #[test]
    fn test_from_rows_drops_empty_rows() {
        let matrix = StitchMatrix::from_rows(vec![vec![], vec![StitchSymbol::new('X')], vec![]]);
        assert_eq!(matrix.height(), 1);
        assert_eq!(matrix.get(0, 0), Some(StitchSymbol::new('X')));
        assert_eq!(matrix.get(0, 1), None);
        assert_eq!(matrix.get(1, 0), None);
    }
}
