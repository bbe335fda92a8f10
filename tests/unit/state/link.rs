//! Tests for the query-string layout of shared links

#[cfg(test)]
mod tests {
    use stitchlink::ChartError;
    use stitchlink::chart::palette::HexColor;
    use stitchlink::chart::symbol::StitchSymbol;
    use stitchlink::codec::link::decode;
    use stitchlink::state::link::{LinkState, parse_link};
    use stitchlink::state::pattern::{PatternState, StateChange};
    use url::Url;

    fn sym(ch: char) -> StitchSymbol {
        StitchSymbol::new(ch)
    }

    fn base() -> Url {
        parse_link("https://example.com/chart/").unwrap()
    }

    // Tests colour entries and stitches are read from a query
    #[test]
    fn test_from_query_reads_entries() {
        let link = LinkState::from_query("stitches=AB%0ABA&color_A=%23ff0000&color_B=%23abc");

        assert_eq!(link.stitches(), Some("AB\nBA"));
        assert_eq!(link.colors().get(&sym('A')), Some(&HexColor::new(255, 0, 0)));
        assert_eq!(link.colors().get(&sym('B')), Some(&HexColor::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(link.applied_revision(), None);
    }

    // Tests malformed colour entries are skipped, not fatal
    #[test]
    fn test_from_query_skips_malformed_colors() {
        let link = LinkState::from_query(
            "color_AB=%23ff0000&color_=%23ff0000&color_C=blue&color_D=%23000000&zoom=3",
        );
        assert_eq!(link.colors().len(), 1);
        assert_eq!(link.colors().get(&sym('D')), Some(&HexColor::grey(0)));
        assert_eq!(link.stitches(), None);
    }

    // Tests the first stitches entry wins when repeated
    #[test]
    fn test_from_query_takes_first_stitches() {
        let link = LinkState::from_query("stitches=first&stitches=second");
        assert_eq!(link.stitches(), Some("first"));
    }

    // Tests writing a link keeps foreign parameters and replaces owned ones
    // Verified by appending without removing old entries
    #[test]
    fn test_to_url_replaces_owned_parameters() {
        let page = parse_link("https://example.com/?zoom=3&stitches=old&color_Z=%23000000").unwrap();
        let mut link = LinkState::default();
        link.set_literal_stitches("AB");
        let _ = link.apply(&StateChange::ColorsSet(vec![(sym('A'), HexColor::grey(1))]));

        let url = link.to_url(&page);
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("zoom".to_string(), "3".to_string()),
                ("stitches".to_string(), "AB".to_string()),
                ("color_A".to_string(), "#010101".to_string()),
            ]
        );
    }

    // Tests an empty link leaves no dangling question mark
    #[test]
    fn test_to_url_without_entries() {
        let url = LinkState::default().to_url(&base());
        assert_eq!(url.as_str(), "https://example.com/chart/");
    }

    // Tests symbols needing escapes survive a URL round trip
    #[test]
    fn test_url_round_trip_with_escaped_symbols() {
        let mut state = PatternState::new("+\u{1f496}&\n&+=");
        let _ = state.set_color(sym('\u{1f496}'), HexColor::new(1, 2, 3));
        let _ = state.set_color(sym('&'), HexColor::new(4, 5, 6));
        let _ = state.set_color(sym('+'), HexColor::new(7, 8, 9));

        let link = LinkState::capture(&state).unwrap();
        let url = link.to_url(&base());
        let reread = LinkState::from_url(&url);

        assert_eq!(reread, LinkState::from_query(url.query().unwrap_or_default()));
        assert_eq!(reread.colors(), state.custom_colors());
        assert_eq!(
            reread.stitches().map(|s| decode(s).unwrap()),
            Some(state.text().to_string())
        );
    }

    // Tests changes are written through to the link
    #[test]
    fn test_apply_changes() {
        let mut state = PatternState::new("AB");
        let mut link = LinkState::capture(&state).unwrap();

        assert!(link.apply(&state.set_color(sym('A'), HexColor::grey(9))).unwrap());
        assert_eq!(link.colors().len(), 1);
        assert!(link.apply(&state.remove_color(sym('A'))).unwrap());
        assert!(link.colors().is_empty());
        let _ = link.apply(&state.set_color(sym('B'), HexColor::grey(9)));
        assert!(link.apply(&state.reset_colors()).unwrap());
        assert!(link.colors().is_empty());

        assert!(link.apply(&state.set_text("XY")).unwrap());
        assert_eq!(link.applied_revision(), Some(1));
        assert_eq!(link.stitches().map(|s| decode(s).unwrap()), Some("XY".to_string()));
    }

    // Tests pattern text older than the last write is ignored
    #[test]
    fn test_apply_ignores_stale_revisions() {
        let mut state = PatternState::new("");
        let mut link = LinkState::default();
        let older = state.set_text("old");
        let newer = state.set_text("new");

        assert!(link.apply(&newer).unwrap());
        assert!(!link.apply(&older).unwrap());
        assert_eq!(link.stitches().map(|s| decode(s).unwrap()), Some("new".to_string()));
        assert_eq!(link.applied_revision(), Some(2));
    }

    // Tests reloading continues revision numbering from the link
    #[test]
    fn test_reload_keeps_revision() {
        let mut state = PatternState::new("");
        let _ = state.set_text("A");
        let _ = state.set_text("B");
        let link = LinkState::capture(&state).unwrap();

        let mut restored = PatternState::from_link(&link);
        assert_eq!(restored.revision(), 2);
        assert!(matches!(
            restored.set_text("C"),
            StateChange::Stitches { revision: 3, .. }
        ));
    }

    // Tests relative links are rejected with the link text
    #[test]
    fn test_parse_link_rejects_relative() {
        let err = parse_link("/chart?stitches=abc");
        assert!(matches!(err, Err(ChartError::InvalidLink { ref url, .. }) if url == "/chart?stitches=abc"));
    }
}
