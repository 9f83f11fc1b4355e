use edit_fixture::{format, normalize_expected, parse};
use proptest::prelude::*;

fn marker_free_text() -> impl Strategy<Value = String> {
    let plain_char = any::<char>().prop_filter("no markers", |c| *c != '^' && *c != '$');
    proptest::collection::vec(plain_char, 0..40).prop_map(|chars| chars.into_iter().collect())
}

fn text_and_offset() -> impl Strategy<Value = (String, usize)> {
    marker_free_text().prop_flat_map(|text| {
        let len = text.chars().count();
        (Just(text), 0..=len)
    })
}

proptest! {
    #[test]
    fn parse_is_left_inverse_of_format((text, offset) in text_and_offset()) {
        let marked = format(&text, offset).unwrap();
        let parsed = parse(&marked).unwrap();
        prop_assert_eq!(parsed.plain_text, text);
        prop_assert_eq!(parsed.cursor_offset, offset);
    }

    #[test]
    fn boundary_markers_are_transparent(
        (text, offset) in text_and_offset(),
        positions in proptest::collection::vec(any::<prop::sample::Index>(), 0..5),
    ) {
        let marked = format(&text, offset).unwrap();
        let mut chars: Vec<char> = marked.chars().collect();
        for position in positions {
            let at = position.index(chars.len() + 1);
            chars.insert(at, '$');
        }
        let decorated: String = chars.into_iter().collect();

        prop_assert_eq!(parse(&decorated).unwrap(), parse(&marked).unwrap());
        prop_assert_eq!(normalize_expected(&decorated).unwrap(), marked);
    }

    #[test]
    fn missing_or_repeated_cursor_is_rejected(text in marker_free_text(), extra in 2usize..4) {
        prop_assert!(parse(&text).unwrap_err().is_malformed());
        let repeated = format!("{}{}", "^".repeat(extra), text);
        prop_assert!(parse(&repeated).unwrap_err().is_malformed());
        prop_assert!(normalize_expected(&repeated).unwrap_err().is_malformed());
    }
}
