//! Property-based tests for the tokenizer.

use super::{is_blank, Assignment, Tokenizer};
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9はい値。 \t_-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Tokens never start or end with blanks and never contain the delimiter
    #[test]
    fn tokens_are_trimmed(fields in prop::collection::vec(field_strategy(), 0..8)) {
        let input = fields.join(",");
        for token in Tokenizer::new(&input).tokens(',') {
            prop_assert!(!token.starts_with(is_blank));
            prop_assert!(!token.ends_with(is_blank));
            prop_assert!(!token.contains(','));
        }
    }

    // Splitting recovers every field except a blank final one
    #[test]
    fn tokens_match_trimmed_fields(fields in prop::collection::vec(field_strategy(), 0..8)) {
        let input = fields.join(",");
        let tokens: Vec<&str> = Tokenizer::new(&input).tokens(',').collect();

        let mut expected: Vec<&str> = fields.iter().map(|f| f.trim_matches(is_blank)).collect();
        if expected.last() == Some(&"") {
            expected.pop();
        }
        prop_assert_eq!(tokens, expected);
    }

    // A delimiter set never yields an empty token
    #[test]
    fn line_split_has_no_empty_tokens(
        lines in prop::collection::vec(field_strategy(), 0..8),
        crlf in any::<bool>(),
    ) {
        let input = lines.join(if crlf { "\r\n" } else { "\n\n" });
        for token in Tokenizer::new(&input).tokens("\r\n") {
            prop_assert!(!token.is_empty());
        }
    }

    // The cursor never moves backwards and exhaustion sticks
    #[test]
    fn cursor_monotonic(input in "[a-z, \t\r\n]{0,40}") {
        let mut tok = Tokenizer::new(&input);
        let mut remaining = tok.remaining().len();
        while tok.next_token(',').is_some() {
            prop_assert!(tok.remaining().len() < remaining);
            remaining = tok.remaining().len();
        }
        prop_assert_eq!(tok.next_token(','), None);
    }

    // Rendering an assignment and parsing it back is stable
    #[test]
    fn assignment_display_reparses(
        key in "[a-zA-Z値-]{1,8}",
        values in prop::collection::vec("[a-zA-Z0-9はい]{1,8}", 0..5),
    ) {
        let line = format!("{key} = {}", values.join(" , "));
        let parsed = Assignment::parse(&line).unwrap();
        let rendered = parsed.to_string();
        let reparsed = Assignment::parse(&rendered).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }
}
