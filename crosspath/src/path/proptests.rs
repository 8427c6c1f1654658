//! Property-based tests for path handling.
//!
//! Note: The normalize and join modules already carry quick property tests.
//! This module runs the parse/render/join laws with a much larger case count.

use super::{convert_to_msw, Platform, Root, UniPath};
use proptest::prelude::*;

// Segments of two or more characters, so a POSIX-rooted path can never
// render as the `/x/...` drive spelling.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-][a-z0-9_ .!-]{1,12}".prop_filter("not a dot segment", |s| s != "..")
}

// A segment that would read as a drive if it led a relative path
fn drive_like_segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]:[a-z0-9_]{0,4}"
}

fn any_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => segment_strategy(),
        1 => drive_like_segment_strategy(),
    ]
}

fn root_strategy() -> impl Strategy<Value = Root> {
    prop_oneof![Just(Root::Relative), absolute_root_strategy()]
}

fn absolute_root_strategy() -> impl Strategy<Value = Root> {
    prop_oneof![
        Just(Root::Posix),
        prop::char::range('a', 'z').prop_map(Root::Drive),
    ]
}

fn path_strategy(
    roots: impl Strategy<Value = Root>,
    segment_count: std::ops::Range<usize>,
) -> impl Strategy<Value = UniPath> {
    (
        roots,
        prop::collection::vec(any_segment_strategy(), segment_count),
        any::<bool>(),
    )
        .prop_map(|(root, segments, trailing)| {
            UniPath::from_parts(root, segments.iter().map(String::as_str), trailing)
        })
}

fn normalized_path_strategy() -> impl Strategy<Value = UniPath> {
    path_strategy(root_strategy(), 0..8)
}

// A bare root always reads back with its separator, so round trips need
// at least one segment
fn non_empty_path_strategy() -> impl Strategy<Value = UniPath> {
    path_strategy(root_strategy(), 1..8)
}

fn absolute_path_strategy() -> impl Strategy<Value = UniPath> {
    path_strategy(absolute_root_strategy(), 0..8)
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => segment_strategy(),
        1 => Just(".".to_string()),
        2 => Just("..".to_string()),
        1 => Just(String::new()),
    ];
    let prefix = prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        Just("\\".to_string()),
        "[a-zA-Z]".prop_map(|letter| format!("{letter}:")),
        "[a-zA-Z]".prop_map(|letter| format!("/{letter}/")),
    ];
    (prefix, prop::collection::vec((piece, prop::bool::ANY), 0..10)).prop_map(|(prefix, parts)| {
        let mut text = prefix;
        for (piece, backslash) in parts {
            text.push_str(&piece);
            text.push(if backslash { '\\' } else { '/' });
        }
        text
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // parse(uni_string(p)) == p
    #[test]
    fn uni_string_round_trips(path in non_empty_path_strategy()) {
        let reparsed = UniPath::parse(&path.uni_string());
        prop_assert_eq!(reparsed, path);
    }

    // parse(native_string(p)) == p
    #[test]
    fn native_string_round_trips(path in non_empty_path_strategy()) {
        let reparsed = UniPath::parse(&path.native_string());
        prop_assert_eq!(reparsed, path);
    }

    // Normalizing already-normalized output changes nothing
    #[test]
    fn parse_idempotent(text in raw_path_strategy()) {
        let once = UniPath::parse(&text);
        let twice = UniPath::parse(&once.uni_string());
        prop_assert!(once.same_location(&twice) || has_drive_lookalike(&once));
    }

    // Normalized segments never contain separators, `.`, or empty strings
    #[test]
    fn segments_are_clean(text in raw_path_strategy()) {
        let path = UniPath::parse(&text);
        for segment in path.segments() {
            prop_assert!(!segment.is_empty());
            prop_assert_ne!(segment.as_str(), ".");
            prop_assert!(!segment.contains('/') && !segment.contains('\\'));
        }
        if path.is_absolute() {
            prop_assert!(path.segments().iter().all(|s| s != ".."));
        }
    }

    // (A / B) == B for absolute B
    #[test]
    fn root_override(a in raw_path_strategy(), b in absolute_path_strategy()) {
        let a = UniPath::parse(&a);
        prop_assert_eq!(&a / &b, b);
    }

    // ((A / B) / C) and (A / (B / C)) normalize to the same location
    #[test]
    fn join_associative(
        a in raw_path_strategy(),
        b in raw_path_strategy(),
        c in raw_path_strategy(),
    ) {
        let a = UniPath::parse(&a);
        let b = UniPath::parse(&b);
        let c = UniPath::parse(&c);
        let left = (&a / &b) / &c;
        let right = &a / (&b / &c);
        prop_assert!(left.same_location(&right));
    }

    // Both drive spellings render identically in Windows syntax
    #[test]
    fn drive_spellings_equivalent(
        letter in prop::char::range('a', 'z'),
        segments in prop::collection::vec(segment_strategy(), 0..5),
    ) {
        let tail = segments.join("/");
        let posix = format!("/{letter}/{tail}");
        let windows = format!("{letter}:\\{}", segments.join("\\"));
        prop_assert_eq!(convert_to_msw(&posix), convert_to_msw(&windows));
    }

    // Rendering for POSIX is the portable form
    #[test]
    fn posix_render_is_uni(path in normalized_path_strategy()) {
        prop_assert_eq!(path.render(Platform::Posix), path.uni_string());
    }
}

/// A POSIX-rooted path whose first segment is a single letter followed by
/// more segments renders as `/x/...`, which reads back as a drive root.
fn has_drive_lookalike(path: &UniPath) -> bool {
    path.root() == Root::Posix
        && path.segments().len() > 1
        && path.segments()[0].len() == 1
}
