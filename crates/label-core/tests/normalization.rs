//! Property tests for label token normalization.

use label_core::normalization::{is_canonical, normalize_label, vocabulary};
use proptest::prelude::*;

const TRUTHY: [&str; 4] = ["true", "positive", "yes", "1"];
const FALSY: [&str; 4] = ["false", "negative", "no", "0"];

/// Randomly flip the ASCII case of each character.
fn recase(token: &str, mask: &[bool]) -> String {
    token
        .chars()
        .zip(mask.iter().cycle())
        .map(|(ch, upper)| {
            if *upper {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

fn padding() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 0..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn truthy_tokens_normalize_to_one(
        token in prop::sample::select(TRUTHY.to_vec()),
        mask in prop::collection::vec(any::<bool>(), 1..8),
        left in padding(),
        right in padding(),
    ) {
        let raw = format!("{left}{}{right}", recase(token, &mask));
        prop_assert_eq!(normalize_label(&raw), Ok("1"));
    }

    #[test]
    fn falsy_tokens_normalize_to_zero(
        token in prop::sample::select(FALSY.to_vec()),
        mask in prop::collection::vec(any::<bool>(), 1..8),
        left in padding(),
        right in padding(),
    ) {
        let raw = format!("{left}{}{right}", recase(token, &mask));
        prop_assert_eq!(normalize_label(&raw), Ok("0"));
    }

    #[test]
    fn output_is_always_canonical_or_error(raw in ".*") {
        match normalize_label(&raw) {
            Ok(value) => prop_assert!(is_canonical(value)),
            Err(err) => prop_assert_eq!(err.value, raw),
        }
    }

    #[test]
    fn accepts_only_vocabulary(raw in ".*") {
        let folded = raw.trim().to_ascii_lowercase();
        let in_vocabulary = vocabulary().any(|token| token == folded);
        prop_assert_eq!(normalize_label(&raw).is_ok(), in_vocabulary);
    }

    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        if let Ok(first) = normalize_label(&raw) {
            prop_assert_eq!(normalize_label(first), Ok(first));
        }
    }

    #[test]
    fn numerics_other_than_zero_and_one_fail(n in 2u64..u64::MAX) {
        prop_assert!(normalize_label(&n.to_string()).is_err());
    }

    #[test]
    fn zero_width_characters_never_match(
        token in prop::sample::select([TRUTHY, FALSY].concat()),
        split in 0usize..8,
        zero_width in prop::sample::select(vec!['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}']),
    ) {
        let at = split.min(token.len());
        let raw = format!("{}{zero_width}{}", &token[..at], &token[at..]);
        prop_assert!(normalize_label(&raw).is_err());
    }
}

#[test]
fn documented_examples() {
    for raw in ["true", "TRUE", "True", " True ", "\ntrue\n"] {
        assert_eq!(normalize_label(raw), Ok("1"), "input {raw:?}");
    }
    for raw in ["false", "FALSE", "False", " False ", "\nfalse\n"] {
        assert_eq!(normalize_label(raw), Ok("0"), "input {raw:?}");
    }
}
