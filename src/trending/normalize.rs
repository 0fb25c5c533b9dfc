//! Search-term canonicalization.
//!
//! Raw user queries arrive in every imaginable shape: `Silent Voice`,
//! `silent   voice!!`, ` SILENT VOICE. `. Aggregating trending hits per
//! *meaning* rather than per keystroke requires mapping all of them onto one
//! canonical key before the store is consulted. The canonical form is
//! lowercase, contains only letters/digits/single spaces, and has no
//! leading or trailing whitespace.
//!
//! Punctuation is deleted outright, never turned into whitespace: a
//! separator with no space around it joins its neighbors, so `Silent-Voice`
//! folds to `silentvoice`. The spaced form is unaffected because punctuation
//! is removed *before* whitespace runs are collapsed, so `Silent - Voice`
//! folds to `silent voice` and not `silent  voice`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is not a letter, digit, or whitespace. Unicode-aware, so
/// accented titles keep their letters; underscores count as punctuation and
/// are stripped.
static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("invalid punctuation pattern"));

/// One or more whitespace characters of any kind (spaces, tabs, newlines).
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Canonicalizes a raw search query into the key used for trending
/// aggregation.
///
/// Applied in this exact order:
/// 1. lowercase the whole string;
/// 2. strip every character outside letters/digits/whitespace;
/// 3. collapse each whitespace run into a single ASCII space;
/// 4. trim leading and trailing whitespace.
///
/// Pure and infallible: any input, including the empty string, produces a
/// (possibly empty) canonical key. Idempotent by construction.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Spirited Away"), "spirited away");
        assert_eq!(normalize("SPIRITED AWAY"), "spirited away");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("silent voice!!"), "silent voice");
        assert_eq!(normalize("Howl's Moving Castle"), "howls moving castle");
        assert_eq!(normalize("Akira: Tetsuo's Revenge"), "akira tetsuos revenge");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("silent   voice"), "silent voice");
        assert_eq!(normalize("silent\t\tvoice\n"), "silent voice");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize("  silent voice  "), "silent voice");
    }

    #[test]
    fn test_equivalent_spellings_share_one_key() {
        let expected = "silent voice";
        assert_eq!(normalize("Silent Voice"), expected);
        assert_eq!(normalize("silent   voice!!"), expected);
        assert_eq!(normalize(" SILENT VOICE. "), expected);
    }

    #[test]
    fn test_unspaced_punctuation_joins_words() {
        // Deletion, not substitution: a separator with no whitespace around
        // it fuses the words on either side.
        assert_eq!(normalize(" Silent-Voice "), "silentvoice");
        assert_eq!(normalize("Spider-Man"), "spiderman");
    }

    #[test]
    fn test_hyphen_with_spaces_does_not_leave_a_double_space() {
        // Punctuation removal runs before whitespace collapsing.
        assert_eq!(normalize("Silent - Voice"), "silent voice");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_punctuation_only_input_becomes_empty() {
        assert_eq!(normalize("!!!???"), "");
        assert_eq!(normalize(" -- "), "");
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(normalize("Blade Runner 2049"), "blade runner 2049");
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(normalize("Amélie!"), "amélie");
        assert_eq!(normalize("AMÉLIE"), "amélie");
    }

    #[test]
    fn test_underscore_is_punctuation() {
        assert_eq!(normalize("the_matrix"), "thematrix");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "Spirited Away",
            "silent   voice!!",
            " Silent-Voice ",
            "",
            "Blade Runner 2049",
            "AMÉLIE",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
