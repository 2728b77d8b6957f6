//! Splitting a single over-long word
//!
//! Finds the longest grapheme prefix of a word that still fits, so the
//! packer can break words that cannot fit on a line of their own.

use tracing::{debug, trace};

use crate::core::{Segmenter, SegmenterKind, WordToken};

/// Split `word` into the longest fitting prefix and the remainder
///
/// Graphemes are appended one at a time and each tentative prefix is tested as
/// a single-token line. The first rejected grapheme ends the prefix. If even
/// the first grapheme is rejected it is taken anyway, so a non-empty word
/// always yields a non-empty prefix; that prefix may not satisfy `check_fit`.
///
/// Both halves keep the word's style, and their contents concatenate back to
/// the original content.
pub fn split_word_with<S, F>(segmenter: &S, check_fit: F, word: &WordToken) -> (WordToken, WordToken)
where
    S: Segmenter + ?Sized,
    F: Fn(&[WordToken]) -> bool,
{
    let content = word.content.as_str();
    let mut fitted = 0;

    for grapheme in segmenter.graphemes(content) {
        let end = fitted + grapheme.len();
        let candidate = WordToken::new(&content[..end], word.word_type);
        if check_fit(std::slice::from_ref(&candidate)) {
            fitted = end;
            continue;
        }
        if fitted == 0 {
            debug!(grapheme, "First grapheme does not fit, taking it anyway");
            fitted = end;
        }
        break;
    }

    trace!(
        fitted_bytes = fitted,
        total_bytes = content.len(),
        "Split word"
    );

    (
        WordToken::new(&content[..fitted], word.word_type),
        WordToken::new(&content[fitted..], word.word_type),
    )
}

/// Split `word` using the default Unicode segmenter
///
/// # Example
/// ```
/// use linefit::core::{fits_graphemes, WordToken};
/// use linefit::text::split_word_to_fit_width;
///
/// let (head, rest) = split_word_to_fit_width(fits_graphemes(3), &WordToken::normal("abcdef"));
/// assert_eq!(head.content, "abc");
/// assert_eq!(rest.content, "def");
/// ```
pub fn split_word_to_fit_width<F>(check_fit: F, word: &WordToken) -> (WordToken, WordToken)
where
    F: Fn(&[WordToken]) -> bool,
{
    split_word_with(&SegmenterKind::default(), check_fit, word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{fits_graphemes, line_text, FallbackSegmenter, WordType};
    use std::cell::Cell;

    fn text_len(line: &[WordToken]) -> usize {
        line_text(line).chars().count()
    }

    #[test]
    fn test_splits_at_longest_fitting_prefix() {
        let word = WordToken::normal("abcdef");
        let (head, rest) = split_word_to_fit_width(|l: &[WordToken]| text_len(l) <= 3, &word);
        assert_eq!(head, WordToken::normal("abc"));
        assert_eq!(rest, WordToken::normal("def"));
    }

    #[test]
    fn test_forced_progress_when_nothing_fits() {
        let word = WordToken::normal("ab");
        let (head, rest) = split_word_to_fit_width(|_: &[WordToken]| false, &word);
        assert_eq!(head.content, "a");
        assert_eq!(rest.content, "b");
    }

    #[test]
    fn test_whole_word_fits() {
        let word = WordToken::new("abc", WordType::Bold);
        let (head, rest) = split_word_to_fit_width(|_: &[WordToken]| true, &word);
        assert_eq!(head, word);
        assert_eq!(rest, WordToken::new("", WordType::Bold));
    }

    #[test]
    fn test_style_survives_split() {
        let word = WordToken::new("abcdef", WordType::Italic);
        let (head, rest) = split_word_to_fit_width(fits_graphemes(2), &word);
        assert_eq!(head.word_type, WordType::Italic);
        assert_eq!(rest.word_type, WordType::Italic);
        assert_eq!(format!("{}{}", head, rest), "abcdef");
    }

    #[test]
    fn test_empty_word() {
        let word = WordToken::normal("");
        let (head, rest) = split_word_to_fit_width(|_: &[WordToken]| false, &word);
        assert!(head.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_never_splits_inside_grapheme() {
        // Each "e\u{301}" is two chars but one grapheme
        let word = WordToken::normal("e\u{301}e\u{301}e\u{301}");
        let (head, rest) = split_word_to_fit_width(|l: &[WordToken]| text_len(l) <= 3, &word);
        assert_eq!(head.content, "e\u{301}");
        assert_eq!(rest.content, "e\u{301}e\u{301}");
    }

    #[test]
    fn test_fallback_segmenter_splits_code_points() {
        let word = WordToken::normal("e\u{301}e\u{301}");
        let (head, rest) =
            split_word_with(&FallbackSegmenter, |l: &[WordToken]| text_len(l) <= 3, &word);
        assert_eq!(head.content, "e\u{301}e");
        assert_eq!(rest.content, "\u{301}");
    }

    #[test]
    fn test_stops_at_first_rejection() {
        // A non-monotonic predicate: only the prefix "a" and "abc" fit
        let calls = Cell::new(0);
        let word = WordToken::normal("abcd");
        let (head, rest) = split_word_to_fit_width(
            |l: &[WordToken]| {
                calls.set(calls.get() + 1);
                matches!(line_text(l).as_str(), "a" | "abc")
            },
            &word,
        );
        assert_eq!(head.content, "a");
        assert_eq!(rest.content, "bcd");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_candidate_is_single_token_line() {
        let word = WordToken::new("xyz", WordType::Bold);
        split_word_to_fit_width(
            |l: &[WordToken]| {
                assert_eq!(l.len(), 1);
                assert_eq!(l[0].word_type, WordType::Bold);
                true
            },
            &word,
        );
    }
}
