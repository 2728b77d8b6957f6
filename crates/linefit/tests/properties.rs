//! Property tests for segmentation and packing invariants

use std::collections::VecDeque;

use linefit::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn text_len(line: &[WordToken]) -> usize {
    line_text(line).chars().count()
}

/// Text made of letters, spaces, combining marks and wide characters
fn label_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => "[a-z]{1,6}",
            2 => Just(" ".to_string()),
            1 => Just("e\u{301}".to_string()),
            1 => Just("日本".to_string()),
            1 => Just("👩‍💻".to_string()),
        ],
        0..20,
    )
    .prop_map(|parts| parts.concat())
}

fn segmenter() -> impl Strategy<Value = SegmenterKind> {
    prop_oneof![Just(SegmenterKind::Unicode), Just(SegmenterKind::Fallback)]
}

/// Walk the input tokens alongside the packed lines
///
/// Every packed token must be the next input token or a leading piece of it.
/// A split piece sits alone on its line and its remainder opens the next one.
/// The only input token allowed to vanish is a `" "` right before the first
/// token of a line.
fn check_only_break_joiners_removed(input: &[WordToken], lines: &[Line]) -> Result<(), TestCaseError> {
    let mut expected: VecDeque<WordToken> = input.iter().filter(|t| !t.is_empty()).cloned().collect();

    for line in lines {
        for (position, token) in line.iter().enumerate() {
            let mut next = expected.pop_front().ok_or_else(|| {
                TestCaseError::fail(format!("packed token {token:?} has no input counterpart"))
            })?;
            if position == 0 && next.is_space() && !token.is_space() {
                next = expected.pop_front().ok_or_else(|| {
                    TestCaseError::fail(format!("packed token {token:?} follows a final joiner"))
                })?;
            }

            prop_assert_eq!(token.word_type, next.word_type);
            prop_assert!(!token.content.is_empty());
            prop_assert!(
                next.content.starts_with(&token.content),
                "{:?} is not a leading piece of {:?}",
                token,
                next
            );
            if token.content.len() < next.content.len() {
                prop_assert_eq!(line.len(), 1, "split piece shares its line: {:?}", line);
                let rest = next.content[token.content.len()..].to_string();
                expected.push_front(WordToken::new(rest, next.word_type));
            }
        }
    }

    prop_assert!(expected.is_empty(), "input tokens left unpacked: {:?}", expected);
    Ok(())
}

proptest! {
    #[test]
    fn graphemes_are_lossless(text in any::<String>(), kind in segmenter()) {
        prop_assert_eq!(kind.graphemes(&text).concat(), text);
    }

    #[test]
    fn words_are_lossless(text in any::<String>(), kind in segmenter()) {
        prop_assert_eq!(kind.words(&text).concat(), text);
    }

    #[test]
    fn fallback_words_never_empty(text in label_text()) {
        prop_assert!(FallbackSegmenter.words(&text).iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn split_word_reconstructs(word in "[a-z]{0,12}", limit in 0usize..8) {
        let token = WordToken::new(word.clone(), WordType::Bold);
        let (head, rest) = split_word_to_fit_width(|l: &[WordToken]| text_len(l) <= limit, &token);
        prop_assert_eq!(format!("{}{}", head.content, rest.content), word.clone());
        prop_assert_eq!(head.word_type, WordType::Bold);
        prop_assert_eq!(rest.word_type, WordType::Bold);
        if !word.is_empty() {
            prop_assert!(!head.is_empty());
        }
    }

    #[test]
    fn packed_lines_fit_and_are_non_empty(
        text in label_text(),
        limit in 1usize..10,
        kind in segmenter(),
    ) {
        let wrapper = LineWrapper::with_segmenter(kind);
        let line = tokens_from_words(kind.words(&text), WordType::Normal);
        let fits = fits_width(limit);
        let lines = wrapper.split_line_to_fit_width(&line, fits).unwrap();

        for packed in &lines {
            prop_assert!(!packed.is_empty());
            // Only a lone grapheme wider than the limit may overflow
            if !fits(packed) {
                prop_assert_eq!(packed.len(), 1);
                prop_assert_eq!(kind.graphemes(&packed[0].content).len(), 1);
            }
        }
    }

    #[test]
    fn packing_only_removes_joiners(text in label_text(), limit in 1usize..10) {
        let line = tokens_from_words(to_words(&text), WordType::Normal);
        let lines = split_line_to_fit_width(&line, |l: &[WordToken]| text_len(l) <= limit).unwrap();

        check_only_break_joiners_removed(&line, &lines)?;
    }

    #[test]
    fn packing_is_idempotent(text in label_text(), limit in 1usize..10) {
        let check = |l: &[WordToken]| text_len(l) <= limit;
        let line = tokens_from_words(to_words(&text), WordType::Normal);
        for packed in split_line_to_fit_width(&line, check).unwrap() {
            if check(&packed) {
                prop_assert_eq!(split_line_to_fit_width(&packed, check).unwrap(), vec![packed]);
            }
        }
    }
}
