//! Greedy line packing
//!
//! Tokens are consumed from the front of a queue and appended to the line in
//! progress for as long as the fit predicate accepts the result. A `" "`
//! token in front of a word is a joiner: it is only kept when the word after
//! it lands on the same line.

use std::collections::VecDeque;

use tracing::{debug, span, trace, Level};

use super::splitter::split_word_with;
use crate::core::{Line, Segmenter, SegmenterKind, WordToken, WrapError};

/// Packs word tokens into lines that satisfy a fit predicate
///
/// The segmenter decides where over-long words may be broken.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineWrapper<S = SegmenterKind> {
    segmenter: S,
}

impl LineWrapper<SegmenterKind> {
    /// Create a wrapper using the default Unicode segmenter
    pub fn new() -> Self {
        Self::with_segmenter(SegmenterKind::default())
    }
}

impl<S: Segmenter> LineWrapper<S> {
    pub fn with_segmenter(segmenter: S) -> Self {
        Self { segmenter }
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Split one word into its longest fitting prefix and the remainder
    pub fn split_word_to_fit_width<F>(&self, check_fit: F, word: &WordToken) -> (WordToken, WordToken)
    where
        F: Fn(&[WordToken]) -> bool,
    {
        split_word_with(&self.segmenter, check_fit, word)
    }

    /// Pack `line` into as few lines as the greedy algorithm allows
    ///
    /// Every returned line satisfies `check_fit`, except a line holding a
    /// single grapheme the predicate rejected outright. Zero-length tokens are
    /// skipped. No returned line is empty.
    ///
    /// # Errors
    ///
    /// Returns [`WrapError::LineBreakInToken`] if any token contains `'\n'` or
    /// `'\r'`; callers split text on hard breaks first.
    pub fn split_line_to_fit_width<F>(
        &self,
        line: &[WordToken],
        check_fit: F,
    ) -> Result<Vec<Line>, WrapError>
    where
        F: Fn(&[WordToken]) -> bool,
    {
        let pack_span = span!(Level::DEBUG, "split_line_to_fit_width", tokens = line.len());
        let _enter = pack_span.enter();

        if let Some((index, token)) = line.iter().enumerate().find(|(_, t)| t.has_line_break()) {
            debug!(index, "Rejecting token containing a line break");
            return Err(WrapError::line_break_in_token(index, token.content.clone()));
        }

        let mut queue: VecDeque<WordToken> =
            line.iter().filter(|t| !t.is_empty()).cloned().collect();
        let mut lines: Vec<Line> = Vec::new();
        let mut current: Line = Vec::new();

        while let Some(front) = queue.pop_front() {
            // A trailing space has no word to join, so it is the word itself
            let (joiner, word) = if front.is_space() {
                match queue.pop_front() {
                    Some(next) => (Some(front), next),
                    None => (None, front),
                }
            } else {
                (None, front)
            };

            let mut candidate = current.clone();
            candidate.extend(joiner);
            candidate.push(word);

            if check_fit(&candidate) {
                current = candidate;
                continue;
            }

            // The candidate is rejected; take the word back out of it
            let word = candidate.pop().unwrap_or_default();

            if !current.is_empty() {
                trace!(word = %word, "Word does not fit, breaking line");
                lines.push(std::mem::take(&mut current));
                queue.push_front(word);
                continue;
            }

            let (fitting, rest) = self.split_word_to_fit_width(&check_fit, &word);
            trace!(fitting = %fitting, rest = %rest, "Word alone does not fit, splitting it");
            lines.push(vec![fitting]);
            if !rest.is_empty() {
                queue.push_front(rest);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }

        debug!(lines = lines.len(), "Packed line");
        Ok(lines)
    }
}

/// Pack `line` using the default Unicode segmenter
///
/// # Example
/// ```
/// use linefit::core::{fits_width, line_text, tokens_from_words, to_words, WordType};
/// use linefit::text::split_line_to_fit_width;
///
/// let line = tokens_from_words(to_words("the quick brown fox"), WordType::Normal);
/// let lines = split_line_to_fit_width(&line, fits_width(10)).unwrap();
/// let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
/// assert_eq!(texts, vec!["the quick", "brown fox"]);
/// ```
pub fn split_line_to_fit_width<F>(line: &[WordToken], check_fit: F) -> Result<Vec<Line>, WrapError>
where
    F: Fn(&[WordToken]) -> bool,
{
    LineWrapper::new().split_line_to_fit_width(line, check_fit)
}
