//! Text segmentation into graphemes and words
//!
//! Two segmenters are provided. [`UnicodeSegmenter`] follows the Unicode text
//! segmentation rules (UAX #29); [`FallbackSegmenter`] is a deterministic
//! code-point/space splitter whose output does not depend on Unicode tables.
//! Which one is used is an explicit configuration choice ([`SegmenterKind`]).
//!
//! Both are lossless: concatenating the returned slices reproduces the input.

use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use super::WrapError;

/// Splits text into atomic units and word units
pub trait Segmenter: Send + Sync {
    /// Split text into graphemes, the smallest units that may not be broken
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Split text into words, keeping spaces as their own segments
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Get the name of this segmenter
    fn name(&self) -> &'static str;
}

/// Segmenter backed by UAX #29 grapheme cluster and word boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.graphemes(true).collect()
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds().collect()
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

/// Segmenter splitting by code point and by the literal space character
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSegmenter;

impl Segmenter for FallbackSegmenter {
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.char_indices()
            .map(|(start, c)| &text[start..start + c.len_utf8()])
            .collect()
    }

    // Splitting on ' ' drops the spaces, so each piece but the last gets an
    // explicit " " back; empty pieces from consecutive spaces are dropped.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let pieces: Vec<&str> = text.split(' ').collect();
        let last = pieces.len() - 1;
        let mut words = Vec::with_capacity(pieces.len() * 2);
        for (i, piece) in pieces.into_iter().enumerate() {
            if !piece.is_empty() {
                words.push(piece);
            }
            if i != last {
                words.push(" ");
            }
        }
        words
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

/// The configured segmentation strategy
///
/// Chosen once when a wrapper is built, so the same input segments the same
/// way on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SegmenterKind {
    /// UAX #29 grapheme clusters and word boundaries
    #[default]
    Unicode,
    /// Code points and literal spaces
    Fallback,
}

impl SegmenterKind {
    /// Get all valid segmenter names
    pub fn variants() -> &'static [&'static str] {
        &["unicode", "fallback"]
    }
}

impl Segmenter for SegmenterKind {
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            SegmenterKind::Unicode => UnicodeSegmenter.graphemes(text),
            SegmenterKind::Fallback => FallbackSegmenter.graphemes(text),
        }
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            SegmenterKind::Unicode => UnicodeSegmenter.words(text),
            SegmenterKind::Fallback => FallbackSegmenter.words(text),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SegmenterKind::Unicode => UnicodeSegmenter.name(),
            SegmenterKind::Fallback => FallbackSegmenter.name(),
        }
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmenterKind {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unicode" => Ok(SegmenterKind::Unicode),
            "fallback" => Ok(SegmenterKind::Fallback),
            _ => Err(WrapError::invalid_config(format!(
                "Unknown segmenter: {}",
                s
            ))),
        }
    }
}

/// Split text into graphemes with the default segmenter
///
/// # Example
/// ```
/// use linefit::core::to_graphemes;
///
/// assert_eq!(to_graphemes("e\u{301}x"), vec!["e\u{301}", "x"]);
/// ```
pub fn to_graphemes(text: &str) -> Vec<&str> {
    SegmenterKind::default().graphemes(text)
}

/// Split text into words with the default segmenter
///
/// # Example
/// ```
/// use linefit::core::to_words;
///
/// assert_eq!(to_words("hello world"), vec!["hello", " ", "world"]);
/// ```
pub fn to_words(text: &str) -> Vec<&str> {
    SegmenterKind::default().words(text)
}
