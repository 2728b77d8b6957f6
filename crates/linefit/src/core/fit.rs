//! Ready-made fit predicates
//!
//! The packer never measures text; it only asks a predicate whether a
//! candidate line fits. These helpers cover the common terminal cases:
//! display columns (CJK wide characters count as two) and grapheme count.

use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::{WordToken, WrapError};

/// Display width of a line in terminal columns
pub fn line_width(line: &[WordToken]) -> usize {
    line.iter()
        .map(|token| UnicodeWidthStr::width(token.content.as_str()))
        .sum()
}

/// Number of extended grapheme clusters in a line
pub fn line_graphemes(line: &[WordToken]) -> usize {
    line.iter()
        .map(|token| token.content.graphemes(true).count())
        .sum()
}

/// Predicate accepting lines at most `max_width` columns wide
///
/// # Example
/// ```
/// use linefit::core::{fits_width, WordToken};
///
/// let fits = fits_width(4);
/// assert!(fits(&[WordToken::normal("日本")]));
/// assert!(!fits(&[WordToken::normal("日本語")]));
/// ```
pub fn fits_width(max_width: usize) -> impl Fn(&[WordToken]) -> bool + Copy {
    move |line: &[WordToken]| line_width(line) <= max_width
}

/// Predicate accepting lines of at most `max_graphemes` graphemes
pub fn fits_graphemes(max_graphemes: usize) -> impl Fn(&[WordToken]) -> bool + Copy {
    move |line: &[WordToken]| line_graphemes(line) <= max_graphemes
}

/// Unit used by the built-in predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Measure {
    /// Terminal display columns
    #[default]
    Columns,
    /// User-perceived characters
    Graphemes,
}

impl Measure {
    /// Measure a line in this unit
    pub fn measure(&self, line: &[WordToken]) -> usize {
        match self {
            Measure::Columns => line_width(line),
            Measure::Graphemes => line_graphemes(line),
        }
    }

    /// Get all valid measure names
    pub fn variants() -> &'static [&'static str] {
        &["columns", "graphemes"]
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Columns => write!(f, "columns"),
            Measure::Graphemes => write!(f, "graphemes"),
        }
    }
}

impl FromStr for Measure {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "columns" | "width" => Ok(Measure::Columns),
            "graphemes" | "chars" => Ok(Measure::Graphemes),
            _ => Err(WrapError::invalid_config(format!("Unknown measure: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordType;

    #[test]
    fn test_line_width_counts_wide_chars() {
        let line = vec![
            WordToken::normal("日本"),
            WordToken::space(),
            WordToken::new("ab", WordType::Bold),
        ];
        assert_eq!(line_width(&line), 7);
        assert_eq!(line_graphemes(&line), 5);
    }

    #[test]
    fn test_line_graphemes_counts_clusters() {
        let line = vec![WordToken::normal("e\u{301}e\u{301}")];
        assert_eq!(line_graphemes(&line), 2);
    }

    #[test]
    fn test_fits_width_boundary() {
        let fits = fits_width(5);
        assert!(fits(&[WordToken::normal("hello")]));
        assert!(!fits(&[WordToken::normal("hello!")]));
        assert!(fits(&[]));
    }

    #[test]
    fn test_fits_graphemes_boundary() {
        let fits = fits_graphemes(2);
        assert!(fits(&[WordToken::normal("日本")]));
        assert!(!fits(&[WordToken::normal("日本語")]));
    }

    #[test]
    fn test_measure_parsing() {
        assert_eq!(Measure::from_str("columns").unwrap(), Measure::Columns);
        assert_eq!(Measure::from_str("Graphemes").unwrap(), Measure::Graphemes);
        assert!(Measure::from_str("pixels").is_err());
        assert_eq!(Measure::Graphemes.to_string(), "graphemes");
    }

    #[test]
    fn test_measure_dispatch() {
        let line = vec![WordToken::normal("日本")];
        assert_eq!(Measure::Columns.measure(&line), 4);
        assert_eq!(Measure::Graphemes.measure(&line), 2);
    }
}
