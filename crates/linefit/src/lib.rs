//! Linefit - Pack label text into lines that fit
//!
//! A library for wrapping diagram labels. It segments text into graphemes and
//! words, then greedily packs words into lines accepted by a caller-supplied
//! fit predicate, splitting words that are too long on their own.
//!
//! # Quick Start
//!
//! ```rust
//! use linefit::wrap_label;
//!
//! let lines = wrap_label("This is a long label", 10).unwrap();
//! assert_eq!(lines, vec!["This is a", "long label"]);
//! ```
//!
//! # Custom Predicates
//!
//! The packer never measures text itself. Any `Fn(&[WordToken]) -> bool`
//! works, for example one backed by real font metrics:
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let line = tokens_from_words(to_words("fits in five"), WordType::Normal);
//! let fits = |candidate: &[WordToken]| line_text(candidate).len() <= 5;
//!
//! let lines = split_line_to_fit_width(&line, fits).unwrap();
//! let texts: Vec<String> = lines.iter().map(|l| line_text(l)).collect();
//! assert_eq!(texts, vec!["fits", "in", "five"]);
//! ```

pub mod core;
pub mod text;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        fits_graphemes, fits_width, line_text, to_graphemes, to_words, tokens_from_words,
        FallbackSegmenter, Line, Measure, Segmenter, SegmenterKind, UnicodeSegmenter,
        WordToken, WordType, WrapConfig, WrapError,
    };
    pub use crate::text::{
        markdown_to_lines, split_line_to_fit_width, split_word_to_fit_width, LineWrapper,
        TextWrapper,
    };
}

/// Wrap plain text to a maximum width in terminal columns
///
/// Hard line breaks in the input are kept; markup is not interpreted. A
/// `max_width` of 0 disables wrapping.
///
/// # Example
/// ```rust
/// use linefit::wrap_label;
///
/// let lines = wrap_label("one two three four five", 8).unwrap();
/// assert_eq!(lines, vec!["one two", "three", "four", "five"]);
/// ```
pub fn wrap_label(label: &str, max_width: usize) -> anyhow::Result<Vec<String>> {
    let config = WrapConfig::new(max_width).with_markdown(false);
    Ok(text::TextWrapper::new(config).wrap_to_strings(label)?)
}

/// Wrap a styled label, keeping the style of every token
///
/// # Example
/// ```rust
/// use linefit::{wrap_markdown, WordType, WrapConfig};
///
/// let lines = wrap_markdown("**Start** here", &WrapConfig::new(6)).unwrap();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0][0].word_type, WordType::Bold);
/// ```
pub fn wrap_markdown(label: &str, config: &WrapConfig) -> anyhow::Result<Vec<Line>> {
    let config = config.with_markdown(true);
    Ok(text::TextWrapper::new(config).wrap(label)?)
}
