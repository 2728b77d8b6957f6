//! Core type definitions for text layout
//!
//! Word tokens carry a span of label text together with its style, and a
//! line is simply the ordered tokens that end up on one visual row.

use std::fmt;
use std::str::FromStr;

use super::WrapError;

/// Style tag carried by a word token
///
/// Downstream renderers match on this exhaustively to pick a font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum WordType {
    /// Regular text, also used for space joiners
    #[default]
    Normal,
    /// Strong emphasis (`**text**` or `__text__`)
    Bold,
    /// Emphasis (`*text*`)
    Italic,
}

impl WordType {
    /// Get all valid type names
    pub fn variants() -> &'static [&'static str] {
        &["normal", "bold", "italic"]
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordType::Normal => write!(f, "normal"),
            WordType::Bold => write!(f, "bold"),
            WordType::Italic => write!(f, "italic"),
        }
    }
}

impl FromStr for WordType {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(WordType::Normal),
            "bold" | "strong" => Ok(WordType::Bold),
            "italic" | "em" => Ok(WordType::Italic),
            _ => Err(WrapError::invalid_config(format!("Unknown word type: {}", s))),
        }
    }
}

/// A styled span of text, or a single space used as an inter-word joiner
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WordToken {
    pub content: String,
    pub word_type: WordType,
}

impl WordToken {
    pub fn new(content: impl Into<String>, word_type: WordType) -> Self {
        Self {
            content: content.into(),
            word_type,
        }
    }

    /// Create an unstyled token
    pub fn normal(content: impl Into<String>) -> Self {
        Self::new(content, WordType::Normal)
    }

    /// The explicit single-space joiner token
    pub fn space() -> Self {
        Self::normal(" ")
    }

    /// Returns true if this token is exactly one space character
    pub fn is_space(&self) -> bool {
        self.content == " "
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns true if the content contains a hard line break
    pub fn has_line_break(&self) -> bool {
        self.content.contains(['\n', '\r'])
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// An ordered sequence of word tokens rendered on one row
pub type Line = Vec<WordToken>;

/// Concatenate the contents of a line's tokens into its visible text
pub fn line_text(line: &[WordToken]) -> String {
    line.iter().map(|token| token.content.as_str()).collect()
}

/// Build tokens sharing one style from pre-segmented words
pub fn tokens_from_words<'a, I>(words: I, word_type: WordType) -> Line
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .map(|word| {
            if word == " " {
                WordToken::space()
            } else {
                WordToken::new(word, word_type)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_type_display_round_trips() {
        for name in WordType::variants() {
            let parsed = WordType::from_str(name).unwrap();
            assert_eq!(parsed.to_string(), *name);
        }
    }

    #[test]
    fn test_word_type_aliases() {
        assert_eq!(WordType::from_str("strong").unwrap(), WordType::Bold);
        assert_eq!(WordType::from_str("EM").unwrap(), WordType::Italic);
        assert!(WordType::from_str("underline").is_err());
    }

    #[test]
    fn test_space_token() {
        let space = WordToken::space();
        assert!(space.is_space());
        assert_eq!(space.word_type, WordType::Normal);
        assert!(!WordToken::normal("  ").is_space());
        assert!(!WordToken::new(" ", WordType::Bold).content.is_empty());
    }

    #[test]
    fn test_has_line_break() {
        assert!(WordToken::normal("a\nb").has_line_break());
        assert!(WordToken::normal("a\r").has_line_break());
        assert!(!WordToken::normal("ab").has_line_break());
    }

    #[test]
    fn test_line_text() {
        let line = vec![
            WordToken::normal("hello"),
            WordToken::space(),
            WordToken::new("world", WordType::Bold),
        ];
        assert_eq!(line_text(&line), "hello world");
        assert_eq!(line_text(&[]), "");
    }

    #[test]
    fn test_tokens_from_words_keeps_joiners_normal() {
        let tokens = tokens_from_words(["a", " ", "b"], WordType::Italic);
        assert_eq!(
            tokens,
            vec![
                WordToken::new("a", WordType::Italic),
                WordToken::space(),
                WordToken::new("b", WordType::Italic),
            ]
        );
    }
}
