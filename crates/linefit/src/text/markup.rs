//! Reading styled labels
//!
//! Diagram labels carry a small subset of markdown: `**bold**`, `__bold__`,
//! `*italic*`, hard breaks written as newlines or `<br>` tags, and the
//! `&#39;` entity. This module turns such a label into lines of word tokens
//! with explicit `" "` joiners, ready for the packer.
//!
//! Parsing happens in two passes: the label is first cut at hard breaks, then
//! each line is read as a run of styled spans.

use std::borrow::Cow;

use chumsky::prelude::*;
use tracing::{debug, span, trace, Level};

use crate::core::{Line, WordToken, WordType, WrapError};

const APOSTROPHE_ENTITY: &str = "&#39;";

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
struct StyledRun<'src> {
    text: Cow<'src, str>,
    word_type: WordType,
}

impl<'src> StyledRun<'src> {
    fn normal(text: impl Into<Cow<'src, str>>) -> Self {
        Self {
            text: text.into(),
            word_type: WordType::Normal,
        }
    }
}

fn decode_entities(text: &str) -> Cow<'_, str> {
    if text.contains(APOSTROPHE_ENTITY) {
        Cow::Owned(text.replace(APOSTROPHE_ENTITY, "'"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Emphasis must hug its content: `* x *` is not italic
fn is_flanked(body: &str) -> bool {
    !body.starts_with(char::is_whitespace) && !body.ends_with(char::is_whitespace)
}

/// `\r\n`, `\n`, or a `<br>` tag (`<br>`, `<br/>`, `<BR />`, ...)
fn line_break<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    let br_tag = just('<')
        .then(one_of("bB"))
        .then(one_of("rR"))
        .then(one_of(" \t").repeated())
        .then(just('/').or_not())
        .then(just('>'))
        .ignored();

    just("\r\n").ignored().or(just('\n').ignored()).or(br_tag)
}

fn lines_parser<'src>() -> impl Parser<'src, &'src str, Vec<&'src str>> {
    any()
        .and_is(line_break().not())
        .repeated()
        .to_slice()
        .separated_by(line_break())
        .collect::<Vec<_>>()
        .then_ignore(end())
}

fn emphasis<'src>(
    delimiter: &'static str,
    word_type: WordType,
) -> impl Parser<'src, &'src str, StyledRun<'src>> + Clone {
    just(delimiter)
        .ignore_then(
            any()
                .and_is(just(delimiter).not())
                .repeated()
                .at_least(1)
                .to_slice(),
        )
        .then_ignore(just(delimiter))
        .filter(|body: &&'src str| is_flanked(body))
        .map(move |body: &'src str| StyledRun {
            text: decode_entities(body),
            word_type,
        })
}

fn spans_parser<'src>() -> impl Parser<'src, &'src str, Vec<StyledRun<'src>>> {
    let apostrophe = just(APOSTROPHE_ENTITY).to(StyledRun::normal("'"));
    let plain = none_of("*_&")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(|text: &'src str| StyledRun::normal(text));
    // Unmatched delimiters are kept as text
    let literal = any().to_slice().map(|text: &'src str| StyledRun::normal(text));

    choice((
        emphasis("**", WordType::Bold),
        emphasis("__", WordType::Bold),
        emphasis("*", WordType::Italic),
        apostrophe,
        plain,
        literal,
    ))
    .repeated()
    .collect::<Vec<_>>()
    .then_ignore(end())
}

/// Accumulates styled text into word tokens and joiners
#[derive(Debug, Default)]
struct LineBuilder {
    tokens: Line,
    word: String,
    word_type: WordType,
    pending_space: bool,
}

impl LineBuilder {
    fn push(&mut self, span: StyledRun<'_>) {
        for c in span.text.chars() {
            if matches!(c, ' ' | '\t' | '\r') {
                self.flush_word();
                self.pending_space = !self.tokens.is_empty();
                continue;
            }
            if !self.word.is_empty() && self.word_type != span.word_type {
                self.flush_word();
            }
            if self.word.is_empty() {
                if self.pending_space {
                    self.tokens.push(WordToken::space());
                    self.pending_space = false;
                }
                self.word_type = span.word_type;
            }
            self.word.push(c);
        }
    }

    fn flush_word(&mut self) {
        if !self.word.is_empty() {
            let word = std::mem::take(&mut self.word);
            self.tokens.push(WordToken::new(word, self.word_type));
        }
    }

    fn finish(mut self) -> Line {
        self.flush_word();
        self.tokens
    }
}

/// Read one line of styled text (no hard breaks) into tokens
pub fn markdown_line_to_tokens(line: &str) -> Result<Line, WrapError> {
    let spans = spans_parser()
        .parse(line)
        .into_result()
        .map_err(|errors| WrapError::markup_error(format!("{:?}", errors)))?;

    let mut builder = LineBuilder::default();
    for span in spans {
        trace!(text = %span.text, word_type = %span.word_type, "Styled span");
        builder.push(span);
    }
    Ok(builder.finish())
}

/// Read a styled label into lines of word tokens
///
/// Blank lines are dropped, whitespace runs become a single `" "` joiner and
/// leading/trailing whitespace is trimmed.
///
/// # Example
/// ```
/// use linefit::core::{WordToken, WordType};
/// use linefit::text::markdown_to_lines;
///
/// let lines = markdown_to_lines("Hello **big**<br>world").unwrap();
/// assert_eq!(
///     lines,
///     vec![
///         vec![
///             WordToken::normal("Hello"),
///             WordToken::space(),
///             WordToken::new("big", WordType::Bold),
///         ],
///         vec![WordToken::normal("world")],
///     ]
/// );
/// ```
pub fn markdown_to_lines(text: &str) -> Result<Vec<Line>, WrapError> {
    let markup_span = span!(Level::DEBUG, "markdown_to_lines", input_len = text.len());
    let _enter = markup_span.enter();

    let raw_lines = lines_parser()
        .parse(text)
        .into_result()
        .map_err(|errors| WrapError::markup_error(format!("{:?}", errors)))?;

    let mut lines = Vec::with_capacity(raw_lines.len());
    for raw in raw_lines {
        let line = markdown_line_to_tokens(raw)?;
        if !line.is_empty() {
            lines.push(line);
        }
    }

    debug!(lines = lines.len(), "Read styled label");
    Ok(lines)
}
