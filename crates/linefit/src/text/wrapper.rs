//! Label wrapping pipeline
//!
//! Connects the pieces: text is cut at hard breaks, each line is turned into
//! word tokens (through the markup reader or the configured segmenter), and
//! every line is packed with the predicate described by [`WrapConfig`].

use tracing::{debug, info, span, Level};

use super::markup::markdown_to_lines;
use super::packer::LineWrapper;
use crate::core::{line_text, tokens_from_words, Line, Segmenter, WordType, WrapConfig, WrapError};

/// Wraps whole labels according to a [`WrapConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TextWrapper {
    config: WrapConfig,
    packer: LineWrapper,
}

impl TextWrapper {
    pub fn new(config: WrapConfig) -> Self {
        Self {
            config,
            packer: LineWrapper::with_segmenter(config.segmenter),
        }
    }

    pub fn config(&self) -> &WrapConfig {
        &self.config
    }

    /// Break text into unpacked lines of tokens
    ///
    /// With markdown enabled the markup reader is used; otherwise the text is
    /// split on `\n` and `\r` and each line is segmented into words by the
    /// configured segmenter. Empty lines are dropped.
    pub fn lines(&self, text: &str) -> Result<Vec<Line>, WrapError> {
        if self.config.markdown {
            return markdown_to_lines(text);
        }

        let segmenter = self.packer.segmenter();
        Ok(text
            .split(['\n', '\r'])
            .filter(|raw| !raw.is_empty())
            .map(|raw| tokens_from_words(segmenter.words(raw), WordType::Normal))
            .collect())
    }

    /// Wrap text into packed lines
    pub fn wrap(&self, text: &str) -> Result<Vec<Line>, WrapError> {
        let wrap_span = span!(
            Level::INFO,
            "wrap",
            input_len = text.len(),
            max_width = self.config.max_width,
            segmenter = self.packer.segmenter().name()
        );
        let _enter = wrap_span.enter();

        let lines = self.lines(text)?;
        debug!(lines = lines.len(), "Split text at hard breaks");

        let config = self.config;
        let mut packed = Vec::with_capacity(lines.len());
        for line in &lines {
            packed.extend(
                self.packer
                    .split_line_to_fit_width(line, |candidate| config.fits(candidate))?,
            );
        }

        info!(
            input_lines = lines.len(),
            output_lines = packed.len(),
            "Wrapped text"
        );
        Ok(packed)
    }

    /// Wrap text and return the visible text of each line
    pub fn wrap_to_strings(&self, text: &str) -> Result<Vec<String>, WrapError> {
        Ok(self.wrap(text)?.iter().map(|line| line_text(line)).collect())
    }
}
