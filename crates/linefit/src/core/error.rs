//! Core error types for text layout
//!
//! This module defines the error type shared by the segmenter, the markup
//! reader and the line packer.

use thiserror::Error;

/// Errors produced while turning label text into packed lines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("Line break in token {index}: {content:?} (split text on line breaks before packing)")]
    LineBreakInToken { index: usize, content: String },

    #[error("Markup error: {message}")]
    MarkupError { message: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}

impl WrapError {
    /// Create a new line-break precondition error
    pub fn line_break_in_token(index: usize, content: String) -> Self {
        Self::LineBreakInToken { index, content }
    }

    /// Create a new markup error
    pub fn markup_error(message: String) -> Self {
        Self::MarkupError { message }
    }

    /// Create a new configuration error
    pub fn invalid_config(message: String) -> Self {
        Self::InvalidConfig { message }
    }
}
