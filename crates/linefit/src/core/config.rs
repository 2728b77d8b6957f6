//! Wrapping configuration

use super::{Measure, SegmenterKind, WordToken};

/// Default maximum line width, matching the common diagram label width
pub const DEFAULT_MAX_WIDTH: usize = 200;

/// Settings for the high-level text wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrapConfig {
    /// Maximum line size in `measure` units; 0 disables wrapping
    pub max_width: usize,
    /// Unit the maximum is expressed in
    pub measure: Measure,
    /// Segmentation strategy for words and graphemes
    pub segmenter: SegmenterKind,
    /// Read `**bold**`, `*italic*` and `<br>` markup in labels
    pub markdown: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            measure: Measure::default(),
            segmenter: SegmenterKind::default(),
            markdown: true,
        }
    }
}

impl WrapConfig {
    pub fn new(max_width: usize) -> Self {
        Self::default().with_max_width(max_width)
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    pub fn with_segmenter(mut self, segmenter: SegmenterKind) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    /// Returns true if wrapping is disabled
    pub fn is_unlimited(&self) -> bool {
        self.max_width == 0
    }

    /// The fit predicate described by this config
    pub fn fits(&self, line: &[WordToken]) -> bool {
        self.is_unlimited() || self.measure.measure(line) <= self.max_width
    }
}
