//! Extraction options and configuration.

/// Options for extracting text from HTML documents.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// How nested ignorable elements are tracked.
    pub nested: NestedMode,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nested-element tracking mode.
    pub fn with_nested(mut self, mode: NestedMode) -> Self {
        self.nested = mode;
        self
    }

    /// Track ignorable elements with a depth counter instead of a flag.
    pub fn depth_tracked(mut self) -> Self {
        self.nested = NestedMode::Depth;
        self
    }
}

/// How the extractor tracks being inside `style`/`script` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedMode {
    /// Single boolean flag. Any `</style>` or `</script>` end tag clears it,
    /// even a stray one with no matching start tag. This matches the output
    /// of the classic flag-based extractors this tool replaces.
    #[default]
    Flag,
    /// Saturating depth counter. A stray end tag with no open ignorable
    /// element has no effect, and nested ignorable start tags stay ignored
    /// until every one of them is closed.
    ///
    /// Under the built-in tokenizer driver the two modes produce identical
    /// output: an ignorable element's body is consumed as raw text, so its
    /// start tag is only ever paired with its matching end tag. The counter
    /// matters for callers that feed a `TextExtractor` their own token
    /// stream, where nested or stray tags can actually reach the tracker.
    Depth,
}
