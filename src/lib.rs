//! # unhtml
//!
//! Batch HTML text extraction for corpus preparation.
//!
//! This library converts directory trees of HTML documents into plain-text
//! files: markup, stylesheets, and scripts are stripped, and the visible
//! character data is normalized into clean word-separated chunks, one per
//! output line, in document order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unhtml::{convert_dir, ConvertOptions};
//!
//! fn main() -> unhtml::Result<()> {
//!     // Convert every .html under htmlPages/ into txt/<name>.txt
//!     let summary = convert_dir("htmlPages".as_ref(), &ConvertOptions::default())?;
//!     println!("converted {} files", summary.converted_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Streaming extraction**: html5ever tokenizer, no DOM construction
//! - **Ignorable elements**: `<style>` and `<script>` bodies are suppressed
//! - **Normalization**: non-word runs collapse to single spaces, edges trimmed
//! - **Lenient input**: malformed markup degrades gracefully, never errors
//! - **Parallel processing**: Rayon fan-out across independent documents

pub mod convert;
pub mod discover;
pub mod error;
pub mod extract;
pub mod normalize;

// Re-export commonly used types
pub use convert::{convert_dir, convert_file, ConvertOptions, ConvertSummary, ErrorMode};
pub use error::{Error, Result};
pub use extract::{extract_with_options, ExtractOptions, NestedMode, TextExtractor};
pub use normalize::Normalizer;

use std::path::Path;

/// Extract the visible text of an HTML document as ordered chunks.
///
/// # Example
///
/// ```
/// use unhtml::extract_text;
///
/// let chunks = extract_text("<p>Hello</p><script>x()</script><p>World</p>");
/// assert_eq!(chunks, vec!["Hello", "World"]);
/// ```
pub fn extract_text(html: &str) -> Vec<String> {
    extract::extract(html)
}

/// Read an HTML file and extract its visible text as ordered chunks.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let html = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            Error::NonUtf8 {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(extract_text(&html))
}

/// Builder for configuring and running HTML-to-text conversion.
///
/// # Example
///
/// ```no_run
/// use unhtml::Unhtml;
///
/// let summary = Unhtml::new()
///     .with_output_dir("corpus_txt")
///     .depth_tracked()
///     .strict()
///     .convert_dir("htmlPages")?;
/// # Ok::<(), unhtml::Error>(())
/// ```
pub struct Unhtml {
    extract_options: ExtractOptions,
    convert_options: ConvertOptions,
}

impl Unhtml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            convert_options: ConvertOptions::default(),
        }
    }

    /// Track nested ignorable elements with a depth counter.
    pub fn depth_tracked(mut self) -> Self {
        self.extract_options = self.extract_options.depth_tracked();
        self
    }

    /// Fail the whole run on the first per-file error.
    pub fn strict(mut self) -> Self {
        self.convert_options = self.convert_options.strict();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.convert_options = self.convert_options.sequential();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.convert_options = self.convert_options.with_output_dir(dir);
        self
    }

    /// Extract text from an HTML string with the configured options.
    pub fn extract(&self, html: &str) -> Vec<String> {
        extract_with_options(html, self.extract_options.clone())
    }

    /// Convert a single HTML file.
    pub fn convert_file<P: AsRef<Path>>(&self, input: P) -> Result<std::path::PathBuf> {
        let options = self.merged_options();
        convert::convert_file(input.as_ref(), &options)
    }

    /// Convert every `.html` file under `root`.
    pub fn convert_dir<P: AsRef<Path>>(&self, root: P) -> Result<ConvertSummary> {
        let options = self.merged_options();
        convert::convert_dir(root.as_ref(), &options)
    }

    fn merged_options(&self) -> ConvertOptions {
        self.convert_options
            .clone()
            .with_extract_options(self.extract_options.clone())
    }
}

impl Default for Unhtml {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhtml_builder() {
        let unhtml = Unhtml::new().depth_tracked().strict().sequential();

        assert_eq!(unhtml.extract_options.nested, NestedMode::Depth);
        assert_eq!(unhtml.convert_options.error_mode, ErrorMode::Strict);
        assert!(!unhtml.convert_options.parallel);
    }

    #[test]
    fn test_unhtml_builder_default() {
        let unhtml = Unhtml::default();
        assert_eq!(unhtml.extract_options.nested, NestedMode::Flag);
        assert_eq!(unhtml.convert_options.error_mode, ErrorMode::Lenient);
    }

    #[test]
    fn test_builder_merges_extract_options() {
        let unhtml = Unhtml::new().depth_tracked();
        let options = unhtml.merged_options();
        assert_eq!(options.extract.nested, NestedMode::Depth);
    }

    #[test]
    fn test_extract_text_suppresses_script() {
        let chunks = extract_text("<p>Hello</p><script>alert('x')</script><p>World</p>");
        assert_eq!(chunks, vec!["Hello", "World"]);
    }
}
