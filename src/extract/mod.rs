//! HTML text extraction.
//!
//! The extractor drives html5ever's streaming tokenizer over a document and
//! collects its visible text: character data outside `<style>` and `<script>`
//! elements, normalized into clean word-separated chunks, in document order.
//! Markup never causes an error; the tokenizer is lenient and unterminated
//! constructs at end of input are simply left as they are.
//!
//! # Example
//!
//! ```
//! use unhtml::extract::extract;
//!
//! let chunks = extract("<p>Hello</p><script>alert('x')</script><p>World</p>");
//! assert_eq!(chunks, vec!["Hello", "World"]);
//! ```

mod context;
mod options;
mod sink;

pub use options::{ExtractOptions, NestedMode};
pub use sink::TextExtractor;

use html5ever::tendril::SliceExt;
use html5ever::tokenizer::{BufferQueue, Tokenizer, TokenizerOpts};

/// Extract the visible text of an HTML document with default options.
pub fn extract(html: &str) -> Vec<String> {
    extract_with_options(html, ExtractOptions::default())
}

/// Extract the visible text of an HTML document.
///
/// Feeds the whole source through the tokenizer with a fresh
/// [`TextExtractor`] session and returns the ordered chunk sequence.
pub fn extract_with_options(html: &str, options: ExtractOptions) -> Vec<String> {
    let input = BufferQueue::default();
    input.push_back(html.to_tendril());

    let tokenizer = Tokenizer::new(TextExtractor::new(options), TokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.into_chunks()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_content_suppressed() {
        let chunks = extract("<p>Hello</p><script>alert('x')</script><p>World</p>");
        assert_eq!(chunks, vec!["Hello", "World"]);
    }

    #[test]
    fn test_style_content_suppressed() {
        let chunks = extract("<style>.a{color:red}</style><div>Visible Text</div>");
        assert_eq!(chunks, vec!["Visible Text"]);
    }

    #[test]
    fn test_plain_text_round_trip() {
        assert_eq!(extract("Hello World"), vec!["Hello World"]);
    }

    #[test]
    fn test_blank_chunks_filtered() {
        let chunks = extract("<p>   !!!   </p><p>kept</p>");
        assert_eq!(chunks, vec!["kept"]);
    }

    #[test]
    fn test_entities_decoded_within_run() {
        // Entity decoding splits the run into several character tokens; they
        // must still come out as one chunk.
        assert_eq!(extract("<p>a &amp; b</p>"), vec!["a b"]);
    }

    #[test]
    fn test_unterminated_script_at_eof() {
        let chunks = extract("<p>before</p><script>var x = 1;");
        assert_eq!(chunks, vec!["before"]);
    }

    #[test]
    fn test_attributes_ignored() {
        let chunks = extract(r#"<div class="x" data-v="<script>">text</div>"#);
        assert_eq!(chunks, vec!["text"]);
    }

    #[test]
    fn test_idempotent() {
        let html = "<html><body><h1>Title</h1><script>x()</script><p>Body, text</p></body></html>";
        assert_eq!(extract(html), extract(html));
        assert_eq!(extract(html), vec!["Title", "Body text"]);
    }

    #[test]
    fn test_trailing_punctuation_becomes_space() {
        // Edges are trimmed before non-word runs collapse, so punctuation at
        // a chunk edge leaves a space rather than disappearing.
        assert_eq!(extract("<p>Title!</p>"), vec!["Title "]);
    }

    #[test]
    fn test_depth_mode_option() {
        let html = "<div>a</div><script>s()</script><div>b</div>";
        let chunks = extract_with_options(html, ExtractOptions::new().depth_tracked());
        assert_eq!(chunks, vec!["a", "b"]);
    }
}
