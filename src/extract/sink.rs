//! Token sink that accumulates normalized text from an HTML token stream.

use std::cell::RefCell;

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{TagKind, Token, TokenSink, TokenSinkResult};

use crate::normalize::Normalizer;

use super::context::{is_ignored_tag, TagContext};
use super::options::ExtractOptions;

/// Per-document extraction session.
///
/// Consumes the html5ever token stream for one document and accumulates the
/// visible text as an ordered sequence of normalized, non-blank chunks.
/// A session is never reused: construct a fresh one per document so an
/// unclosed `<script>` in one file cannot suppress text in the next.
pub struct TextExtractor {
    context: TagContext,
    normalizer: Normalizer,
    pending: RefCell<String>,
    chunks: RefCell<Vec<String>>,
}

impl TextExtractor {
    /// Create a session with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            context: TagContext::new(options.nested),
            normalizer: Normalizer::new(),
            pending: RefCell::new(String::new()),
            chunks: RefCell::new(Vec::new()),
        }
    }

    /// Normalize the buffered character-data run and append it if non-blank.
    ///
    /// The tokenizer may deliver one contiguous run of character data as
    /// several tokens (split around entities and buffer boundaries), so runs
    /// are buffered here and flushed as a single chunk at the next tag,
    /// comment, doctype, or end of input.
    fn flush(&self) {
        let raw = std::mem::take(&mut *self.pending.borrow_mut());
        if raw.is_empty() {
            return;
        }
        let normalized = self.normalizer.normalize(&raw);
        if !normalized.trim().is_empty() {
            self.chunks.borrow_mut().push(normalized);
        }
    }

    /// Consume the session and return the accumulated chunks in document order.
    pub fn into_chunks(self) -> Vec<String> {
        self.flush();
        self.chunks.into_inner()
    }
}

impl TokenSink for TextExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => {
                self.flush();
                match tag.kind {
                    TagKind::StartTag => {
                        self.context.on_start_tag(&tag.name);
                        if tag.self_closing {
                            // A self-closing tag opens and closes in one
                            // token; its element has no body to ignore.
                            self.context.on_end_tag(&tag.name);
                        } else if is_ignored_tag(&tag.name) {
                            // An ignorable element's body is raw text: switch
                            // the tokenizer out of the data state so CSS/JS
                            // content arrives as opaque character data until
                            // the matching end tag.
                            let kind = if &*tag.name == "script" {
                                RawKind::ScriptData
                            } else {
                                RawKind::Rawtext
                            };
                            return TokenSinkResult::RawData(kind);
                        }
                    }
                    TagKind::EndTag => self.context.on_end_tag(&tag.name),
                }
            }
            Token::CharacterTokens(data) => {
                if !self.context.in_ignored() {
                    self.pending.borrow_mut().push_str(&data);
                }
            }
            Token::NullCharacterToken => {
                if !self.context.in_ignored() {
                    self.pending.borrow_mut().push('\0');
                }
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) | Token::EOFToken => {
                self.flush();
            }
            // Tokenizer error notices never interrupt a character-data run.
            Token::ParseError(_) => {}
        }
        TokenSinkResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::options::NestedMode;
    use html5ever::tendril::SliceExt;
    use html5ever::tokenizer::Tag;
    use html5ever::LocalName;

    fn start_tag(name: &str) -> Token {
        Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name: LocalName::from(name),
            self_closing: false,
            attrs: vec![],
        })
    }

    fn end_tag(name: &str) -> Token {
        Token::TagToken(Tag {
            kind: TagKind::EndTag,
            name: LocalName::from(name),
            self_closing: false,
            attrs: vec![],
        })
    }

    fn chars(data: &str) -> Token {
        Token::CharacterTokens(data.to_tendril())
    }

    fn run(options: ExtractOptions, tokens: Vec<Token>) -> Vec<String> {
        let sink = TextExtractor::new(options);
        for token in tokens {
            let _ = sink.process_token(token, 0);
        }
        sink.into_chunks()
    }

    // A caller-supplied token stream, unlike the raw-text tokenizer, can
    // contain nested ignorable start tags. This is where the two tracking
    // modes diverge.
    fn nested_script_tokens() -> Vec<Token> {
        vec![
            start_tag("script"),
            start_tag("script"),
            chars("hidden"),
            end_tag("script"),
            chars("middle"),
            end_tag("script"),
            chars("after"),
        ]
    }

    #[test]
    fn test_flag_mode_resumes_after_first_nested_end_tag() {
        let chunks = run(
            ExtractOptions::new().with_nested(NestedMode::Flag),
            nested_script_tokens(),
        );
        assert_eq!(chunks, vec!["middle", "after"]);
    }

    #[test]
    fn test_depth_mode_stays_ignoring_until_all_closed() {
        let chunks = run(
            ExtractOptions::new().with_nested(NestedMode::Depth),
            nested_script_tokens(),
        );
        assert_eq!(chunks, vec!["after"]);
    }

    #[test]
    fn test_self_closing_ignorable_tag_has_no_body() {
        let mut tokens = vec![Token::TagToken(Tag {
            kind: TagKind::StartTag,
            name: LocalName::from("script"),
            self_closing: true,
            attrs: vec![],
        })];
        tokens.push(chars("still visible"));
        let chunks = run(ExtractOptions::default(), tokens);
        assert_eq!(chunks, vec!["still visible"]);
    }
}
