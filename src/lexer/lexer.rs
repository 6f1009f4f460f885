use crate::{errors::errors::Error, MK_TOKEN};

use super::{
    cursor::Cursor,
    machine::Stuck,
    symbols::{is_operator_symbol, is_quote, is_word_start},
    tokens::{Token, TokenKind},
};

/// Single-pass scanner over one source text.
///
/// Usage: give it a source with [`Lexer::new`] or [`Lexer::set_source`],
/// then call [`Lexer::scan`]. Every successful scan ends with exactly one
/// [`TokenKind::EndOfInput`] token.
#[derive(Debug, Clone)]
pub struct Lexer {
    pub(crate) cursor: Cursor,
    pub(crate) trace: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            cursor: Cursor::new(source),
            trace: false,
        }
    }

    /// Replaces the source and rewinds to its start.
    pub fn set_source(&mut self, source: &str) {
        self.cursor = Cursor::new(source);
    }

    /// When set, every extraction attempt is reported as a `tracing` debug
    /// event. Tokenization is unaffected.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace;
    }

    pub fn with_trace(mut self, trace: bool) -> Lexer {
        self.set_trace(trace);
        self
    }

    /// Current line of the cursor, starting at 1.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    pub fn scan(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        while let Some(ch) = self.cursor.current() {
            // Extractors leave the cursor on the last character they
            // consumed, so the advance below always lands on fresh input.
            if let Some(token) = self.route(ch)? {
                tokens.push(token);
            }
            self.cursor.advance();
        }

        tokens.push(MK_TOKEN!(TokenKind::EndOfInput, String::new()));
        Ok(tokens)
    }

    /// Picks the extractor for `ch`. The order matters: comments must win
    /// over `/`, punctuation over the operator prefixes it shares, and
    /// booleans over keywords.
    fn route(&mut self, ch: char) -> Result<Option<Token>, Error> {
        if ch == '$' {
            return self.extract_identifier().map(Some);
        }

        if ch == '/' || ch == '#' {
            if let Some(token) = self.try_extract_comment()? {
                return Ok(Some(token));
            }
        }

        if let Some(token) = self.try_extract_punctuation() {
            return Ok(Some(token));
        }

        if let Some(token) = self.try_extract_boolean() {
            return Ok(Some(token));
        }

        if is_word_start(ch) {
            return self.extract_keyword().map(Some);
        }

        if is_quote(ch) {
            return self.extract_string().map(Some);
        }

        if ch.is_ascii_digit() {
            return self.extract_number().map(Some);
        }

        if is_operator_symbol(ch) {
            return self.extract_operator().map(Some);
        }

        Ok(None)
    }

    pub(crate) fn raise(&self, stuck: Stuck) -> Error {
        Error::at(stuck.error, self.cursor.source(), stuck.offset)
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).scan()
}
