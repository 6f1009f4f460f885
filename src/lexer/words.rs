//! Variables (`$name`) and bare words.

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN, TRACE_ATTEMPT,
};

use super::{
    lexer::Lexer,
    machine::{run, Machine, Outcome, Step, Stuck},
    symbols::{is_word_char, is_word_start},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentifierState {
    Start,
    FirstChar,
    Body,
}

impl Machine for IdentifierState {
    fn step(self, ch: char) -> Step<Self> {
        match self {
            IdentifierState::Start => Step::Shift(IdentifierState::FirstChar),
            IdentifierState::FirstChar if is_word_start(ch) => Step::Shift(IdentifierState::Body),
            IdentifierState::FirstChar => Step::Fail(ErrorImpl::MalformedIdentifier),
            IdentifierState::Body if is_word_char(ch) => Step::Shift(IdentifierState::Body),
            IdentifierState::Body => Step::Stop,
        }
    }

    fn at_eof(self) -> Step<Self> {
        match self {
            IdentifierState::Body => Step::Stop,
            _ => Step::Fail(ErrorImpl::MalformedIdentifier),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    Start,
    Body,
}

impl Machine for WordState {
    fn step(self, ch: char) -> Step<Self> {
        match self {
            WordState::Start => Step::Shift(WordState::Body),
            WordState::Body if is_word_char(ch) => Step::Shift(WordState::Body),
            WordState::Body => Step::Stop,
        }
    }

    fn at_eof(self) -> Step<Self> {
        Step::Stop
    }
}

impl Lexer {
    /// Extracts a `$`-prefixed variable. The cursor must be on the `$`.
    pub(crate) fn extract_identifier(&mut self) -> Result<Token, Error> {
        TRACE_ATTEMPT!(self, "identifier");

        match run(&mut self.cursor, IdentifierState::Start) {
            Ok(Outcome::Accepted { lexeme, .. }) => {
                Ok(MK_TOKEN!(TokenKind::Identifier, lexeme))
            }
            Ok(Outcome::Declined) => Err(self.raise(Stuck {
                error: ErrorImpl::MalformedIdentifier,
                offset: self.cursor.pos(),
            })),
            Err(stuck) => Err(self.raise(stuck)),
        }
    }

    /// Extracts a keyword, a word operator (`and`, `or`, `xor`) or `NULL`.
    /// Any other word is an error: plain identifiers need a `$`.
    pub(crate) fn extract_keyword(&mut self) -> Result<Token, Error> {
        TRACE_ATTEMPT!(self, "keyword");

        let word = match run(&mut self.cursor, WordState::Start) {
            Ok(Outcome::Accepted { lexeme, .. }) => lexeme,
            Ok(Outcome::Declined) => String::new(),
            Err(stuck) => return Err(self.raise(stuck)),
        };

        match RESERVED_LOOKUP.get(word.as_str()) {
            Some(kind) => Ok(MK_TOKEN!(*kind, word)),
            None => Err(self.raise(Stuck {
                error: ErrorImpl::UnrecognisedKeyword { word },
                offset: self.cursor.pos(),
            })),
        }
    }
}
