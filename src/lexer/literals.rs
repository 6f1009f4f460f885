//! Strings, numbers and booleans.

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN, TRACE_ATTEMPT,
};

use super::{
    lexer::Lexer,
    machine::{run, Machine, Outcome, Step, Stuck},
    tokens::{Token, TokenKind, BOOLEAN_LITERALS},
};

/// Quoted string. The body keeps the opening quote so the matching one
/// can be recognised; no escapes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    Start,
    Body(char),
}

impl Machine for StringState {
    fn step(self, ch: char) -> Step<Self> {
        match self {
            StringState::Start => Step::Shift(StringState::Body(ch)),
            StringState::Body(quote) if ch == quote => Step::Finish(self),
            StringState::Body(_) if ch == '\n' => Step::Fail(ErrorImpl::UnterminatedString),
            StringState::Body(_) => Step::Shift(self),
        }
    }

    fn at_eof(self) -> Step<Self> {
        Step::Fail(ErrorImpl::UnterminatedString)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    LeadingZero,
    IntegerPart,
    Float,
}

impl Machine for NumberState {
    fn step(self, ch: char) -> Step<Self> {
        match self {
            NumberState::Start if ch == '0' => Step::Shift(NumberState::LeadingZero),
            NumberState::Start => Step::Shift(NumberState::IntegerPart),
            NumberState::LeadingZero if ch == '.' => Step::Shift(NumberState::Float),
            NumberState::LeadingZero => Step::Fail(ErrorImpl::LeadingZero),
            NumberState::IntegerPart if ch.is_ascii_digit() => Step::Shift(self),
            NumberState::IntegerPart if ch == '.' => Step::Shift(NumberState::Float),
            NumberState::Float if ch.is_ascii_digit() => Step::Shift(self),
            NumberState::IntegerPart | NumberState::Float => Step::Stop,
        }
    }

    fn at_eof(self) -> Step<Self> {
        // A lone `0` closing the input is a valid integer.
        Step::Stop
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlphaRun {
    Start,
    Body,
}

impl Machine for AlphaRun {
    fn step(self, ch: char) -> Step<Self> {
        match self {
            _ if ch.is_ascii_alphabetic() => Step::Shift(AlphaRun::Body),
            AlphaRun::Start => Step::Decline,
            AlphaRun::Body => Step::Stop,
        }
    }

    fn at_eof(self) -> Step<Self> {
        Step::Stop
    }
}

impl Lexer {
    /// Extracts a quoted string, quotes included. The cursor must be on
    /// the opening quote.
    pub(crate) fn extract_string(&mut self) -> Result<Token, Error> {
        TRACE_ATTEMPT!(self, "string");

        match run(&mut self.cursor, StringState::Start) {
            Ok(Outcome::Accepted { lexeme, .. }) => Ok(MK_TOKEN!(TokenKind::String, lexeme)),
            Ok(Outcome::Declined) => Err(self.raise(Stuck {
                error: ErrorImpl::UnterminatedString,
                offset: self.cursor.pos(),
            })),
            Err(stuck) => Err(self.raise(stuck)),
        }
    }

    /// Extracts an integer or a float. A float needs the dot but not the
    /// fraction, so `123.` is a float.
    pub(crate) fn extract_number(&mut self) -> Result<Token, Error> {
        TRACE_ATTEMPT!(self, "number");

        match run(&mut self.cursor, NumberState::Start) {
            Ok(Outcome::Accepted {
                state: NumberState::Float,
                lexeme,
            }) => Ok(MK_TOKEN!(TokenKind::Float, lexeme)),
            Ok(Outcome::Accepted { lexeme, .. }) => Ok(MK_TOKEN!(TokenKind::Integer, lexeme)),
            Ok(Outcome::Declined) => Err(self.raise(Stuck {
                error: ErrorImpl::LeadingZero,
                offset: self.cursor.pos(),
            })),
            Err(stuck) => Err(self.raise(stuck)),
        }
    }

    /// Tries `true` / `false`. The whole alphabetic run must match; on a
    /// mismatch the cursor goes back to where it started.
    pub(crate) fn try_extract_boolean(&mut self) -> Option<Token> {
        TRACE_ATTEMPT!(self, "boolean");

        let mark = self.cursor.mark();
        match run(&mut self.cursor, AlphaRun::Start) {
            Ok(Outcome::Accepted { lexeme, .. }) if BOOLEAN_LITERALS.contains(&lexeme.as_str()) => {
                Some(MK_TOKEN!(TokenKind::Boolean, lexeme))
            }
            Ok(Outcome::Accepted { .. }) => {
                self.cursor.reset(mark);
                None
            }
            Ok(Outcome::Declined) | Err(_) => None,
        }
    }
}
