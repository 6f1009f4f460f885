//! Operators and punctuation.
//!
//! Operators are matched greedily by an automaton whose first character
//! picks a branch. Punctuation forms are few and fixed, so they are
//! matched by direct lookahead instead.

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN, TRACE_ATTEMPT,
};

use super::{
    lexer::Lexer,
    machine::{run, Machine, Outcome, Step, Stuck},
    symbols::{is_operator_symbol, is_punctuation_symbol},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperatorState {
    Start,
    /// `+ - * / % .`, optionally followed by `=`.
    Arithmetic,
    Less,
    LessEqual,
    Greater,
    Assignment,
    DoubleEqual,
    Not,
    NotEqual,
    /// `&` or `|`; doubles only with itself.
    Logical(char),
    Question,
}

impl OperatorState {
    fn name(self) -> &'static str {
        match self {
            OperatorState::Start => "start of",
            OperatorState::Arithmetic => "arithmetic",
            OperatorState::Less => "less",
            OperatorState::LessEqual => "less equal",
            OperatorState::Greater => "greater",
            OperatorState::Assignment => "assignment",
            OperatorState::DoubleEqual => "double equal",
            OperatorState::Not => "not",
            OperatorState::NotEqual => "not equal",
            OperatorState::Logical(_) => "logical",
            OperatorState::Question => "question mark",
        }
    }
}

impl Machine for OperatorState {
    fn step(self, ch: char) -> Step<Self> {
        use OperatorState::*;

        match (self, ch) {
            (Start, '+' | '-' | '*' | '/' | '%' | '.') => Step::Shift(Arithmetic),
            (Start, '<') => Step::Shift(Less),
            (Start, '>') => Step::Shift(Greater),
            (Start, '=') => Step::Shift(Assignment),
            (Start, '!') => Step::Shift(Not),
            (Start, '&' | '|') => Step::Shift(Logical(ch)),
            (Start, '?') => Step::Shift(Question),
            (Start, ':' | '~' | '^' | '@') => Step::Finish(Start),

            (Arithmetic, '=') => Step::Finish(self),
            (Less, '=') => Step::Shift(LessEqual),
            (Less, '<' | '>') => Step::Finish(self),
            (LessEqual, '>') => Step::Finish(self),
            (Greater, '=' | '>') => Step::Finish(self),
            (Assignment, '=') => Step::Shift(DoubleEqual),
            (DoubleEqual, '=') => Step::Finish(self),
            (Not, '=') => Step::Shift(NotEqual),
            (NotEqual, '=') => Step::Finish(self),
            (Logical(first), _) if ch == first => Step::Finish(self),
            (Question, '?') => Step::Finish(self),

            // The shorter form stands when the next character cannot
            // continue an operator at all.
            (Start, _) => Step::Fail(self.unexpected(ch)),
            (_, _) if !is_operator_symbol(ch) => Step::Stop,
            (_, _) => Step::Fail(self.unexpected(ch)),
        }
    }

    fn at_eof(self) -> Step<Self> {
        Step::Stop
    }
}

impl OperatorState {
    fn unexpected(self, found: char) -> ErrorImpl {
        ErrorImpl::UnexpectedOperatorContinuation {
            operator: self.name(),
            found,
        }
    }
}

impl Lexer {
    /// Extracts the longest operator starting at the cursor.
    pub(crate) fn extract_operator(&mut self) -> Result<Token, Error> {
        TRACE_ATTEMPT!(self, "operator");

        match run(&mut self.cursor, OperatorState::Start) {
            Ok(Outcome::Accepted { lexeme, .. }) => Ok(MK_TOKEN!(TokenKind::Operator, lexeme)),
            Ok(Outcome::Declined) => {
                let found = self.cursor.current().unwrap_or_default();
                Err(self.raise(Stuck {
                    error: OperatorState::Start.unexpected(found),
                    offset: self.cursor.pos(),
                }))
            }
            Err(stuck) => Err(self.raise(stuck)),
        }
    }

    /// Tries `::`, `=>`, `->`, `?->`, `...` and the single-character
    /// separators `; , [ ] { } ( )`. Characters that are operators on
    /// their own are left alone unless the full sequence follows.
    pub(crate) fn try_extract_punctuation(&mut self) -> Option<Token> {
        TRACE_ATTEMPT!(self, "punctuation");

        let ch = self.cursor.current()?;
        let next = self.cursor.peek(1);
        let after = self.cursor.peek(2);

        let lexeme = match ch {
            ':' if next == Some(':') => "::".to_string(),
            '=' | '-' if next == Some('>') => format!("{}>", ch),
            '?' if next == Some('-') && after == Some('>') => "?->".to_string(),
            '.' if next == Some('.') && after == Some('.') => "...".to_string(),
            ':' | '=' | '-' | '?' | '.' | '>' => return None,
            _ if is_punctuation_symbol(ch) => ch.to_string(),
            _ => return None,
        };

        self.cursor.advance_n(lexeme.len() - 1);
        Some(MK_TOKEN!(TokenKind::Punctuation, lexeme))
    }
}
