//! `//` and `#` line comments, `/* */` block comments.

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN, TRACE_ATTEMPT,
};

use super::{
    lexer::Lexer,
    machine::{run, Machine, Outcome, Step},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentState {
    Start,
    /// Saw `/`: a comment opener or a division.
    SingleSlash,
    Inline,
    Block,
    BlockStar,
}

impl Machine for CommentState {
    fn step(self, ch: char) -> Step<Self> {
        match (self, ch) {
            (CommentState::Start, '/') => Step::Shift(CommentState::SingleSlash),
            (CommentState::Start, '#') => Step::Shift(CommentState::Inline),
            (CommentState::Start, _) => Step::Decline,

            (CommentState::SingleSlash, '/') => Step::Shift(CommentState::Inline),
            (CommentState::SingleSlash, '*') => Step::Shift(CommentState::Block),
            (CommentState::SingleSlash, _) => Step::Decline,

            (CommentState::Inline, '\n') => Step::Stop,
            (CommentState::Inline, _) => Step::Shift(self),

            (CommentState::Block, '*') => Step::Shift(CommentState::BlockStar),
            (CommentState::Block, _) => Step::Shift(self),

            (CommentState::BlockStar, '/') => Step::Finish(self),
            (CommentState::BlockStar, '*') => Step::Shift(self),
            (CommentState::BlockStar, _) => Step::Shift(CommentState::Block),
        }
    }

    fn at_eof(self) -> Step<Self> {
        match self {
            CommentState::Inline => Step::Stop,
            CommentState::Block | CommentState::BlockStar => {
                Step::Fail(ErrorImpl::UnterminatedComment)
            }
            CommentState::Start | CommentState::SingleSlash => Step::Decline,
        }
    }
}

impl Lexer {
    /// Tries a comment at a `/` or `#`. A `/` not followed by `/` or `*`
    /// is declined with the cursor untouched.
    pub(crate) fn try_extract_comment(&mut self) -> Result<Option<Token>, Error> {
        TRACE_ATTEMPT!(self, "comment");

        match run(&mut self.cursor, CommentState::Start) {
            Ok(Outcome::Accepted { lexeme, .. }) => Ok(Some(MK_TOKEN!(TokenKind::Comment, lexeme))),
            Ok(Outcome::Declined) => Ok(None),
            Err(stuck) => Err(self.raise(stuck)),
        }
    }
}
