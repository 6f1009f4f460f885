use std::fmt::Display;

use thiserror::Error;

/// Where a lexical error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Character offset into the source.
    pub offset: usize,
    /// 1-based line containing `offset`.
    pub line: u32,
}

impl Position {
    pub fn in_source(source: &[char], offset: usize) -> Self {
        let end = offset.min(source.len());
        let newlines = source[..end].iter().filter(|ch| **ch == '\n').count();

        Position {
            offset,
            line: newlines as u32 + 1,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at position: {}: {context}", .position.offset)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    context: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, context: String) -> Self {
        Error {
            internal_error: error_impl,
            position,
            context,
        }
    }

    /// Builds the error for `offset`, quoting the surrounding words.
    pub fn at(error_impl: ErrorImpl, source: &[char], offset: usize) -> Self {
        Error::new(
            error_impl,
            Position::in_source(source, offset),
            error_context(source, offset),
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The source around the error with `<---` inserted at the offset.
    pub fn get_context(&self) -> &str {
        &self.context
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedIdentifier => "MalformedIdentifier",
            ErrorImpl::UnrecognisedKeyword { .. } => "UnrecognisedKeyword",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::LeadingZero => "LeadingZero",
            ErrorImpl::UnexpectedOperatorContinuation { .. } => "UnexpectedOperatorContinuation",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedIdentifier => ErrorTip::Suggestion(String::from(
                "Variable names start with a letter or underscore after `$`",
            )),
            ErrorImpl::UnrecognisedKeyword { word } => ErrorTip::Suggestion(format!(
                "`{}` is not a keyword, did you forget the `$` of a variable?",
                word
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Close the string with its opening quote before the end of the line",
            )),
            ErrorImpl::LeadingZero => ErrorTip::Suggestion(String::from(
                "Remove the leading zero or add a decimal point",
            )),
            ErrorImpl::UnexpectedOperatorContinuation { .. } => ErrorTip::Suggestion(
                String::from("Separate adjacent operators with whitespace"),
            ),
            ErrorImpl::UnterminatedComment => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid first character in identifier")]
    MalformedIdentifier,
    #[error("unrecognized keyword: {word:?}")]
    UnrecognisedKeyword { word: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("leading zero must be followed by a decimal point")]
    LeadingZero,
    #[error("unexpected character {found:?} in {operator} operator")]
    UnexpectedOperatorContinuation { operator: &'static str, found: char },
    #[error("unterminated multi-line comment")]
    UnterminatedComment,
}

/// Quotes the whitespace-delimited words around `offset`.
///
/// The window starts one character either side of the offset and widens
/// until it meets a space or the edge of the source, so an offset sitting
/// on a space still shows its neighbours.
pub fn error_context(source: &[char], offset: usize) -> String {
    let len = source.len();
    let offset = offset.min(len);

    let mut start = offset;
    let mut end = offset;

    if offset > 0 {
        start -= 1;
    }
    if offset + 1 < len {
        end += 1;
    }
    while start > 0 && source[start] != ' ' {
        start -= 1;
    }
    while end < len && source[end] != ' ' {
        end += 1;
    }

    let mut context: String = source[start..offset].iter().collect();
    context.push_str("<---");
    context.extend(&source[offset..end]);
    context
}
