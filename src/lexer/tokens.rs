use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

pub const KEYWORDS: [&str; 11] = [
    "if", "else", "do", "while", "for", "foreach", "break", "continue", "function", "return",
    "echo",
];

/// Operators spelled as words.
pub const KEYWORD_OPERATORS: [&str; 3] = ["and", "or", "xor"];

pub const NULL_LITERAL: &str = "NULL";

pub const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];

lazy_static! {
    /// Exact-match lookup for every bare word the lexer accepts.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for keyword in KEYWORDS {
            map.insert(keyword, TokenKind::Keyword);
        }
        for operator in KEYWORD_OPERATORS {
            map.insert(operator, TokenKind::Operator);
        }
        map.insert(NULL_LITERAL, TokenKind::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Comment,
    Keyword,
    Operator,
    Identifier,
    Punctuation,
    Integer,
    Float,
    String,
    Boolean,
    Null,
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "End of file."),
            kind => write!(f, "{}: {}", kind, self.value),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Comments and the end-of-input sentinel carry no program content.
    pub fn is_significant(&self) -> bool {
        !self.is_one_of_many(&[TokenKind::Comment, TokenKind::EndOfInput])
    }

    pub fn debug(&self) {
        println!("{}", self);
    }
}
