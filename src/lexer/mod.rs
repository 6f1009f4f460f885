//! Lexical analysis.
//!
//! This module contains the lexer that converts PHP-like source text into
//! a stream of tokens for a downstream parser. It handles:
//!
//! - Dispatching on the character under the cursor
//! - One finite automaton per token category (variables, keywords,
//!   strings, numbers, booleans, operators, punctuation, comments)
//! - Greedy longest match for operators
//! - Positional error reporting

mod comments;
mod literals;
mod operators;
mod words;

pub mod cursor;
pub mod lexer;
pub mod machine;
pub mod symbols;
pub mod tokens;
