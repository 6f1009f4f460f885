//! Lexical errors.
//!
//! Every error is fatal to the scan that raised it. An error carries:
//!
//! - the kind of malformed input that was found
//! - the character offset (and line) where it was detected
//! - a snippet of the surrounding source with `<---` marking the offset

pub mod errors;
