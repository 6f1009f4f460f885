//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `TRACE_ATTEMPT!` - Reports an extraction attempt when tracing is on

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Emits a debug event naming the category being tried and where, if the
/// lexer was asked to trace.
#[doc(hidden)]
#[macro_export]
macro_rules! TRACE_ATTEMPT {
    ($lexer:expr, $category:literal) => {
        if $lexer.trace {
            ::tracing::debug!(
                category = $category,
                position = $lexer.cursor.pos(),
                line = $lexer.cursor.line(),
                "extraction attempt"
            );
        }
    };
}
