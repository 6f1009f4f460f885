#![allow(clippy::module_inception)]

use std::fmt::Write;

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::{Error, ErrorImpl, ErrorTip, Position};
pub use lexer::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};

/// Finds the line holding the character at `position`.
///
/// Returns the 1-based line number, the line itself (newline included) and
/// the column of `position` inside it, or `None` past the end of `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

/// Renders an error the way the command line shows it:
///
/// ```text
/// Error: LeadingZero (Remove the leading zero or add a decimal point)
/// -> script.php
///   |
/// 1 | $x = 01;
///   | ------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) =
        get_line_at_position(source, error.get_position().offset)
    else {
        let _ = writeln!(out, "{}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    let _ = writeln!(out, "{}", error);

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\n$a = 1;\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 31).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(get_line_at_position(source, 100).is_none());
    }

    #[test]
    fn test_format_error() {
        let source = "$a = 1;\n  $x = 01;";
        let error = tokenize(source).unwrap_err();
        let rendered = format_error(&error, source, "test.php");

        let expected = "\
Error: LeadingZero (Remove the leading zero or add a decimal point)
-> test.php
  |
2 | $x = 01;
  | ------^
leading zero must be followed by a decimal point at position: 16:  0<---1;
";
        assert_eq!(rendered, expected);
    }
}
