//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a parser front end would:
//! load a source text, scan it once and walk the resulting tokens.

use phplex::{tokenize, ErrorImpl, Lexer, TokenKind};

const PROGRAM: &str = r#"
/* Sum the even numbers. */
$total = 0.0;
foreach ($numbers, $n) {
    if ($n % 2 == 1 and $n !== NULL) {
        $total += $n; # accumulate
    }
}
echo $total <=> 10 ? 'big' : "small";
$obj?->$value ?? $fallback::$default;
"#;

#[test]
fn test_scan_program() {
    let tokens = tokenize(PROGRAM).unwrap();

    let count = |kind: TokenKind| tokens.iter().filter(|t| t.kind == kind).count();
    assert_eq!(count(TokenKind::Comment), 2);
    assert_eq!(count(TokenKind::Keyword), 3);
    assert_eq!(count(TokenKind::Null), 1);
    assert_eq!(count(TokenKind::Float), 1);
    assert_eq!(count(TokenKind::String), 2);
    assert_eq!(count(TokenKind::EndOfInput), 1);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);

    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    for expected in ["<=>", "!==", "+=", "and", "?->", "??", "::", "%", "=="] {
        assert!(values.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_significant_content_survives() {
    let tokens = tokenize(PROGRAM).unwrap();

    let joined: String = tokens
        .iter()
        .filter(|t| t.is_significant())
        .map(|t| t.value.as_str())
        .collect();

    let mut stripped = String::new();
    for line in PROGRAM.lines() {
        let line = match line.find('#') {
            Some(at) => &line[..at],
            None => line,
        };
        stripped.push_str(line);
    }
    let stripped = stripped.replace("/* Sum the even numbers. */", "");
    let stripped: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(joined, stripped);
}

#[test]
fn test_lexer_is_reusable() {
    let mut lexer = Lexer::new("$a = true;");
    let first = lexer.scan().unwrap();
    assert_eq!(first.len(), 5);

    lexer.set_source("$b = false;");
    let second = lexer.scan().unwrap();
    assert_eq!(second[0].value, "$b");
    assert_eq!(second[2].kind, TokenKind::Boolean);
}

#[test]
fn test_error_aborts_scan() {
    let error = tokenize("$ok = 1;\n$bad = 'open\n$never = 2;").unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(
        error.to_string(),
        "unterminated string literal at position: 21:  'open<---\n$never"
    );
}
