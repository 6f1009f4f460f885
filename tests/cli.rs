//! Command-line tests for the `phplex` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn phplex() -> Command {
    Command::cargo_bin("phplex").unwrap()
}

#[test]
fn test_code_argument() {
    phplex()
        .args(["--code", "$var1 = \"test\";"])
        .assert()
        .success()
        .stdout(
            "Identifier: $var1\n\
             Operator: =\n\
             String: \"test\"\n\
             Punctuation: ;\n\
             End of file.\n",
        );
}

#[test]
fn test_debug_sample() {
    phplex()
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Comment: # This is also a comment\nInteger: 456\n"));
}

#[test]
fn test_filename_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "// header\necho $x;").unwrap();

    phplex()
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment: // header\nKeyword: echo\nIdentifier: $x\n"));
}

#[test]
fn test_missing_file() {
    phplex()
        .args(["--filename", "does/not/exist.php"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Can't open the file"));
}

#[test]
fn test_lex_error_is_reported() {
    phplex()
        .args(["-c", "$x = 01;"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: LeadingZero"))
        .stderr(predicate::str::contains("at position: 6:  0<---1;"));
}

#[test]
fn test_input_is_required() {
    phplex().assert().failure();
}

#[test]
fn test_trace_flag() {
    phplex()
        .args(["--trace", "-c", "$a"])
        .assert()
        .success()
        .stdout("Identifier: $a\nEnd of file.\n")
        .stderr(predicate::str::contains("extraction attempt"));
}
