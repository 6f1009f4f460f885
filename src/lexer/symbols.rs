//! Character classes shared by the dispatcher and the extractors.

const OPERATOR_SYMBOLS: &str = "+-*/%=&|^~<>!?:.@";

const PUNCTUATION_SYMBOLS: [char; 14] = [
    ';', ',', '.', ':', '=', '?', '-', '>', '[', ']', '{', '}', '(', ')',
];

pub fn is_operator_symbol(ch: char) -> bool {
    OPERATOR_SYMBOLS.contains(ch)
}

/// Characters that can begin or belong to a punctuation token. Some of
/// them (`=`, `-`, `?`, `.`, `:`, `>`) are only punctuation as part of a
/// longer sequence.
pub fn is_punctuation_symbol(ch: char) -> bool {
    PUNCTUATION_SYMBOLS.contains(&ch)
}

pub fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

pub fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        for ch in "+-*/%=&|^~<>!?:.@".chars() {
            assert!(is_operator_symbol(ch), "{ch:?} should be an operator symbol");
        }
        for ch in ";,[](){}$#\"' a1_".chars() {
            assert!(!is_operator_symbol(ch), "{ch:?} should not be an operator symbol");
        }
    }

    #[test]
    fn test_punctuation_symbols() {
        for ch in ";,.:=?->[]{}()".chars() {
            assert!(is_punctuation_symbol(ch));
        }
        assert!(!is_punctuation_symbol('+'));
        assert!(!is_punctuation_symbol('@'));
        assert!(!is_punctuation_symbol('$'));
    }

    #[test]
    fn test_word_classes() {
        assert!(is_word_start('_'));
        assert!(is_word_start('Z'));
        assert!(!is_word_start('1'));
        assert!(is_word_char('1'));
        assert!(!is_word_char('-'));
        assert!(!is_word_start('é'));
    }
}
