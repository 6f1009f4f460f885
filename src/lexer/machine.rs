//! Driver shared by the finite-automaton extractors.
//!
//! An extractor describes its automaton as a state enum implementing
//! [`Machine`]. The driver feeds it one character at a time and handles
//! the cursor bookkeeping, so that on acceptance the cursor always rests
//! on the last character of the lexeme.

use crate::errors::errors::ErrorImpl;

use super::cursor::Cursor;

/// Result of one transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<S> {
    /// Consume the character and continue in the given state.
    Shift(S),
    /// Consume the character and accept in the given state.
    Finish(S),
    /// Accept without consuming the character.
    Stop,
    /// Not this category after all; the cursor is restored.
    Decline,
    /// Malformed input.
    Fail(ErrorImpl),
}

pub trait Machine: Copy {
    fn step(self, ch: char) -> Step<Self>;

    /// Transition taken when the input ends in this state. Only `Stop`,
    /// `Decline` and `Fail` are meaningful here.
    fn at_eof(self) -> Step<Self>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<S> {
    Accepted { state: S, lexeme: String },
    Declined,
}

/// A fatal error raised by a machine, with the offset it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct Stuck {
    pub error: ErrorImpl,
    pub offset: usize,
}

pub fn run<M: Machine>(cursor: &mut Cursor, start: M) -> Result<Outcome<M>, Stuck> {
    let mark = cursor.mark();
    let mut state = start;

    loop {
        let step = match cursor.current() {
            Some(ch) => state.step(ch),
            None => match state.at_eof() {
                // End of input was reached after the last character; errors
                // point at that character.
                Step::Fail(error) => {
                    return Err(Stuck {
                        error,
                        offset: cursor.pos().saturating_sub(1),
                    })
                }
                Step::Shift(_) | Step::Finish(_) => Step::Stop,
                step => step,
            },
        };

        match step {
            Step::Shift(next) => {
                state = next;
                cursor.advance();
            }
            Step::Finish(last) => {
                cursor.advance();
                return Ok(accept(cursor, mark.pos(), last));
            }
            Step::Stop => {
                if cursor.pos() == mark.pos() {
                    return Ok(Outcome::Declined);
                }
                return Ok(accept(cursor, mark.pos(), state));
            }
            Step::Decline => {
                cursor.reset(mark);
                return Ok(Outcome::Declined);
            }
            Step::Fail(error) => {
                return Err(Stuck {
                    error,
                    offset: cursor.pos(),
                })
            }
        }
    }
}

fn accept<M>(cursor: &mut Cursor, start: usize, state: M) -> Outcome<M> {
    let lexeme = cursor.slice_from(start);
    cursor.step_back();
    Outcome::Accepted { state, lexeme }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `ab+` and declines anything else.
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum AbPlus {
        Start,
        A,
        B,
    }

    impl Machine for AbPlus {
        fn step(self, ch: char) -> Step<Self> {
            match (self, ch) {
                (AbPlus::Start, 'a') => Step::Shift(AbPlus::A),
                (AbPlus::A, 'b') | (AbPlus::B, 'b') => Step::Shift(AbPlus::B),
                (AbPlus::B, '!') => Step::Finish(AbPlus::B),
                (AbPlus::B, _) => Step::Stop,
                (AbPlus::A, _) => Step::Fail(ErrorImpl::UnterminatedComment),
                (AbPlus::Start, _) => Step::Decline,
            }
        }

        fn at_eof(self) -> Step<Self> {
            match self {
                AbPlus::B => Step::Stop,
                _ => Step::Fail(ErrorImpl::UnterminatedComment),
            }
        }
    }

    #[test]
    fn test_stop_leaves_cursor_on_last_char() {
        let mut cursor = Cursor::new("abbc");
        let outcome = run(&mut cursor, AbPlus::Start).unwrap();

        assert_eq!(
            outcome,
            Outcome::Accepted {
                state: AbPlus::B,
                lexeme: "abb".to_string()
            }
        );
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_finish_consumes_char() {
        let mut cursor = Cursor::new("ab!x");
        let outcome = run(&mut cursor, AbPlus::Start).unwrap();

        assert!(matches!(outcome, Outcome::Accepted { ref lexeme, .. } if lexeme == "ab!"));
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_eof_accepts() {
        let mut cursor = Cursor::new("ab");
        let outcome = run(&mut cursor, AbPlus::Start).unwrap();

        assert!(matches!(outcome, Outcome::Accepted { ref lexeme, .. } if lexeme == "ab"));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn test_decline_restores_cursor() {
        let mut cursor = Cursor::new("xyz");
        assert_eq!(run(&mut cursor, AbPlus::Start).unwrap(), Outcome::Declined);
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_fail_positions() {
        let mut cursor = Cursor::new("ac");
        let stuck = run(&mut cursor, AbPlus::Start).unwrap_err();
        assert_eq!(stuck.offset, 1);

        let mut cursor = Cursor::new("a");
        let stuck = run(&mut cursor, AbPlus::Start).unwrap_err();
        assert_eq!(stuck.offset, 0);
    }
}
