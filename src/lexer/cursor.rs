//! Scanner position state.
//!
//! The cursor owns the source characters, the current position and the
//! line counter. Extractors move it forward one character at a time and
//! may move it back by exactly one position after a lookahead. A full
//! rewind is only possible to a [`Mark`] taken earlier by the same
//! extractor.

/// A saved cursor position used by speculative extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pos: usize,
    line: u32,
}

impl Mark {
    pub fn pos(&self) -> usize {
        self.pos
    }
}

#[derive(Debug, Clone)]
pub struct Cursor {
    source: Vec<char>,
    pos: usize,
    /// 1-based line of the character at `pos`.
    line: u32,
    /// Set by `advance`, cleared by `step_back` and `reset`.
    can_step_back: bool,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Cursor {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            can_step_back: false,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn source(&self) -> &[char] {
        &self.source
    }

    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    /// Moves past the current character. Does nothing at the end of input.
    pub fn advance(&mut self) {
        if let Some(ch) = self.current() {
            if ch == '\n' {
                self.line += 1;
            }
            self.pos += 1;
            self.can_step_back = true;
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Moves back over the character consumed by the last `advance`.
    ///
    /// Two consecutive steps back are not allowed; the second one is
    /// ignored.
    pub fn step_back(&mut self) {
        debug_assert!(self.can_step_back, "cursor stepped back twice");
        if !self.can_step_back {
            return;
        }

        self.pos -= 1;
        if self.source[self.pos] == '\n' {
            self.line -= 1;
        }
        self.can_step_back = false;
    }

    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
        }
    }

    pub fn reset(&mut self, mark: Mark) {
        debug_assert!(mark.pos <= self.pos, "cursor reset forwards");
        self.pos = mark.pos;
        self.line = mark.line;
        self.can_step_back = false;
    }

    /// The characters between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> String {
        self.source[start.min(self.pos)..self.pos].iter().collect()
    }
}
