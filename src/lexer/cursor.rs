/// Character source over a single line of input.
///
/// `position` counts the characters handed out so far. Once the line is
/// exhausted it is pinned one past the end (`len + 1`), so that
/// `position - 1` always names the offset of the character most recently
/// returned, or `len` when that was the end of input.
#[derive(Debug, Clone)]
pub struct SourceCursor {
    chars: Vec<char>,
    position: u32,
}

impl SourceCursor {
    pub fn new(line: &str) -> Self {
        SourceCursor {
            chars: line.chars().collect(),
            position: 0,
        }
    }

    /// Returns the next character, or `None` at end of input. Idempotent past the end.
    pub fn next_char(&mut self) -> Option<char> {
        match self.chars.get(self.position as usize) {
            Some(c) => {
                self.position += 1;
                Some(*c)
            }
            None => {
                self.position = self.chars.len() as u32 + 1;
                None
            }
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }
}
