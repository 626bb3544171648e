#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
#[cfg(feature = "codegen")]
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A raw character offset into the line currently being tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

/// Half-open `[start, end)` range of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Renders a syntax error with a caret pointing into the offending line.
///
/// ```text
/// error expected ')' at 6
///   |
/// 1 | (1 + 2
///   | ------^
/// ```
pub fn render_diagnostic(error: &Error, line: &str) -> String {
    let position = error.get_position().0 as usize;
    let line_text = line.trim_end_matches(&['\n', '\r'][..]);

    let mut output = error.to_string();
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        output.push_str(&format!(" ({})", tip));
    }
    output.push('\n');

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str("  |\n");
    output.push_str(&format!("1 | {}\n", line_text_removed));

    let arrows = position.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("  | {:->arrows$}", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position, Span,
    };

    #[test]
    fn test_render_diagnostic() {
        let error = Error::new(ErrorImpl::ExpectedCloseParen, Position(6));
        let rendered = super::render_diagnostic(&error, "(1 + 2");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error expected ')' at 6");
        assert_eq!(lines[1], "  |");
        assert_eq!(lines[2], "1 | (1 + 2");
        assert_eq!(lines[3], "  | ------^");
    }

    #[test]
    fn test_render_diagnostic_strips_leading_spaces() {
        let error = Error::new(ErrorImpl::ExpectedFunctionName, Position(6));
        let rendered = super::render_diagnostic(&error, "  def (x)");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "1 | def (x)");
        assert_eq!(lines[3], "  | ----^");
    }

    #[test]
    fn test_span_to() {
        let joined = Span::new(4, 6).to(&Span::new(0, 2));
        assert_eq!(joined, Span::new(0, 6));
    }
}
