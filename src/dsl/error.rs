//! Error types for the PaintTalk pipeline.

use std::fmt;

/// An error raised by one of the three pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintError {
    pub message: String,
    pub line: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    InterpretError,
}

impl PaintError {
    pub fn lex(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
            kind: ErrorKind::LexError,
        }
    }

    pub fn parse(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
            kind: ErrorKind::ParseError,
        }
    }

    pub fn interpret(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
            kind: ErrorKind::InterpretError,
        }
    }
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {:?}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for PaintError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_kind() {
        let err = PaintError::interpret("Shape \"A\" already exists!", 3);
        assert_eq!(
            err.to_string(),
            "[line 3] InterpretError: Shape \"A\" already exists!"
        );
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(PaintError::lex("x", 1).kind, ErrorKind::LexError);
        assert_eq!(PaintError::parse("x", 1).kind, ErrorKind::ParseError);
        assert_eq!(
            PaintError::interpret("x", 1).kind,
            ErrorKind::InterpretError
        );
    }
}
