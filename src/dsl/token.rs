//! Token types for the PaintTalk lexer.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched source text, in its original case.
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// The synthetic marker the parser appends after the last real token.
    pub fn end_of_input(line: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", line)
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Objects and shapes
    Canvas,
    Circle,
    Square,
    Ellipse,
    Rectangle,

    // Colors
    Red,
    Blue,
    Green,
    White,
    Black,

    // Areas
    Border,

    // Attributes
    Position,
    Size,
    Color,

    // Connectives
    Of,
    Is,
    In,
    Its,
    And,
    Front,
    Behind,

    // Punctuation
    LParen,
    RParen,
    Period,
    Comma,

    // Pattern-matched
    Number,
    Name,
    Ignore,

    // Special
    EndOfInput,
}

/// How a token kind recognizes text at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A fixed string, matched case-insensitively.
    Keyword(&'static str),
    /// `[0-9]+`
    Digits,
    /// `[a-zA-Z_][a-zA-Z0-9_]*`
    Identifier,
    /// A single whitespace character.
    Whitespace,
}

impl TokenKind {
    /// Every lexable kind, in the order the lexer tries them.
    pub const PRIORITY: [TokenKind; 28] = [
        TokenKind::Canvas,
        TokenKind::Circle,
        TokenKind::Square,
        TokenKind::Ellipse,
        TokenKind::Rectangle,
        TokenKind::Red,
        TokenKind::Blue,
        TokenKind::Green,
        TokenKind::White,
        TokenKind::Black,
        TokenKind::Border,
        TokenKind::Position,
        TokenKind::Size,
        TokenKind::Color,
        TokenKind::Of,
        TokenKind::Is,
        TokenKind::In,
        TokenKind::Its,
        TokenKind::And,
        TokenKind::Front,
        TokenKind::Behind,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Period,
        TokenKind::Comma,
        TokenKind::Number,
        TokenKind::Name,
        TokenKind::Ignore,
    ];

    /// The pattern for this kind, or `None` for the synthetic end marker.
    pub fn pattern(self) -> Option<Pattern> {
        let pattern = match self {
            TokenKind::Canvas => Pattern::Keyword("canvas"),
            TokenKind::Circle => Pattern::Keyword("circle"),
            TokenKind::Square => Pattern::Keyword("square"),
            TokenKind::Ellipse => Pattern::Keyword("ellipse"),
            TokenKind::Rectangle => Pattern::Keyword("rectangle"),
            TokenKind::Red => Pattern::Keyword("red"),
            TokenKind::Blue => Pattern::Keyword("blue"),
            TokenKind::Green => Pattern::Keyword("green"),
            TokenKind::White => Pattern::Keyword("white"),
            TokenKind::Black => Pattern::Keyword("black"),
            TokenKind::Border => Pattern::Keyword("border"),
            TokenKind::Position => Pattern::Keyword("position"),
            TokenKind::Size => Pattern::Keyword("size"),
            TokenKind::Color => Pattern::Keyword("color"),
            TokenKind::Of => Pattern::Keyword("of"),
            TokenKind::Is => Pattern::Keyword("is"),
            TokenKind::In => Pattern::Keyword("in"),
            TokenKind::Its => Pattern::Keyword("its"),
            TokenKind::And => Pattern::Keyword("and"),
            TokenKind::Front => Pattern::Keyword("front"),
            TokenKind::Behind => Pattern::Keyword("behind"),
            TokenKind::LParen => Pattern::Keyword("("),
            TokenKind::RParen => Pattern::Keyword(")"),
            TokenKind::Period => Pattern::Keyword("."),
            TokenKind::Comma => Pattern::Keyword(","),
            TokenKind::Number => Pattern::Digits,
            TokenKind::Name => Pattern::Identifier,
            TokenKind::Ignore => Pattern::Whitespace,
            TokenKind::EndOfInput => return None,
        };
        Some(pattern)
    }

    /// The canonical (lowercase) spelling of a keyword or punctuation kind.
    pub fn keyword(self) -> Option<&'static str> {
        match self.pattern() {
            Some(Pattern::Keyword(s)) => Some(s),
            _ => None,
        }
    }

    /// Whether this kind can start an `Order` (`in front of` / `behind`).
    pub fn starts_order(self) -> bool {
        matches!(self, TokenKind::In | TokenKind::Behind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_come_before_patterns() {
        let first_pattern = TokenKind::PRIORITY
            .iter()
            .position(|k| k.keyword().is_none())
            .unwrap();
        assert!(TokenKind::PRIORITY[first_pattern..]
            .iter()
            .all(|k| k.keyword().is_none()));
    }

    #[test]
    fn end_marker_has_no_pattern() {
        assert_eq!(TokenKind::EndOfInput.pattern(), None);
        assert_eq!(Token::end_of_input(4).line, 4);
    }

    #[test]
    fn order_starters() {
        assert!(TokenKind::In.starts_order());
        assert!(TokenKind::Behind.starts_order());
        assert!(!TokenKind::Front.starts_order());
    }
}
