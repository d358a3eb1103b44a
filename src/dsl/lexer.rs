//! Lexer for PaintTalk.
//!
//! Converts source text into a stream of [`Token`]s. At every position the
//! kinds in [`TokenKind::PRIORITY`] are tried in order and the first one whose
//! pattern matches a non-empty prefix wins, so keywords shadow identifiers
//! that start with them (`colorful` is `color` followed by the name `ful`).

use tracing::trace;

use super::error::PaintError;
use super::token::{Pattern, Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Scan the whole source. No end marker is emitted; empty input yields
    /// an empty vector.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, PaintError> {
        let mut tokens = Vec::new();

        'scan: while !self.is_at_end() {
            for kind in TokenKind::PRIORITY {
                let Some(len) = self.match_kind(kind) else {
                    continue;
                };

                let text: String = self.chars[self.pos..self.pos + len].iter().collect();
                self.pos += len;

                if kind == TokenKind::Ignore {
                    if text == "\n" {
                        self.line += 1;
                    }
                } else {
                    trace!(?kind, %text, line = self.line, "token");
                    tokens.push(Token::new(kind, text, self.line));
                }
                continue 'scan;
            }

            return Err(PaintError::lex(
                format!("unknown character \"{}\"", self.peek()),
                self.line,
            ));
        }

        Ok(tokens)
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn rest(&self) -> &[char] {
        &self.chars[self.pos..]
    }

    /// Length of the match for `kind` at the cursor, if any.
    fn match_kind(&self, kind: TokenKind) -> Option<usize> {
        let len = match kind.pattern()? {
            Pattern::Keyword(word) => self.match_keyword(word),
            Pattern::Digits => self.rest().iter().take_while(|c| c.is_ascii_digit()).count(),
            Pattern::Identifier => self.match_identifier(),
            Pattern::Whitespace => usize::from(is_whitespace(self.peek())),
        };
        (len > 0).then_some(len)
    }

    fn match_keyword(&self, word: &str) -> usize {
        let rest = self.rest();
        let mut len = 0;
        for expected in word.chars() {
            match rest.get(len) {
                Some(c) if c.eq_ignore_ascii_case(&expected) => len += 1,
                _ => return 0,
            }
        }
        len
    }

    fn match_identifier(&self) -> usize {
        let rest = self.rest();
        match rest.first() {
            Some(c) if c.is_ascii_alphabetic() || *c == '_' => {}
            _ => return 0,
        }
        rest.iter()
            .take_while(|c| c.is_ascii_alphanumeric() || **c == '_')
            .count()
    }
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::error::ErrorKind;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lex_empty_input() {
        let tokens = Lexer::new("").tokenize().unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn lex_whitespace_only() {
        let tokens = Lexer::new("  \n\t \r\n").tokenize().unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn lex_canvas_size_sentence() {
        let tokens = Lexer::new("Size of canvas is (100, 100).").tokenize().unwrap();
        let expected = vec![
            Token::new(TokenKind::Size, "Size", 1),
            Token::new(TokenKind::Of, "of", 1),
            Token::new(TokenKind::Canvas, "canvas", 1),
            Token::new(TokenKind::Is, "is", 1),
            Token::new(TokenKind::LParen, "(", 1),
            Token::new(TokenKind::Number, "100", 1),
            Token::new(TokenKind::Comma, ",", 1),
            Token::new(TokenKind::Number, "100", 1),
            Token::new(TokenKind::RParen, ")", 1),
            Token::new(TokenKind::Period, ".", 1),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn lex_keywords_case_insensitive() {
        assert_eq!(
            kinds("CIRCLE Square eLLipse rectangle"),
            vec![
                TokenKind::Circle,
                TokenKind::Square,
                TokenKind::Ellipse,
                TokenKind::Rectangle
            ]
        );
    }

    #[test]
    fn lex_order_words() {
        assert_eq!(
            kinds("A is in front of B and C is behind D"),
            vec![
                TokenKind::Name,
                TokenKind::Is,
                TokenKind::In,
                TokenKind::Front,
                TokenKind::Of,
                TokenKind::Name,
                TokenKind::And,
                TokenKind::Name,
                TokenKind::Is,
                TokenKind::Behind,
                TokenKind::Name,
            ]
        );
    }

    #[test]
    fn lex_its_is_not_is() {
        assert_eq!(kinds("its"), vec![TokenKind::Its]);
        assert_eq!(kinds("is"), vec![TokenKind::Is]);
    }

    #[test]
    fn keyword_prefix_shadows_identifier() {
        let tokens = Lexer::new("colorful").tokenize().unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Color, "color", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Name, "ful", 1));
    }

    #[test]
    fn lex_identifier_with_digits_and_underscore() {
        let tokens = Lexer::new("_shape_01").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Name, "_shape_01", 1)]);
    }

    #[test]
    fn lex_number_is_maximal_digit_run() {
        let tokens = Lexer::new("12345").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Number, "12345", 1)]);
    }

    #[test]
    fn lex_line_tracking() {
        let tokens = Lexer::new("A is circle.\n\nB is square.").tokenize().unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[3].line, 1);
        assert_eq!(tokens[4].line, 3);
        assert_eq!(tokens[4].text, "B");
    }

    #[test]
    fn lex_crlf_counts_one_line() {
        let tokens = Lexer::new("A\r\nB").tokenize().unwrap();
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn lex_error_reports_line() {
        let src = "Size of canvas is (100, 100).\n\nA is circle.\nPosition of A is (30$, 40).\nSize of A is 40.";
        let err = Lexer::new(src).tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::LexError);
        assert_eq!(err.line, 4);
        assert!(err.message.contains('$'));
    }

    #[test]
    fn lex_error_on_non_ascii() {
        let err = Lexer::new("A is círcle.").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::LexError);
        assert!(err.message.contains('í'));
    }
}
