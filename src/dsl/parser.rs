//! Parser for PaintTalk.
//!
//! Recursive descent over the token stream with a single token of
//! lookahead and no backtracking:
//!
//! ```text
//! Input          := Sentence ("." Sentence)* "."
//! Sentence       := BasicSentence ("and" BasicSentence)*
//! BasicSentence  := Name "is" Shape
//!                 | Name "is" Order Name
//!                 | Target "is" Value
//! Target         := "its" Attribute
//!                 | Attribute "of" "its" Area
//!                 | Attribute "of" Area "of" Object
//!                 | Attribute "of" Object
//! Object         := Name | "canvas"
//! Value          := Number | "(" Number ("," Number)* ")" | Color
//! Order          := "in" "front" "of" | "behind"
//! ```
//!
//! The first token that does not fit aborts the parse.

use tracing::debug;

use crate::scene::ShapeKind;

use super::ast::*;
use super::error::PaintError;
use super::token::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Wrap `tokens`, appending the end marker one line past the last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let end_line = tokens.last().map_or(1, |t| t.line + 1);
        tokens.push(Token::end_of_input(end_line));
        Self { tokens, pos: 0 }
    }

    pub fn parse(&mut self) -> Result<Input, PaintError> {
        let input = self.parse_input()?;
        self.expect(TokenKind::EndOfInput)?;
        debug!(sentences = input.sentences.len(), "parsed program");
        Ok(input)
    }

    fn parse_input(&mut self) -> Result<Input, PaintError> {
        let token = self.peek().clone();
        let mut sentences = Vec::new();

        loop {
            sentences.push(self.parse_sentence()?);
            self.expect(TokenKind::Period)?;
            if self.check(TokenKind::EndOfInput) {
                break;
            }
        }

        Ok(Input { token, sentences })
    }

    fn parse_sentence(&mut self) -> Result<Sentence, PaintError> {
        let token = self.peek().clone();
        let mut basic_sentences = vec![self.parse_basic_sentence()?];

        while self.check(TokenKind::And) {
            self.advance();
            basic_sentences.push(self.parse_basic_sentence()?);
        }

        Ok(Sentence {
            token,
            basic_sentences,
        })
    }

    fn parse_basic_sentence(&mut self) -> Result<BasicSentence, PaintError> {
        let token = self.peek().clone();

        if self.check(TokenKind::Name) {
            let first = self.parse_name()?;
            self.expect(TokenKind::Is)?;

            let kind = if self.peek().kind.starts_order() {
                let order = self.parse_order()?;
                let second = self.parse_name()?;
                BasicSentenceKind::Order {
                    first,
                    order,
                    second,
                }
            } else {
                let shape = self.parse_shape()?;
                BasicSentenceKind::Shape { name: first, shape }
            };
            return Ok(BasicSentence { token, kind });
        }

        let target = self.parse_target()?;
        self.expect(TokenKind::Is)?;
        let value = self.parse_value()?;

        Ok(BasicSentence {
            token,
            kind: BasicSentenceKind::Value { target, value },
        })
    }

    fn parse_target(&mut self) -> Result<Target, PaintError> {
        let token = self.peek().clone();

        if self.check(TokenKind::Its) {
            self.advance();
            let attribute = self.parse_attribute()?;
            return Ok(Target {
                token,
                kind: TargetKind::ImplicitAttribute { attribute },
            });
        }

        let attribute = self.parse_attribute()?;
        self.expect(TokenKind::Of)?;

        let kind = match self.peek().kind {
            TokenKind::Its => {
                self.advance();
                let area = self.parse_area()?;
                TargetKind::ImplicitAreaAttribute { attribute, area }
            }
            TokenKind::Border => {
                let area = self.parse_area()?;
                self.expect(TokenKind::Of)?;
                let object = self.parse_object()?;
                TargetKind::AreaAttribute {
                    attribute,
                    area,
                    object,
                }
            }
            _ => {
                let object = self.parse_object()?;
                TargetKind::Attribute { attribute, object }
            }
        };

        Ok(Target { token, kind })
    }

    fn parse_object(&mut self) -> Result<Object, PaintError> {
        let token = self.peek().clone();

        let kind = if self.check(TokenKind::Name) {
            ObjectKind::Name(self.parse_name()?)
        } else {
            self.expect(TokenKind::Canvas)?;
            ObjectKind::Canvas
        };

        Ok(Object { token, kind })
    }

    fn parse_value(&mut self) -> Result<ValueNode, PaintError> {
        let token = self.peek().clone();

        let kind = match token.kind {
            TokenKind::Number => ValueKind::Number(self.parse_number()?),
            TokenKind::LParen => ValueKind::Tuple(self.parse_tuple()?),
            _ => ValueKind::Color(self.parse_color()?),
        };

        Ok(ValueNode { token, kind })
    }

    fn parse_tuple(&mut self) -> Result<Vec<Number>, PaintError> {
        self.expect(TokenKind::LParen)?;
        let mut numbers = vec![self.parse_number()?];

        while self.check(TokenKind::Comma) {
            self.advance();
            numbers.push(self.parse_number()?);
        }

        self.expect(TokenKind::RParen)?;
        Ok(numbers)
    }

    fn parse_name(&mut self) -> Result<Name, PaintError> {
        let token = self.expect(TokenKind::Name)?;
        Ok(Name { token })
    }

    fn parse_number(&mut self) -> Result<Number, PaintError> {
        let token = self.expect(TokenKind::Number)?;
        Ok(Number { token })
    }

    fn parse_shape(&mut self) -> Result<Leaf<ShapeKind>, PaintError> {
        let kind = match self.peek().kind {
            TokenKind::Circle => ShapeKind::Circle,
            TokenKind::Square => ShapeKind::Square,
            TokenKind::Ellipse => ShapeKind::Ellipse,
            TokenKind::Rectangle => ShapeKind::Rectangle,
            _ => return Err(self.error_here()),
        };
        Ok(self.leaf(kind))
    }

    fn parse_order(&mut self) -> Result<Leaf<OrderKind>, PaintError> {
        if self.check(TokenKind::Behind) {
            return Ok(self.leaf(OrderKind::Behind));
        }

        let token = self.expect(TokenKind::In)?;
        self.expect(TokenKind::Front)?;
        self.expect(TokenKind::Of)?;
        Ok(Leaf {
            token,
            kind: OrderKind::Front,
        })
    }

    fn parse_attribute(&mut self) -> Result<Leaf<AttributeKind>, PaintError> {
        let kind = match self.peek().kind {
            TokenKind::Position => AttributeKind::Position,
            TokenKind::Size => AttributeKind::Size,
            TokenKind::Color => AttributeKind::Color,
            _ => return Err(self.error_here()),
        };
        Ok(self.leaf(kind))
    }

    fn parse_area(&mut self) -> Result<Leaf<AreaKind>, PaintError> {
        let kind = match self.peek().kind {
            TokenKind::Border => AreaKind::Border,
            _ => return Err(self.error_here()),
        };
        Ok(self.leaf(kind))
    }

    fn parse_color(&mut self) -> Result<Leaf<ColorKind>, PaintError> {
        let kind = match self.peek().kind {
            TokenKind::Red => ColorKind::Red,
            TokenKind::Blue => ColorKind::Blue,
            TokenKind::Green => ColorKind::Green,
            TokenKind::White => ColorKind::White,
            TokenKind::Black => ColorKind::Black,
            _ => return Err(self.error_here()),
        };
        Ok(self.leaf(kind))
    }

    // --- Utility methods ---

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consume the current token as a leaf of the given kind.
    fn leaf<K>(&mut self, kind: K) -> Leaf<K> {
        Leaf {
            token: self.advance(),
            kind,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, PaintError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here())
        }
    }

    fn error_here(&self) -> PaintError {
        let t = self.peek();
        let at = match t.kind {
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => format!("\"{}\"", t.text),
        };
        PaintError::parse(format!("wrong syntax at {at}"), t.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::error::ErrorKind;
    use crate::dsl::lexer::Lexer;

    fn parse(src: &str) -> Result<Input, PaintError> {
        let tokens = Lexer::new(src).tokenize()?;
        Parser::new(tokens).parse()
    }

    fn single(src: &str) -> BasicSentence {
        let mut input = parse(src).unwrap();
        assert_eq!(input.sentences.len(), 1);
        let mut sentence = input.sentences.remove(0);
        assert_eq!(sentence.basic_sentences.len(), 1);
        sentence.basic_sentences.remove(0)
    }

    fn target_of(src: &str) -> TargetKind {
        match single(src).kind {
            BasicSentenceKind::Value { target, .. } => target.kind,
            other => panic!("expected value sentence, got {other:?}"),
        }
    }

    #[test]
    fn parse_empty_program_fails() {
        let err = parse("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ParseError);
        assert_eq!(err.line, 1);
        assert!(err.message.contains("end of input"));
    }

    #[test]
    fn parse_lone_period_fails() {
        let err = parse(".").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ParseError);
        assert!(err.message.contains("\".\""));
    }

    #[test]
    fn parse_shape_declaration() {
        match single("A is circle.").kind {
            BasicSentenceKind::Shape { name, shape } => {
                assert_eq!(name.as_str(), "A");
                assert_eq!(shape.kind, ShapeKind::Circle);
            }
            other => panic!("expected shape sentence, got {other:?}"),
        }
    }

    #[test]
    fn parse_order_sentences() {
        match single("A is in front of B.").kind {
            BasicSentenceKind::Order {
                first,
                order,
                second,
            } => {
                assert_eq!(first.as_str(), "A");
                assert_eq!(order.kind, OrderKind::Front);
                assert_eq!(order.token.kind, TokenKind::In);
                assert_eq!(second.as_str(), "B");
            }
            other => panic!("expected order sentence, got {other:?}"),
        }

        match single("A is behind B.").kind {
            BasicSentenceKind::Order { order, .. } => assert_eq!(order.kind, OrderKind::Behind),
            other => panic!("expected order sentence, got {other:?}"),
        }
    }

    #[test]
    fn parse_target_forms() {
        assert!(matches!(
            target_of("size of A is 10."),
            TargetKind::Attribute {
                object: Object {
                    kind: ObjectKind::Name(_),
                    ..
                },
                ..
            }
        ));
        assert!(matches!(
            target_of("color of canvas is red."),
            TargetKind::Attribute {
                object: Object {
                    kind: ObjectKind::Canvas,
                    ..
                },
                ..
            }
        ));
        assert!(matches!(
            target_of("size of border of canvas is 3."),
            TargetKind::AreaAttribute { .. }
        ));
        assert!(matches!(
            target_of("its position is (1, 2)."),
            TargetKind::ImplicitAttribute { .. }
        ));
        assert!(matches!(
            target_of("color of its border is blue."),
            TargetKind::ImplicitAreaAttribute { .. }
        ));
    }

    #[test]
    fn parse_value_forms() {
        let value = |src: &str| match single(src).kind {
            BasicSentenceKind::Value { value, .. } => value.kind,
            other => panic!("expected value sentence, got {other:?}"),
        };

        match value("size of A is 10.") {
            ValueKind::Number(n) => assert_eq!(n.token.text, "10"),
            other => panic!("expected number, got {other:?}"),
        }
        match value("size of A is (1, 2, 3).") {
            ValueKind::Tuple(ns) => {
                let texts: Vec<&str> = ns.iter().map(|n| n.token.text.as_str()).collect();
                assert_eq!(texts, vec!["1", "2", "3"]);
            }
            other => panic!("expected tuple, got {other:?}"),
        }
        match value("color of A is Green.") {
            ValueKind::Color(c) => assert_eq!(c.kind, ColorKind::Green),
            other => panic!("expected color, got {other:?}"),
        }
    }

    #[test]
    fn parse_conjoined_sentence_with_implicit_area() {
        let src = "A is circle and size of its border is 10.";
        let tokens = Lexer::new(src).tokenize().unwrap();
        let input = Parser::new(tokens.clone()).parse().unwrap();

        let sentence = &input.sentences[0];
        assert_eq!(sentence.token, tokens[0]);
        assert_eq!(sentence.basic_sentences.len(), 2);

        let second = &sentence.basic_sentences[1];
        assert_eq!(second.token, tokens[4]);
        match &second.kind {
            BasicSentenceKind::Value { target, value } => {
                assert_eq!(target.token, tokens[4]);
                match &target.kind {
                    TargetKind::ImplicitAreaAttribute { attribute, area } => {
                        assert_eq!(attribute.kind, AttributeKind::Size);
                        assert_eq!(area.token, tokens[7]);
                    }
                    other => panic!("expected implicit area target, got {other:?}"),
                }
                assert_eq!(value.token, tokens[9]);
            }
            other => panic!("expected value sentence, got {other:?}"),
        }
    }

    #[test]
    fn parse_multiple_sentences() {
        let input = parse("A is circle. B is square. A is behind B.").unwrap();
        assert_eq!(input.sentences.len(), 3);
    }

    #[test]
    fn parse_error_reports_offending_line() {
        let src = "Size of canvas is (100, 100).\n\nA is circle and position of A is (30, 40).\nSize of A is 40 and position is (20, 3).\nColor of A is blue.";
        let err = parse(src).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ParseError);
        assert_eq!(err.line, 4);
        assert!(err.message.contains("\"is\""));
    }

    #[test]
    fn parse_missing_final_period_reports_line_past_end() {
        let err = parse("A is circle.\nB is square").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("end of input"));
    }

    #[test]
    fn parse_rejects_trailing_garbage_after_period() {
        let err = parse("A is circle. 5").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ParseError);
        assert!(err.message.contains("\"5\""));
    }

    #[test]
    fn parse_rejects_empty_tuple() {
        assert!(parse("size of A is ().").is_err());
    }

    #[test]
    fn parse_rejects_in_without_front() {
        let err = parse("A is in B.").unwrap_err();
        assert!(err.message.contains("\"B\""));
    }

    #[test]
    fn parse_rejects_non_shape_after_is() {
        let err = parse("A is red.").unwrap_err();
        assert!(err.message.contains("\"red\""));
    }

    #[test]
    fn parse_rejects_keyword_object() {
        assert!(parse("size of circle is 10.").is_err());
    }
}
