//! PaintTalk language — program text → tokens → syntax tree → scene.

pub mod ast;
pub mod error;
pub mod format;
pub mod interpret;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::Input;
pub use error::{ErrorKind, PaintError};
pub use token::{Token, TokenKind};

use tracing::debug;

use crate::scene::Scene;

use lexer::Lexer;
use parser::Parser;

/// Split program text into tokens. Empty text yields no tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, PaintError> {
    let tokens = Lexer::new(source).tokenize()?;
    debug!(tokens = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Parse a token sequence into a syntax tree; the whole sequence must be
/// consumed.
pub fn parse(tokens: Vec<Token>) -> Result<Input, PaintError> {
    Parser::new(tokens).parse()
}

/// Resolve a syntax tree into a scene.
pub fn interpret(tree: &Input) -> Result<Scene, PaintError> {
    interpret::interpret_program(tree)
}

/// The PaintTalk pipeline.
///
/// Every run builds fresh state, so independent runs never share anything.
pub struct PaintTalk;

impl PaintTalk {
    pub fn tokenize(source: &str) -> Result<Vec<Token>, PaintError> {
        tokenize(source)
    }

    /// Lex and parse program text into a syntax tree.
    pub fn parse(source: &str) -> Result<Input, PaintError> {
        parse(Self::tokenize(source)?)
    }

    pub fn interpret(tree: &Input) -> Result<Scene, PaintError> {
        interpret(tree)
    }

    /// Run all three stages over program text.
    pub fn run(source: &str) -> Result<Scene, PaintError> {
        let tree = Self::parse(source)?;
        Self::interpret(&tree)
    }
}
