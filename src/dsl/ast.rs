//! Syntax tree for PaintTalk.
//!
//! Every node keeps the token it started at so later stages can attribute
//! errors to a source line.

use crate::scene::ShapeKind;

use super::token::Token;

/// A complete program: one or more sentences, each ended by a period.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub token: Token,
    pub sentences: Vec<Sentence>,
}

/// Basic sentences joined by `and`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub token: Token,
    pub basic_sentences: Vec<BasicSentence>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicSentence {
    pub token: Token,
    pub kind: BasicSentenceKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BasicSentenceKind {
    /// `A is circle`
    Shape { name: Name, shape: Leaf<ShapeKind> },
    /// `A is in front of B`, `A is behind B`
    Order {
        first: Name,
        order: Leaf<OrderKind>,
        second: Name,
    },
    /// `size of A is 10`
    Value { target: Target, value: ValueNode },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub token: Token,
    pub kind: TargetKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TargetKind {
    /// `size of A`
    Attribute {
        attribute: Leaf<AttributeKind>,
        object: Object,
    },
    /// `size of border of A`
    AreaAttribute {
        attribute: Leaf<AttributeKind>,
        area: Leaf<AreaKind>,
        object: Object,
    },
    /// `its size`
    ImplicitAttribute { attribute: Leaf<AttributeKind> },
    /// `size of its border`
    ImplicitAreaAttribute {
        attribute: Leaf<AttributeKind>,
        area: Leaf<AreaKind>,
    },
}

impl TargetKind {
    pub fn attribute(&self) -> &Leaf<AttributeKind> {
        match self {
            TargetKind::Attribute { attribute, .. }
            | TargetKind::AreaAttribute { attribute, .. }
            | TargetKind::ImplicitAttribute { attribute }
            | TargetKind::ImplicitAreaAttribute { attribute, .. } => attribute,
        }
    }

    pub fn area(&self) -> Option<&Leaf<AreaKind>> {
        match self {
            TargetKind::AreaAttribute { area, .. }
            | TargetKind::ImplicitAreaAttribute { area, .. } => Some(area),
            TargetKind::Attribute { .. } | TargetKind::ImplicitAttribute { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub token: Token,
    pub kind: ObjectKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Name(Name),
    Canvas,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueNode {
    pub token: Token,
    pub kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    Number(Number),
    Tuple(Vec<Number>),
    Color(Leaf<ColorKind>),
}

/// A shape name as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub token: Token,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.token.text
    }
}

/// A digit run; converted to an integer by the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub token: Token,
}

/// A keyword terminal together with what it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<K> {
    pub token: Token,
    pub kind: K,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Front,
    Behind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Position,
    Size,
    Color,
}

impl AttributeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Position => "position",
            AttributeKind::Size => "size",
            AttributeKind::Color => "color",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    Border,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Red,
    Blue,
    Green,
    White,
    Black,
}

impl ColorKind {
    pub fn rgb(self) -> [u32; 3] {
        match self {
            ColorKind::Red => [255, 0, 0],
            ColorKind::Blue => [0, 0, 255],
            ColorKind::Green => [0, 255, 0],
            ColorKind::White => [255, 255, 255],
            ColorKind::Black => [0, 0, 0],
        }
    }
}
