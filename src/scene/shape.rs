//! Shapes placed on the canvas.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Ellipse,
    Rectangle,
}

impl ShapeKind {
    /// Circles and squares are sized by one number, ellipses and
    /// rectangles by `(width, height)`.
    pub fn size_dimension(self) -> usize {
        match self {
            ShapeKind::Circle | ShapeKind::Square => 1,
            ShapeKind::Ellipse | ShapeKind::Rectangle => 2,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Rectangle => "Rectangle",
        };
        f.write_str(name)
    }
}

/// A named shape with its resolved attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub name: String,
    pub position: Value,
    pub size: Value,
    pub color: Value,
    pub border_size: Value,
    pub border_color: Value,
}

impl Shape {
    /// A freshly declared shape: at the origin, unit-sized, black, no border.
    pub fn new(kind: ShapeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            position: Value::from([0, 0]),
            size: Value::filled(1, kind.size_dimension()),
            color: Value::black(),
            border_size: Value::from([0]),
            border_color: Value::black(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} \"{}\"", self.kind, self.name)?;
        writeln!(f, "- position: {}", self.position)?;
        writeln!(f, "- size: {}", self.size)?;
        writeln!(f, "- color: {}", self.color)?;
        writeln!(f, "- border.size: {}", self.border_size)?;
        writeln!(f, "- border.color: {}", self.border_color)
    }
}
