//! The drawing surface.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// The canvas every shape is painted on. One per scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub size: Value,
    pub color: Value,
    pub border_size: Value,
    pub border_color: Value,
}

impl Canvas {
    /// A canvas size is always `(width, height)`.
    pub const SIZE_DIMENSION: usize = 2;
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            size: Value::from([100, 100]),
            color: Value::white(),
            border_size: Value::from([0]),
            border_color: Value::white(),
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Canvas")?;
        writeln!(f, "- size: {}", self.size)?;
        writeln!(f, "- color: {}", self.color)?;
        writeln!(f, "- border.size: {}", self.border_size)?;
        writeln!(f, "- border.color: {}", self.border_color)
    }
}
