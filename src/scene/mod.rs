//! Scene model — the resolved, renderer-ready description of a program.
//!
//! A [`Scene`] is a [`Canvas`] plus an ordered list of [`Shape`]s. Order is
//! paint order: earlier shapes are painted first and end up visually behind
//! later ones.

pub mod canvas;
pub mod shape;
pub mod value;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use canvas::Canvas;
pub use shape::{Shape, ShapeKind};
pub use value::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Shape names in paint order.
    pub fn shape_names(&self) -> Vec<&str> {
        self.shapes.iter().map(|s| s.name.as_str()).collect()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canvas)?;
        for shape in &self.shapes {
            write!(f, "{shape}")?;
        }
        Ok(())
    }
}
