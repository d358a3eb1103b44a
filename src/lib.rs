//! PaintTalk — describe a picture in sentences, get a scene back.
//!
//! ```text
//! A is circle and size of its border is 2.
//! B is square. A is in front of B.
//! ```
//!
//! Program text goes through [`dsl::tokenize()`], [`dsl::parse()`] and
//! [`dsl::interpret()`] to produce a [`scene::Scene`]: a canvas plus shapes in
//! paint order. Drawing the scene is left to the caller.

pub mod config;
pub mod dsl;
pub mod output;
pub mod scene;

pub use dsl::{ErrorKind, PaintError, PaintTalk};
pub use scene::Scene;
