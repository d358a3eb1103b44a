//! Attribute values — fixed-arity tuples of non-negative integers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered tuple of non-negative integers. Its length is its dimension:
/// positions have dimension 2, colors 3, border sizes 1, and sizes 1 or 2
/// depending on the owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(Vec<u32>);

impl Value {
    pub fn new(numbers: Vec<u32>) -> Self {
        Self(numbers)
    }

    pub fn rgb(r: u32, g: u32, b: u32) -> Self {
        Self(vec![r, g, b])
    }

    /// `n` copies of `number`.
    pub fn filled(number: u32, n: usize) -> Self {
        Self(vec![number; n])
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl<const N: usize> From<[u32; N]> for Value {
    fn from(numbers: [u32; N]) -> Self {
        Self(numbers.to_vec())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, n) in self.numbers().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, ")")
    }
}
