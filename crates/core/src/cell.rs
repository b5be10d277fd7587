//! Cell type
//!
//! A `Cell` is a single mutable storage location holding one signed integer.
//! It serializes as its bare value.

use crate::swap::exchange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A storage location holding one `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell {
    value: i32,
}

impl Cell {
    /// Create a cell holding `value`
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Current value
    pub const fn get(&self) -> i32 {
        self.value
    }

    /// Overwrite the value, returning the previous one
    pub fn set(&mut self, value: i32) -> i32 {
        std::mem::replace(&mut self.value, value)
    }

    /// Exchange contents with `other`.
    pub fn exchange_with(&mut self, other: &mut Cell) {
        exchange(&mut self.value, &mut other.value);
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Cell> for i32 {
    fn from(cell: Cell) -> Self {
        cell.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
