#![warn(missing_docs)]

//! A library for 2D planar points.
//!
//! This crate provides a single value type, [`Point`], with component-wise
//! addition, a stable textual form, and a direct stdout print operation.

use core::fmt;
use core::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2‑D point `(x, y)` with value semantics.
///
/// Coordinates are stored verbatim. No exposed operation mutates a
/// constructed point; addition returns a new value and the type is `Copy`,
/// so operands are never consumed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a new point.
    ///
    /// # Arguments
    ///
    /// * `x`: The x-coordinate.
    /// * `y`: The y-coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Write the point to stdout, newline-terminated.
    ///
    /// The line is the same text as the [`Display`](fmt::Display) form:
    /// both coordinates in decimal, separated by a single space.
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl Add for Point {
    type Output = Point;

    /// Component-wise addition producing a new point.
    ///
    /// Both operands are `Copy` and remain unchanged after the call.
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
