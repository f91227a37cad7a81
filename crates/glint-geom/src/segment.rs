//! Finite line segments.

use glint_math::{Point3, Vec3};
use serde::{Deserialize, Serialize};

/// A line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment3 {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Segment3 {
    /// Create a segment from its endpoints.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// The vector from start to end.
    pub fn delta(&self) -> Vec3 {
        self.end - self.start
    }

    /// Evaluate the segment at parameter `t`: `start + t * delta`.
    ///
    /// `t` in `[0, 1]` covers the segment; values outside extrapolate.
    pub fn at(&self, t: f64) -> Point3 {
        self.start + t * self.delta()
    }

    /// Midpoint of the segment.
    pub fn center(&self) -> Point3 {
        self.at(0.5)
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }
}
