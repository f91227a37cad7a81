#![warn(missing_docs)]

//! Ray casting and distance queries for the glint geometry kernel.
//!
//! A [`Ray`] is an origin plus a unit direction: a forward half-line.
//! This crate gives it closest-point and distance queries against points
//! and finite segments, and exact closed-form intersection tests against
//! the glint-geom shapes:
//!
//! - `ray` - the [`Ray`] value type and its transform utilities
//! - `distance` - point and segment queries, including the
//!   [`SegmentDistance`] closest-approach result
//! - `intersect` - one algorithm per shape: sphere, plane, axis-aligned
//!   box, triangle
//!
//! Every query is a pure function of the ray and its arguments; nothing
//! is cached or shared between calls, so values can be read concurrently
//! and mutated under ordinary exclusive ownership.

mod distance;
mod intersect;
mod ray;

pub use distance::SegmentDistance;
pub use ray::Ray;
