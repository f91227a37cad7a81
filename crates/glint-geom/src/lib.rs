#![warn(missing_docs)]

//! Analytic primitive shapes for the glint geometry kernel.
//!
//! Small owned value types with exact containment and intersection
//! predicates, used as query arguments by the ray-casting layer:
//!
//! - [`Aabb3`] - axis-aligned bounding box
//! - [`Sphere`] - center/radius ball
//! - [`Segment3`] - finite line segment
//! - [`Plane`] - infinite plane in Hessian normal form
//!
//! Each shape is the authority for its own predicates; [`Plane`]
//! delegates its box and sphere tests to the shape rather than
//! duplicating the math.

mod aabb;
mod plane;
mod segment;
mod sphere;

pub use aabb::Aabb3;
pub use plane::Plane;
pub use segment::Segment3;
pub use sphere::Sphere;
