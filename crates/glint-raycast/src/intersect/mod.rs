//! Ray-shape intersection algorithms.
//!
//! One closed-form routine per shape, each attached to
//! [`Ray`](crate::Ray) from its own file with its own tests. All of
//! them report non-intersection as `None`; boolean variants share the
//! same math.

mod aabb;
mod plane;
mod sphere;
mod triangle;
