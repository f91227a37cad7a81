//! Infinite planes in Hessian normal form.

use crate::{Aabb3, Segment3, Sphere};
use glint_math::{Mat3, Point3, Transform, Vec3};
use serde::{Deserialize, Serialize};

/// An infinite plane in Hessian normal form.
///
/// Stored as a unit `normal` and an offset `constant` such that every
/// point `P` on the plane satisfies `normal.dot(P) + constant == 0`;
/// `constant` is the negative signed distance from the world origin to
/// the plane along the normal.
///
/// Callers keep `normal` unit length. The queries assume it and do not
/// check; a non-unit normal silently skews every distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Negative signed distance from the world origin along `normal`.
    pub constant: f64,
}

impl Plane {
    /// Create a plane from a unit normal and offset constant.
    pub fn new(normal: Vec3, constant: f64) -> Self {
        Self { normal, constant }
    }

    /// Create a plane with the given unit normal through `point`.
    pub fn from_normal_and_coplanar_point(normal: Vec3, point: Point3) -> Self {
        Self {
            normal,
            constant: -point.coords.dot(&normal),
        }
    }

    /// Create a plane through three points.
    ///
    /// The normal is `normalize(cross(c - b, a - b))`, so winding order
    /// decides which side the normal faces. Collinear points yield an
    /// undefined normal.
    pub fn from_coplanar_points(a: Point3, b: Point3, c: Point3) -> Self {
        let normal = (c - b).cross(&(a - b)).normalize();
        Self::from_normal_and_coplanar_point(normal, a)
    }

    /// Overwrite all four components at once.
    pub fn set_components(&mut self, x: f64, y: f64, z: f64, w: f64) {
        self.normal = Vec3::new(x, y, z);
        self.constant = w;
    }

    /// Rescale to unit normal, adjusting the constant by the same factor.
    ///
    /// Divides by zero on a zero-length normal; supplying a usable normal
    /// is the caller's contract.
    pub fn normalize(&mut self) {
        let inverse_length = 1.0 / self.normal.norm();
        self.normal *= inverse_length;
        self.constant *= inverse_length;
    }

    /// Flip orientation: the same plane with the normal facing the other way.
    pub fn negate(&mut self) {
        self.constant = -self.constant;
        self.normal = -self.normal;
    }

    /// Signed distance from a point, positive on the side the normal faces.
    pub fn distance_to_point(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) + self.constant
    }

    /// Signed distance from a sphere's surface to the plane.
    ///
    /// Negative once the sphere overlaps or crosses the plane.
    pub fn distance_to_sphere(&self, sphere: &Sphere) -> f64 {
        self.distance_to_point(&sphere.center) - sphere.radius
    }

    /// The orthogonal projection of a point onto the plane.
    pub fn project_point(&self, p: &Point3) -> Point3 {
        p - self.normal * self.distance_to_point(p)
    }

    /// The point on the plane closest to the world origin.
    pub fn coplanar_point(&self) -> Point3 {
        Point3::from(self.normal * -self.constant)
    }

    /// Intersect a finite segment with the plane.
    ///
    /// Returns the crossing point when the segment reaches the plane
    /// within its extent, `None` otherwise. A segment lying exactly in
    /// the plane yields its start point. The parallel test is an exact
    /// zero comparison, so a segment running nearly parallel far from
    /// the plane resolves to a crossing outside `[0, 1]` and returns
    /// `None` rather than being treated as parallel.
    pub fn intersect_segment(&self, segment: &Segment3) -> Option<Point3> {
        let direction = segment.delta();
        let denominator = self.normal.dot(&direction);
        if denominator == 0.0 {
            if self.distance_to_point(&segment.start) == 0.0 {
                return Some(segment.start);
            }
            return None;
        }
        let t = -(self.normal.dot(&segment.start.coords) + self.constant) / denominator;
        if t < 0.0 || t > 1.0 {
            return None;
        }
        Some(segment.at(t))
    }

    /// Test if a segment strictly crosses the plane.
    ///
    /// Endpoints touching the plane, or a segment lying in it, do not
    /// count as crossing.
    pub fn intersects_segment(&self, segment: &Segment3) -> bool {
        let start_sign = self.distance_to_point(&segment.start);
        let end_sign = self.distance_to_point(&segment.end);
        (start_sign < 0.0 && end_sign > 0.0) || (end_sign < 0.0 && start_sign > 0.0)
    }

    /// Test if a box straddles or touches the plane.
    pub fn intersects_aabb(&self, aabb: &Aabb3) -> bool {
        aabb.intersects_plane(self)
    }

    /// Test if a sphere straddles or touches the plane.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        sphere.intersects_plane(self)
    }

    /// Apply an affine transform to the plane in place.
    ///
    /// A coplanar reference point moves through the full matrix, the
    /// normal moves through the normal matrix (inverse transpose of the
    /// upper-left 3x3, computed from `m` when not supplied) and is
    /// re-normalized, and the constant is rebuilt from both. Callers
    /// batching many planes through one transform can precompute the
    /// normal matrix once and pass it in.
    pub fn apply_transform(&mut self, m: &Transform, normal_matrix: Option<&Mat3>) {
        let normal_matrix = match normal_matrix {
            Some(nm) => *nm,
            None => m.normal_matrix(),
        };
        let reference = m.apply_point(&self.coplanar_point());
        self.normal = (normal_matrix * self.normal).normalize();
        self.constant = -reference.coords.dot(&self.normal);
    }

    /// Shift the plane by the normal component of `offset`.
    ///
    /// Tangential components have no effect; a plane carries no in-plane
    /// position.
    pub fn translate(&mut self, offset: &Vec3) {
        self.constant -= offset.dot(&self.normal);
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vec3::x(),
            constant: 0.0,
        }
    }
}
