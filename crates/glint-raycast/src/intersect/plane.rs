//! Ray-plane intersection (closed-form).

use crate::Ray;
use glint_geom::Plane;
use glint_math::Point3;

impl Ray {
    /// Parameter at which the ray reaches a plane.
    ///
    /// A parallel ray yields `Some(0.0)` when its origin lies exactly
    /// in the plane, `None` otherwise. The parallel test is an exact
    /// zero comparison on the denominator, so a nearly parallel ray
    /// resolves to a large finite `t` instead of the parallel branch.
    /// A crossing behind the origin yields `None`.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f64> {
        let denominator = plane.normal.dot(&self.direction);
        if denominator == 0.0 {
            // Coplanar ray: every point lies in the plane.
            if plane.distance_to_point(&self.origin) == 0.0 {
                return Some(0.0);
            }
            return None;
        }

        let t = -(self.origin.coords.dot(&plane.normal) + plane.constant) / denominator;
        if t >= 0.0 {
            Some(t)
        } else {
            None
        }
    }

    /// Intersect the ray with a plane.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Point3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }

    /// Test if the ray reaches a plane, without constructing the point.
    ///
    /// True when the origin lies exactly in the plane, or when the
    /// origin's side and the direction's tilt face each other.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        let dist_to_point = plane.distance_to_point(&self.origin);
        if dist_to_point == 0.0 {
            return true;
        }
        let denominator = plane.normal.dot(&self.direction);
        denominator * dist_to_point < 0.0
    }
}
