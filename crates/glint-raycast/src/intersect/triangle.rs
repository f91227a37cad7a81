//! Ray-triangle intersection.

use crate::Ray;
use glint_math::Point3;

impl Ray {
    /// Intersect the ray with the triangle `a`, `b`, `c`.
    ///
    /// Solves the barycentric system against the triangle's plane with
    /// every quantity folded by the sign of the direction/normal dot
    /// product, so front and back approaches share one code path. With
    /// `backface_culling` set, triangles wound clockwise when viewed
    /// along the ray are skipped. Degenerate triangles have a zero
    /// normal and fall out through the parallel check.
    pub fn intersect_triangle(
        &self,
        a: &Point3,
        b: &Point3,
        c: &Point3,
        backface_culling: bool,
    ) -> Option<Point3> {
        let edge1 = b - a;
        let edge2 = c - a;
        let normal = edge1.cross(&edge2);

        // DdN > 0 means the ray points along the outward normal, i.e.
        // approaches the back face.
        let mut dd_n = self.direction.dot(&normal);
        let sign;
        if dd_n > 0.0 {
            if backface_culling {
                return None;
            }
            sign = 1.0;
        } else if dd_n < 0.0 {
            sign = -1.0;
            dd_n = -dd_n;
        } else {
            // Parallel to the triangle plane, or degenerate triangle.
            return None;
        }

        let diff = self.origin - a;
        let b1 = sign * self.direction.dot(&diff.cross(&edge2));
        if b1 < 0.0 {
            return None;
        }

        let b2 = sign * self.direction.dot(&edge1.cross(&diff));
        if b2 < 0.0 {
            return None;
        }

        if b1 + b2 > dd_n {
            return None;
        }

        // Line meets the triangle; reject intersections behind the origin.
        let qd_n = -sign * diff.dot(&normal);
        if qd_n < 0.0 {
            return None;
        }

        Some(self.at(qd_n / dd_n))
    }
}
