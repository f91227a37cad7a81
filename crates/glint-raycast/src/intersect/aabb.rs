//! Ray-box intersection (slab method).

use crate::Ray;
use glint_geom::Aabb3;
use glint_math::Point3;

impl Ray {
    /// Intersect the ray with an axis-aligned box.
    ///
    /// Slab test over reciprocal direction components: each axis
    /// contributes an entry/exit interval and the running `[tmin, tmax]`
    /// intersection must stay nonempty. An axis-parallel ray starting
    /// exactly on a face produces `0.0 * inf = NaN` slab bounds; NaN
    /// compares false in both directions, and the unordered branches
    /// below then replace the poisoned bound with the other axis's, so
    /// grazing rays still count as hits. Returns the entry point, or
    /// the exit point when the origin is inside the box.
    pub fn intersect_aabb(&self, aabb: &Aabb3) -> Option<Point3> {
        let invdirx = 1.0 / self.direction.x;
        let invdiry = 1.0 / self.direction.y;
        let invdirz = 1.0 / self.direction.z;

        let (mut tmin, mut tmax) = if invdirx >= 0.0 {
            (
                (aabb.min.x - self.origin.x) * invdirx,
                (aabb.max.x - self.origin.x) * invdirx,
            )
        } else {
            (
                (aabb.max.x - self.origin.x) * invdirx,
                (aabb.min.x - self.origin.x) * invdirx,
            )
        };

        let (tymin, tymax) = if invdiry >= 0.0 {
            (
                (aabb.min.y - self.origin.y) * invdiry,
                (aabb.max.y - self.origin.y) * invdiry,
            )
        } else {
            (
                (aabb.max.y - self.origin.y) * invdiry,
                (aabb.min.y - self.origin.y) * invdiry,
            )
        };

        if tmin > tymax || tymin > tmax {
            return None;
        }

        // An unordered comparison means the running bound is NaN; adopt
        // the other axis's bound instead.
        if tymin > tmin || tmin.is_nan() {
            tmin = tymin;
        }
        if tymax < tmax || tmax.is_nan() {
            tmax = tymax;
        }

        let (tzmin, tzmax) = if invdirz >= 0.0 {
            (
                (aabb.min.z - self.origin.z) * invdirz,
                (aabb.max.z - self.origin.z) * invdirz,
            )
        } else {
            (
                (aabb.max.z - self.origin.z) * invdirz,
                (aabb.min.z - self.origin.z) * invdirz,
            )
        };

        if tmin > tzmax || tzmin > tmax {
            return None;
        }

        if tzmin > tmin || tmin.is_nan() {
            tmin = tzmin;
        }
        if tzmax < tmax || tmax.is_nan() {
            tmax = tzmax;
        }

        // Box entirely behind the ray.
        if tmax < 0.0 {
            return None;
        }

        Some(self.at(if tmin >= 0.0 { tmin } else { tmax }))
    }

    /// Test if the ray reaches a box.
    pub fn intersects_aabb(&self, aabb: &Aabb3) -> bool {
        self.intersect_aabb(aabb).is_some()
    }
}
