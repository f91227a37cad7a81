//! Point and segment distance queries.

use crate::Ray;
use glint_geom::Segment3;
use glint_math::Point3;

/// Closest-approach result between a ray and a segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentDistance {
    /// Squared distance at the closest approach.
    pub distance_sq: f64,
    /// Closest point on the ray.
    pub point_on_ray: Point3,
    /// Closest point on the segment.
    pub point_on_segment: Point3,
}

impl Ray {
    /// The point on the ray closest to `p`.
    ///
    /// Projections behind the origin clamp to the origin; the ray does
    /// not extend backward.
    pub fn closest_point_to_point(&self, p: &Point3) -> Point3 {
        let direction_distance = (p - self.origin).dot(&self.direction);
        if direction_distance < 0.0 {
            return self.origin;
        }
        self.at(direction_distance)
    }

    /// Squared distance from the ray to a point, clamped at the origin.
    pub fn distance_sq_to_point(&self, p: &Point3) -> f64 {
        let direction_distance = (p - self.origin).dot(&self.direction);
        // Point projects behind the ray: measure to the origin.
        if direction_distance < 0.0 {
            return (p - self.origin).norm_squared();
        }
        (self.at(direction_distance) - p).norm_squared()
    }

    /// Distance from the ray to a point, clamped at the origin.
    pub fn distance_to_point(&self, p: &Point3) -> f64 {
        self.distance_sq_to_point(p).sqrt()
    }

    /// Squared distance between the ray and a finite segment.
    pub fn distance_sq_to_segment(&self, segment: &Segment3) -> f64 {
        self.closest_to_segment(segment).distance_sq
    }

    /// Closest approach between the ray and a finite segment.
    ///
    /// Minimizes the squared distance over the ray parameter `s0 >= 0`
    /// and the segment's signed offset `s1` in `[-extent, extent]` from
    /// its midpoint. The (s0, s1) domain splits into the unconstrained
    /// interior minimum, four cases where one or both parameters clamp
    /// to a boundary, and the parallel degeneracy. When ray and segment
    /// are parallel every interior pairing ties, so the segment endpoint
    /// on the ray's forward side wins and `s0` clamps to zero if the
    /// matching ray parameter lands negative.
    pub fn closest_to_segment(&self, segment: &Segment3) -> SegmentDistance {
        let seg_center = segment.center();
        let seg_dir = segment.delta().normalize();
        let seg_extent = segment.length() * 0.5;

        let diff = self.origin - seg_center;
        let a01 = -self.direction.dot(&seg_dir);
        let b0 = diff.dot(&self.direction);
        let b1 = -diff.dot(&seg_dir);
        let c = diff.norm_squared();
        let det = (1.0 - a01 * a01).abs();

        let mut s0;
        let mut s1;
        let dist_sq;

        if det > 0.0 {
            s0 = a01 * b1 - b0;
            s1 = a01 * b0 - b1;
            let ext_det = seg_extent * det;

            if s0 >= 0.0 {
                if s1 >= -ext_det {
                    if s1 <= ext_det {
                        // Minimum at interior points of both ray and segment.
                        let inv_det = 1.0 / det;
                        s0 *= inv_det;
                        s1 *= inv_det;
                        dist_sq = s0 * (s0 + a01 * s1 + 2.0 * b0)
                            + s1 * (a01 * s0 + s1 + 2.0 * b1)
                            + c;
                    } else {
                        // Segment clamps to its far endpoint.
                        s1 = seg_extent;
                        s0 = (-(a01 * s1 + b0)).max(0.0);
                        dist_sq = -s0 * s0 + s1 * (s1 + 2.0 * b1) + c;
                    }
                } else {
                    // Segment clamps to its near endpoint.
                    s1 = -seg_extent;
                    s0 = (-(a01 * s1 + b0)).max(0.0);
                    dist_sq = -s0 * s0 + s1 * (s1 + 2.0 * b1) + c;
                }
            } else if s1 <= -ext_det {
                // Ray clamps to its origin, segment to its near endpoint
                // unless the origin faces the interior.
                s0 = (-(-a01 * seg_extent + b0)).max(0.0);
                s1 = if s0 > 0.0 {
                    -seg_extent
                } else {
                    (-b1).clamp(-seg_extent, seg_extent)
                };
                dist_sq = -s0 * s0 + s1 * (s1 + 2.0 * b1) + c;
            } else if s1 <= ext_det {
                // Ray clamps to its origin, segment interior.
                s0 = 0.0;
                s1 = (-b1).clamp(-seg_extent, seg_extent);
                dist_sq = s1 * (s1 + 2.0 * b1) + c;
            } else {
                // Ray clamps to its origin, segment to its far endpoint
                // unless the origin faces the interior.
                s0 = (-(a01 * seg_extent + b0)).max(0.0);
                s1 = if s0 > 0.0 {
                    seg_extent
                } else {
                    (-b1).clamp(-seg_extent, seg_extent)
                };
                dist_sq = -s0 * s0 + s1 * (s1 + 2.0 * b1) + c;
            }
        } else {
            // Parallel: take the endpoint on the ray's forward side.
            s1 = if a01 > 0.0 { -seg_extent } else { seg_extent };
            s0 = (-(a01 * s1 + b0)).max(0.0);
            dist_sq = -s0 * s0 + s1 * (s1 + 2.0 * b1) + c;
        }

        SegmentDistance {
            distance_sq: dist_sq,
            point_on_ray: self.at(s0),
            point_on_segment: seg_center + s1 * seg_dir,
        }
    }
}
