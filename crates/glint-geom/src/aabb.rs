//! Axis-aligned bounding boxes.

use crate::Plane;
use glint_math::Point3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D.
///
/// Callers keep `min <= max` componentwise; the queries assume it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// The tightest AABB enclosing `points`; empty when the slice is.
    pub fn from_points(points: &[Point3]) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        aabb
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Center point of the box.
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Test if a point is inside the box (faces count as inside).
    pub fn contains_point(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Test if two AABBs overlap (touching counts as overlap).
    pub fn overlaps(&self, other: &Aabb3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Test if the box straddles or touches a plane.
    ///
    /// Projects the box onto the plane normal by picking, per axis, the
    /// corner components that minimize and maximize the dot product; the
    /// plane intersects the box iff its offset falls inside that range.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        let (mut min_dot, mut max_dot) = if plane.normal.x > 0.0 {
            (plane.normal.x * self.min.x, plane.normal.x * self.max.x)
        } else {
            (plane.normal.x * self.max.x, plane.normal.x * self.min.x)
        };
        if plane.normal.y > 0.0 {
            min_dot += plane.normal.y * self.min.y;
            max_dot += plane.normal.y * self.max.y;
        } else {
            min_dot += plane.normal.y * self.max.y;
            max_dot += plane.normal.y * self.min.y;
        }
        if plane.normal.z > 0.0 {
            min_dot += plane.normal.z * self.min.z;
            max_dot += plane.normal.z * self.max.z;
        } else {
            min_dot += plane.normal.z * self.max.z;
            max_dot += plane.normal.z * self.min.z;
        }
        min_dot <= -plane.constant && max_dot >= -plane.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let b = Aabb3::new(Point3::new(5.0, 5.0, 5.0), Point3::new(15.0, 15.0, 15.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Aabb3::new(Point3::new(20.0, 20.0, 20.0), Point3::new(30.0, 30.0, 30.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_aabb_touching() {
        let a = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let b = Aabb3::new(Point3::new(10.0, 0.0, 0.0), Point3::new(20.0, 10.0, 10.0));
        assert!(a.overlaps(&b)); // touching counts
    }

    #[test]
    fn test_from_points() {
        let aabb = Aabb3::from_points(&[
            Point3::new(1.0, 5.0, -2.0),
            Point3::new(-3.0, 2.0, 4.0),
            Point3::new(0.0, 7.0, 0.0),
        ]);
        assert!((aabb.min.x - (-3.0)).abs() < 1e-12);
        assert!((aabb.min.y - 2.0).abs() < 1e-12);
        assert!((aabb.min.z - (-2.0)).abs() < 1e-12);
        assert!((aabb.max.x - 1.0).abs() < 1e-12);
        assert!((aabb.max.y - 7.0).abs() < 1e-12);
        assert!((aabb.max.z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains_point(&Point3::new(0.0, 0.0, 0.0)));
        assert!(aabb.contains_point(&Point3::new(1.0, 1.0, 1.0))); // corner
        assert!(!aabb.contains_point(&Point3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_center() {
        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 6.0, 8.0));
        let c = aabb.center();
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!((c.y - 3.0).abs() < 1e-12);
        assert!((c.z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_intersects_plane_crossing() {
        let aabb = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let plane = Plane::new(Vec3::z(), 0.0);
        assert!(aabb.intersects_plane(&plane));
    }

    #[test]
    fn test_intersects_plane_above_and_below() {
        let aabb = Aabb3::new(Point3::new(-1.0, -1.0, 2.0), Point3::new(1.0, 1.0, 4.0));
        // Box is entirely on the positive side of the XY plane.
        let plane = Plane::new(Vec3::z(), 0.0);
        assert!(!aabb.intersects_plane(&plane));
        // Move the plane to z = 3, through the box.
        let plane = Plane::new(Vec3::z(), -3.0);
        assert!(aabb.intersects_plane(&plane));
        // Plane at z = 10, box entirely below.
        let plane = Plane::new(Vec3::z(), -10.0);
        assert!(!aabb.intersects_plane(&plane));
    }

    #[test]
    fn test_intersects_plane_touching_face() {
        let aabb = Aabb3::new(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 2.0));
        // Plane z = 0 touches the bottom face.
        let plane = Plane::new(Vec3::z(), 0.0);
        assert!(aabb.intersects_plane(&plane));
    }

    #[test]
    fn test_intersects_plane_tilted() {
        let aabb = Aabb3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let normal = Vec3::new(1.0, 1.0, 1.0).normalize();
        // Through the origin: cuts the box.
        assert!(aabb.intersects_plane(&Plane::new(normal, 0.0)));
        // Past the far corner along the diagonal: misses.
        assert!(!aabb.intersects_plane(&Plane::new(normal, -4.0)));
    }
}
