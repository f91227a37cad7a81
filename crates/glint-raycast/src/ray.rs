//! Ray representation and transform utilities.

use glint_math::{Point3, Transform, Vec3};
use serde::{Deserialize, Serialize};

/// A ray in 3D space: an origin point and a unit direction.
///
/// The direction is caller-contracted to be unit length and is never
/// checked or re-normalized by this type; queries silently return skewed
/// results for a non-unit direction. `apply_transform` keeps the contract
/// in the caller's hands too: a scaling transform leaves the direction
/// scaled, and callers re-normalize when they mean to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from origin and unit direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    ///
    /// Negative `t` extrapolates behind the origin.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// Re-aim the ray at a target point, normalizing the new direction.
    pub fn look_at(&mut self, target: &Point3) {
        self.direction = (target - self.origin).normalize();
    }

    /// Advance the origin to `at(t)`, keeping the direction.
    pub fn recast(&mut self, t: f64) {
        self.origin = self.at(t);
    }

    /// Transform the origin as a point and the direction as a direction.
    ///
    /// The direction is not re-normalized afterward.
    pub fn apply_transform(&mut self, m: &Transform) {
        self.origin = m.apply_point(&self.origin);
        self.direction = m.apply_vec(&self.direction);
    }
}

impl Default for Ray {
    /// A ray at the world origin looking down the -Z axis.
    fn default() -> Self {
        Self {
            origin: Point3::origin(),
            direction: Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_ray_at_negative() {
        let ray = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let p = ray.at(-3.0);
        assert!((p.x - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_default_ray() {
        let ray = Ray::default();
        assert_eq!(ray.origin, Point3::origin());
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_look_at() {
        let mut ray = Ray::new(Point3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        ray.look_at(&Point3::new(4.0, 5.0, 1.0));
        assert!((ray.direction.x - 0.6).abs() < 1e-12);
        assert!((ray.direction.y - 0.8).abs() < 1e-12);
        assert!(ray.direction.z.abs() < 1e-12);
        assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_recast() {
        let mut ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.6, 0.8, 0.0));
        let ahead = ray.at(7.0);
        ray.recast(5.0);
        assert!((ray.origin.x - 3.0).abs() < 1e-12);
        assert!((ray.origin.y - 4.0).abs() < 1e-12);
        // Same line, re-parameterized.
        assert!((ray.at(2.0) - ahead).norm() < 1e-12);
        assert_eq!(ray.direction, Vec3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn test_apply_transform_rigid() {
        let mut ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let m = Transform::rotation_z(PI / 2.0).then(&Transform::translation(0.0, 0.0, 5.0));
        ray.apply_transform(&m);
        assert!(ray.origin.x.abs() < 1e-12);
        assert!((ray.origin.y - 1.0).abs() < 1e-12);
        assert!((ray.origin.z - 5.0).abs() < 1e-12);
        // Direction rotates but does not translate.
        assert!(ray.direction.x.abs() < 1e-12);
        assert!((ray.direction.y - 1.0).abs() < 1e-12);
        assert!(ray.direction.z.abs() < 1e-12);
        assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_transform_scale_leaves_length() {
        let mut ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        ray.apply_transform(&Transform::scale(2.0, 2.0, 2.0));
        assert!((ray.origin.x - 2.0).abs() < 1e-12);
        // The direction is scaled and stays scaled.
        assert!((ray.direction.norm() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_clone_equals() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
        let copy = ray;
        assert_eq!(copy, ray);
        let mut other = ray;
        other.recast(1.0);
        assert_ne!(other, ray);
    }
}
