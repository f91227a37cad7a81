//! Spheres.

use crate::Plane;
use glint_math::Point3;
use serde::{Deserialize, Serialize};

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Test if a point is inside the sphere (surface counts as inside).
    pub fn contains_point(&self, p: &Point3) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Test if two spheres overlap (touching counts as overlap).
    pub fn intersects_sphere(&self, other: &Sphere) -> bool {
        let radius_sum = self.radius + other.radius;
        (other.center - self.center).norm_squared() <= radius_sum * radius_sum
    }

    /// Test if the sphere straddles or touches a plane.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        plane.distance_to_point(&self.center).abs() <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    #[test]
    fn test_contains_point() {
        let sphere = Sphere::new(Point3::new(1.0, 0.0, 0.0), 2.0);
        assert!(sphere.contains_point(&Point3::new(1.0, 0.0, 0.0)));
        assert!(sphere.contains_point(&Point3::new(3.0, 0.0, 0.0))); // on surface
        assert!(!sphere.contains_point(&Point3::new(3.5, 0.0, 0.0)));
    }

    #[test]
    fn test_intersects_sphere() {
        let a = Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0);
        let b = Sphere::new(Point3::new(1.5, 0.0, 0.0), 1.0);
        assert!(a.intersects_sphere(&b));

        let c = Sphere::new(Point3::new(2.0, 0.0, 0.0), 1.0);
        assert!(a.intersects_sphere(&c)); // touching

        let d = Sphere::new(Point3::new(5.0, 0.0, 0.0), 1.0);
        assert!(!a.intersects_sphere(&d));
    }

    #[test]
    fn test_intersects_plane() {
        let plane = Plane::new(Vec3::z(), 0.0);
        assert!(Sphere::new(Point3::new(0.0, 0.0, 0.5), 1.0).intersects_plane(&plane));
        assert!(Sphere::new(Point3::new(0.0, 0.0, 1.0), 1.0).intersects_plane(&plane)); // tangent
        assert!(!Sphere::new(Point3::new(0.0, 0.0, 1.5), 1.0).intersects_plane(&plane));
        // Below the plane works the same way.
        assert!(!Sphere::new(Point3::new(0.0, 0.0, -1.5), 1.0).intersects_plane(&plane));
    }
}
