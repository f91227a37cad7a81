//! Ray-sphere intersection (projected-center form).

use crate::Ray;
use glint_geom::Sphere;
use glint_math::Point3;

impl Ray {
    /// Intersect the ray with a sphere, returning the nearest point at
    /// or ahead of the origin.
    ///
    /// Projects the center onto the ray (`tca`), measures the squared
    /// perpendicular miss distance (`d2`), and steps half the chord
    /// (`thc`) to both candidate parameters. An origin inside the
    /// sphere yields the exit point; a sphere entirely behind the
    /// origin yields `None`.
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<Point3> {
        let oc = sphere.center - self.origin;
        let tca = oc.dot(&self.direction);
        let d2 = oc.dot(&oc) - tca * tca;
        let radius2 = sphere.radius * sphere.radius;

        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        // Entry and exit parameters along the ray.
        let t0 = tca - thc;
        let t1 = tca + thc;

        // Both behind the origin: no forward hit.
        if t1 < 0.0 {
            return None;
        }

        // Entry behind but exit ahead: the origin is inside the sphere.
        if t0 < 0.0 {
            return Some(self.at(t1));
        }

        Some(self.at(t0))
    }

    /// Test if the ray's supporting line passes within the sphere's
    /// radius of its center.
    ///
    /// The distance here is unclamped: a sphere entirely behind the
    /// origin still tests true even though `intersect_sphere` finds no
    /// forward hit for it.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let oc = sphere.center - self.origin;
        let tca = oc.dot(&self.direction);
        let d2 = oc.dot(&oc) - tca * tca;
        d2 <= sphere.radius * sphere.radius
    }
}
