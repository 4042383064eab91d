//! Sphere collider: pushes penetrating points out to the sphere surface.

use crate::float::Float;
use crate::point::GridPoint;
use crate::vec::Vec3;

/// A movable sphere the cloth cannot enter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphereCollider<F: Float> {
    pub center: Vec3<F>,
    pub radius: F,
}

impl<F: Float> SphereCollider<F> {
    pub fn new(center: Vec3<F>, radius: F) -> Self {
        SphereCollider { center, radius }
    }

    /// Where `position` ends up after resolving against the sphere, or `None`
    /// if it is already outside.
    ///
    /// A penetrating point moves along the ray from the center through it,
    /// landing exactly on the surface. A point sitting on the center has no
    /// ray, so it is pushed along +Z, the sheet's rest normal.
    pub fn project(&self, position: Vec3<F>) -> Option<Vec3<F>> {
        let offset = position - self.center;
        let dist_sq = offset.length_sq();
        if dist_sq >= self.radius * self.radius {
            return None;
        }
        let dist = dist_sq.sqrt();
        if dist.is_near_zero(F::epsilon()) {
            return Some(self.center + Vec3::unit_z().scale(self.radius));
        }
        Some(self.center + offset.scale(self.radius / dist))
    }

    /// Resolve every free point. Positional only: velocities are left alone.
    ///
    /// Anchored points are exempt: an anchor inside the sphere stays inside and
    /// is not counted as a contact.
    /// Returns the number of points pushed out.
    pub fn resolve(&self, points: &mut [GridPoint<F>]) -> usize {
        let mut contacts = 0;
        for p in points.iter_mut().filter(|p| !p.pinned) {
            if let Some(surface) = self.project(p.position) {
                p.position = surface;
                contacts += 1;
            }
        }
        contacts
    }

    pub fn translate(&mut self, by: Vec3<F>) {
        self.center += by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_point_lands_on_surface() {
        let sphere = SphereCollider::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0);
        let p = sphere.project(Vec3::new(0.3, 0.4, 0.0)).unwrap();
        assert!((p.length() - 1.0).abs() < 1e-6);
        assert!((p.x - 0.6).abs() < 1e-6 && (p.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn outside_point_untouched() {
        let sphere = SphereCollider::new(Vec3::new(0.0f32, 0.0, 0.0), 1.0);
        assert!(sphere.project(Vec3::new(2.0, 0.0, 0.0)).is_none());
        assert!(sphere.project(Vec3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn centered_point_is_pushed_along_z() {
        let sphere = SphereCollider::new(Vec3::new(1.0f64, 1.0, 1.0), 0.5);
        let p = sphere.project(Vec3::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(p, Vec3::new(1.0, 1.0, 1.5));
    }

    #[test]
    fn resolve_counts_contacts() {
        let sphere = SphereCollider::new(Vec3::<f32>::zero(), 1.0);
        let mut points = [
            GridPoint::new(Vec3::new(0.5, 0.0, 0.0), 1.0, 0),
            GridPoint::new(Vec3::new(5.0, 0.0, 0.0), 1.0, 1),
        ];
        assert_eq!(sphere.resolve(&mut points), 1);
        assert!((points[0].position.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn anchored_point_inside_is_left_alone() {
        let sphere = SphereCollider::new(Vec3::<f32>::zero(), 1.0);
        let mut points = [
            GridPoint::new(Vec3::new(0.2, 0.0, 0.0), 1.0, 0),
            GridPoint::new(Vec3::new(0.0, 0.5, 0.0), 1.0, 1),
        ];
        points[0].pinned = true;
        assert_eq!(sphere.resolve(&mut points), 1);
        assert_eq!(points[0].position, Vec3::new(0.2, 0.0, 0.0));
        assert!((points[1].position.y - 1.0).abs() < 1e-6);
    }
}
