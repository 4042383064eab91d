//! Distance springs between grid points.
//!
//! A spring is a plain descriptor: two point indices, a rest length and a
//! stiffness. The same descriptor is consumed two ways, as a positional
//! correction by the relaxation solver and as a damped Hookean force by the
//! force-based integrator.

use crate::float::Float;
use crate::point::GridPoint;
use crate::vec::Vec3;

/// Which neighbor offset a spring connects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpringKind {
    /// Axis neighbors, rest length `1/res`.
    Structural,
    /// Diagonal neighbors, rest length `√2/res`.
    Shear,
    /// Neighbors two cells away, rest length `2/res`.
    Bend,
}

/// A distance constraint between two grid points. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
    /// Velocity damping along the spring axis, read only by the force integrator.
    pub damping: F,
    pub kind: SpringKind,
}

impl<F: Float> Spring<F> {
    pub fn new(kind: SpringKind, a: usize, b: usize, rest_length: F, stiffness: F, damping: F) -> Self {
        Spring { a, b, rest_length, stiffness, damping, kind }
    }

    /// Positional corrections `(for a, for b)` that move the pair toward the
    /// rest length.
    ///
    /// The full correction `stiffness · (d − rest) / d · (b − a)` is split by
    /// relative inverse mass, so the two results are antiparallel and
    /// `|Δa| + |Δb|` equals the full correction. Returns `None` when the
    /// endpoints coincide or both are immovable.
    pub fn correction(
        &self,
        pos_a: Vec3<F>,
        pos_b: Vec3<F>,
        inv_mass_a: F,
        inv_mass_b: F,
    ) -> Option<(Vec3<F>, Vec3<F>)> {
        let w_total = inv_mass_a + inv_mass_b;
        if w_total.is_near_zero(F::epsilon()) {
            return None;
        }

        let delta = pos_b - pos_a;
        let dist = delta.length();
        if dist.is_near_zero(F::epsilon()) {
            return None;
        }

        let full = delta.scale(self.stiffness * (dist - self.rest_length) / dist);
        Some((full.scale(inv_mass_a / w_total), -full.scale(inv_mass_b / w_total)))
    }

    /// Apply one relaxation step of this spring to the point array.
    pub fn relax(&self, points: &mut [GridPoint<F>]) {
        let (pa, pb) = (&points[self.a], &points[self.b]);
        if let Some((da, db)) = self.correction(pa.position, pb.position, pa.inv_mass, pb.inv_mass) {
            points[self.a].position += da;
            points[self.b].position += db;
        }
    }

    /// Damped Hookean force acting on endpoint `a`; endpoint `b` receives the negation.
    ///
    /// `spring_constant` is force per unit relative elongation, so the Hooke
    /// constant of this spring is `spring_constant · stiffness / rest_length` and
    /// a sheet keeps the same elastic response at any resolution. The damping
    /// term uses only the relative velocity component along the spring axis.
    pub fn force(&self, a: &GridPoint<F>, b: &GridPoint<F>, spring_constant: F) -> Vec3<F> {
        let delta = b.position - a.position;
        let dist = delta.length();
        if dist.is_near_zero(F::epsilon()) {
            return Vec3::zero();
        }
        let dir = delta.scale(F::one() / dist);
        let stretch = spring_constant * self.stiffness * (dist - self.rest_length) / self.rest_length;
        let closing = (b.velocity - a.velocity).dot(dir) * self.damping;
        dir.scale(stretch + closing)
    }

    /// Accumulate this spring's force into both endpoints.
    pub fn accumulate_force(&self, points: &mut [GridPoint<F>], spring_constant: F) {
        let f = self.force(&points[self.a], &points[self.b], spring_constant);
        points[self.a].apply_force(f);
        points[self.b].apply_force(-f);
    }

    /// Current length minus rest length.
    pub fn strain(&self, points: &[GridPoint<F>]) -> F {
        points[self.a].position.distance(points[self.b].position) - self.rest_length
    }
}
