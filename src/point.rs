//! Point masses of the cloth grid.

use crate::float::Float;
use crate::vec::Vec3;

/// One mass-bearing vertex of the cloth mesh.
///
/// Carries both an explicit `velocity` (Euler integrators) and a
/// `prev_position` (Verlet integrators); each integration mode reads only the
/// state it needs.
#[derive(Clone, Debug)]
pub struct GridPoint<F: Float> {
    pub position: Vec3<F>,
    pub prev_position: Vec3<F>,
    pub velocity: Vec3<F>,
    /// Force accumulator, cleared before every force-mode spring pass.
    pub force: Vec3<F>,
    pub mass: F,
    pub inv_mass: F,
    /// Row-major index `row * resolution + col`.
    pub grid_index: usize,
    /// Anchored points are skipped by integration.
    pub pinned: bool,
}

impl<F: Float> GridPoint<F> {
    /// Create a point at rest. `mass` must be positive; the topology builder validates it.
    pub fn new(position: Vec3<F>, mass: F, grid_index: usize) -> Self {
        GridPoint {
            position,
            prev_position: position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            mass,
            inv_mass: F::one() / mass,
            grid_index,
            pinned: false,
        }
    }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.force += force;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec3::zero();
    }

    /// Seed `prev_position` so the first Verlet step starts with `velocity` and
    /// follows the closed-form trajectory `x(n) = x0 + n·dt·v0 + n²·dt²/2·a`.
    pub fn seed_verlet(&mut self, velocity: Vec3<F>, acceleration: Vec3<F>, dt: F) {
        self.velocity = velocity;
        self.prev_position = self.position - velocity.scale(dt) + acceleration.scale(F::half() * dt * dt);
    }

    /// Displacement since the previous Verlet step.
    pub fn displacement(&self) -> Vec3<F> {
        self.position - self.prev_position
    }

    /// Force the point to `target` and forget any motion it had.
    pub fn place(&mut self, target: Vec3<F>) {
        self.position = target;
        self.prev_position = target;
        self.velocity = Vec3::zero();
    }
}
