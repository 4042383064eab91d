//! Integration strategies. Selected once at construction; the spring, anchor
//! and collision passes around them are shared.

use crate::float::Float;
use crate::point::GridPoint;
use crate::spring::Spring;
use crate::vec::Vec3;

/// How springs act on points and how points advance in time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegrationMode {
    /// Position-based: each pass moves spring endpoints directly toward rest
    /// length, then points advance by damped Verlet under gravity.
    #[default]
    Relaxation,
    /// Springs produce damped Hookean forces; points advance by explicit Euler,
    /// once per pass over an equal share of the sub-step.
    ForceEuler,
    /// Gravity only, explicit Euler. Springs are ignored.
    Euler,
    /// Gravity only, position Verlet. Springs are ignored.
    Verlet,
}

impl IntegrationMode {
    /// Spring passes per sub-step. The gravity-only modes run a single
    /// (empty) pass.
    pub fn passes(self, iterations: usize) -> usize {
        match self {
            IntegrationMode::Relaxation | IntegrationMode::ForceEuler => iterations,
            IntegrationMode::Euler | IntegrationMode::Verlet => 1,
        }
    }

    /// Whether this mode advances points from `prev_position`.
    pub fn is_verlet(self) -> bool {
        matches!(self, IntegrationMode::Relaxation | IntegrationMode::Verlet)
    }

    /// Prepare freshly built points so the first step starts from rest.
    pub fn prime<F: Float>(self, points: &mut [GridPoint<F>], gravity: Vec3<F>, dt: F) {
        if !self.is_verlet() {
            return;
        }
        for p in points.iter_mut().filter(|p| !p.pinned) {
            p.seed_verlet(Vec3::zero(), gravity, dt);
        }
    }

    /// One sweep over all springs in their fixed order. In force mode the
    /// accumulators are cleared first.
    pub fn spring_pass<F: Float>(self, springs: &[Spring<F>], points: &mut [GridPoint<F>], spring_constant: F) {
        match self {
            IntegrationMode::Relaxation => {
                for s in springs {
                    s.relax(points);
                }
            }
            IntegrationMode::ForceEuler => {
                for p in points.iter_mut() {
                    p.clear_force();
                }
                for s in springs {
                    s.accumulate_force(points, spring_constant);
                }
            }
            IntegrationMode::Euler | IntegrationMode::Verlet => {}
        }
    }

    /// Advance free points by `dt` under the forces of the last spring pass.
    /// Only force mode moves points between passes.
    pub fn force_step<F: Float>(self, points: &mut [GridPoint<F>], gravity: Vec3<F>, dt: F) {
        if self != IntegrationMode::ForceEuler {
            return;
        }
        for p in points.iter_mut().filter(|p| !p.pinned) {
            let accel = p.force.scale(p.inv_mass) + gravity;
            euler(p, accel, dt);
        }
    }

    /// Close out a sub-step of length `dt` for every free point. Anchored points
    /// are not integrated. Force mode has already moved its points pass by pass
    /// and only applies velocity retention here.
    pub fn integrate<F: Float>(self, points: &mut [GridPoint<F>], gravity: Vec3<F>, damping: F, dt: F) {
        for p in points.iter_mut().filter(|p| !p.pinned) {
            match self {
                IntegrationMode::Relaxation => verlet(p, gravity, damping, dt),
                IntegrationMode::Verlet => verlet(p, gravity, F::one(), dt),
                IntegrationMode::ForceEuler => p.velocity = p.velocity.scale(damping),
                IntegrationMode::Euler => euler(p, gravity, dt),
            }
        }
    }
}

fn verlet<F: Float>(p: &mut GridPoint<F>, accel: Vec3<F>, damping: F, dt: F) {
    let step = p.displacement().scale(damping);
    p.prev_position = p.position;
    p.position = p.position + step + accel.scale(dt * dt);
    if !dt.is_near_zero(F::epsilon()) {
        p.velocity = step.scale(F::one() / dt);
    }
}

fn euler<F: Float>(p: &mut GridPoint<F>, accel: Vec3<F>, dt: F) {
    p.velocity += accel.scale(dt);
    p.prev_position = p.position;
    p.position += p.velocity.scale(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::SpringKind;
    use alloc::vec;

    fn free_point() -> GridPoint<f64> {
        GridPoint::new(Vec3::zero(), 1.0, 0)
    }

    #[test]
    fn euler_matches_semi_implicit_update() {
        let mut points = [free_point()];
        let g = Vec3::new(0.0, -10.0, 0.0);
        IntegrationMode::Euler.integrate(&mut points, g, 1.0, 0.1);
        assert!((points[0].velocity.y + 1.0).abs() < 1e-12);
        assert!((points[0].position.y + 0.1).abs() < 1e-12);
    }

    #[test]
    fn pinned_points_do_not_integrate() {
        let mut points = [free_point()];
        points[0].pinned = true;
        for mode in [
            IntegrationMode::Relaxation,
            IntegrationMode::ForceEuler,
            IntegrationMode::Euler,
            IntegrationMode::Verlet,
        ] {
            mode.integrate(&mut points, Vec3::new(0.0, -10.0, 0.0), 1.0, 0.1);
        }
        assert_eq!(points[0].position, Vec3::zero());
    }

    #[test]
    fn force_mode_clears_before_accumulating() {
        let spring = Spring::new(SpringKind::Structural, 0, 1, 1.0, 1.0, 0.0);
        let mut points = vec![free_point(), GridPoint::new(Vec3::new(2.0, 0.0, 0.0), 1.0, 1)];
        let mode = IntegrationMode::ForceEuler;
        mode.spring_pass(core::slice::from_ref(&spring), &mut points, 10.0);
        mode.spring_pass(core::slice::from_ref(&spring), &mut points, 10.0);
        assert!((points[0].force.x - 10.0).abs() < 1e-12);
        assert!((points[1].force.x + 10.0).abs() < 1e-12);
    }

    #[test]
    fn force_step_divides_by_mass() {
        let spring = Spring::new(SpringKind::Structural, 0, 1, 1.0, 1.0, 0.0);
        let mut points = vec![free_point(), GridPoint::new(Vec3::new(2.0, 0.0, 0.0), 2.0, 1)];
        points[0].pinned = true;
        let mode = IntegrationMode::ForceEuler;
        mode.spring_pass(core::slice::from_ref(&spring), &mut points, 10.0);
        mode.force_step(&mut points, Vec3::new(0.0, -10.0, 0.0), 0.1);

        // Pull of 10 on a mass of 2: a = (-5, -10), one Euler step of 0.1.
        assert!((points[1].velocity.x + 0.5).abs() < 1e-12);
        assert!((points[1].velocity.y + 1.0).abs() < 1e-12);
        assert!((points[1].position.x - 1.95).abs() < 1e-12);
        assert!((points[1].position.y + 0.1).abs() < 1e-12);
        assert_eq!(points[0].position, Vec3::zero());
    }

    #[test]
    fn force_mode_retains_velocity_at_sub_step_end() {
        let mut points = [free_point()];
        points[0].velocity = Vec3::new(1.0, 2.0, 0.0);
        IntegrationMode::ForceEuler.integrate(&mut points, Vec3::new(0.0, -10.0, 0.0), 0.5, 0.1);
        assert_eq!(points[0].velocity, Vec3::new(0.5, 1.0, 0.0));
        assert_eq!(points[0].position, Vec3::zero());
    }

    #[test]
    fn gravity_only_modes_ignore_springs() {
        let spring = Spring::new(SpringKind::Structural, 0, 1, 1.0, 1.0, 0.0);
        let mut points = vec![free_point(), GridPoint::new(Vec3::new(2.0, 0.0, 0.0), 1.0, 1)];
        IntegrationMode::Verlet.spring_pass(core::slice::from_ref(&spring), &mut points, 10.0);
        IntegrationMode::Euler.spring_pass(core::slice::from_ref(&spring), &mut points, 10.0);
        assert_eq!(points[1].position, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn passes_per_mode() {
        assert_eq!(IntegrationMode::Relaxation.passes(5), 5);
        assert_eq!(IntegrationMode::ForceEuler.passes(5), 5);
        assert_eq!(IntegrationMode::Verlet.passes(5), 1);
    }
}
