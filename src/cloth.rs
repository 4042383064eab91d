//! The cloth kernel: owns every piece of simulation state and advances it one
//! rendered frame at a time.

use crate::anchor::AnchorSet;
use crate::collider::SphereCollider;
use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::grid::{self, Topology};
use crate::motion::SphereDirection;
use crate::normals;
use crate::observer::StepObserver;
use crate::point::GridPoint;
use crate::spring::Spring;
use crate::timestep::StepClock;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Read-only view of one frame's results, for the renderer.
#[derive(Copy, Clone, Debug)]
pub struct FrameOutput<'a, F: Float> {
    /// `resolution²` positions in row-major order.
    pub positions: &'a [Vec3<F>],
    /// Vertex normals parallel to `positions`.
    pub normals: &'a [Vec3<F>],
    pub sphere: SphereCollider<F>,
    /// Sub-steps actually run this frame.
    pub sub_steps: usize,
}

/// A square sheet of point masses joined by springs, pinned at two corners and
/// draped against a movable sphere.
///
/// Per frame: a number of sub-steps, each running the spring/anchor passes,
/// one collision pass and one integration pass; then the sphere moves once and
/// normals are rebuilt.
///
/// ```
/// use clothy::{Cloth, ClothConfig, NoOpStepObserver, SphereDirection};
///
/// let mut cloth = Cloth::<f32>::new(ClothConfig::new().with_resolution(8)).unwrap();
/// let frame = cloth.step(1.0 / 60.0, SphereDirection::Forward, &mut NoOpStepObserver);
/// assert_eq!(frame.positions.len(), 64);
/// assert_eq!(frame.normals.len(), 64);
/// ```
#[derive(Clone, Debug)]
pub struct Cloth<F: Float> {
    points: AllocVec<GridPoint<F>>,
    springs: AllocVec<Spring<F>>,
    anchors: AnchorSet<F>,
    sphere: SphereCollider<F>,
    clock: StepClock<F>,
    config: ClothConfig<F>,
    positions: AllocVec<Vec3<F>>,
    normals: AllocVec<Vec3<F>>,
    indices: AllocVec<u32>,
}

impl<F: Float> Cloth<F> {
    /// Build the grid and springs, pin the two top corners (largest `y`) in
    /// place and seed the integrator from rest.
    pub fn new(config: ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;
        let Topology { points, springs } = Topology::build(&config)?;
        let res = config.resolution;

        let mut cloth = Cloth {
            positions: points.iter().map(|p| p.position).collect(),
            normals: alloc::vec![Vec3::unit_z(); points.len()],
            indices: grid::triangle_indices(res),
            points,
            springs,
            anchors: AnchorSet::new(),
            sphere: SphereCollider::new(config.sphere_center, config.sphere_radius),
            clock: StepClock::new(),
            config,
        };

        cloth.pin(0, res - 1)?;
        cloth.pin(res - 1, res - 1)?;
        cloth.config.mode.prime(&mut cloth.points, cloth.config.gravity, cloth.config.sub_step_duration);
        Ok(cloth)
    }

    /// Build with no anchors at all.
    pub fn unanchored(config: ClothConfig<F>) -> Result<Self, ClothError> {
        let mut cloth = Self::new(config)?;
        let res = cloth.resolution();
        cloth.unpin(0, res - 1)?;
        cloth.unpin(res - 1, res - 1)?;
        let (mode, gravity, dt) = (cloth.config.mode, cloth.config.gravity, cloth.config.sub_step_duration);
        mode.prime(&mut cloth.points, gravity, dt);
        Ok(cloth)
    }

    /// Advance one rendered frame.
    ///
    /// `elapsed` only matters for [`SubSteps::Accumulated`](crate::timestep::SubSteps);
    /// with a fixed sub-step count the result depends on the inputs' sequence alone.
    /// `direction` moves the sphere once, after all sub-steps.
    pub fn step<O: StepObserver>(
        &mut self,
        elapsed: F,
        direction: SphereDirection,
        observer: &mut O,
    ) -> FrameOutput<'_, F> {
        let mode = self.config.mode;
        let dt = self.config.sub_step_duration;
        let sub_steps = self.clock.sub_steps(self.config.sub_steps, elapsed, dt);

        let passes = mode.passes(self.config.iterations);
        let pass_dt = dt / F::from_usize(passes);

        for sub in 0..sub_steps {
            for pass in 0..passes {
                mode.spring_pass(&self.springs, &mut self.points, self.config.spring_constant);
                mode.force_step(&mut self.points, self.config.gravity, pass_dt);
                self.anchors.enforce(&mut self.points);
                observer.on_relaxation_pass(pass);
            }

            if self.config.collision_enabled {
                let contacts = self.sphere.resolve(&mut self.points);
                observer.on_collision(contacts);
            }

            mode.integrate(&mut self.points, self.config.gravity, self.config.damping, dt);
            observer.on_integrate();
            observer.on_sub_step_complete(sub);
        }

        self.sphere.translate(direction.displacement(self.config.sphere_speed));

        for (out, p) in self.positions.iter_mut().zip(self.points.iter()) {
            *out = p.position;
        }
        normals::estimate(&self.positions, self.config.resolution, &mut self.normals);
        observer.on_step_complete();

        FrameOutput {
            positions: &self.positions,
            normals: &self.normals,
            sphere: self.sphere,
            sub_steps,
        }
    }

    /// Pin grid cell `(row, col)` where it currently is.
    pub fn pin(&mut self, row: usize, col: usize) -> Result<(), ClothError> {
        let idx = self.checked_index(row, col)?;
        let target = self.points[idx].position;
        self.anchors.insert(&mut self.points, idx, target);
        Ok(())
    }

    /// Pin grid cell `(row, col)` to `target`.
    pub fn pin_at(&mut self, row: usize, col: usize, target: Vec3<F>) -> Result<(), ClothError> {
        let idx = self.checked_index(row, col)?;
        self.anchors.insert(&mut self.points, idx, target);
        self.positions[idx] = target;
        Ok(())
    }

    /// Release the anchor on `(row, col)`. Returns whether it was pinned.
    pub fn unpin(&mut self, row: usize, col: usize) -> Result<bool, ClothError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.anchors.remove(&mut self.points, idx))
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, ClothError> {
        let res = self.config.resolution;
        if row >= res || col >= res {
            return Err(ClothError::AnchorOutOfBounds { row, col, resolution: res });
        }
        Ok(grid::index(res, row, col))
    }

    /// Place the sphere directly, bypassing per-frame motion.
    pub fn set_sphere_center(&mut self, center: Vec3<F>) {
        self.sphere.center = center;
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        grid::index(self.config.resolution, row, col)
    }

    /// Positions as of the last completed step.
    pub fn positions(&self) -> &[Vec3<F>] { &self.positions }
    /// Normals as of the last completed step.
    pub fn normals(&self) -> &[Vec3<F>] { &self.normals }
    /// Triangle list over the grid, three indices per triangle.
    pub fn indices(&self) -> &[u32] { &self.indices }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] positions
    pub fn flat_positions(&self) -> AllocVec<F> {
        flatten(&self.positions)
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] normals
    pub fn flat_normals(&self) -> AllocVec<F> {
        flatten(&self.normals)
    }

    pub fn position_at(&self, row: usize, col: usize) -> Vec3<F> {
        self.points[self.index(row, col)].position
    }

    pub fn sphere(&self) -> &SphereCollider<F> { &self.sphere }
    pub fn anchors(&self) -> &AnchorSet<F> { &self.anchors }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn resolution(&self) -> usize { self.config.resolution }
    pub fn point(&self, index: usize) -> &GridPoint<F> { &self.points[index] }
    pub fn point_mut(&mut self, index: usize) -> &mut GridPoint<F> { &mut self.points[index] }
    pub fn points(&self) -> &[GridPoint<F>] { &self.points }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }

    /// Largest `|length − rest|` over all springs.
    pub fn max_strain(&self) -> F {
        self.springs
            .iter()
            .fold(F::zero(), |acc, s| acc.max(s.strain(&self.points).abs()))
    }
}

fn flatten<F: Float>(vs: &[Vec3<F>]) -> AllocVec<F> {
    let mut out = AllocVec::with_capacity(vs.len() * 3);
    for v in vs {
        out.extend_from_slice(&[v.x, v.y, v.z]);
    }
    out
}
