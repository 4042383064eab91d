//! Configuration for a cloth simulation.

use crate::error::ClothError;
use crate::float::Float;
use crate::integrator::IntegrationMode;
use crate::timestep::SubSteps;
use crate::vec::Vec3;

/// Everything fixed at construction time.
///
/// # Builder Pattern
/// ```
/// use clothy::config::ClothConfig;
/// use clothy::integrator::IntegrationMode;
/// use clothy::vec::Vec3;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_resolution(16)
///     .with_iterations(5)
///     .with_gravity(Vec3::new(0.0, -9.8, 0.0))
///     .with_mode(IntegrationMode::Relaxation);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Points per side. The grid holds `resolution²` points. Default: 32.
    pub resolution: usize,
    /// Relaxation passes per sub-step. Default: 5.
    pub iterations: usize,
    /// Gravity acceleration. Default: (0, -9.8, 0).
    pub gravity: Vec3<F>,
    /// Fraction of velocity kept each sub-step by the relaxation and force
    /// modes, in [0, 1]. Default: 0.99.
    pub damping: F,
    /// Sub-step scheduling policy. Default: `Fixed(1)`.
    pub sub_steps: SubSteps,
    /// Length of one sub-step in seconds. Default: 0.016.
    pub sub_step_duration: F,
    /// Stiffness of axis-neighbor springs, in (0, 1]. Default: 1.
    pub structural_stiffness: F,
    /// Stiffness of diagonal springs, in (0, 1]. Default: 1.
    pub shear_stiffness: F,
    /// Stiffness of two-cell springs, in (0, 1]. Default: 1.
    pub bend_stiffness: F,
    /// Force per unit relative elongation in force mode, scaled per spring by
    /// its stiffness. Default: 300.
    pub spring_constant: F,
    /// Axial velocity damping in force mode. Default: 10.
    pub spring_damping: F,
    /// Mass of every grid point. Default: 1.
    pub point_mass: F,
    /// Starting center of the collision sphere. Default: (0.5, 0.5, -0.3).
    pub sphere_center: Vec3<F>,
    /// Default: 0.2.
    pub sphere_radius: F,
    /// Sphere displacement per frame while a direction is held. Default: 0.01.
    pub sphere_speed: F,
    /// Run the sphere collision pass each sub-step. Default: true.
    pub collision_enabled: bool,
    /// Default: `Relaxation`.
    pub mode: IntegrationMode,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            resolution: 32,
            iterations: 5,
            gravity: Vec3::from_f32([0.0, -9.8, 0.0]),
            damping: F::from_f32(0.99),
            sub_steps: SubSteps::Fixed(1),
            sub_step_duration: F::from_f32(0.016),
            structural_stiffness: F::one(),
            shear_stiffness: F::one(),
            bend_stiffness: F::one(),
            spring_constant: F::from_f32(300.0),
            spring_damping: F::from_f32(10.0),
            point_mass: F::one(),
            sphere_center: Vec3::from_f32([0.5, 0.5, -0.3]),
            sphere_radius: F::from_f32(0.2),
            sphere_speed: F::from_f32(0.01),
            collision_enabled: true,
            mode: IntegrationMode::Relaxation,
        }
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the sub-step policy. A fixed count is clamped to at least 1.
    pub fn with_sub_steps(mut self, sub_steps: SubSteps) -> Self {
        self.sub_steps = match sub_steps {
            SubSteps::Fixed(n) => SubSteps::Fixed(n.max(1)),
            other => other,
        };
        self
    }

    pub fn with_sub_step_duration(mut self, duration: F) -> Self {
        self.sub_step_duration = duration;
        self
    }

    /// Set the same stiffness on all three spring families.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.structural_stiffness = stiffness;
        self.shear_stiffness = stiffness;
        self.bend_stiffness = stiffness;
        self
    }

    pub fn with_family_stiffness(mut self, structural: F, shear: F, bend: F) -> Self {
        self.structural_stiffness = structural;
        self.shear_stiffness = shear;
        self.bend_stiffness = bend;
        self
    }

    pub fn with_spring_constant(mut self, spring_constant: F) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    pub fn with_spring_damping(mut self, spring_damping: F) -> Self {
        self.spring_damping = spring_damping;
        self
    }

    pub fn with_point_mass(mut self, mass: F) -> Self {
        self.point_mass = mass;
        self
    }

    pub fn with_sphere(mut self, center: Vec3<F>, radius: F) -> Self {
        self.sphere_center = center;
        self.sphere_radius = radius;
        self
    }

    pub fn with_sphere_speed(mut self, speed: F) -> Self {
        self.sphere_speed = speed;
        self
    }

    pub fn with_collision(mut self, enabled: bool) -> Self {
        self.collision_enabled = enabled;
        self
    }

    pub fn with_mode(mut self, mode: IntegrationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.resolution < 2 {
            return Err(ClothError::InvalidResolution { resolution: self.resolution });
        }
        if self.iterations == 0 {
            return Err(ClothError::InvalidIterations);
        }
        if !positive(self.point_mass) {
            return Err(ClothError::InvalidMass);
        }
        let unit_interval = |s: F| positive(s) && s <= F::one();
        if !unit_interval(self.structural_stiffness)
            || !unit_interval(self.shear_stiffness)
            || !unit_interval(self.bend_stiffness)
        {
            return Err(ClothError::InvalidStiffness);
        }
        if !self.spring_constant.is_finite() || self.spring_constant < F::zero() {
            return Err(ClothError::InvalidStiffness);
        }
        if !non_negative(self.spring_damping)
            || !non_negative(self.damping)
            || self.damping > F::one()
        {
            return Err(ClothError::InvalidDamping);
        }
        if !positive(self.sphere_radius) || !self.sphere_center.is_finite() {
            return Err(ClothError::InvalidRadius);
        }
        if !positive(self.sub_step_duration) {
            return Err(ClothError::InvalidSubStepDuration);
        }
        if self.sub_steps.max_per_frame() == 0 {
            return Err(ClothError::InvalidSubSteps);
        }
        Ok(())
    }
}

fn positive<F: Float>(v: F) -> bool {
    v.is_finite() && v > F::zero()
}

fn non_negative<F: Float>(v: F) -> bool {
    v.is_finite() && v >= F::zero()
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ClothConfig::<f32>::new().validate().is_ok());
        assert!(ClothConfig::<f64>::default().validate().is_ok());
    }

    #[test]
    fn fixed_sub_steps_clamped() {
        let config = ClothConfig::<f32>::new().with_sub_steps(SubSteps::Fixed(0));
        assert_eq!(config.sub_steps, SubSteps::Fixed(1));
    }

    #[test]
    fn zero_sub_step_policies_rejected() {
        let mut config = ClothConfig::<f32>::new();
        config.sub_steps = SubSteps::Fixed(0);
        assert_eq!(config.validate(), Err(ClothError::InvalidSubSteps));
        let config = ClothConfig::<f32>::new().with_sub_steps(SubSteps::Accumulated { max: 0 });
        assert_eq!(config.validate(), Err(ClothError::InvalidSubSteps));
        let config = ClothConfig::<f32>::new().with_sub_steps(SubSteps::Accumulated { max: 4 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let base = ClothConfig::<f32>::new();
        assert_eq!(
            base.clone().with_resolution(1).validate(),
            Err(ClothError::InvalidResolution { resolution: 1 })
        );
        assert_eq!(base.clone().with_iterations(0).validate(), Err(ClothError::InvalidIterations));
        assert_eq!(base.clone().with_point_mass(0.0).validate(), Err(ClothError::InvalidMass));
        assert_eq!(base.clone().with_stiffness(0.0).validate(), Err(ClothError::InvalidStiffness));
        assert_eq!(base.clone().with_stiffness(1.5).validate(), Err(ClothError::InvalidStiffness));
        assert_eq!(base.clone().with_damping(1.5).validate(), Err(ClothError::InvalidDamping));
        assert_eq!(
            base.clone().with_sphere(Vec3::zero(), -1.0).validate(),
            Err(ClothError::InvalidRadius)
        );
        assert_eq!(
            base.with_sub_step_duration(f32::NAN).validate(),
            Err(ClothError::InvalidSubStepDuration)
        );
    }
}
