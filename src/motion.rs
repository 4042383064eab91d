//! Discrete sphere steering.
//!
//! The caller owns a [`SphereController`], feeds it key press and release
//! events, and hands the resulting [`SphereDirection`] to each frame step.

use crate::float::Float;
use crate::vec::Vec3;

/// Which way the sphere is being pushed this frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SphereDirection {
    #[default]
    Stationary,
    /// +Y
    Up,
    /// −Y
    Down,
    /// −X
    Left,
    /// +X
    Right,
    /// +Z, toward the sheet from its default side.
    Forward,
    /// −Z
    Backward,
}

impl SphereDirection {
    /// Unit step for this direction (zero when stationary).
    pub fn axis<F: Float>(self) -> Vec3<F> {
        let (o, l) = (F::zero(), F::one());
        match self {
            SphereDirection::Stationary => Vec3::zero(),
            SphereDirection::Up => Vec3::new(o, l, o),
            SphereDirection::Down => Vec3::new(o, -l, o),
            SphereDirection::Left => Vec3::new(-l, o, o),
            SphereDirection::Right => Vec3::new(l, o, o),
            SphereDirection::Forward => Vec3::new(o, o, l),
            SphereDirection::Backward => Vec3::new(o, o, -l),
        }
    }

    /// Translation applied once per frame at `speed` world units.
    pub fn displacement<F: Float>(self, speed: F) -> Vec3<F> {
        self.axis::<F>().scale(speed)
    }
}

/// Press/release state machine. Pressing a direction makes it current;
/// releasing any direction returns to `Stationary`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SphereController {
    direction: SphereDirection,
}

impl SphereController {
    pub fn new() -> Self {
        SphereController { direction: SphereDirection::Stationary }
    }

    pub fn press(&mut self, direction: SphereDirection) {
        self.direction = direction;
    }

    pub fn release(&mut self, _direction: SphereDirection) {
        self.direction = SphereDirection::Stationary;
    }

    pub fn direction(&self) -> SphereDirection {
        self.direction
    }
}
