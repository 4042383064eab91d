//! Error types for cloth construction.

use core::fmt;

/// Errors reported while building or reconfiguring a cloth.
///
/// Stepping a constructed cloth never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid resolution must be at least 2.
    InvalidResolution { resolution: usize },
    /// At least one relaxation pass per sub-step is required.
    InvalidIterations,
    /// Point mass must be positive and finite.
    InvalidMass,
    /// Spring stiffness must be in (0, 1].
    InvalidStiffness,
    /// Damping values must be finite, non-negative and (for velocity retention) at most 1.
    InvalidDamping,
    /// Sphere radius must be positive and finite.
    InvalidRadius,
    /// Sub-step duration must be positive and finite.
    InvalidSubStepDuration,
    /// A sub-step policy must allow at least one sub-step per frame.
    InvalidSubSteps,
    /// Anchor cell lies outside the grid.
    AnchorOutOfBounds { row: usize, col: usize, resolution: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidResolution { resolution } => {
                write!(f, "grid resolution must be at least 2 (got {})", resolution)
            }
            ClothError::InvalidIterations => write!(f, "at least one relaxation pass is required"),
            ClothError::InvalidMass => write!(f, "point mass must be positive and finite"),
            ClothError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            ClothError::InvalidDamping => write!(f, "damping must be finite and within range"),
            ClothError::InvalidRadius => write!(f, "sphere radius must be positive and finite"),
            ClothError::InvalidSubStepDuration => write!(f, "sub-step duration must be positive and finite"),
            ClothError::InvalidSubSteps => write!(f, "sub-step policy must allow at least one sub-step"),
            ClothError::AnchorOutOfBounds { row, col, resolution } => {
                write!(f, "anchor ({}, {}) outside {}x{} grid", row, col, resolution, resolution)
            }
        }
    }
}
