//! Sub-step scheduling: how many fixed-length sub-steps a frame runs.

use crate::float::Float;

/// Policy for turning frame time into sub-steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubSteps {
    /// Always run this many sub-steps, ignoring elapsed time. Reproducible.
    Fixed(usize),
    /// Run as many whole sub-steps as elapsed plus carried time covers, at
    /// most `max`. The fractional remainder carries into the next frame.
    Accumulated { max: usize },
}

impl SubSteps {
    /// Most sub-steps a single frame can run.
    pub fn max_per_frame(self) -> usize {
        match self {
            SubSteps::Fixed(n) => n,
            SubSteps::Accumulated { max } => max,
        }
    }
}

impl Default for SubSteps {
    fn default() -> Self {
        SubSteps::Fixed(1)
    }
}

/// Carries fractional frame time between frames for [`SubSteps::Accumulated`].
#[derive(Clone, Debug, Default)]
pub struct StepClock<F: Float> {
    carry: F,
}

impl<F: Float> StepClock<F> {
    pub fn new() -> Self {
        StepClock { carry: F::zero() }
    }

    /// Number of sub-steps of length `duration` to run for a frame that took `elapsed`.
    ///
    /// Non-finite or negative `elapsed` counts as zero.
    pub fn sub_steps(&mut self, policy: SubSteps, elapsed: F, duration: F) -> usize {
        match policy {
            SubSteps::Fixed(n) => n,
            SubSteps::Accumulated { max } => {
                let elapsed = if elapsed.is_finite() { elapsed.max(F::zero()) } else { F::zero() };
                let total = self.carry + elapsed;
                let whole = (total / duration).floor();
                let count = whole.to_usize();
                if count > max {
                    // Drop the backlog instead of spiralling.
                    self.carry = F::zero();
                    max
                } else {
                    self.carry = total - whole * duration;
                    count
                }
            }
        }
    }

    /// Time carried into the next frame.
    pub fn carry(&self) -> F {
        self.carry
    }
}
