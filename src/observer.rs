//! Step observer trait for monitoring cloth simulation progress.

/// Hooks called from inside [`Cloth::step`](crate::cloth::Cloth::step).
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after each spring + anchor pass within a sub-step.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called after the collision pass with the number of points pushed out.
    fn on_collision(&mut self, _contacts: usize) {}

    /// Called after all points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called at the end of each sub-step.
    fn on_sub_step_complete(&mut self, _sub_step: usize) {}

    /// Called when a frame step is fully complete, after normals are rebuilt.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Running totals across every step it observes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub passes: usize,
    pub sub_steps: usize,
    pub frames: usize,
    pub contacts: usize,
    /// Contacts reported by the most recent collision pass.
    pub last_contacts: usize,
}

impl StepObserver for StepStats {
    fn on_relaxation_pass(&mut self, _pass: usize) {
        self.passes += 1;
    }

    fn on_collision(&mut self, contacts: usize) {
        self.contacts += contacts;
        self.last_contacts = contacts;
    }

    fn on_sub_step_complete(&mut self, _sub_step: usize) {
        self.sub_steps += 1;
    }

    fn on_step_complete(&mut self) {
        self.frames += 1;
    }
}
