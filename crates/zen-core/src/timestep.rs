/// Fixed-timestep accumulator.
///
/// The integrator assumes one step per displayed frame, so the swarm moves
/// faster on high refresh-rate displays. Driving it through this accumulator
/// instead runs a whole number of steps per wall-clock interval, decoupling
/// the motion from the refresh rate. Time beyond `max_steps` per call is
/// dropped rather than carried, so a long stall does not cause a burst.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedTimestep {
    /// Simulated seconds per integrator step.
    pub step_seconds: f32,
    /// Upper bound on steps returned by one [`FixedTimestep::advance`].
    pub max_steps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(1.0 / 60.0, 5)
    }
}

impl FixedTimestep {
    pub fn new(step_seconds: f32, max_steps: u32) -> Self {
        Self {
            step_seconds: step_seconds.max(1.0e-4),
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Feed `dt` seconds of wall time, get the number of steps to run now.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }
        let mut steps = 0;
        while self.accumulator >= self.step_seconds && steps < self.max_steps {
            self.accumulator -= self.step_seconds;
            steps += 1;
        }
        if steps == self.max_steps {
            self.accumulator = self.accumulator.min(self.step_seconds);
        }
        steps
    }

    /// Leftover time not yet consumed by a step.
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
