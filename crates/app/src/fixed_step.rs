//! Accumulator scheduler that turns variable frame times into whole simulation steps.

/// Longest frame the scheduler will catch up on. Anything beyond is dropped so a stalled
/// window does not replay seconds of simulation in one frame.
pub const MAX_FRAME_SECONDS: f64 = 0.25;

#[derive(Clone, Debug, PartialEq)]
pub struct FixedStep {
    step_seconds: f64,
    accumulator: f64,
}

impl FixedStep {
    pub fn new(rate_hz: u32) -> Self {
        Self { step_seconds: 1.0 / f64::from(rate_hz.max(1)), accumulator: 0.0 }
    }

    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    /// Adds one frame's duration and returns how many steps are now due.
    pub fn advance(&mut self, frame_seconds: f64) -> u32 {
        if frame_seconds.is_finite() && frame_seconds > 0.0 {
            self.accumulator += frame_seconds.min(MAX_FRAME_SECONDS);
        }
        let mut steps = 0;
        while self.accumulator >= self.step_seconds {
            self.accumulator -= self.step_seconds;
            steps += 1;
        }
        steps
    }

    /// Drops leftover time, e.g. after a pause, so the next frame does not burst.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
