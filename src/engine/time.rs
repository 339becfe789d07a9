use std::time::Instant;

/// Longest frame delta handed to the simulation. A stall (window drag,
/// debugger pause) would otherwise bank seconds of catch-up into the
/// fixed-step accumulator.
const MAX_FRAME_DT: f32 = 0.25;

/// Wall-clock frame timer. `dt` is the clamped seconds elapsed between the
/// last two `tick` calls.
pub struct FrameTimer {
    last: Instant,
    pub dt: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last).as_secs_f32().min(MAX_FRAME_DT);
        self.last = now;
    }
}
