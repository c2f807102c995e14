/// Fixed-step frame loop with an explicit running flag.
///
/// The host pumps variable frame deltas in through `accumulate`; game logic
/// runs a whole number of fixed steps per frame. A stopped loop yields no
/// steps at all, which is how a game ends its animation without relying on
/// the host to notice.
pub struct FrameLoop {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    running: bool,
    /// Fixed steps run since creation.
    frames: u64,
}

/// Cap to prevent a spiral of death after a long stall.
const MAX_STEPS_PER_FRAME: u32 = 10;

impl FrameLoop {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            running: true,
            frames: 0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.frames += steps as u64;
        steps
    }

    /// Stop stepping. Further `accumulate` calls yield zero steps.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("frame loop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    /// Resume stepping. Time that piled up while stopped is discarded.
    pub fn resume(&mut self) {
        if !self.running {
            log::debug!("frame loop resumed");
        }
        self.running = true;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Fixed steps run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
