/// Game phases. Reset is the only way out of `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// Score and ammunition for one play-through.
#[derive(Debug, Clone)]
pub struct Session {
    score: u32,
    shots_remaining: u32,
    max_shots: u32,
    hit_reward: u32,
    phase: Phase,
}

impl Session {
    pub fn new(max_shots: u32, hit_reward: u32) -> Self {
        Self {
            score: 0,
            shots_remaining: max_shots,
            max_shots,
            hit_reward,
            phase: Phase::Playing,
        }
    }

    /// Book one shot. Ignored once the session is over.
    /// Returns the phase after the shot.
    pub fn record(&mut self, outcome: ShotOutcome) -> Phase {
        if self.phase == Phase::GameOver {
            return self.phase;
        }
        if outcome == ShotOutcome::Hit {
            self.score = self.score.saturating_add(self.hit_reward);
        }
        self.shots_remaining = self.shots_remaining.saturating_sub(1);
        if self.shots_remaining == 0 {
            self.phase = Phase::GameOver;
        }
        self.phase
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.shots_remaining = self.max_shots;
        self.phase = Phase::Playing;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn shots_remaining(&self) -> u32 {
        self.shots_remaining
    }

    pub fn max_shots(&self) -> u32 {
        self.max_shots
    }

    pub fn shots_taken(&self) -> u32 {
        self.max_shots - self.shots_remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
