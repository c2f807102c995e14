use range_engine::HudState;

use crate::meter::ShotMeter;
use crate::session::Session;

/// HUD text slots, in the order the host page lays them out.
pub const SLOT_SCORE: usize = 0;
pub const SLOT_SHOTS: usize = 1;
pub const SLOT_STATUS: usize = 2;
pub const SLOT_COUNT: usize = 3;

/// What the status line is currently telling the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Prompt,
    Hit,
    Miss,
    GameOver { final_score: u32 },
}

impl Status {
    pub fn message(&self) -> String {
        match self {
            Status::Prompt => "Click the target to shoot!".to_owned(),
            Status::Hit => "Great shot!".to_owned(),
            Status::Miss => "Missed!".to_owned(),
            Status::GameOver { final_score } => format!("Game over! Final score: {}.", final_score),
        }
    }
}

/// Writes the session into the HUD: score, shots, status and the shot meter.
pub struct Scoreboard {
    meter: Box<dyn ShotMeter>,
}

impl Scoreboard {
    pub fn new(meter: Box<dyn ShotMeter>) -> Self {
        Self { meter }
    }

    pub fn publish(&self, hud: &mut HudState, session: &Session, status: Status) {
        hud.set_text(SLOT_SCORE, format!("Score: {}", session.score()));
        hud.set_text(SLOT_SHOTS, format!("Shots Remaining: {}", session.shots_remaining()));
        hud.set_text(SLOT_STATUS, status.message());
        hud.set_gauge(self.meter.readout(session.shots_remaining(), session.max_shots()));
    }
}
