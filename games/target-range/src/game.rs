use glam::Vec2;
use range_engine::{
    EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, RenderContext, Surface,
};

use crate::config::RangeConfig;
use crate::meter::meter_for;
use crate::scoreboard::{Scoreboard, Status, SLOT_COUNT};
use crate::session::{Phase, Session, ShotOutcome};
use crate::target::{random_velocity, Target};

/// Custom event kinds from the page UI
pub mod events {
    pub const RESET: u32 = 1;
}

/// Game event kinds to the page
pub mod game_events {
    /// a = score, b = shots remaining, c = max shots
    pub const SCOREBOARD: f32 = 1.0;
    /// a = 1 hit / 0 miss, b/c = click point
    pub const SHOT: f32 = 2.0;
    /// a = final score. The page should grey out the canvas.
    pub const GAME_OVER: f32 = 3.0;
    pub const RESET: f32 = 4.0;
}

/// Click-to-shoot target range: one bouncing target, a fixed number of shots.
pub struct TargetRange {
    config: RangeConfig,
    target: Target,
    session: Session,
    scoreboard: Scoreboard,
}

impl TargetRange {
    pub fn new() -> Self {
        Self::with_config(RangeConfig::default())
    }

    pub fn with_config(config: RangeConfig) -> Self {
        let center = Vec2::new(config.world_width, config.world_height) / 2.0;
        Self {
            target: Target::new(center, Vec2::ZERO, config.target_radius),
            session: Session::new(config.max_shots, config.hit_reward),
            scoreboard: Scoreboard::new(meter_for(config.meter)),
            config,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Centre the target on the drawing surface and launch it in a random direction.
    fn relaunch(&mut self, ctx: &mut EngineContext) {
        self.target.pos = ctx.surface / 2.0;
        self.target.vel = random_velocity(&mut ctx.rng, self.config.speed_x, self.config.speed_y);
    }

    fn publish(&self, ctx: &mut EngineContext, status: Status) {
        self.scoreboard.publish(&mut ctx.hud, &self.session, status);
        ctx.emit_event(GameEvent::new(
            game_events::SCOREBOARD,
            self.session.score() as f32,
            self.session.shots_remaining() as f32,
            self.session.max_shots() as f32,
        ));
    }

    /// Judge a click against the target's current position.
    /// Returns `None` when the game is over and shots are disabled.
    pub fn handle_shot(&mut self, ctx: &mut EngineContext, point: Vec2) -> Option<ShotOutcome> {
        if self.session.is_over() {
            return None;
        }

        let outcome = if self.target.contains(point) {
            ShotOutcome::Hit
        } else {
            ShotOutcome::Miss
        };
        let phase = self.session.record(outcome);
        log::debug!(
            "shot at ({:.1}, {:.1}): {:?}, {} left",
            point.x,
            point.y,
            outcome,
            self.session.shots_remaining()
        );

        let hit = if outcome == ShotOutcome::Hit { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent::new(game_events::SHOT, hit, point.x, point.y));

        let status = match outcome {
            ShotOutcome::Hit => Status::Hit,
            ShotOutcome::Miss => Status::Miss,
        };
        self.publish(ctx, status);

        if phase == Phase::GameOver {
            self.end_game(ctx);
        }
        Some(outcome)
    }

    fn end_game(&mut self, ctx: &mut EngineContext) {
        let final_score = self.session.score();
        log::info!(
            "Game over after {} shots, final score {}",
            self.session.shots_taken(),
            final_score
        );
        ctx.frame_loop.stop();
        self.publish(ctx, Status::GameOver { final_score });
        ctx.emit_event(GameEvent::new(game_events::GAME_OVER, final_score as f32, 0.0, 0.0));
    }

    /// Start a fresh session. Restarts the frame loop if the last game ended.
    pub fn reset_game(&mut self, ctx: &mut EngineContext) {
        self.session.reset();
        self.relaunch(ctx);
        ctx.frame_loop.resume();
        self.publish(ctx, Status::Prompt);
        ctx.emit_event(GameEvent::new(game_events::RESET, 0.0, 0.0, 0.0));
        log::info!("New game: {} shots", self.session.max_shots());
    }
}

impl Default for TargetRange {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TargetRange {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            max_circles: 16,
            hud_slots: SLOT_COUNT,
            ..GameConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), Box<dyn std::error::Error>> {
        let config = RangeConfig::from_json(json)?;
        log::info!(
            "Config loaded: {} shots, radius {}, {:?} meter",
            config.max_shots,
            config.target_radius,
            config.meter
        );
        *self = Self::with_config(config);
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.relaunch(ctx);
        self.publish(ctx, Status::Prompt);
        log::info!("TargetRange: target launched at {:?}", self.target.vel);
    }

    fn input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::PointerDown { x, y } => {
                    self.handle_shot(ctx, Vec2::new(*x, *y));
                }
                InputEvent::Custom { kind, .. } if *kind == events::RESET => {
                    self.reset_game(ctx);
                }
                _ => {}
            }
        }
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        self.target.advance(ctx.surface);
    }

    fn render(&self, ctx: &mut RenderContext) {
        for (radius, color) in self.target.rings() {
            ctx.circles
                .fill_circle(self.target.pos, radius, self.config.ring_colors[color]);
        }
    }
}
