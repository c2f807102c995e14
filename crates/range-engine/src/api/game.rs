use glam::Vec2;

use crate::api::types::GameEvent;
use crate::core::frame_loop::FrameLoop;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::renderer::circle::CircleBuffer;
use crate::systems::hud::HudState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units (canvas pixels).
    pub world_width: f32,
    /// World height in game units (canvas pixels).
    pub world_height: f32,
    /// Maximum number of circles drawn per frame (default: 64).
    pub max_circles: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Number of HUD text slots (default: 4).
    pub hud_slots: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_circles: 64,
            max_events: 32,
            hud_slots: 4,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply a JSON configuration supplied by the host before `init`.
    /// Games without tunables keep the default, which accepts anything.
    fn configure(&mut self, _json: &str) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    /// Setup initial state and publish the first HUD contents.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle queued input. Runs once per tick, also while the frame loop is
    /// stopped, so UI commands can bring a finished game back to life.
    fn input(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}

    /// One fixed step of simulation. Only called while the frame loop runs.
    fn update(&mut self, ctx: &mut EngineContext);

    /// Optional read-only render pass for draw commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to the `Game` callbacks.
pub struct EngineContext {
    pub frame_loop: FrameLoop,
    pub hud: HudState,
    pub events: Vec<GameEvent>,
    pub rng: Rng,
    /// Pixel size of the drawing surface. The runner copies it from the
    /// surface it owns; until then it is the configured world size.
    pub surface: Vec2,
    max_events: usize,
}

impl EngineContext {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            frame_loop: FrameLoop::new(config.fixed_dt),
            hud: HudState::new(config.hud_slots),
            events: Vec::with_capacity(config.max_events),
            rng: Rng::new(seed),
            surface: Vec2::new(config.world_width, config.world_height),
            max_events: config.max_events,
        }
    }

    /// Emit a game event to be forwarded to TypeScript.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full ({}), dropping kind {}", self.max_events, event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default(), 42)
    }
}

/// Render context for the game's draw pass.
pub struct RenderContext<'a> {
    pub circles: &'a mut CircleBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_follows_config() {
        let config = GameConfig {
            fixed_dt: 1.0 / 30.0,
            hud_slots: 2,
            ..GameConfig::default()
        };
        let ctx = EngineContext::new(&config, 7);
        assert_eq!(ctx.frame_loop.dt(), 1.0 / 30.0);
        assert_eq!(ctx.hud.slot_count(), 2);
        assert!(ctx.frame_loop.is_running());
        assert_eq!(ctx.surface, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn events_are_capped_per_frame() {
        let config = GameConfig {
            max_events: 2,
            ..GameConfig::default()
        };
        let mut ctx = EngineContext::new(&config, 1);
        for i in 0..5 {
            ctx.emit_event(GameEvent::new(i as f32, 0.0, 0.0, 0.0));
        }
        assert_eq!(ctx.events.len(), 2);

        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
