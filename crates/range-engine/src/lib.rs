pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::GameEvent;
pub use crate::core::frame_loop::FrameLoop;
pub use crate::core::rng::Rng;
pub use renderer::circle::{CircleInstance, CircleBuffer};
pub use renderer::surface::{Surface, Rgba};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::hud::HudState;
