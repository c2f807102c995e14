pub mod runner;

pub use runner::GameRunner;

/// RNG seed drawn from the host: `Math.random()` mixed with the wall clock.
/// Only callable inside a JS host.
pub fn host_seed() -> u64 {
    let random_bits = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let now_ms = js_sys::Date::now() as u64;
    (random_bits << 32) ^ now_ms
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates `thread_local!` storage for the GameRunner, a `with_runner()`
/// helper, and the exports the host page needs: lifecycle (`game_init`,
/// `game_load_config`, `game_tick`), input, draw/event/gauge buffers, HUD
/// text, and capacities.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// range_web::export_game!(MyGame, "my-game");
/// ```
///
/// Host loop sketch:
///
/// ```text
/// function frame(now) {
///   if (game_tick(dt)) requestAnimationFrame(frame); else looping = false;
///   if (get_hud_dirty()) syncScoreboard();
/// }
/// resetButton.onclick = () => {
///   game_custom_event(1, 0, 0, 0);
///   if (!looping) { looping = true; requestAnimationFrame(frame); }
/// };
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`, and the game type must provide `new()`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
            static PENDING_CONFIG: RefCell<Option<String>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Stash a JSON config to be applied by the next `game_init`.
        #[wasm_bindgen]
        pub fn game_load_config(json: &str) {
            PENDING_CONFIG.with(|cell| *cell.borrow_mut() = Some(json.to_owned()));
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let mut runner = $crate::GameRunner::new(game, $crate::host_seed());
            if let Some(json) = PENDING_CONFIG.with(|cell| cell.borrow_mut().take()) {
                runner.load_config(&json);
            }

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        /// Advance one display frame. Returns false once the game stopped its loop.
        #[wasm_bindgen]
        pub fn game_tick(dt: f32) -> bool {
            with_runner(|r| r.tick(dt))
        }

        #[wasm_bindgen]
        pub fn game_is_running() -> bool {
            with_runner(|r| r.is_running())
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(range_engine::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(range_engine::InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_circles_ptr() -> *const f32 {
            with_runner(|r| r.circles_ptr())
        }

        #[wasm_bindgen]
        pub fn get_circle_count() -> u32 {
            with_runner(|r| r.circle_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_gauge_ptr() -> *const f32 {
            with_runner(|r| r.gauge_ptr())
        }

        #[wasm_bindgen]
        pub fn get_gauge_len() -> u32 {
            with_runner(|r| r.gauge_len())
        }

        // ---- HUD ----

        #[wasm_bindgen]
        pub fn get_hud_text(slot: u32) -> String {
            with_runner(|r| r.hud_text(slot))
        }

        #[wasm_bindgen]
        pub fn get_hud_dirty() -> bool {
            with_runner(|r| r.take_hud_dirty())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_max_circles() -> u32 {
            with_runner(|r| r.max_circles())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_protocol_version() -> f32 {
            with_runner(|r| r.protocol_version())
        }
    };
}
