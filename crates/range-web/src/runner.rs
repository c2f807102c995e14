use range_engine::bridge::protocol::{
    HEADER_CIRCLE_COUNT, HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER,
    HEADER_MAX_CIRCLES, HEADER_MAX_EVENTS, HEADER_RUNNING, HEADER_WORLD_HEIGHT,
    HEADER_WORLD_WIDTH, PROTOCOL_VERSION,
};
use range_engine::{
    CircleBuffer, EngineContext, Game, GameConfig, InputEvent, InputQueue, RenderContext, Surface,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
///
/// Frame order: queued input is dispatched first (so clicks are judged
/// against what the player saw), then fixed steps run, then the game
/// redraws. Once the game stops its frame loop, `tick` stops stepping and
/// drawing and returns `false`; the host should stop requesting frames
/// until a UI command brings the loop back.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    circles: CircleBuffer,
    config: GameConfig,
    header: [f32; HEADER_FLOATS],
    seed: u64,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, seed: u64) -> Self {
        let config = game.config();
        let circles = CircleBuffer::new(config.world_width, config.world_height, config.max_circles);

        Self {
            game,
            ctx: EngineContext::new(&config, seed),
            input: InputQueue::new(),
            circles,
            config,
            header: [0.0; HEADER_FLOATS],
            seed,
            initialized: false,
        }
    }

    /// Hand a JSON configuration to the game. Only honoured before `init`.
    pub fn load_config(&mut self, json: &str) {
        if self.initialized {
            log::warn!("config ignored: game already initialized");
            return;
        }
        if let Err(err) = self.game.configure(json) {
            log::warn!("config rejected, keeping defaults: {}", err);
        }
    }

    /// Initialize the game. Call once after construction (and after any
    /// `load_config`). Draws the first frame.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.ctx = EngineContext::new(&self.config, self.seed);
        self.circles = CircleBuffer::new(
            self.config.world_width,
            self.config.world_height,
            self.config.max_circles,
        );
        self.ctx.surface = self.circles.size();
        self.game.init(&mut self.ctx);
        self.redraw();
        self.write_header();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame. Returns whether the frame loop is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.initialized {
            return false;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.game.input(&mut self.ctx, &self.input);
        self.input.drain();

        let steps = self.ctx.frame_loop.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx);
        }

        let running = self.ctx.frame_loop.is_running();
        if running {
            self.redraw();
        }
        self.write_header();
        running
    }

    fn redraw(&mut self) {
        self.circles.clear();
        let mut render_ctx = RenderContext {
            circles: &mut self.circles,
        };
        self.game.render(&mut render_ctx);
    }

    fn write_header(&mut self) {
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.ctx.frame_loop.frames() as f32;
        h[HEADER_RUNNING] = if self.ctx.frame_loop.is_running() { 1.0 } else { 0.0 };
        h[HEADER_WORLD_WIDTH] = self.config.world_width;
        h[HEADER_WORLD_HEIGHT] = self.config.world_height;
        h[HEADER_MAX_CIRCLES] = self.circles.capacity() as f32;
        h[HEADER_CIRCLE_COUNT] = self.circles.instance_count() as f32;
        h[HEADER_MAX_EVENTS] = self.config.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn is_running(&self) -> bool {
        self.initialized && self.ctx.frame_loop.is_running()
    }

    // ---- Pointer accessors for host reads ----

    pub fn header(&self) -> &[f32] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn circles(&self) -> &CircleBuffer {
        &self.circles
    }

    pub fn circles_ptr(&self) -> *const f32 {
        self.circles.instances_ptr()
    }

    pub fn circle_count(&self) -> u32 {
        self.circles.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn gauge_ptr(&self) -> *const f32 {
        self.ctx.hud.gauge_ptr()
    }

    pub fn gauge_len(&self) -> u32 {
        self.ctx.hud.gauge().len() as u32
    }

    // ---- HUD ----

    pub fn hud_text(&self, slot: u32) -> String {
        self.ctx.hud.text(slot as usize).to_owned()
    }

    /// Whether the HUD changed since the last call. Clears the flag.
    pub fn take_hud_dirty(&mut self) -> bool {
        let dirty = self.ctx.hud.is_dirty();
        self.ctx.hud.mark_clean();
        dirty
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn max_circles(&self) -> u32 {
        self.circles.capacity() as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }

    pub fn protocol_version(&self) -> f32 {
        PROTOCOL_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use range_engine::{GameEvent, Rgba};

    const STOP: u32 = 1;
    const START: u32 = 2;

    /// A dot that walks right one unit per step.
    struct Walker {
        x: f32,
        stopped_by_config: bool,
    }

    impl Game for Walker {
        fn configure(&mut self, json: &str) -> Result<(), Box<dyn std::error::Error>> {
            let stopped: bool = parse_flag(json)?;
            self.stopped_by_config = stopped;
            Ok(())
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            ctx.hud.set_text(0, "ready");
            if self.stopped_by_config {
                ctx.frame_loop.stop();
            }
        }

        fn input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            for event in input.iter() {
                match event {
                    InputEvent::Custom { kind: STOP, .. } => ctx.frame_loop.stop(),
                    InputEvent::Custom { kind: START, .. } => ctx.frame_loop.resume(),
                    InputEvent::PointerDown { x, .. } => {
                        ctx.emit_event(GameEvent::new(9.0, *x, 0.0, 0.0));
                    }
                    _ => {}
                }
            }
        }

        fn update(&mut self, _ctx: &mut EngineContext) {
            self.x += 1.0;
        }

        fn render(&self, ctx: &mut RenderContext) {
            ctx.circles.fill_circle(Vec2::new(self.x, 0.0), 1.0, Rgba::new(1.0, 1.0, 1.0, 1.0));
        }
    }

    fn parse_flag(json: &str) -> Result<bool, Box<dyn std::error::Error>> {
        match json.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(format!("not a bool: {}", other).into()),
        }
    }

    fn walker() -> GameRunner<Walker> {
        let mut runner = GameRunner::new(Walker { x: 0.0, stopped_by_config: false }, 1);
        runner.init();
        runner
    }

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(Walker { x: 0.0, stopped_by_config: false }, 1);
        assert!(!runner.tick(FRAME));
        assert_eq!(runner.game().x, 0.0);
    }

    #[test]
    fn init_draws_first_frame() {
        let runner = walker();
        assert_eq!(runner.circle_count(), 1);
        assert_eq!(runner.hud_text(0), "ready");
        assert_eq!(runner.header()[HEADER_WORLD_WIDTH], 800.0);
    }

    #[test]
    fn tick_steps_and_redraws() {
        let mut runner = walker();
        assert!(runner.tick(FRAME));
        assert_eq!(runner.game().x, 1.0);
        assert_eq!(runner.circles().instances()[0].x, 1.0);
        assert_eq!(runner.header()[HEADER_FRAME_COUNTER], 1.0);
    }

    #[test]
    fn stopped_loop_freezes_and_resumes() {
        let mut runner = walker();
        runner.tick(FRAME);

        runner.push_input(InputEvent::Custom { kind: STOP, a: 0.0, b: 0.0, c: 0.0 });
        assert!(!runner.tick(FRAME));
        assert!(!runner.tick(FRAME));
        assert_eq!(runner.game().x, 1.0);
        assert_eq!(runner.header()[HEADER_RUNNING], 0.0);

        runner.push_input(InputEvent::Custom { kind: START, a: 0.0, b: 0.0, c: 0.0 });
        assert!(runner.tick(FRAME));
        runner.tick(FRAME);
        assert!(runner.game().x > 1.0);
        assert!(runner.is_running());
    }

    #[test]
    fn jittery_frames_keep_one_step_per_frame_on_average() {
        let mut runner = walker();
        let mut last = runner.game().x;
        for i in 0..600 {
            let jitter = if i % 2 == 0 { 0.8 } else { 1.2 };
            runner.tick(FRAME * jitter);
            let steps = runner.game().x - last;
            assert!(steps <= 2.0, "tick {} ran {} steps", i, steps);
            last = runner.game().x;
        }
        let x = runner.game().x;
        assert!((599.0..=600.0).contains(&x), "walked {} in 600 frames", x);
        assert_eq!(runner.header()[HEADER_FRAME_COUNTER], x);
    }

    #[test]
    fn context_sees_surface_size() {
        let runner = walker();
        assert_eq!(runner.context().surface, runner.circles().size());
        assert_eq!(runner.header()[HEADER_MAX_CIRCLES], runner.max_circles() as f32);
    }

    #[test]
    fn input_is_dispatched_once() {
        let mut runner = walker();
        runner.push_input(InputEvent::PointerDown { x: 12.0, y: 0.0 });
        runner.tick(FRAME);
        assert_eq!(runner.game_events_len(), 1);
        runner.tick(FRAME);
        assert_eq!(runner.game_events_len(), 0);
    }

    #[test]
    fn hud_dirty_is_taken() {
        let mut runner = walker();
        assert!(runner.take_hud_dirty());
        assert!(!runner.take_hud_dirty());
    }

    #[test]
    fn config_only_before_init() {
        let mut runner = GameRunner::new(Walker { x: 0.0, stopped_by_config: false }, 1);
        runner.load_config("true");
        runner.init();
        assert!(!runner.is_running());

        let mut late = walker();
        late.load_config("true");
        assert!(late.is_running());

        let mut bad = GameRunner::new(Walker { x: 0.0, stopped_by_config: false }, 1);
        bad.load_config("nope");
        bad.init();
        assert!(bad.is_running());
    }
}
