//! Header shared with the host page.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! The host reads three separate views by pointer (all values f32):
//! ```text
//! header:  8 floats, indices below
//! circles: circle_count × 8 floats (x, y, radius, r, g, b, a, pad)
//! events:  event_count × 4 floats (kind, a, b, c)
//! ```
//!
//! The header is rewritten after every tick, so the host can size its views
//! from `CIRCLE_COUNT` and `EVENT_COUNT` without extra calls.

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_RUNNING: usize = 1;
pub const HEADER_WORLD_WIDTH: usize = 2;
pub const HEADER_WORLD_HEIGHT: usize = 3;
pub const HEADER_MAX_CIRCLES: usize = 4;
pub const HEADER_CIRCLE_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;

/// Protocol version reported by the bridge.
pub const PROTOCOL_VERSION: f32 = 1.0;
