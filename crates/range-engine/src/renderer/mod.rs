pub mod circle;
pub mod surface;

pub use surface::{Surface, Rgba};
