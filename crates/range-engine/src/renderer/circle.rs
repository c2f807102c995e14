use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::surface::{Rgba, Surface};

/// Per-circle draw data read by the TypeScript canvas renderer.
/// 8 floats = 32 bytes per instance, drawn in buffer order.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Fixed-capacity circle buffer. This is the drawing surface the web bridge
/// exposes: TypeScript clears its canvas and replays the circles each frame.
pub struct CircleBuffer {
    instances: Vec<CircleInstance>,
    capacity: usize,
    width: f32,
    height: f32,
}

impl CircleBuffer {
    pub fn new(width: f32, height: f32, capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
            width,
            height,
        }
    }

    pub fn instances(&self) -> &[CircleInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Surface for CircleBuffer {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn clear(&mut self) {
        self.instances.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if self.instances.len() >= self.capacity {
            log::warn!("circle buffer full ({}), dropping circle", self.capacity);
            return;
        }
        self.instances.push(CircleInstance {
            x: center.x,
            y: center.y,
            radius,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
            _pad: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), CircleInstance::STRIDE_BYTES);
    }

    #[test]
    fn fill_circle_writes_flat_floats() {
        let mut buf = CircleBuffer::new(800.0, 600.0, 4);
        buf.fill_circle(Vec2::new(50.0, 75.0), 15.0, Rgba::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(buf.instance_count(), 1);

        let floats: &[f32] = bytemuck::cast_slice(buf.instances());
        assert_eq!(floats, &[50.0, 75.0, 15.0, 1.0, 0.5, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn drops_circles_past_capacity() {
        let mut buf = CircleBuffer::new(100.0, 100.0, 2);
        for _ in 0..5 {
            buf.fill_circle(Vec2::ZERO, 1.0, Rgba::new(0.0, 0.0, 0.0, 1.0));
        }
        assert_eq!(buf.instance_count(), 2);

        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.size(), Vec2::new(100.0, 100.0));
    }
}
