use glam::Vec2;
use range_engine::Rng;

/// Ring radii as fractions of the target radius, outermost first.
pub const RING_FRACTIONS: [f32; 4] = [1.0, 0.7, 0.4, 0.15];

/// The bouncing bullseye. Velocity is in pixels per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Target {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Move one frame inside a `bounds`-sized surface.
    ///
    /// Each axis bounces on its own: touching or crossing a wall flips that
    /// velocity component and clamps the centre back to `[radius, extent - radius]`.
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        let r = self.radius;

        if self.pos.x - r <= 0.0 || self.pos.x + r >= bounds.x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.min(bounds.x - r).max(r);
        }

        if self.pos.y - r <= 0.0 || self.pos.y + r >= bounds.y {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.min(bounds.y - r).max(r);
        }
    }

    /// Hit test: the edge counts as a hit.
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }

    /// Ring radii with their colour index (0 or 1), outermost first.
    pub fn rings(&self) -> impl Iterator<Item = (f32, usize)> + '_ {
        RING_FRACTIONS
            .iter()
            .enumerate()
            .map(move |(i, fraction)| (self.radius * fraction, i % 2))
    }
}

/// Random launch velocity: each magnitude uniform in its `[lo, hi)` range,
/// each sign an independent coin flip.
pub fn random_velocity(rng: &mut Rng, speed_x: [f32; 2], speed_y: [f32; 2]) -> Vec2 {
    let vx = rng.range(speed_x[0], speed_x[1]) * rng.sign();
    let vy = rng.range(speed_y[0], speed_y[1]) * rng.sign();
    Vec2::new(vx, vy)
}
