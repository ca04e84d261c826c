use glam::Vec2;

use crate::{GameRng, Side};

/// The pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Move one frame along the current velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off the top/bottom screen bounds by flipping the vertical
    /// velocity sign. Magnitude is untouched; no positional correction.
    pub fn reflect_on_walls(&mut self, screen_height: f32) {
        if self.pos.y + self.radius >= screen_height || self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Which side scored, if the ball crossed a vertical boundary this
    /// frame. Crossing the right edge scores for the CPU, the left edge
    /// for the player. Pure detection; mutates nothing.
    pub fn check_scoring(&self, screen_width: f32) -> Option<Side> {
        if self.pos.x + self.radius >= screen_width {
            Some(Side::Cpu)
        } else if self.pos.x - self.radius <= 0.0 {
            Some(Side::Player)
        } else {
            None
        }
    }

    /// Reposition to the screen center and re-randomize the direction:
    /// each velocity component is multiplied by an independent uniform
    /// draw from {-1, +1}, preserving per-axis speed.
    pub fn reset_to_center(
        &mut self,
        screen_width: f32,
        screen_height: f32,
        rng: &mut GameRng,
    ) {
        use rand::Rng;

        self.pos = Vec2::new(screen_width / 2.0, screen_height / 2.0);
        self.vel.x *= if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel.y *= if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    }
}
