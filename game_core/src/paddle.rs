use glam::Vec2;

use crate::Rect;

/// A player's paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    /// Apply held movement keys. Both deltas are applied independently,
    /// so holding up and down together cancels out.
    pub fn move_by_input(&mut self, up: bool, down: bool) {
        if up {
            self.pos.y -= self.speed;
        }
        if down {
            self.pos.y += self.speed;
        }
    }

    /// Keep the paddle fully on screen: `0 <= y <= screen_height - height`
    pub fn clamp_to_bounds(&mut self, screen_height: f32) {
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
        }
        if self.pos.y + self.size.y >= screen_height {
            self.pos.y = screen_height - self.size.y;
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Bounding rectangle for collision and drawing
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paddle() -> Paddle {
        Paddle::new(
            Vec2::new(1245.0, 340.0),
            Vec2::new(25.0, 120.0),
            6.0,
        )
    }

    #[test]
    fn test_move_up() {
        let mut paddle = test_paddle();
        paddle.move_by_input(true, false);
        assert_eq!(paddle.pos.y, 334.0, "Up subtracts one speed step");
    }

    #[test]
    fn test_move_down() {
        let mut paddle = test_paddle();
        paddle.move_by_input(false, true);
        assert_eq!(paddle.pos.y, 346.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut paddle = test_paddle();
        paddle.move_by_input(true, true);
        assert_eq!(paddle.pos.y, 340.0, "Both keys held nets to zero");
    }

    #[test]
    fn test_clamp_at_top() {
        let mut paddle = test_paddle();
        paddle.pos.y = -3.0;
        paddle.clamp_to_bounds(800.0);
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_clamp_at_bottom() {
        let mut paddle = test_paddle();
        paddle.pos.y = 695.0; // Bottom edge at 815, past the 800 bound
        paddle.clamp_to_bounds(800.0);
        assert_eq!(paddle.pos.y, 680.0);
    }

    #[test]
    fn test_clamp_leaves_valid_position_alone() {
        let mut paddle = test_paddle();
        paddle.clamp_to_bounds(800.0);
        assert_eq!(paddle.pos.y, 340.0);
    }

    #[test]
    fn test_center_y_and_rect() {
        let paddle = test_paddle();
        assert_eq!(paddle.center_y(), 400.0);
        let rect = paddle.rect();
        assert_eq!(rect.min, Vec2::new(1245.0, 340.0));
        assert_eq!(rect.max, Vec2::new(1270.0, 460.0));
    }
}
