use glam::Vec2;

use crate::Side;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    // Ball
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_SPEED: f32 = 7.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    pub const PADDLE_MARGIN: f32 = 10.0;

    // Match
    pub const WIN_SCORE: u32 = 10;
    pub const COUNTDOWN_START: i32 = 1;
    pub const COUNTDOWN_TICK_SECS: f64 = 1.0;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub win_score: u32,
    pub countdown_start: i32,
    pub countdown_tick_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            win_score: Params::WIN_SCORE,
            countdown_start: Params::COUNTDOWN_START,
            countdown_tick_secs: Params::COUNTDOWN_TICK_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact screen center, where the ball spawns and respawns
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// X position of a side's paddle. The CPU defends the left wall,
    /// the player the right.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Cpu => self.paddle_margin,
            Side::Player => self.screen_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Initial paddle Y (vertically centered)
    pub fn paddle_spawn_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }
}
