//! Match orchestration: the four-state game flow and the per-frame
//! Play-state processing order.

use glam::Vec2;

use crate::{opponent, Ball, Config, FrameInput, GameRng, Paddle, Score, Side};

/// Game flow states. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Menu,
    Play,
    Countdown,
    GameOver,
}

/// A running match. Owns the ball, both paddles, and the score.
pub struct Match {
    pub config: Config,
    pub state: MatchState,
    pub ball: Ball,
    pub player: Paddle,
    pub cpu: Paddle,
    pub score: Score,
    pub winner: Option<Side>,
    pub countdown: i32,
    pub last_score_time: f64,
}

impl Match {
    pub fn new(config: Config) -> Self {
        let ball = Ball::new(
            config.center(),
            Vec2::splat(config.ball_speed),
            config.ball_radius,
        );

        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let player = Paddle::new(
            Vec2::new(config.paddle_x(Side::Player), config.paddle_spawn_y()),
            paddle_size,
            config.paddle_speed,
        );
        let cpu = Paddle::new(
            Vec2::new(config.paddle_x(Side::Cpu), config.paddle_spawn_y()),
            paddle_size,
            config.paddle_speed,
        );

        Self {
            state: MatchState::Menu,
            ball,
            player,
            cpu,
            score: Score::new(),
            winner: None,
            countdown: config.countdown_start,
            last_score_time: 0.0,
            config,
        }
    }

    /// Advance the match by one frame
    pub fn update(&mut self, input: &FrameInput, rng: &mut GameRng) {
        match self.state {
            MatchState::Menu => {
                if input.confirm_pressed {
                    self.state = MatchState::Play;
                }
            }
            MatchState::Play => self.update_play(input, rng),
            MatchState::Countdown => {
                if input.now - self.last_score_time >= self.config.countdown_tick_secs {
                    self.countdown -= 1;
                    self.last_score_time = input.now;
                }
                if self.countdown < 0 {
                    self.countdown = self.config.countdown_start;
                    self.state = MatchState::Play;
                }
            }
            MatchState::GameOver => {
                if input.confirm_pressed {
                    self.reset(rng);
                    self.state = MatchState::Menu;
                }
            }
        }
    }

    /// One Play-state frame. The order matters: a score resets the ball
    /// mid-frame and the paddle collision tests below still run against
    /// the reset position.
    fn update_play(&mut self, input: &FrameInput, rng: &mut GameRng) {
        let (width, height) = (self.config.screen_width, self.config.screen_height);

        // 1. Ball physics and scoring
        self.ball.advance();
        self.ball.reflect_on_walls(height);
        if let Some(side) = self.ball.check_scoring(width) {
            self.score.increment(side);
            self.ball.reset_to_center(width, height, rng);
            self.state = MatchState::Countdown;
            self.last_score_time = input.now;
        }

        // 2. Human paddle
        self.player.move_by_input(input.move_up, input.move_down);
        self.player.clamp_to_bounds(height);

        // 3. Opponent paddle
        opponent::track_ball(&mut self.cpu, self.ball.pos.y, height);

        // 4-5. Paddle collisions flip the horizontal velocity
        if self.player.rect().intersects_circle(self.ball.pos, self.ball.radius) {
            self.ball.vel.x = -self.ball.vel.x;
        }
        if self.cpu.rect().intersects_circle(self.ball.pos, self.ball.radius) {
            self.ball.vel.x = -self.ball.vel.x;
        }

        // 6. Win check, after scoring resolution
        if let Some(side) = self.score.has_winner(self.config.win_score) {
            self.winner = Some(side);
            self.state = MatchState::GameOver;
        }
    }

    /// Full match reset, used when leaving GameOver
    fn reset(&mut self, rng: &mut GameRng) {
        self.ball
            .reset_to_center(self.config.screen_width, self.config.screen_height, rng);
        self.score.reset();
        self.winner = None;
    }

    /// Winner banner name, set only in GameOver
    pub fn winner_name(&self) -> Option<&'static str> {
        self.winner.map(|side| side.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm(now: f64) -> FrameInput {
        FrameInput {
            confirm_pressed: true,
            now,
            ..Default::default()
        }
    }

    fn idle(now: f64) -> FrameInput {
        FrameInput {
            now,
            ..Default::default()
        }
    }

    fn new_match() -> (Match, GameRng) {
        (Match::new(Config::new()), GameRng::new(12345))
    }

    #[test]
    fn test_menu_confirm_starts_play() {
        let (mut game, mut rng) = new_match();
        assert_eq!(game.state, MatchState::Menu);
        game.update(&idle(0.0), &mut rng);
        assert_eq!(game.state, MatchState::Menu, "No transition without confirm");
        game.update(&confirm(0.0), &mut rng);
        assert_eq!(game.state, MatchState::Play);
    }

    #[test]
    fn test_scoring_enters_countdown_and_increments() {
        let (mut game, mut rng) = new_match();
        game.state = MatchState::Play;
        game.ball.pos = Vec2::new(25.0, 400.0); // One frame from the left edge
        game.ball.vel = Vec2::new(-7.0, 0.0);

        game.update(&idle(3.0), &mut rng);

        assert_eq!(game.state, MatchState::Countdown);
        assert_eq!(game.score.player, 1, "Left edge crossing scores for the player");
        assert_eq!(game.score.cpu, 0);
        assert_eq!(game.ball.pos, game.config.center(), "Ball recentered after the score");
        assert_eq!(game.last_score_time, 3.0);
    }

    #[test]
    fn test_countdown_ticks_then_resumes_play() {
        let (mut game, mut rng) = new_match();
        game.state = MatchState::Countdown;
        game.last_score_time = 10.0;
        assert_eq!(game.countdown, 1);

        // Under a second elapsed: no tick
        game.update(&idle(10.5), &mut rng);
        assert_eq!(game.countdown, 1);
        assert_eq!(game.state, MatchState::Countdown);

        // 1 -> 0
        game.update(&idle(11.0), &mut rng);
        assert_eq!(game.countdown, 0);
        assert_eq!(game.state, MatchState::Countdown);

        // 0 -> -1, which re-arms the counter and resumes play
        game.update(&idle(12.0), &mut rng);
        assert_eq!(game.state, MatchState::Play);
        assert_eq!(game.countdown, 1, "Counter re-armed for the next score");
    }

    #[test]
    fn test_paddle_moves_and_clamps_during_play() {
        let (mut game, mut rng) = new_match();
        game.state = MatchState::Play;
        game.player.pos.y = 340.0;

        let input = FrameInput {
            move_up: true,
            ..Default::default()
        };
        game.update(&input, &mut rng);
        assert_eq!(game.player.pos.y, 334.0, "One speed step up per frame");
    }

    #[test]
    fn test_paddle_collision_flips_horizontal_velocity() {
        let (mut game, mut rng) = new_match();
        game.state = MatchState::Play;
        // Place the ball so that after one advance it overlaps the player paddle
        game.ball.pos = Vec2::new(game.player.pos.x - game.ball.radius - 7.0, 400.0);
        game.ball.vel = Vec2::new(7.0, 0.0);

        game.update(&idle(0.0), &mut rng);

        assert_eq!(game.ball.vel.x, -7.0, "Hit reverses horizontal direction");
        assert_eq!(game.ball.vel.y, 0.0);
    }

    #[test]
    fn test_win_threshold_sets_winner_and_game_over() {
        let (mut game, mut rng) = new_match();
        game.state = MatchState::Play;
        game.score.cpu = 9;
        game.ball.pos = Vec2::new(1260.0, 400.0); // Crosses the right edge on advance
        game.ball.vel = Vec2::new(7.0, 0.0);

        game.update(&idle(0.0), &mut rng);

        assert_eq!(game.score.cpu, 10);
        assert_eq!(game.state, MatchState::GameOver, "Win check overrides the countdown");
        assert_eq!(game.winner, Some(Side::Cpu));
        assert_eq!(game.winner_name(), Some("CPU"));
    }

    #[test]
    fn test_game_over_confirm_resets_to_menu() {
        let (mut game, mut rng) = new_match();
        game.state = MatchState::GameOver;
        game.winner = Some(Side::Player);
        game.score.player = 10;
        game.score.cpu = 4;

        game.update(&confirm(0.0), &mut rng);

        assert_eq!(game.state, MatchState::Menu);
        assert_eq!(game.winner, None);
        assert_eq!(game.score.player, 0);
        assert_eq!(game.score.cpu, 0);
        assert_eq!(game.ball.pos, game.config.center());
    }

    #[test]
    fn test_menu_and_countdown_freeze_physics() {
        let (mut game, mut rng) = new_match();
        let start = game.ball.pos;
        game.update(&idle(0.0), &mut rng); // Menu
        assert_eq!(game.ball.pos, start);

        game.state = MatchState::Countdown;
        game.last_score_time = 0.0;
        game.update(&idle(0.1), &mut rng);
        assert_eq!(game.ball.pos, start, "Ball does not move outside Play");
    }
}
