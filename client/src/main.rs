//! Presentation adapter: window, keyboard polling, and drawing. All
//! game rules live in `game_core`; this binary only feeds it one
//! `FrameInput` per frame and renders the resulting state.

use game_core::{Config, FrameInput, GameRng, Match, MatchState, Params, Rect};
use macroquad::prelude::*;

const BALL_YELLOW: Color = Color::new(0.953, 0.835, 0.357, 1.0);
const COURT_RED: Color = Color::new(1.0, 0.196, 0.196, 1.0);
const COURT_DARK_RED: Color = Color::new(0.784, 0.118, 0.118, 1.0);
const COURT_LIGHT_RED: Color = Color::new(1.0, 0.314, 0.314, 1.0);

fn window_conf() -> Conf {
    Conf {
        window_title: "Pong".to_owned(),
        window_width: Params::SCREEN_WIDTH as i32,
        window_height: Params::SCREEN_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("starting pong");

    let mut game = Match::new(Config::new());
    let mut rng = GameRng::new(seed_from_clock());

    loop {
        let input = FrameInput {
            confirm_pressed: is_key_pressed(KeyCode::Enter),
            move_up: is_key_down(KeyCode::Up),
            move_down: is_key_down(KeyCode::Down),
            now: get_time(),
        };

        game.update(&input, &mut rng);
        draw(&game);

        next_frame().await
    }
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(12345)
}

fn draw(game: &Match) {
    draw_court(&game.config);

    match game.state {
        MatchState::Menu => {
            draw_text_centered("Press ENTER to start", 60, WHITE, 0.0);
        }
        MatchState::Play => {
            draw_entities(game);
            draw_scores(game);
        }
        MatchState::Countdown => {
            draw_entities(game);
            draw_scores(game);
            draw_text_centered(&game.countdown.to_string(), 120, WHITE, 0.0);
        }
        MatchState::GameOver => {
            if let Some(name) = game.winner_name() {
                draw_text_centered(&format!("{name} wins!"), 80, WHITE, 0.0);
            }
            draw_text_centered("Press ENTER to restart", 40, LIGHTGRAY, 100.0);
        }
    }
}

fn draw_court(config: &Config) {
    let (w, h) = (config.screen_width, config.screen_height);
    clear_background(COURT_DARK_RED);
    draw_rectangle(w / 2.0, 0.0, w / 2.0, h, COURT_RED);
    draw_circle(w / 2.0, h / 2.0, 150.0, COURT_LIGHT_RED);
    draw_line(w / 2.0, 0.0, w / 2.0, h, 1.0, WHITE);
}

fn draw_entities(game: &Match) {
    draw_circle(game.ball.pos.x, game.ball.pos.y, game.ball.radius, BALL_YELLOW);
    draw_paddle(game.cpu.rect());
    draw_paddle(game.player.rect());
}

fn draw_paddle(rect: Rect) {
    let size = rect.size();
    draw_rectangle(rect.min.x, rect.min.y, size.x, size.y, WHITE);
}

fn draw_scores(game: &Match) {
    let w = game.config.screen_width;
    draw_score(&game.score.cpu.to_string(), w / 4.0 - 20.0);
    draw_score(&game.score.player.to_string(), 3.0 * w / 4.0 - 20.0);
}

fn draw_score(text: &str, x: f32) {
    let dims = measure_text(text, None, 80, 1.0);
    draw_text(text, x, 20.0 + dims.offset_y, 80.0, WHITE);
}

/// Draw text horizontally centered, vertically centered plus an
/// explicit offset in pixels.
fn draw_text_centered(text: &str, font_size: u16, color: Color, y_offset: f32) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = (screen_width() - dims.width) / 2.0;
    let y = screen_height() / 2.0 + dims.offset_y / 2.0 + y_offset;
    draw_text(text, x, y, font_size as f32, color);
}
