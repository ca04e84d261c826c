//! The computer opponent's tracking rule, kept as a policy function
//! over a plain [`Paddle`] rather than a paddle subtype.

use crate::Paddle;

/// Move the paddle one speed step toward the ball's vertical position,
/// then clamp. The tie-break is asymmetric: when the paddle center
/// exactly equals the ball's y, the paddle moves down.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, screen_height: f32) {
    if paddle.center_y() > ball_y {
        paddle.pos.y -= paddle.speed;
    } else {
        paddle.pos.y += paddle.speed;
    }
    paddle.clamp_to_bounds(screen_height);
}
