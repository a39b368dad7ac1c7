use crate::{Ball, Config, GameMap, Paddle, Side};
use hecs::World;

/// Per-frame movement of the opponent paddle toward `ball_y`.
///
/// Moves by a fixed speed, holding still while the paddle center is within
/// the dead-zone of the ball.
pub fn opponent_delta(paddle_y: f32, ball_y: f32, config: &Config) -> f32 {
    let center = config.paddle_center(paddle_y);
    if center < ball_y - config.opponent_deadzone {
        config.opponent_speed
    } else if center > ball_y + config.opponent_deadzone {
        -config.opponent_speed
    } else {
        0.0
    }
}

/// Track the ball with the opponent paddle
pub fn move_opponent(world: &mut World, map: &GameMap, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            let moved = paddle.y + opponent_delta(paddle.y, ball_y, config);
            paddle.y = map.clamp_paddle_y(moved, config.paddle_height);
        }
    }
}
