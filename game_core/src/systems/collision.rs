use crate::{Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top/bottom walls and both paddles.
///
/// Wall reflection is a plain sign flip with no position correction. A paddle
/// hit triggers when the ball's leading edge is past the paddle face and its
/// center lies strictly inside the paddle's vertical span; the return angle
/// depends only on the offset from the paddle center.
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    let radius = config.ball_radius;

    // Top and bottom walls
    if ball_pos.y - radius < 0.0 || ball_pos.y + radius > map.height {
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
    }

    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    // Player paddle is resolved before the opponent's
    paddles.sort_by_key(|(side, _)| *side != Side::Left);

    for (side, paddle_y) in paddles {
        let rect = map.paddle_rect(side, paddle_y, config);
        let past_face = match side {
            Side::Left => ball_pos.x - radius < rect.max.x,
            Side::Right => ball_pos.x + radius > rect.min.x,
        };

        if past_face && rect.spans_y(ball_pos.y) {
            ball_vel.x = -ball_vel.x;
            ball_vel.y = (ball_pos.y - config.paddle_center(paddle_y)) * config.paddle_hit_factor;
            events.ball_hit_paddle = true;
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = ball_vel;
    }
}
