use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub ball_initial_vel: Vec2,
    pub opponent_speed: f32,
    pub opponent_deadzone: f32,
    pub paddle_hit_factor: f32,
    pub serve_vy_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_initial_vel: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_deadzone: Params::OPPONENT_DEADZONE,
            paddle_hit_factor: Params::PADDLE_HIT_FACTOR,
            serve_vy_max: Params::SERVE_VY_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of a paddle in an arena of the given width
    pub fn paddle_x(&self, side: Side, arena_width: f32) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => arena_width - self.paddle_width,
        }
    }

    /// Vertical center of a paddle whose top edge is at `y`
    pub fn paddle_center(&self, y: f32) -> f32 {
        y + self.paddle_height / 2.0
    }
}
