use crate::{Config, Params, Side};
use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict containment on the vertical axis only
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.min.y && y < self.max.y
    }
}

/// Playfield in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arena with explicit dimensions, falling back to the reference size
    /// for non-positive values.
    pub fn with_size(width: f32, height: f32) -> Self {
        let default = Self::default();
        Self {
            width: if width > 0.0 { width } else { default.width },
            height: if height > 0.0 { height } else { default.height },
        }
    }

    /// Where the ball is served from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }

    /// Clamp a paddle's top edge to `[0, height - paddle_height]`.
    ///
    /// An arena shorter than the paddle pins it to the top edge.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.min(self.height - paddle_height).max(0.0)
    }

    pub fn paddle_rect(&self, side: Side, y: f32, config: &Config) -> Aabb {
        Aabb::from_origin_size(
            Vec2::new(config.paddle_x(side, self.width), y),
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }
}
