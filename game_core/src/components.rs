use crate::RandomSource;
use glam::Vec2;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Pointer-controlled player
    Left,
    /// Computer opponent
    Right,
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from `center` back toward the side that just scored.
    ///
    /// Horizontal speed is kept and mirrored; vertical speed is redrawn
    /// uniformly from `[-serve_vy_max, serve_vy_max)`.
    pub fn reset(&mut self, center: Vec2, serve_vy_max: f32, rng: &mut impl RandomSource) {
        self.pos = center;
        self.vel.x = -self.vel.x;
        self.vel.y = rng.next_unit() * serve_vy_max * 2.0 - serve_vy_max;
    }
}
