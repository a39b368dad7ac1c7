pub mod components;
pub mod config;
pub mod display;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use display::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one frame
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &mut StagedInput,
    rng: &mut impl RandomSource,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Apply the staged pointer target to the player paddle
    ingest_inputs(world, input, map, config);

    // 2. Opponent tracks the ball
    move_opponent(world, map, config);

    // 3. Move ball
    move_ball(world);

    // 4. Walls, then player paddle, then opponent paddle
    check_collisions(world, map, config, events);

    // 5. Ball exited arena
    check_scoring(world, map, score, events, rng, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles centered and the ball at the center with its
/// initial velocity
pub fn spawn_match(world: &mut World, map: &GameMap, config: &Config) {
    let paddle_y = map.paddle_spawn_y(config.paddle_height);
    create_paddle(world, Side::Left, paddle_y);
    create_paddle(world, Side::Right, paddle_y);
    create_ball(world, map.ball_spawn(), config.ball_initial_vel);
}
