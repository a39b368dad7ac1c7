use crate::{Config, GameMap, Paddle, Side, StagedInput};
use hecs::World;

/// Top edge for a paddle centered on `input_y`, clamped to the arena
pub fn move_paddle(input_y: f32, map: &GameMap, config: &Config) -> f32 {
    map.clamp_paddle_y(input_y - config.paddle_height / 2.0, config.paddle_height)
}

/// Apply the staged pointer target to the player paddle
pub fn ingest_inputs(world: &mut World, input: &mut StagedInput, map: &GameMap, config: &Config) {
    let Some(target) = input.take() else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Left {
            paddle.y = move_paddle(target, map, config);
        }
    }
}
