use crate::{Ball, Config, Events, GameMap, RandomSource, Score};
use hecs::World;

/// Award a point when the ball leaves the arena and serve it again
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut impl RandomSource,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_opponent();
            events.opponent_scored = true;
            log::debug!("Opponent scored: {}-{}", score.player, score.opponent);

            ball.reset(map.ball_spawn(), config.serve_vy_max, rng);
        } else if ball.pos.x > map.width {
            score.increment_player();
            events.player_scored = true;
            log::debug!("Player scored: {}-{}", score.player, score.opponent);

            ball.reset(map.ball_spawn(), config.serve_vy_max, rng);
        }
    }
}
