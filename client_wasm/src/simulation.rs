use crate::state::GameStateSnapshot;
use game_core::{
    spawn_match, step, Ball, Config, Events, GameMap, GameRng, Paddle, RandomSource, Score, Side,
    StagedInput,
};
use hecs::World;

/// All mutable state of a running game, advanced one frame at a time
pub struct LocalGame<R: RandomSource = GameRng> {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: R,
    pub frame: u64,
}

impl LocalGame<GameRng> {
    pub fn new(seed: u64, map: GameMap) -> Self {
        Self::with_rng(map, GameRng::new(seed))
    }
}

impl<R: RandomSource> LocalGame<R> {
    pub fn with_rng(map: GameMap, rng: R) -> Self {
        let config = Config::new();
        let mut world = World::new();
        spawn_match(&mut world, &map, &config);

        Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            frame: 0,
        }
    }

    /// Consume staged input and run one simulation frame
    pub fn step(&mut self, input: &mut StagedInput) {
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
            &mut self.rng,
        );
        self.frame += 1;

        if self.events.player_scored || self.events.opponent_scored {
            log::debug!(
                "Frame {}: score {}-{}",
                self.frame,
                self.score.player,
                self.score.opponent
            );
        }
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        let center = self.map.ball_spawn();
        let (ball_x, ball_y) = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos.x, ball.pos.y))
            .unwrap_or((center.x, center.y));

        let spawn_y = self.map.paddle_spawn_y(self.config.paddle_height);
        let mut paddle_left_y = spawn_y;
        let mut paddle_right_y = spawn_y;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => paddle_left_y = paddle.y,
                Side::Right => paddle_right_y = paddle.y,
            }
        }

        GameStateSnapshot {
            ball_x,
            ball_y,
            paddle_left_y,
            paddle_right_y,
            score_player: self.score.player,
            score_opponent: self.score.opponent,
            frame: self.frame,
        }
    }
}
