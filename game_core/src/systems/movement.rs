use crate::Ball;
use hecs::World;

/// Advance the ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_move_ball_adds_velocity() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(300.0, 100.0), Vec2::new(3.0, -2.5));

        move_ball(&mut world);

        assert_eq!(
            world.get::<&Ball>(ball).unwrap().pos,
            Vec2::new(303.0, 97.5)
        );
    }
}
