use crate::{Ball, Events, Paddle, Side};
use hecs::World;

/// Whether `ball` has reached the face of a paddle guarding `side`
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let reached = match side {
        Side::Left => ball.left() <= paddle.right(),
        Side::Right => ball.right() >= paddle.left(),
    };
    reached && paddle.spans_y(ball.pos.y)
}

/// Reverse the horizontal velocity of every ball touching a paddle.
///
/// Only `vel.x` changes; the ball is not pushed out, so a ball that stays
/// overlapped flips again on the next tick.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, Paddle)> = world
        .query::<(&Paddle, &Side)>()
        .iter()
        .map(|(_e, (paddle, side))| (*side, *paddle))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (side, paddle) in &paddles {
            if ball_hits_paddle(ball, paddle, *side) {
                ball.vel.x = -ball.vel.x;
                events.paddle_hits += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, ControlMode};
    use glam::Vec2;

    const GREY: Color = Color::rgb(128, 128, 128);

    fn left_paddle() -> Paddle {
        Paddle::new(
            Vec2::new(0.0, 250.0),
            Vec2::new(10.0, 200.0),
            GREY,
            ControlMode::Manual,
            5.0,
        )
        .unwrap()
    }

    fn right_paddle(target: hecs::Entity) -> Paddle {
        Paddle::new(
            Vec2::new(790.0, 250.0),
            Vec2::new(10.0, 100.0),
            GREY,
            ControlMode::Automatic { target },
            5.0,
        )
        .unwrap()
    }

    fn ball(x: f32, y: f32, vx: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, 2.0), 8.0, GREY).unwrap()
    }

    fn setup_world(ball: Ball) -> (World, hecs::Entity) {
        let mut world = World::new();
        let entity = world.spawn((ball,));
        world.spawn((left_paddle(), Side::Left));
        world.spawn((right_paddle(entity), Side::Right));
        (world, entity)
    }

    #[test]
    fn test_left_paddle_face_contact() {
        let paddle = left_paddle();
        assert!(ball_hits_paddle(&ball(18.0, 300.0, -3.0), &paddle, Side::Left));
        assert!(!ball_hits_paddle(&ball(18.5, 300.0, -3.0), &paddle, Side::Left));
    }

    #[test]
    fn test_vertical_extent_is_inclusive() {
        let paddle = left_paddle();
        assert!(ball_hits_paddle(&ball(15.0, 250.0, -3.0), &paddle, Side::Left));
        assert!(ball_hits_paddle(&ball(15.0, 450.0, -3.0), &paddle, Side::Left));
        assert!(!ball_hits_paddle(&ball(15.0, 249.9, -3.0), &paddle, Side::Left));
        assert!(!ball_hits_paddle(&ball(15.0, 450.1, -3.0), &paddle, Side::Left));
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut world, entity) = setup_world(ball(17.0, 300.0, -3.0));
        let mut events = Events::new();

        check_paddle_collisions(&mut world, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.vel, Vec2::new(3.0, 2.0), "Only X velocity flips");
        assert_eq!(ball.pos, Vec2::new(17.0, 300.0), "Ball is not pushed out");
        assert_eq!(events.paddle_hits, 1);
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let (mut world, entity) = setup_world(ball(783.0, 260.0, 4.0));
        let mut events = Events::new();

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.x, -4.0);
        assert_eq!(events.paddle_hits, 1);
    }

    #[test]
    fn test_ball_misses_paddle_vertically() {
        let (mut world, entity) = setup_world(ball(17.0, 100.0, -3.0));
        let mut events = Events::new();

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.x, -3.0);
        assert_eq!(events.paddle_hits, 0);
    }

    #[test]
    fn test_overlapping_ball_flips_every_tick() {
        let (mut world, entity) = setup_world(ball(15.0, 300.0, -3.0));
        let mut events = Events::new();

        check_paddle_collisions(&mut world, &mut events);
        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.x, 3.0);

        check_paddle_collisions(&mut world, &mut events);
        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.x, -3.0);
        assert_eq!(events.paddle_hits, 2);
    }

    #[test]
    fn test_mid_court_ball_untouched() {
        let (mut world, entity) = setup_world(ball(400.0, 300.0, 5.0));
        let mut events = Events::new();

        check_paddle_collisions(&mut world, &mut events);

        assert_eq!(world.get::<&Ball>(entity).unwrap().vel.x, 5.0);
        assert!(events.is_empty());
    }
}
