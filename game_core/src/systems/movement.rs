use crate::{Ball, Bounds, ControlMode, Direction, Events, KeyState, Paddle};
use hecs::{Entity, World};

/// Move every ball one tick and bounce it off the top and bottom edges
pub fn advance_balls(world: &mut World, bounds: &Bounds, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(bounds) {
            events.wall_bounces += 1;
        }
    }
}

/// Move keyboard paddles from the held keys and step AI paddles toward
/// the ball they track
pub fn move_paddles(world: &mut World, keys: &KeyState, bounds: &Bounds) {
    // Resolve tracked ball positions before borrowing paddles mutably
    let targets: Vec<(Entity, f32)> = world
        .query::<&Paddle>()
        .iter()
        .filter_map(|(entity, paddle)| match paddle.mode {
            ControlMode::Automatic { target } => world
                .get::<&Ball>(target)
                .ok()
                .map(|ball| (entity, ball.pos.y)),
            ControlMode::Manual => None,
        })
        .collect();

    for (entity, paddle) in world.query_mut::<&mut Paddle>() {
        match paddle.mode {
            ControlMode::Manual => {
                // Both keys held: both steps apply and cancel out
                if keys.up {
                    paddle.move_manual(Direction::Up, bounds);
                }
                if keys.down {
                    paddle.move_manual(Direction::Down, bounds);
                }
            }
            ControlMode::Automatic { .. } => {
                if let Some(&(_, target_y)) = targets.iter().find(|(e, _)| *e == entity) {
                    paddle.track_target(target_y);
                }
            }
        }
    }
}
