use crate::{Ball, Bounds, Events};
use hecs::World;

/// Reset every ball that reached the left or right edge.
///
/// This is the point-scored moment, but no score is kept: the ball just
/// returns to the center heading the other way.
pub fn check_exits(world: &mut World, bounds: &Bounds, events: &mut Events) {
    for (entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.is_out(bounds) {
            log::debug!("ball {:?} left the court at x={:.1}", entity, ball.pos.x);
            ball.reset(bounds);
            events.resets += 1;
        }
    }
}
