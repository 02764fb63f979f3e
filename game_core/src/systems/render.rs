use crate::{Ball, Bounds, Canvas, Paddle, Side};
use hecs::World;

/// Draw one frame: clear, balls in spawn order, then the left and right
/// paddles. Reads the world only.
pub fn render_world<C: Canvas + ?Sized>(world: &World, bounds: &Bounds, canvas: &mut C) {
    canvas.clear(bounds);

    for (_entity, ball) in world.query::<&Ball>().iter() {
        ball.render(canvas);
    }

    let mut paddles: Vec<(Side, Paddle)> = world
        .query::<(&Paddle, &Side)>()
        .iter()
        .map(|(_e, (paddle, side))| (*side, *paddle))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);
    for (_side, paddle) in &paddles {
        paddle.render(canvas);
    }
}
