use crate::systems::*;
use crate::{
    Ball, Bounds, Canvas, Config, ControlMode, Events, GameError, KeyState, Paddle, Side,
};
use hecs::{Entity, World};

/// Local multi-ball Pong match: many balls, one keyboard paddle on the left
/// and one AI paddle on the right.
pub struct Game {
    world: World,
    bounds: Bounds,
    keys: KeyState,
    events: Events,
    player: Entity,
    ai: Entity,
    tracked_ball: Entity,
    ticks: u64,
}

impl Game {
    /// Build a match from `config`, rejecting anything the simulation
    /// cannot run.
    pub fn new(config: &Config) -> Result<Self, GameError> {
        config.validate()?;

        let bounds = config.bounds;
        let mut world = World::new();

        let mut balls = Vec::with_capacity(config.balls.len());
        for spec in &config.balls {
            let ball = Ball::new(bounds.center(), spec.velocity, spec.radius, spec.color)?;
            balls.push(world.spawn((ball,)));
        }
        let tracked_ball = *balls.first().ok_or(GameError::NoBalls)?;

        let player = Paddle::new(
            config.player_paddle_pos(),
            config.player_paddle.size(),
            config.player_paddle.color,
            ControlMode::Manual,
            config.paddle_step,
        )?;
        let player = world.spawn((player, Side::Left));

        let ai = Paddle::new(
            config.ai_paddle_pos(),
            config.ai_paddle.size(),
            config.ai_paddle.color,
            ControlMode::Automatic {
                target: tracked_ball,
            },
            config.paddle_step,
        )?;
        let ai = world.spawn((ai, Side::Right));

        log::info!(
            "game created: {}x{} surface, {} balls",
            bounds.width,
            bounds.height,
            balls.len()
        );

        Ok(Self {
            world,
            bounds,
            keys: KeyState::new(),
            events: Events::new(),
            player,
            ai,
            tracked_ball,
            ticks: 0,
        })
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) {
        self.events.clear();

        // 1. Move balls, bouncing off top and bottom
        advance_balls(&mut self.world, &self.bounds, &mut self.events);

        // 2-3. Keyboard paddle, then AI paddle toward its ball
        move_paddles(&mut self.world, &self.keys, &self.bounds);

        // 4. Ball vs paddle
        check_paddle_collisions(&mut self.world, &mut self.events);

        // 5. Balls leaving left or right
        check_exits(&mut self.world, &self.bounds, &mut self.events);

        self.ticks += 1;
        if !self.events.is_empty() {
            log::trace!("tick {}: {:?}", self.ticks, self.events);
        }
    }

    /// Draw the current state. Calling this repeatedly without `update`
    /// issues the same draw calls.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render_world(&self.world, &self.bounds, canvas);
    }

    /// One full frame: `update` then `render`
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.update();
        self.render(canvas);
    }

    /// Record a key press by `KeyboardEvent.key` name
    pub fn key_down(&mut self, name: &str) -> bool {
        self.keys.press(name)
    }

    /// Record a key release by `KeyboardEvent.key` name
    pub fn key_up(&mut self, name: &str) -> bool {
        self.keys.release(name)
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Events raised by the last `update`
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Number of completed updates
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player_entity(&self) -> Entity {
        self.player
    }

    pub fn ai_entity(&self) -> Entity {
        self.ai
    }

    /// The ball the AI paddle follows (the first one spawned)
    pub fn tracked_ball(&self) -> Entity {
        self.tracked_ball
    }

    /// Snapshot of all balls in spawn order
    pub fn balls(&self) -> Vec<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .map(|(_e, ball)| *ball)
            .collect()
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.paddle(self.player)
    }

    pub fn ai_paddle(&self) -> Option<Paddle> {
        self.paddle(self.ai)
    }

    fn paddle(&self, entity: Entity) -> Option<Paddle> {
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }
}
