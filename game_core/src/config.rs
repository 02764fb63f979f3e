use crate::{Bounds, Color, GameError, Params};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Spawn parameters for one ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    pub radius: f32,
    pub velocity: Vec2,
    pub color: Color,
}

/// Spawn parameters for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleSpec {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl PaddleSpec {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Game configuration
///
/// Every field is optional when deserializing; missing ones keep their
/// default from [`Params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bounds: Bounds,
    pub paddle_step: f32,
    pub paddle_spawn_offset: f32,
    pub player_paddle: PaddleSpec,
    pub ai_paddle: PaddleSpec,
    /// Balls in spawn order. The AI paddle tracks the first one.
    pub balls: Vec<BallSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(Params::SURFACE_WIDTH, Params::SURFACE_HEIGHT),
            paddle_step: Params::PADDLE_STEP,
            paddle_spawn_offset: Params::PADDLE_SPAWN_OFFSET,
            player_paddle: PaddleSpec {
                width: Params::PLAYER_PADDLE_WIDTH,
                height: Params::PLAYER_PADDLE_HEIGHT,
                color: Params::PLAYER_PADDLE_COLOR,
            },
            ai_paddle: PaddleSpec {
                width: Params::AI_PADDLE_WIDTH,
                height: Params::AI_PADDLE_HEIGHT,
                color: Params::AI_PADDLE_COLOR,
            },
            balls: Params::BALLS
                .iter()
                .map(|&(radius, vx, vy, color)| BallSpec {
                    radius,
                    velocity: Vec2::new(vx, vy),
                    color,
                })
                .collect(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the surface size, e.g. with the canvas dimensions
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    /// Spawn y shared by both paddles
    pub fn paddle_spawn_y(&self) -> f32 {
        self.bounds.height / 2.0 - self.paddle_spawn_offset
    }

    /// Top-left corner of the player paddle (left edge)
    pub fn player_paddle_pos(&self) -> Vec2 {
        Vec2::new(0.0, self.paddle_spawn_y())
    }

    /// Top-left corner of the AI paddle (right edge)
    pub fn ai_paddle_pos(&self) -> Vec2 {
        Vec2::new(
            self.bounds.width - self.ai_paddle.width,
            self.paddle_spawn_y(),
        )
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), GameError> {
        let Bounds { width, height } = self.bounds;
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return Err(GameError::NonPositiveBounds { width, height });
        }

        if !self.paddle_step.is_finite() || self.paddle_step <= 0.0 {
            return Err(GameError::InvalidPaddleStep {
                step: self.paddle_step,
            });
        }

        for spec in [&self.player_paddle, &self.ai_paddle] {
            if spec.size().is_nan() || spec.width <= 0.0 || spec.height <= 0.0 {
                return Err(GameError::NonPositivePaddleSize {
                    width: spec.width,
                    height: spec.height,
                });
            }
        }

        let y = self.paddle_spawn_y();
        if y < 0.0 || y + self.player_paddle.height > height {
            return Err(GameError::PaddleOutOfBounds {
                y,
                height: self.player_paddle.height,
                surface_height: height,
            });
        }

        if self.balls.is_empty() {
            return Err(GameError::NoBalls);
        }
        if let Some(spec) = self
            .balls
            .iter()
            .find(|spec| spec.radius.is_nan() || spec.radius <= 0.0)
        {
            return Err(GameError::NonPositiveRadius {
                radius: spec.radius,
            });
        }

        Ok(())
    }
}
