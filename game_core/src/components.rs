use crate::{Bounds, Canvas, GameError};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fill color, parsed from and rendered as a CSS `#RRGGBB` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(raw: &str) -> Result<Self, GameError> {
        let invalid = || GameError::InvalidColor(raw.to_string());
        let hex = raw.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = GameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_hex(&raw)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Ball component - a disc bouncing between the top and bottom edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per tick
    pub color: Color,
    radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Result<Self, GameError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GameError::NonPositiveRadius { radius });
        }
        Ok(Self {
            pos,
            vel,
            color,
            radius,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Integrate one tick of motion, then reflect off the top or bottom edge.
    ///
    /// The reflection is a sign flip only, so the ball may overlap an edge by
    /// up to one tick of travel. Returns whether it reflected.
    pub fn advance(&mut self, bounds: &Bounds) -> bool {
        self.pos += self.vel;

        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= bounds.height {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Put the ball back at the center, serving toward the other side.
    pub fn reset(&mut self, bounds: &Bounds) {
        self.pos = bounds.center();
        self.vel.x = -self.vel.x;
    }

    /// Whether the ball touches or crosses the left or right edge
    pub fn is_out(&self, bounds: &Bounds) -> bool {
        self.left() <= 0.0 || self.right() >= bounds.width
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_circle(self.pos, self.radius, self.color);
    }
}

/// Vertical movement request for a manual paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Who decides how a paddle moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Driven by the keyboard
    Manual,
    /// Follows a ball. The handle does not own the ball.
    Automatic { target: hecs::Entity },
}

/// Which edge of the surface a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - an axis-aligned bar that moves vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2, // top-left corner
    pub color: Color,
    pub mode: ControlMode,
    pub step: f32, // units per tick
    size: Vec2,
}

impl Paddle {
    pub fn new(
        pos: Vec2,
        size: Vec2,
        color: Color,
        mode: ControlMode,
        step: f32,
    ) -> Result<Self, GameError> {
        if size.is_nan() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(GameError::NonPositivePaddleSize {
                width: size.x,
                height: size.y,
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(GameError::InvalidPaddleStep { step });
        }
        Ok(Self {
            pos,
            color,
            mode,
            step,
            size,
        })
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Whether `y` lies within the paddle's vertical extent (inclusive)
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.pos.y && y <= self.pos.y + self.size.y
    }

    /// Keyboard movement. A request at the edge is a no-op and the paddle
    /// never leaves `[0, height - paddle height]`.
    pub fn move_manual(&mut self, direction: Direction, bounds: &Bounds) {
        let max_y = bounds.height - self.size.y;
        match direction {
            Direction::Up if self.pos.y > 0.0 => {
                self.pos.y = (self.pos.y - self.step).min(max_y).max(0.0);
            }
            Direction::Down if self.pos.y + self.size.y < bounds.height => {
                self.pos.y = (self.pos.y + self.step).min(max_y).max(0.0);
            }
            _ => {}
        }
    }

    /// Step toward the target's vertical position.
    ///
    /// Unlike manual movement this is not clamped to the surface.
    pub fn track_target(&mut self, target_y: f32) {
        let center = self.center_y();
        if target_y < center {
            self.pos.y -= self.step;
        } else if target_y > center {
            self.pos.y += self.step;
        }
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_rect(self.pos, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::rgb(255, 255, 255);

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    fn manual_paddle(y: f32) -> Paddle {
        Paddle::new(
            Vec2::new(0.0, y),
            Vec2::new(10.0, 200.0),
            WHITE,
            ControlMode::Manual,
            5.0,
        )
        .unwrap()
    }

    #[test]
    fn test_color_parses_hex() {
        assert_eq!(Color::from_hex("#FF5733").unwrap(), Color::rgb(255, 87, 51));
        assert_eq!(Color::from_hex("#a133ff").unwrap().to_css(), "#A133FF");
        assert!(Color::from_hex("FF5733").is_err());
        assert!(Color::from_hex("#FF57").is_err());
        assert!(Color::from_hex("#GG5733").is_err());
        assert!(Color::from_hex("#+F5733").is_err());
    }

    #[test]
    fn test_ball_rejects_non_positive_radius() {
        for radius in [0.0, -4.0, f32::NAN] {
            assert!(Ball::new(Vec2::ZERO, Vec2::ZERO, radius, WHITE).is_err());
        }
    }

    #[test]
    fn test_paddle_rejects_non_positive_size() {
        let err = Paddle::new(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            WHITE,
            ControlMode::Manual,
            5.0,
        )
        .unwrap_err();
        assert_eq!(
            err,
            GameError::NonPositivePaddleSize {
                width: 10.0,
                height: 0.0
            }
        );
    }

    #[test]
    fn test_paddle_rejects_bad_step() {
        for step in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let result = Paddle::new(
                Vec2::ZERO,
                Vec2::new(10.0, 200.0),
                WHITE,
                ControlMode::Manual,
                step,
            );
            assert!(matches!(result, Err(GameError::InvalidPaddleStep { .. })));
        }
    }

    #[test]
    fn test_ball_bounces_off_top() {
        let mut ball = Ball::new(Vec2::new(400.0, 10.0), Vec2::new(3.0, -3.0), 8.0, WHITE).unwrap();
        assert!(ball.advance(&bounds()));
        assert_eq!(ball.pos, Vec2::new(403.0, 7.0));
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0), "Only Y velocity flips");
    }

    #[test]
    fn test_ball_bounces_off_bottom() {
        let mut ball = Ball::new(Vec2::new(400.0, 590.0), Vec2::new(-2.0, 2.0), 10.0, WHITE).unwrap();
        assert!(ball.advance(&bounds()));
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_ball_moves_freely_mid_surface() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(4.0, 4.0), 12.0, WHITE).unwrap();
        assert!(!ball.advance(&bounds()));
        assert_eq!(ball.pos, Vec2::new(404.0, 304.0));
        assert_eq!(ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_ball_reset_centers_and_reverses_x() {
        let mut ball = Ball::new(Vec2::new(5.0, 100.0), Vec2::new(-3.0, 7.0), 8.0, WHITE).unwrap();
        ball.reset(&bounds());
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(3.0, 7.0));
    }

    #[test]
    fn test_ball_out_at_either_edge() {
        let b = bounds();
        let ball = |x| Ball::new(Vec2::new(x, 300.0), Vec2::ZERO, 8.0, WHITE).unwrap();
        assert!(ball(8.0).is_out(&b), "Touching the left edge counts");
        assert!(ball(792.0).is_out(&b), "Touching the right edge counts");
        assert!(!ball(400.0).is_out(&b));
    }

    #[test]
    fn test_manual_paddle_stops_at_top() {
        let mut paddle = manual_paddle(0.0);
        paddle.move_manual(Direction::Up, &bounds());
        assert_eq!(paddle.pos.y, 0.0);
    }

    #[test]
    fn test_manual_paddle_stops_at_bottom() {
        let mut paddle = manual_paddle(400.0);
        paddle.move_manual(Direction::Down, &bounds());
        assert_eq!(paddle.pos.y, 400.0);
    }

    #[test]
    fn test_manual_paddle_clamps_partial_step() {
        let mut paddle = manual_paddle(3.0);
        paddle.move_manual(Direction::Up, &bounds());
        assert_eq!(paddle.pos.y, 0.0);

        let mut paddle = manual_paddle(398.0);
        paddle.move_manual(Direction::Down, &bounds());
        assert_eq!(paddle.pos.y, 400.0);
    }

    #[test]
    fn test_manual_paddle_moves_one_step() {
        let mut paddle = manual_paddle(250.0);
        paddle.move_manual(Direction::Up, &bounds());
        assert_eq!(paddle.pos.y, 245.0);
        paddle.move_manual(Direction::Down, &bounds());
        paddle.move_manual(Direction::Down, &bounds());
        assert_eq!(paddle.pos.y, 255.0);
    }

    #[test]
    fn test_tracking_moves_toward_target() {
        let target = hecs::World::new().spawn((0u8,));
        let mut paddle = Paddle::new(
            Vec2::new(790.0, 250.0),
            Vec2::new(10.0, 100.0),
            WHITE,
            ControlMode::Automatic { target },
            5.0,
        )
        .unwrap();
        assert_eq!(paddle.center_y(), 300.0);

        paddle.track_target(250.0);
        assert_eq!(paddle.pos.y, 245.0, "Target above center moves up");

        paddle.track_target(500.0);
        assert_eq!(paddle.pos.y, 250.0, "Target below center moves down");

        paddle.track_target(300.0);
        assert_eq!(paddle.pos.y, 250.0, "Target level with center holds");
    }

    #[test]
    fn test_tracking_is_not_clamped() {
        let target = hecs::World::new().spawn((0u8,));
        let mut paddle = Paddle::new(
            Vec2::new(790.0, 0.0),
            Vec2::new(10.0, 100.0),
            WHITE,
            ControlMode::Automatic { target },
            5.0,
        )
        .unwrap();
        paddle.track_target(-100.0);
        assert_eq!(paddle.pos.y, -5.0);
    }
}
