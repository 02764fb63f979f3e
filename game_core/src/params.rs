use crate::Color;

/// Game tuning parameters for multi-ball Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (overridden by the canvas size at startup)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddles
    pub const PADDLE_STEP: f32 = 5.0; // units per tick
    pub const PADDLE_SPAWN_OFFSET: f32 = 50.0; // spawn y = height / 2 - offset
    pub const PLAYER_PADDLE_WIDTH: f32 = 10.0;
    pub const PLAYER_PADDLE_HEIGHT: f32 = 200.0;
    pub const PLAYER_PADDLE_COLOR: Color = Color::rgb(0xFF, 0xC3, 0x00);
    pub const AI_PADDLE_WIDTH: f32 = 10.0;
    pub const AI_PADDLE_HEIGHT: f32 = 100.0;
    pub const AI_PADDLE_COLOR: Color = Color::rgb(0xC7, 0x00, 0x39);

    /// Default balls: (radius, vx, vy, color). The first one is tracked by the AI.
    pub const BALLS: [(f32, f32, f32, Color); 5] = [
        (8.0, 3.0, 3.0, Color::rgb(0xFF, 0x57, 0x33)),  // small, slow
        (15.0, 5.0, 5.0, Color::rgb(0x33, 0xFF, 0x57)), // medium, fast
        (10.0, 2.0, 2.0, Color::rgb(0x33, 0x57, 0xFF)), // small, very slow
        (20.0, 6.0, 6.0, Color::rgb(0xFF, 0x33, 0xA1)), // large, fast
        (12.0, 4.0, 4.0, Color::rgb(0xA1, 0x33, 0xFF)), // medium, medium
    ];
}
