use core::fmt;

/// Rejected game configuration. Raised only at construction time; the
/// simulation itself has no failure paths.
#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    NonPositiveRadius { radius: f32 },
    NonPositivePaddleSize { width: f32, height: f32 },
    NonPositiveBounds { width: f32, height: f32 },
    InvalidPaddleStep { step: f32 },
    NoBalls,
    PaddleOutOfBounds { y: f32, height: f32, surface_height: f32 },
    InvalidColor(String),
    Config(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRadius { radius } => {
                write!(f, "ball radius must be positive, got {radius}")
            }
            Self::NonPositivePaddleSize { width, height } => {
                write!(f, "paddle size must be positive, got {width}x{height}")
            }
            Self::NonPositiveBounds { width, height } => {
                write!(f, "surface size must be positive, got {width}x{height}")
            }
            Self::InvalidPaddleStep { step } => {
                write!(f, "paddle step must be positive and finite, got {step}")
            }
            Self::NoBalls => write!(f, "at least one ball is required"),
            Self::PaddleOutOfBounds {
                y,
                height,
                surface_height,
            } => write!(
                f,
                "player paddle at y={y} with height {height} does not fit a surface of height {surface_height}"
            ),
            Self::InvalidColor(raw) => write!(f, "invalid color {raw:?}, expected #RRGGBB"),
            Self::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
