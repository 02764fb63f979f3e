//! Deterministic multi-ball Pong simulation
//!
//! Pure game logic with no browser dependencies. Units are canvas pixels and
//! velocities are per tick (one display refresh).

pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;
