pub mod collision;
pub mod movement;
pub mod render;
pub mod scoring;

pub use collision::*;
pub use movement::*;
pub use render::*;
pub use scoring::*;
