//! Drawing surface abstraction
//!
//! The simulation only needs three primitives. The browser client implements
//! them on top of a Canvas 2D context; tests record the calls.

use crate::{Bounds, Color};
use glam::Vec2;

/// Minimal 2D drawing surface
pub trait Canvas {
    /// Clear the whole surface
    fn clear(&mut self, bounds: &Bounds);

    /// Fill a disc centered on `center`
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Fill an axis-aligned rectangle whose top-left corner is `origin`
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
}
