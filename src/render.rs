//! Render surface abstraction
//!
//! The simulation draws through this trait and never touches a concrete
//! backend. The web build supplies a canvas-2d implementation in the entry
//! point; headless runs and tests use [`NullSurface`].

/// A minimal 2D drawing surface: a clearable area, a current fill colour,
/// and filled rectangles. Matches what the game actually needs.
pub trait Surface {
    /// Clear the whole surface (field width x height).
    fn clear(&mut self, width: f32, height: f32);

    /// Set the current fill colour (CSS colour string).
    fn set_fill(&mut self, color: &str);

    /// Paint a filled rectangle at (x, y) with the current fill.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// Surface that draws nothing. Used by the native demo and unit tests,
/// where only the simulation side effects matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}

    fn set_fill(&mut self, _color: &str) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {}
}
