//! Drawing surfaces the animator renders into.

mod recording;
mod svg;

pub use recording::*;
pub use svg::*;

use crate::error::SurfaceError;
use crate::shapes::ShapePath;

/// Paint applied to a filled path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill<'a> {
    /// CSS color string from the theme palette.
    pub color: &'a str,
    /// In `[0, 1]`.
    pub opacity: f64,
}

/// A resizable 2D surface that can fill paths.
///
/// Every call may fail with [`SurfaceError::Unavailable`] once the surface has been
/// detached by its owner.
pub trait DrawSurface {
    /// Current pixel size as `(width, height)`.
    fn size(&self) -> Result<(u32, u32), SurfaceError>;

    /// Change the pixel size. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;

    /// Erase the whole surface.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Fill a path.
    fn fill_path(&mut self, path: &ShapePath, fill: &Fill<'_>) -> Result<(), SurfaceError>;
}
