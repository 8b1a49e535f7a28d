//! A surface that records every call, for tests and headless hosts.

use std::cell::RefCell;
use std::rc::Rc;

use super::{DrawSurface, Fill};
use crate::error::SurfaceError;
use crate::shapes::ShapePath;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize { width: u32, height: u32 },
    Clear,
    Fill {
        path: ShapePath,
        color: String,
        opacity: f64,
    },
}

#[derive(Debug, Default)]
struct RecordingLog {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    detached: bool,
    /// Fills left before the surface detaches itself.
    fills_until_detach: Option<usize>,
}

/// A shared handle to a recording surface.
///
/// Clones see the same log, so a test can keep one handle while the animator owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<RecordingLog>>,
}

impl RecordingSurface {
    /// Create a surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            log: Rc::new(RefCell::new(RecordingLog {
                width,
                height,
                ..Default::default()
            })),
        }
    }

    /// Make every further call fail, as if the surface left the document.
    pub fn detach(&self) {
        self.log.borrow_mut().detached = true;
    }

    /// Detach after `fills` more successful fills, simulating loss mid-frame.
    pub fn detach_after_fills(&self, fills: usize) {
        self.log.borrow_mut().fills_until_detach = Some(fills);
    }

    pub fn is_detached(&self) -> bool {
        self.log.borrow().detached
    }

    /// Snapshot of all recorded calls.
    pub fn calls(&self) -> Vec<DrawCall> {
        self.log.borrow().calls.clone()
    }

    pub fn fill_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Fill { .. }))
    }

    pub fn clear_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Clear))
    }

    /// Forget recorded calls; size and detach state are kept.
    pub fn reset_calls(&self) {
        self.log.borrow_mut().calls.clear();
    }

    fn count(&self, predicate: impl Fn(&DrawCall) -> bool) -> usize {
        self.log.borrow().calls.iter().filter(|c| predicate(c)).count()
    }

    fn check_attached(log: &RecordingLog) -> Result<(), SurfaceError> {
        if log.detached {
            Err(SurfaceError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Result<(u32, u32), SurfaceError> {
        let log = self.log.borrow();
        Self::check_attached(&log)?;
        Ok((log.width, log.height))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let mut log = self.log.borrow_mut();
        Self::check_attached(&log)?;
        log.width = width;
        log.height = height;
        log.calls.push(DrawCall::Resize { width, height });
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let mut log = self.log.borrow_mut();
        Self::check_attached(&log)?;
        log.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn fill_path(&mut self, path: &ShapePath, fill: &Fill<'_>) -> Result<(), SurfaceError> {
        let mut log = self.log.borrow_mut();
        Self::check_attached(&log)?;
        if let Some(remaining) = log.fills_until_detach {
            if remaining == 0 {
                log.detached = true;
                return Err(SurfaceError::Unavailable);
            }
            log.fills_until_detach = Some(remaining - 1);
        }
        log.calls.push(DrawCall::Fill {
            path: path.clone(),
            color: fill.color.to_string(),
            opacity: fill.opacity,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::star_path;

    #[test]
    fn test_records_calls() {
        let mut surface = RecordingSurface::new(10, 10);
        let observer = surface.clone();

        surface.clear().unwrap();
        surface
            .fill_path(&star_path(1.0, 1.0, 1.0), &Fill { color: "#FFFFFF", opacity: 0.5 })
            .unwrap();

        assert_eq!(observer.clear_count(), 1);
        assert_eq!(observer.fill_count(), 1);
    }

    #[test]
    fn test_detached_surface_fails() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.detach();
        assert_eq!(surface.clear(), Err(SurfaceError::Unavailable));
        assert_eq!(surface.size(), Err(SurfaceError::Unavailable));
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_detach_after_fills() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.detach_after_fills(2);
        let path = star_path(1.0, 1.0, 1.0);
        let fill = Fill { color: "#000000", opacity: 1.0 };

        assert!(surface.fill_path(&path, &fill).is_ok());
        assert!(surface.fill_path(&path, &fill).is_ok());
        assert_eq!(surface.fill_path(&path, &fill), Err(SurfaceError::Unavailable));
        assert!(surface.is_detached());
    }
}
