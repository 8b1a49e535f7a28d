//! A fixed-interval driver for hosts without a display refresh callback.

use rand::Rng;
use std::thread;
use std::time::Duration;

use super::LocalHost;
use crate::animator::ParticleAnimator;
use crate::surface::DrawSurface;

/// Fires the frames a [`LocalHost`] has queued, sleeping a fixed interval between
/// batches.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    host: LocalHost,
    interval: Duration,
}

impl FrameLoop {
    /// Create a loop over `host`. A zero interval runs frames back to back.
    pub fn new(host: LocalHost, interval: Duration) -> Self {
        Self { host, interval }
    }

    /// Create a loop ticking `fps` times per second.
    pub fn at_fps(host: LocalHost, fps: u32) -> Self {
        Self::new(host, Duration::from_secs(1) / fps.max(1))
    }

    pub fn host(&self) -> &LocalHost {
        &self.host
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deliver up to `frames` frame callbacks.
    ///
    /// Returns early once nothing is pending, which happens when the animator has
    /// stopped. Returns the number of callbacks delivered.
    pub fn run<S, R>(&self, animator: &mut ParticleAnimator<S, LocalHost, R>, frames: u64) -> u64
    where
        S: DrawSurface,
        R: Rng,
    {
        let mut delivered = 0;
        while delivered < frames {
            let due = self.host.take_pending_frames();
            if due.is_empty() {
                break;
            }
            for token in due {
                animator.on_frame(token);
                delivered += 1;
            }
            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }
        }
        delivered
    }

    /// Change the viewport, forwarding the size to the animator if it listens.
    pub fn resize_viewport<S, R>(
        &self,
        animator: &mut ParticleAnimator<S, LocalHost, R>,
        width: u32,
        height: u32,
    ) where
        S: DrawSurface,
        R: Rng,
    {
        if self.host.set_viewport(width, height) {
            animator.resize(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParticleConfig;
    use crate::surface::RecordingSurface;
    use dynasty_rules::ThemeRegistry;
    use std::sync::Arc;

    #[test]
    fn test_run_delivers_requested_frames() {
        let host = LocalHost::new(120, 80);
        let frame_loop = FrameLoop::new(host.clone(), Duration::ZERO);
        let surface = RecordingSurface::new(120, 80);
        let mut animator = ParticleAnimator::new(
            Arc::new(ThemeRegistry::builtin()),
            ParticleConfig::default().with_seed(1),
        );
        animator.start(surface.clone(), host, "tang");

        assert_eq!(frame_loop.run(&mut animator, 10), 10);
        assert_eq!(surface.clear_count(), 10);
    }

    #[test]
    fn test_run_ends_when_animator_stops() {
        let host = LocalHost::new(120, 80);
        let frame_loop = FrameLoop::new(host.clone(), Duration::ZERO);
        let mut animator = ParticleAnimator::new(
            Arc::new(ThemeRegistry::builtin()),
            ParticleConfig::default().with_seed(1),
        );
        animator.start(RecordingSurface::new(120, 80), host, "qin");
        animator.stop();

        assert_eq!(frame_loop.run(&mut animator, 10), 0);
    }

    #[test]
    fn test_resize_viewport_forwards() {
        let host = LocalHost::new(120, 80);
        let frame_loop = FrameLoop::at_fps(host.clone(), 60);
        let mut animator = ParticleAnimator::new(
            Arc::new(ThemeRegistry::builtin()),
            ParticleConfig::default().with_seed(1),
        );
        animator.start(RecordingSurface::new(120, 80), host, "qin");

        frame_loop.resize_viewport(&mut animator, 400, 300);
        assert_eq!(animator.state().canvas_width, 400);
        assert_eq!(animator.state().canvas_height, 300);
    }
}
