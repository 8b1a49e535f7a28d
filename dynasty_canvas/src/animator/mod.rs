//! Particle Field Animator - the per-view animation state machine.
//!
//! The lifecycle of one animator:
//! 1. **Uninitialized**: constructed with a theme registry and config
//! 2. **Running**: `start` sized the surface, spawned the population and requested
//!    the first frame; every `on_frame` steps and draws all particles then requests
//!    the next frame
//! 3. **Theme switch / resize**: handled while running, the loop never restarts
//! 4. **Stopped**: `stop` (or drop, or a surface failure) cancels the pending frame
//!    and detaches the resize listener; nothing is drawn afterwards

mod state;

pub use state::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, warn};

use dynasty_rules::ThemeRegistry;

use crate::config::ParticleConfig;
use crate::error::SurfaceError;
use crate::host::{AnimationHost, FrameToken, ListenerToken};
use crate::particle::{spawn_particle, Particle};
use crate::surface::{DrawSurface, Fill};

/// Animates a themed particle field on a surface.
///
/// None of the public methods return errors. Unknown theme keys fall back to the
/// registry's fallback theme and surface failures stop the animator.
pub struct ParticleAnimator<S, H, R = StdRng>
where
    S: DrawSurface,
    H: AnimationHost,
    R: Rng,
{
    id: AnimatorId,
    registry: Arc<ThemeRegistry>,
    config: ParticleConfig,
    rng: R,
    phase: AnimatorPhase,
    state: AnimatorState,
    theme_key: Option<String>,
    fallback_theme: bool,
    surface: Option<S>,
    host: Option<H>,
    pending_frame: Option<FrameToken>,
    resize_listener: Option<ListenerToken>,
    frames_rendered: u64,
}

impl<S, H> ParticleAnimator<S, H, StdRng>
where
    S: DrawSurface,
    H: AnimationHost,
{
    /// Create an animator seeded from `config.seed`, or from the OS when unset.
    pub fn new(registry: Arc<ThemeRegistry>, config: ParticleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(registry, config, rng)
    }
}

impl<S, H, R> ParticleAnimator<S, H, R>
where
    S: DrawSurface,
    H: AnimationHost,
    R: Rng,
{
    /// Create an animator with an explicit random source.
    ///
    /// An invalid config is replaced by the defaults.
    pub fn with_rng(registry: Arc<ThemeRegistry>, config: ParticleConfig, rng: R) -> Self {
        Self {
            id: AnimatorId::new(),
            registry,
            config: config.validated_or_default(),
            rng,
            phase: AnimatorPhase::Uninitialized,
            state: AnimatorState::default(),
            theme_key: None,
            fallback_theme: false,
            surface: None,
            host: None,
            pending_frame: None,
            resize_listener: None,
            frames_rendered: 0,
        }
    }

    pub fn id(&self) -> AnimatorId {
        self.id
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == AnimatorPhase::Running && self.state.running
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.state.particles
    }

    /// Key of the current population's theme, as requested by the host.
    pub fn theme_key(&self) -> Option<&str> {
        self.theme_key.as_deref()
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Summary for logging.
    pub fn stats(&self) -> AnimatorStats {
        AnimatorStats {
            id: self.id,
            phase: self.phase,
            theme_key: self.theme_key.clone(),
            fallback_theme: self.fallback_theme,
            particle_count: self.state.particles.len(),
            frames_rendered: self.frames_rendered,
            canvas_width: self.state.canvas_width,
            canvas_height: self.state.canvas_height,
        }
    }

    /// Mount onto a surface and begin animating.
    ///
    /// Only valid once per animator; a remount needs a fresh animator. If the surface
    /// fails while mounting, the animator goes straight to `Stopped` with nothing left
    /// scheduled or attached.
    pub fn start(&mut self, surface: S, host: H, initial_theme: &str) {
        if self.phase != AnimatorPhase::Uninitialized {
            warn!(animator = %self.id, phase = ?self.phase, "start ignored, animator already mounted");
            return;
        }

        self.surface = Some(surface);
        self.host = Some(host);

        if let Err(err) = self.mount(initial_theme) {
            warn!(animator = %self.id, error = %err, "mount failed, stopping animator");
            self.stop();
        }
    }

    /// Replace the whole population with particles of another theme.
    pub fn set_theme(&mut self, theme_key: &str) {
        if self.phase != AnimatorPhase::Running {
            debug!(animator = %self.id, theme = theme_key, "set_theme ignored, animator not running");
            return;
        }
        if self.theme_key.as_deref() == Some(theme_key) {
            return;
        }
        self.repopulate(theme_key);
    }

    /// Track a new viewport size. Particles already in flight keep their positions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.phase != AnimatorPhase::Running {
            return;
        }

        self.state.canvas_width = width;
        self.state.canvas_height = height;

        let result = match self.surface.as_mut() {
            Some(surface) => surface.resize(width, height),
            None => Err(SurfaceError::Unavailable),
        };
        match result {
            Ok(()) => debug!(animator = %self.id, width, height, "surface resized"),
            Err(err) => {
                warn!(animator = %self.id, error = %err, "resize failed, stopping animator");
                self.stop();
            }
        }
    }

    /// Frame callback. Steps and draws every particle, then schedules the next frame.
    ///
    /// Tokens other than the one most recently requested are ignored, as is every
    /// call once the animator has stopped.
    pub fn on_frame(&mut self, token: FrameToken) {
        if !self.is_running() {
            return;
        }
        if self.pending_frame != Some(token) {
            debug!(animator = %self.id, token = token.0, "ignoring stale frame");
            return;
        }
        self.pending_frame = None;

        match self.render_frame() {
            Ok(()) => {
                self.frames_rendered += 1;
                self.request_next_frame();
            }
            Err(err) => {
                warn!(animator = %self.id, error = %err, "frame failed, stopping animator");
                self.stop();
            }
        }
    }

    /// Cancel the pending frame, detach from the viewport and drop the population.
    ///
    /// Calling it again does nothing.
    pub fn stop(&mut self) {
        if self.phase == AnimatorPhase::Stopped {
            return;
        }

        if let Some(mut host) = self.host.take() {
            if let Some(token) = self.pending_frame.take() {
                host.cancel_frame(token);
            }
            if let Some(listener) = self.resize_listener.take() {
                host.detach_resize_listener(listener);
            }
        }
        self.pending_frame = None;
        self.resize_listener = None;

        self.state.running = false;
        self.state.particles.clear();
        self.phase = AnimatorPhase::Stopped;

        info!(animator = %self.id, frames = self.frames_rendered, "animator stopped");
    }

    /// Stop and hand back the surface.
    pub fn into_surface(mut self) -> Option<S> {
        self.stop();
        self.surface.take()
    }

    fn mount(&mut self, initial_theme: &str) -> Result<(), SurfaceError> {
        let (Some(surface), Some(host)) = (self.surface.as_mut(), self.host.as_mut()) else {
            return Err(SurfaceError::Unavailable);
        };

        self.resize_listener = Some(host.attach_resize_listener());
        let (width, height) = host.viewport_size();
        surface.resize(width, height)?;

        self.state.canvas_width = width;
        self.state.canvas_height = height;
        self.repopulate(initial_theme);

        self.state.running = true;
        self.phase = AnimatorPhase::Running;
        self.request_next_frame();

        info!(
            animator = %self.id,
            width,
            height,
            particles = self.state.particles.len(),
            "animator started"
        );
        Ok(())
    }

    fn repopulate(&mut self, theme_key: &str) {
        let registry = Arc::clone(&self.registry);
        let (theme, fallback) = registry.resolve_or_fallback(theme_key);
        let bounds = self.state.bounds();

        let mut particles = Vec::with_capacity(self.config.count);
        for _ in 0..self.config.count {
            particles.push(spawn_particle(bounds, theme, &self.config, &mut self.rng));
        }
        self.state.particles = particles;
        self.theme_key = Some(theme_key.to_string());
        self.fallback_theme = fallback;

        debug!(
            animator = %self.id,
            theme = theme_key,
            fallback,
            shape = ?theme.shape(),
            "particle population replaced"
        );
    }

    fn render_frame(&mut self) -> Result<(), SurfaceError> {
        let surface = self.surface.as_mut().ok_or(SurfaceError::Unavailable)?;
        surface.clear()?;

        let bounds = self.state.bounds();
        for particle in &mut self.state.particles {
            particle.step(bounds, &self.config, &mut self.rng);
            let fill = Fill {
                color: &particle.color,
                opacity: particle.opacity,
            };
            surface.fill_path(&particle.path(), &fill)?;
        }
        Ok(())
    }

    fn request_next_frame(&mut self) {
        if let Some(host) = self.host.as_mut() {
            self.pending_frame = Some(host.request_frame());
        }
    }
}

impl<S, H, R> Drop for ParticleAnimator<S, H, R>
where
    S: DrawSurface,
    H: AnimationHost,
    R: Rng,
{
    fn drop(&mut self) {
        self.stop();
    }
}
