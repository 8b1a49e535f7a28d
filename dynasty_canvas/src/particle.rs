//! A single decorative particle: spawning and per-frame motion.

use rand::Rng;
use serde::{Deserialize, Serialize};

use dynasty_rules::{ShapeKind, ThemeConfig};

use crate::config::ParticleConfig;
use crate::shapes::{shape_path, ShapePath};

/// The rectangle particles move inside, `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Bounds of a canvas of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Check if a point lies inside (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// A moving, pulsing shape in the background field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Always positive.
    pub size: f64,
    pub opacity: f64,
    pub shape: ShapeKind,
    pub color: String,
}

/// Create a particle at a uniformly random spot inside `bounds`.
pub fn spawn_particle<R: Rng>(
    bounds: Bounds,
    theme: &ThemeConfig,
    config: &ParticleConfig,
    rng: &mut R,
) -> Particle {
    let color_index = rng.random_range(0..theme.palette().len());
    Particle {
        x: rng.random_range(0.0..=bounds.width),
        y: rng.random_range(0.0..=bounds.height),
        vx: rng.random_range(-config.max_speed..=config.max_speed),
        vy: rng.random_range(-config.max_speed..=config.max_speed),
        size: rng.random_range(config.min_size..=config.max_size),
        opacity: rng.random_range(config.spawn_min_opacity..=config.spawn_max_opacity),
        shape: theme.shape(),
        color: theme.color(color_index).to_string(),
    }
}

impl Particle {
    /// Advance one frame.
    ///
    /// Moves by the velocity, reflects the velocity on any axis that left
    /// `[0, bound]`, then nudges the opacity and clamps it into the visible range.
    pub fn step<R: Rng>(&mut self, bounds: Bounds, config: &ParticleConfig, rng: &mut R) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > bounds.width {
            self.vx = -self.vx;
            if config.clamp_on_bounce {
                self.x = self.x.clamp(0.0, bounds.width);
            }
        }
        if self.y < 0.0 || self.y > bounds.height {
            self.vy = -self.vy;
            if config.clamp_on_bounce {
                self.y = self.y.clamp(0.0, bounds.height);
            }
        }

        let drift = (rng.random::<f64>() - 0.5) * config.opacity_drift;
        self.opacity = (self.opacity + drift).clamp(config.min_opacity, config.max_opacity);
    }

    /// The outline to fill for this frame.
    pub fn path(&self) -> ShapePath {
        shape_path(self.shape, self.x, self.y, self.size)
    }
}
