//! Particle field configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Upper bound for `max_speed` and `max_size`, in pixels. Keeps every sampled range
/// finite.
pub const MAX_PARTICLE_EXTENT: f64 = 1.0e6;

/// Tunables for spawning and animating particles.
///
/// Loaded from TOML with [`ParticleConfig::from_toml_str`]; missing keys take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles per theme population.
    pub count: usize,

    /// Largest absolute velocity per axis, in pixels per frame.
    pub max_speed: f64,

    pub min_size: f64,
    pub max_size: f64,

    /// Opacity range for freshly spawned particles.
    pub spawn_min_opacity: f64,
    pub spawn_max_opacity: f64,

    /// Opacity is clamped into this range every frame.
    pub min_opacity: f64,
    pub max_opacity: f64,

    /// Width of the per-frame random opacity change, centered on zero.
    pub opacity_drift: f64,

    /// Pull a particle back onto the edge it crossed when it bounces.
    pub clamp_on_bounce: bool,

    /// Seed for reproducible fields. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 0.25,
            min_size: 1.0,
            max_size: 4.0,
            spawn_min_opacity: 0.2,
            spawn_max_opacity: 0.7,
            min_opacity: 0.1,
            max_opacity: 0.7,
            opacity_drift: 0.01,
            clamp_on_bounce: true,
            seed: None,
        }
    }
}

impl ParticleConfig {
    /// Parse and validate a config from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every range is well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.max_speed,
            self.min_size,
            self.max_size,
            self.spawn_min_opacity,
            self.spawn_max_opacity,
            self.min_opacity,
            self.max_opacity,
            self.opacity_drift,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("all numeric values must be finite"));
        }
        if self.max_speed < 0.0 || self.max_speed > MAX_PARTICLE_EXTENT {
            return Err(invalid("max_speed must lie in [0, MAX_PARTICLE_EXTENT]"));
        }
        if self.min_size <= 0.0 || self.min_size > self.max_size {
            return Err(invalid("sizes must satisfy 0 < min_size <= max_size"));
        }
        if self.max_size > MAX_PARTICLE_EXTENT {
            return Err(invalid("max_size must not exceed MAX_PARTICLE_EXTENT"));
        }
        if self.min_opacity < 0.0 || self.min_opacity > self.max_opacity || self.max_opacity > 1.0
        {
            return Err(invalid(
                "opacity must satisfy 0 <= min_opacity <= max_opacity <= 1",
            ));
        }
        if self.spawn_min_opacity < self.min_opacity
            || self.spawn_min_opacity > self.spawn_max_opacity
            || self.spawn_max_opacity > self.max_opacity
        {
            return Err(invalid("spawn opacity range must lie inside the clamp range"));
        }
        if self.opacity_drift < 0.0 {
            return Err(invalid("opacity_drift must not be negative"));
        }
        Ok(())
    }

    /// This config if valid, otherwise the defaults (keeping the seed).
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                warn!(error = %err, "falling back to default particle config");
                Self {
                    seed: self.seed,
                    ..Self::default()
                }
            }
        }
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ParticleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.count, 50);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ParticleConfig::from_toml_str("count = 12\nseed = 7").unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_opacity, 0.7);
    }

    #[test]
    fn test_from_toml_rejects_bad_ranges() {
        let result = ParticleConfig::from_toml_str("min_size = 5.0\nmax_size = 2.0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = ParticleConfig::from_toml_str("spawn_max_opacity = 0.9");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_toml_rejects_huge_extents() {
        let result = ParticleConfig::from_toml_str("max_speed = 1e308");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = ParticleConfig::from_toml_str("max_size = 1.7e308");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let config = ParticleConfig::from_toml_str("max_speed = 1e6\nmax_size = 1e6").unwrap();
        assert_eq!(config.max_speed, MAX_PARTICLE_EXTENT);
    }

    #[test]
    fn test_from_toml_rejects_syntax() {
        let result = ParticleConfig::from_toml_str("count = [");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_validated_or_default_keeps_seed() {
        let config = ParticleConfig {
            max_speed: -1.0,
            seed: Some(3),
            ..Default::default()
        };
        let fixed = config.validated_or_default();
        assert_eq!(fixed.max_speed, 0.25);
        assert_eq!(fixed.seed, Some(3));
    }
}
