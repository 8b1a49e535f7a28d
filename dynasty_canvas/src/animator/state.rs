//! Animator state and identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::particle::{Bounds, Particle};

/// Unique identifier for one mounted animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimatorId(pub Uuid);

impl AnimatorId {
    /// Create a new random animator ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnimatorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnimatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of an animator. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimatorPhase {
    #[default]
    Uninitialized,
    Running,
    Stopped,
}

/// Everything a running animator mutates between frames.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimatorState {
    pub particles: Vec<Particle>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub running: bool,
}

impl AnimatorState {
    /// Bounds particles move within.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas_width, self.canvas_height)
    }
}

/// A point-in-time summary of an animator, for logs and debugging overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatorStats {
    pub id: AnimatorId,
    pub phase: AnimatorPhase,
    pub theme_key: Option<String>,
    /// Whether the current population uses the fallback theme.
    pub fallback_theme: bool,
    pub particle_count: usize,
    pub frames_rendered: u64,
    pub canvas_width: u32,
    pub canvas_height: u32,
}
