//! # Dynasty Canvas
//!
//! The decorative particle field drawn behind the dynasty timeline. The field keeps
//! animating while the user browses, and switches palette and particle shape whenever
//! the selected or hovered era changes.
//!
//! ## Core Components
//!
//! - **animator**: The per-view state machine (start, theme switch, resize, stop)
//! - **particle**: Spawning and per-frame motion of a single particle
//! - **shapes**: Star, cloud and petal outlines as drawable paths
//! - **surface**: The drawing surface abstraction plus recording and SVG surfaces
//! - **host**: Frame scheduling and viewport events injected by the embedding UI
//!
//! The animator never returns errors to its host. Unknown themes fall back to a
//! default palette and a failing surface stops the animator cleanly.

pub mod animator;
pub mod config;
pub mod error;
pub mod host;
pub mod particle;
pub mod shapes;
pub mod surface;

pub use animator::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use particle::*;
pub use shapes::*;
pub use surface::*;
