//! Host capabilities the animator is driven by.
//!
//! The animator never loops or sleeps on its own. It asks the host for the next frame
//! and the host calls [`crate::ParticleAnimator::on_frame`] when that frame is due,
//! which lets a browser refresh callback, a native event loop or a timer thread drive
//! the same animator.

mod frame_loop;
mod local;

pub use frame_loop::*;
pub use local::*;

use serde::{Deserialize, Serialize};

/// Identifies one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameToken(pub u64);

/// Identifies one attached resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerToken(pub u64);

/// Frame scheduling and viewport notifications supplied by the embedding UI.
pub trait AnimationHost {
    /// Ask for one frame callback at the next display refresh.
    fn request_frame(&mut self) -> FrameToken;

    /// Withdraw a requested frame. Cancelling a fired or unknown token is a no-op.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Start delivering viewport resize events to this animator.
    fn attach_resize_listener(&mut self) -> ListenerToken;

    fn detach_resize_listener(&mut self, token: ListenerToken);

    /// Current viewport size as `(width, height)`.
    fn viewport_size(&self) -> (u32, u32);
}
