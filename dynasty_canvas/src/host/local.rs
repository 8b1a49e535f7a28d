//! A single-threaded host with an explicit frame queue.

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use super::{AnimationHost, FrameToken, ListenerToken};

#[derive(Debug, Default)]
struct LocalHostState {
    next_id: u64,
    pending: VecDeque<FrameToken>,
    listeners: BTreeSet<ListenerToken>,
    viewport: (u32, u32),
    cancelled: usize,
}

/// A host whose frames fire only when the owner drains them.
///
/// Clones share state: the animator owns one handle while the driver keeps another
/// to fire frames and inspect listeners.
#[derive(Debug, Clone, Default)]
pub struct LocalHost {
    state: Rc<RefCell<LocalHostState>>,
}

impl LocalHost {
    /// Create a host with the given viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(LocalHostState {
                viewport: (width, height),
                ..Default::default()
            })),
        }
    }

    /// Remove and return every frame requested so far, oldest first.
    pub fn take_pending_frames(&self) -> Vec<FrameToken> {
        self.state.borrow_mut().pending.drain(..).collect()
    }

    pub fn pending_frame_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Number of frames withdrawn through `cancel_frame`.
    pub fn cancelled_frame_count(&self) -> usize {
        self.state.borrow().cancelled
    }

    /// Change the viewport size. Returns whether any resize listener is attached,
    /// i.e. whether the owner should forward the new size to its animator.
    pub fn set_viewport(&self, width: u32, height: u32) -> bool {
        let mut state = self.state.borrow_mut();
        state.viewport = (width, height);
        !state.listeners.is_empty()
    }

    fn next_id(state: &mut LocalHostState) -> u64 {
        state.next_id += 1;
        state.next_id
    }
}

impl AnimationHost for LocalHost {
    fn request_frame(&mut self) -> FrameToken {
        let mut state = self.state.borrow_mut();
        let token = FrameToken(Self::next_id(&mut state));
        state.pending.push_back(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        let mut state = self.state.borrow_mut();
        let before = state.pending.len();
        state.pending.retain(|t| *t != token);
        if state.pending.len() < before {
            state.cancelled += 1;
        }
    }

    fn attach_resize_listener(&mut self) -> ListenerToken {
        let mut state = self.state.borrow_mut();
        let token = ListenerToken(Self::next_id(&mut state));
        state.listeners.insert(token);
        token
    }

    fn detach_resize_listener(&mut self, token: ListenerToken) {
        self.state.borrow_mut().listeners.remove(&token);
    }

    fn viewport_size(&self) -> (u32, u32) {
        self.state.borrow().viewport
    }
}
