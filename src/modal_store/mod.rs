//! ModalStore - Image Lightbox State
//!
//! ## Responsibilities
//!
//! - open / close / next / prev over an image sequence
//! - Wraparound navigation
//! - Publish `Opened` / `Closed` transitions so page effects (scroll lock)
//!   can be attached from outside
//!
//! The store itself has no side effects beyond notifying observers.

use crate::store::{listen, Observers, Subscription, Writable};
use std::sync::Arc;

/// Lightbox state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub is_open: bool,
    pub images: Vec<String>,
    pub current_index: usize,
}

impl ModalState {
    /// Image shown at `current_index`
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }
}

/// Open/closed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTransition {
    Opened,
    Closed,
}

/// ModalStore instance
#[derive(Clone)]
pub struct ModalStore {
    state: Writable<ModalState>,
    transitions: Arc<Observers<ModalTransition>>,
}

impl ModalStore {
    /// Create a closed, empty modal
    pub fn new() -> Self {
        Self {
            state: Writable::new(ModalState::default()),
            transitions: Arc::new(Observers::new()),
        }
    }

    /// Current state
    pub fn get(&self) -> ModalState {
        self.state.get()
    }

    /// Show `images` starting at `index`.
    ///
    /// An out-of-range index wraps around the sequence; an empty sequence
    /// opens at index 0.
    pub fn open(&self, images: Vec<String>, index: usize) {
        let current_index = if images.is_empty() {
            0
        } else {
            index % images.len()
        };
        tracing::debug!(
            image_count = images.len(),
            requested_index = index,
            current_index,
            "Modal opened"
        );
        self.state.set(ModalState {
            is_open: true,
            images,
            current_index,
        });
        self.transitions.notify(&ModalTransition::Opened);
    }

    /// Close and clear the modal
    pub fn close(&self) {
        tracing::debug!("Modal closed");
        self.state.set(ModalState::default());
        self.transitions.notify(&ModalTransition::Closed);
    }

    /// Advance one image, wrapping to the first. No-op without images.
    pub fn next(&self) {
        self.step(|index, len| (index + 1) % len);
    }

    /// Go back one image, wrapping to the last. No-op without images.
    pub fn prev(&self) {
        self.step(|index, len| (index + len - 1) % len);
    }

    fn step(&self, advance: impl FnOnce(usize, usize) -> usize) {
        if self.state.get().images.is_empty() {
            return;
        }
        self.state.update(|state| {
            let len = state.images.len();
            if len == 0 {
                return state.clone();
            }
            ModalState {
                is_open: state.is_open,
                images: state.images.clone(),
                current_index: advance(state.current_index % len, len),
            }
        });
    }

    /// Observe state changes; called immediately with the current state.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&ModalState) + Send + Sync + 'static,
    {
        self.state.subscribe(observer)
    }

    /// Observe open/close transitions
    pub fn on_transition<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&ModalTransition) + Send + Sync + 'static,
    {
        listen(&self.transitions, observer)
    }
}

impl Default for ModalStore {
    fn default() -> Self {
        Self::new()
    }
}
