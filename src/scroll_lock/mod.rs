//! ScrollLock - Page Overflow Effect
//!
//! Locks page scrolling while the lightbox is open. The effect lives outside
//! `ModalStore` and is wired to its transitions with `attach`.

use crate::modal_store::{ModalStore, ModalTransition};
use crate::store::Subscription;
use std::sync::{Arc, Mutex};

/// Page overflow style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// No inline style; the page scrolls normally
    #[default]
    Unset,
    /// `overflow: hidden`
    Hidden,
}

/// Target of the scroll lock (the document body in a browser)
pub trait PageOverflow: Send + Sync {
    fn set_overflow(&self, overflow: Overflow);
}

/// In-memory body style
#[derive(Debug, Default)]
pub struct BodyStyle {
    overflow: Mutex<Overflow>,
}

impl BodyStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overflow(&self) -> Overflow {
        *self.overflow.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PageOverflow for BodyStyle {
    fn set_overflow(&self, overflow: Overflow) {
        *self.overflow.lock().unwrap_or_else(|e| e.into_inner()) = overflow;
    }
}

/// Hide page overflow on `Opened`, restore it on `Closed`
pub fn attach(modal: &ModalStore, page: Arc<dyn PageOverflow>) -> Subscription {
    modal.on_transition(move |transition| {
        let overflow = match transition {
            ModalTransition::Opened => Overflow::Hidden,
            ModalTransition::Closed => Overflow::Unset,
        };
        tracing::trace!(?overflow, "Page overflow updated");
        page.set_overflow(overflow);
    })
}
