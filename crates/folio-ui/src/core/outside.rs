//! Outside-interaction watcher primitives.
//!
//! # Design
//! - The global listener is a guard value; dropping it detaches the listener.
//! - A slot holds at most one guard and only while the panel is open.
//! - The watcher only ever requests closing.

use tracing::debug;

/// Area whose pointer interactions count as "inside".
pub trait Region {
    /// Interaction target type (a DOM node in the browser).
    type Target: ?Sized;

    /// Whether `target` lies within the region.
    fn contains(&self, target: &Self::Target) -> bool;
}

/// Decide the visibility request for a pointer-down.
///
/// Returns `Some(false)` when the panel is open and the target is outside `root`; `None` otherwise.
#[must_use]
pub fn close_request<R: Region + ?Sized>(
    is_open: bool,
    root: &R,
    target: &R::Target,
) -> Option<bool> {
    (is_open && !root.contains(target)).then_some(false)
}

/// Holder for the active listener guard.
#[derive(Debug)]
pub struct ListenerSlot<G> {
    guard: Option<G>,
}

impl<G> Default for ListenerSlot<G> {
    fn default() -> Self {
        Self { guard: None }
    }
}

impl<G> ListenerSlot<G> {
    /// Attach via `attach` when opening, release when closing.
    ///
    /// An already attached guard is kept, so at most one listener exists per slot.
    pub fn sync(&mut self, is_open: bool, attach: impl FnOnce() -> G) {
        if !is_open {
            self.release();
        } else if self.guard.is_none() {
            debug!("outside-interaction listener attached");
            self.guard = Some(attach());
        }
    }

    /// Drop the active guard, if any.
    pub fn release(&mut self) {
        if self.guard.take().is_some() {
            debug!("outside-interaction listener released");
        }
    }

    /// Whether a guard is currently held.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.guard.is_some()
    }
}
