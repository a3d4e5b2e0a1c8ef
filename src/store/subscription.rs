use std::{cell::Cell, fmt, rc::Rc};

use tracing::trace;

/// Handle to an observer registered with
/// [`ReactiveStore::observe`](super::ReactiveStore::observe).
///
/// Call [`cancel`](Self::cancel) to stop receiving snapshots. Dropping the
/// handle cancels it as well, so a subscription held in a scope is released
/// when the scope ends. Use [`detach`](Self::detach) to keep an observer
/// registered for as long as the store lives.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    id: u64,
    active: Rc<Cell<bool>>,
    release: Cell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    pub(super) fn new(id: u64, active: Rc<Cell<bool>>, release: impl FnOnce() + 'static) -> Self {
        Self {
            id,
            active,
            release: Cell::new(Some(Box::new(release))),
        }
    }

    /// Store-local identifier of this observer.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the observer still receives snapshots.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Deregisters the observer. Calling this more than once is a no-op.
    ///
    /// Safe to call from inside an observer callback: a cancelled observer
    /// is skipped for the rest of an in-progress delivery.
    pub fn cancel(&self) {
        if let Some(release) = self.release.take() {
            self.active.set(false);
            release();
            trace!(observer = self.id, "observer cancelled");
        }
    }

    /// Gives up the handle without cancelling the observer.
    pub fn detach(self) {
        self.release.take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
