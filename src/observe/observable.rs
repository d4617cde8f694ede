//! Synchronous observer list with flag-carrying notifications.
//!
//! Observers are closures stored in a slotmap arena and invoked in
//! subscription order. Dispatch is immediate and blocking: `notify` returns
//! after every observer has run.

use std::cell::RefCell;
use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::meta::ChangeFlags;

new_key_type! {
    /// Handle returned by [`Observable::subscribe`].
    pub struct ObserverId;
}

type Callback<P> = Box<dyn FnMut(ChangeFlags, Option<&P>)>;

struct Slot<P> {
    /// Taken out while the callback runs so the arena is not borrowed across
    /// user code.
    callback: Option<Callback<P>>,
}

struct Registry<P> {
    slots: SlotMap<ObserverId, Slot<P>>,
    order: Vec<ObserverId>,
}

/// A list of observers notified with [`ChangeFlags`] and an optional payload.
///
/// `P` is the payload type handed to callbacks, usually the object that
/// changed. Callbacks may subscribe or unsubscribe observers while a
/// notification is in flight; observers added during dispatch are first
/// called on the next notification.
pub struct Observable<P> {
    inner: RefCell<Registry<P>>,
}

impl<P> Observable<P> {
    /// Create an observable with no observers.
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Registry {
                slots: SlotMap::with_key(),
                order: Vec::new(),
            }),
        }
    }

    /// Register an observer. Returns a handle for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, callback: impl FnMut(ChangeFlags, Option<&P>) + 'static) -> ObserverId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.slots.insert(Slot {
            callback: Some(Box::new(callback)),
        });
        inner.order.push(id);
        id
    }

    /// Remove an observer. Returns `false` if the handle was not registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.slots.remove(id).is_none() {
            return false;
        }
        inner.order.retain(|other| *other != id);
        true
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.inner.borrow().order.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every observer with `flags` and `payload`, in subscription order.
    pub fn notify(&self, flags: ChangeFlags, payload: Option<&P>) {
        let order = self.inner.borrow().order.clone();
        tracing::trace!(%flags, observers = order.len(), "notify");

        for id in order {
            let callback = {
                let mut inner = self.inner.borrow_mut();
                inner.slots.get_mut(id).and_then(|slot| slot.callback.take())
            };
            let Some(mut callback) = callback else {
                // Unsubscribed earlier in this dispatch, or re-entrant notify.
                continue;
            };
            callback(flags, payload);

            let mut inner = self.inner.borrow_mut();
            if let Some(slot) = inner.slots.get_mut(id) {
                slot.callback = Some(callback);
            }
        }
    }
}

impl<P> Default for Observable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Observable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("observers", &self.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
