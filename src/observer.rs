// SPDX-License-Identifier: MPL-2.0
//! Weakly-held subscribers refreshed on every language change.
//!
//! # Design
//!
//! [`ObserverHub`] stores, for every subscription, a [`Weak`] handle to the
//! subscriber together with its callback. Subscribers stay owned by the host:
//! the hub never upgrades a handle outside of the callback invocation, so
//! dropping the last `Rc` removes the subscriber from all future broadcasts.
//! Dead entries are pruned during [`ObserverHub::broadcast`].
//!
//! # Failure Modes
//!
//! - **Re-entrant add**: adding a subscription from inside a callback is
//!   allowed. The new subscription gets its immediate invocation but is not
//!   part of the broadcast that is already running.
//! - **Self-capturing callback**: a callback that captures a strong `Rc` of
//!   its own subscriber keeps it alive for the lifetime of the hub.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Anything that can re-render its own text in the current language.
pub trait Localizable {
    /// Refreshes displayed strings. Called once on registration and again on
    /// every language change.
    fn localize(&self);
}

/// Identifier of one subscription, unique within its hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

trait Subscription {
    fn is_alive(&self) -> bool;

    /// Runs the callback if the subscriber still exists.
    fn notify(&self) -> bool;
}

struct WeakSubscription<T: ?Sized, F> {
    target: Weak<T>,
    callback: F,
}

impl<T: ?Sized, F: Fn(&T)> Subscription for WeakSubscription<T, F> {
    fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    fn notify(&self) -> bool {
        match self.target.upgrade() {
            Some(target) => {
                (self.callback)(&target);
                true
            }
            None => false,
        }
    }
}

struct Entry {
    id: SubscriptionId,
    subscription: Rc<dyn Subscription>,
}

/// Registry of weakly-held subscribers, notified in registration order.
#[derive(Default)]
pub struct ObserverHub {
    entries: RefCell<Vec<Entry>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for ObserverHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHub")
            .field("subscriptions", &self.len())
            .field("live", &self.live_count())
            .finish()
    }
}

impl ObserverHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `subscriber` and invokes it once right away.
    ///
    /// Only a weak handle to `subscriber` is kept. Adding the same subscriber
    /// twice creates two independent subscriptions.
    pub fn add<T, F>(&self, subscriber: &Rc<T>, callback: F) -> SubscriptionId
    where
        T: ?Sized + 'static,
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let subscription: Rc<dyn Subscription> = Rc::new(WeakSubscription {
            target: Rc::downgrade(subscriber),
            callback,
        });
        {
            let mut entries = self.entries.borrow_mut();
            // Subscribers come and go far more often than the language changes.
            entries.retain(|entry| entry.subscription.is_alive());
            entries.push(Entry {
                id,
                subscription: Rc::clone(&subscription),
            });
        }

        subscription.notify();
        id
    }

    /// Registers a [`Localizable`] whose `localize` is the callback.
    pub fn add_localizable<T>(&self, subscriber: &Rc<T>) -> SubscriptionId
    where
        T: Localizable + ?Sized + 'static,
    {
        self.add(subscriber, |localizable: &T| localizable.localize())
    }

    /// Invokes every live subscription in registration order.
    ///
    /// Subscriptions whose subscriber has been dropped are skipped and
    /// removed. Returns the number of callbacks that ran.
    pub fn broadcast(&self) -> usize {
        // Snapshot so callbacks may add subscriptions without a borrow conflict.
        let snapshot: Vec<Rc<dyn Subscription>> = self
            .entries
            .borrow()
            .iter()
            .map(|entry| Rc::clone(&entry.subscription))
            .collect();

        let mut notified = 0;
        let mut skipped = 0;
        for subscription in &snapshot {
            if subscription.notify() {
                notified += 1;
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            self.prune();
        }

        debug!(notified, skipped, "broadcast complete");
        notified
    }

    /// Drops subscriptions whose subscriber no longer exists.
    ///
    /// Returns the number of subscriptions removed.
    pub fn prune(&self) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|entry| entry.subscription.is_alive());
        before - entries.len()
    }

    /// Number of recorded subscriptions, including any that died since the
    /// last `add`, `broadcast` or `prune`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Number of subscriptions whose subscriber is still alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.subscription.is_alive())
            .count()
    }

    /// Whether the subscription with `id` is recorded and its subscriber alive.
    #[must_use]
    pub fn is_live(&self, id: SubscriptionId) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|entry| entry.id == id && entry.subscription.is_alive())
    }
}
