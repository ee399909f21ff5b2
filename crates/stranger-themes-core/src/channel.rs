//! Typed broadcast channel.
//!
//! A [`Channel<T>`] delivers every published value to all of its current
//! subscribers without either side knowing the other. It is an explicit,
//! constructed object: create one per topic and hand clones of it to whoever
//! needs to publish or subscribe.
//!
//! # Key Types
//!
//! - [`Channel<T>`] - The bus itself; cheap to clone
//! - [`SubscriberId`] - Opaque identity of a subscriber, used for removal
//! - [`SubscriptionKey`] - Identifies one registration in the registry
//! - [`Subscription`] - RAII guard that unsubscribes when dropped
//!
//! # Delivery
//!
//! [`Channel::publish`] never calls a subscriber itself. It snapshots the
//! registry and posts a single delivery task onto the [`EventLoop`], which
//! runs the callbacks in subscription order on its next turn. A subscriber
//! removed before that turn is skipped.
//!
//! Every callback runs under `catch_unwind`. A panic in one subscriber is
//! logged and does not stop delivery to the rest; once the snapshot has been
//! delivered the channel's [`FailurePolicy`] decides whether to re-raise.
//!
//! # Example
//!
//! ```
//! use stranger_themes_core::{Channel, EventLoop, FailurePolicy, SubscriberId};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! let event_loop = EventLoop::new();
//! let channel = Channel::<i32>::new(event_loop.handle(), FailurePolicy::Degrade);
//! let total = Arc::new(AtomicI32::new(0));
//!
//! let sink = total.clone();
//! let owner = SubscriberId::next();
//! channel
//!     .subscribe(owner, move |&n| {
//!         sink.fetch_add(n, Ordering::SeqCst);
//!     })
//!     .unwrap();
//!
//! channel.publish(42);
//! assert_eq!(total.load(Ordering::SeqCst), 0); // not yet delivered
//!
//! event_loop.run_until_idle().unwrap();
//! assert_eq!(total.load(Ordering::SeqCst), 42);
//!
//! channel.unsubscribe(owner);
//! ```
//!
//! [`EventLoop`]: crate::EventLoop

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{CoreError, Result};
use crate::event_loop::LoopHandle;
use crate::logging::targets;
use crate::policy::FailurePolicy;

new_key_type! {
    /// Identifies a single registration on a [`Channel`].
    pub struct SubscriptionKey;
}

/// Opaque identity of a subscriber.
///
/// A subscriber holds at most one registration per channel; removal by
/// identity drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

impl SubscriberId {
    /// Allocate a fresh, process-unique identity.
    pub fn next() -> Self {
        Self(NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value of this identity.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Internal storage for a single registration.
struct Entry<T> {
    owner: SubscriberId,
    /// Position in subscription order. Slot keys are reused, so the key alone
    /// does not give a stable order.
    sequence: u64,
    callback: Callback<T>,
}

struct Registry<T> {
    entries: SlotMap<SubscriptionKey, Entry<T>>,
    next_sequence: u64,
}

impl<T> Registry<T> {
    fn snapshot(&self) -> Vec<(SubscriptionKey, Callback<T>)> {
        let mut ordered: Vec<_> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.sequence, key, entry.callback.clone()))
            .collect();
        ordered.sort_unstable_by_key(|(sequence, _, _)| *sequence);
        ordered
            .into_iter()
            .map(|(_, key, callback)| (key, callback))
            .collect()
    }
}

struct Shared<T> {
    registry: Mutex<Registry<T>>,
    event_loop: LoopHandle,
    policy: FailurePolicy,
}

impl<T> Shared<T> {
    fn is_registered(&self, key: SubscriptionKey) -> bool {
        self.registry.lock().entries.contains_key(key)
    }

    fn remove(&self, key: SubscriptionKey) -> bool {
        self.registry.lock().entries.remove(key).is_some()
    }
}

/// A typed publish/subscribe bus.
///
/// # Type Parameter
///
/// - `T`: The payload delivered to subscribers. Each subscriber receives a
///   shared reference to the one value passed to [`publish`](Self::publish).
pub struct Channel<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Send + Sync + 'static> Channel<T> {
    /// Create a channel that delivers on `event_loop`.
    pub fn new(event_loop: LoopHandle, policy: FailurePolicy) -> Self {
        Self {
            shared: Arc::new(Shared {
                registry: Mutex::new(Registry {
                    entries: SlotMap::with_key(),
                    next_sequence: 0,
                }),
                event_loop,
                policy,
            }),
        }
    }

    /// The failure policy applied during delivery.
    pub fn policy(&self) -> FailurePolicy {
        self.shared.policy
    }

    /// Register `callback` to receive every value published from now on.
    ///
    /// Past values are not replayed. Fails with
    /// [`CoreError::AlreadySubscribed`] when `owner` already holds a
    /// registration on this channel.
    pub fn subscribe<F>(&self, owner: SubscriberId, callback: F) -> Result<SubscriptionKey>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut registry = self.shared.registry.lock();
        if registry.entries.values().any(|entry| entry.owner == owner) {
            tracing::warn!(target: targets::CHANNEL, owner = owner.as_u64(), "duplicate subscription rejected");
            return Err(CoreError::AlreadySubscribed { owner });
        }

        let sequence = registry.next_sequence;
        registry.next_sequence += 1;
        let key = registry.entries.insert(Entry {
            owner,
            sequence,
            callback: Arc::new(callback),
        });
        tracing::debug!(
            target: targets::CHANNEL,
            owner = owner.as_u64(),
            subscribers = registry.entries.len(),
            "subscribed"
        );
        Ok(key)
    }

    /// Like [`subscribe`](Self::subscribe), but the registration is removed
    /// when the returned guard is dropped.
    pub fn subscribe_scoped<F>(&self, owner: SubscriberId, callback: F) -> Result<Subscription<T>>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let key = self.subscribe(owner, callback)?;
        Ok(Subscription {
            shared: Arc::downgrade(&self.shared),
            key,
            owner,
        })
    }

    /// Remove every registration held by `owner`.
    ///
    /// Returns how many were removed; `0` when `owner` was not subscribed.
    pub fn unsubscribe(&self, owner: SubscriberId) -> usize {
        let mut registry = self.shared.registry.lock();
        let before = registry.entries.len();
        registry.entries.retain(|_, entry| entry.owner != owner);
        let removed = before - registry.entries.len();
        if removed > 0 {
            tracing::debug!(
                target: targets::CHANNEL,
                owner = owner.as_u64(),
                subscribers = registry.entries.len(),
                "unsubscribed"
            );
        }
        removed
    }

    /// Remove a single registration by key.
    pub fn remove(&self, key: SubscriptionKey) -> bool {
        self.shared.remove(key)
    }

    /// Whether `owner` currently holds a registration.
    pub fn is_subscribed(&self, owner: SubscriberId) -> bool {
        self.shared
            .registry
            .lock()
            .entries
            .values()
            .any(|entry| entry.owner == owner)
    }

    /// Number of current registrations.
    pub fn subscriber_count(&self) -> usize {
        self.shared.registry.lock().entries.len()
    }

    /// Schedule delivery of `value` to every current subscriber.
    ///
    /// Returns the number of subscribers captured in the snapshot. With no
    /// subscribers this is a silent no-op and nothing is posted.
    #[tracing::instrument(skip_all, target = "stranger_themes_core::channel", level = "trace")]
    pub fn publish(&self, value: T) -> usize {
        let snapshot = self.shared.registry.lock().snapshot();
        let count = snapshot.len();
        if count == 0 {
            tracing::trace!(target: targets::CHANNEL, "no subscribers, dropping value");
            return 0;
        }

        tracing::trace!(target: targets::CHANNEL, subscribers = count, "scheduling delivery");
        let shared = Arc::downgrade(&self.shared);
        self.shared.event_loop.post(move || deliver(&shared, snapshot, &value));
        count
    }
}

fn deliver<T>(shared: &Weak<Shared<T>>, snapshot: Vec<(SubscriptionKey, Callback<T>)>, value: &T) {
    let Some(shared) = shared.upgrade() else {
        tracing::trace!(target: targets::CHANNEL, "channel dropped before delivery");
        return;
    };

    let mut failures = 0usize;
    for (key, callback) in snapshot {
        if !shared.is_registered(key) {
            tracing::trace!(target: targets::CHANNEL, "subscriber removed before delivery, skipping");
            continue;
        }
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| callback(value))) {
            failures += 1;
            tracing::error!(
                target: targets::CHANNEL,
                panic = panic_message(payload.as_ref()),
                "subscriber panicked during delivery"
            );
        }
    }

    if failures > 0 {
        shared
            .policy
            .violation(&format!("{failures} subscriber(s) panicked during delivery"));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

/// A registration that is removed when dropped.
///
/// Holds only a weak reference to the channel, so it never keeps the channel
/// alive and is harmless if the channel is gone first.
pub struct Subscription<T> {
    shared: Weak<Shared<T>>,
    key: SubscriptionKey,
    owner: SubscriberId,
}

impl<T> Subscription<T> {
    /// The registration this guard owns.
    pub fn key(&self) -> SubscriptionKey {
        self.key
    }

    /// The subscriber identity this guard was created for.
    pub fn owner(&self) -> SubscriberId {
        self.owner
    }

    /// Whether the registration is still present on a live channel.
    pub fn is_active(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.is_registered(self.key))
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            if shared.remove(self.key) {
                tracing::debug!(target: targets::CHANNEL, owner = self.owner.as_u64(), "subscription dropped");
            }
        }
    }
}

impl<T> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("owner", &self.owner)
            .finish()
    }
}

static_assertions::assert_impl_all!(Channel<i32>: Send, Sync);
static_assertions::assert_impl_all!(Subscription<i32>: Send, Sync);
