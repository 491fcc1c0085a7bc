//! Current-value broadcast of a store's collection
//!
//! Every mutating store operation republishes the whole collection through a
//! [`SnapshotBus`]. It is built on `tokio::sync::watch`, so it is a single
//! current value rather than an event log: a subscriber that joins late sees the
//! latest snapshot immediately and never replays older ones.
//!
//! ```text
//! add / update / delete ──▶ SnapshotBus::publish() ──▶ watch channel ──▶ list screen
//!                                                                    ──▶ stats header
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let bus = SnapshotBus::new(seed);
//! let mut rx = bus.subscribe();
//!
//! bus.publish(updated_collection);
//!
//! rx.changed().await?;
//! println!("{} coupons", rx.borrow().len());
//! ```

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// An immutable snapshot of a collection at a point in time
#[derive(Debug)]
pub struct Snapshot<T> {
    /// Incremented on every publish, starting at 0 for the seed
    pub version: u64,
    /// When the snapshot was published
    pub published_at: DateTime<Utc>,
    /// The collection, in store order
    pub items: Vec<T>,
}

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Shared handle to a published snapshot
pub type SharedSnapshot<T> = Arc<Snapshot<T>>;

/// Watch-based bus holding the latest snapshot of a collection.
///
/// The bus is owned by a store. `close()` drops the sending half: existing
/// receivers observe the closure on their next `changed()`, while `subscribe()`
/// keeps handing out receivers that read the last snapshot.
#[derive(Debug)]
pub struct SnapshotBus<T> {
    sender: Mutex<Option<watch::Sender<SharedSnapshot<T>>>>,
    latest: watch::Receiver<SharedSnapshot<T>>,
}

impl<T: Send + Sync + 'static> SnapshotBus<T> {
    /// Create a bus seeded with an initial collection (version 0)
    pub fn new(items: Vec<T>) -> Self {
        let seed = Arc::new(Snapshot {
            version: 0,
            published_at: Utc::now(),
            items,
        });
        let (sender, latest) = watch::channel(seed);
        Self {
            sender: Mutex::new(Some(sender)),
            latest,
        }
    }

    /// Replace the current snapshot.
    ///
    /// Returns the new version, or `None` when the bus has been closed.
    pub fn publish(&self, items: Vec<T>) -> Option<u64> {
        let guard = match self.sender.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let Some(sender) = guard.as_ref() else {
            tracing::debug!("Snapshot bus closed, dropping publish");
            return None;
        };

        let version = self.latest.borrow().version + 1;
        sender.send_replace(Arc::new(Snapshot {
            version,
            published_at: Utc::now(),
            items,
        }));
        Some(version)
    }

    /// Subscribe to snapshots. The receiver starts at the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SharedSnapshot<T>> {
        let mut rx = self.latest.clone();
        rx.mark_unchanged();
        rx
    }

    /// The latest published snapshot
    pub fn current(&self) -> SharedSnapshot<T> {
        self.latest.borrow().clone()
    }

    /// Number of receivers, the bus's own handle included
    pub fn receiver_count(&self) -> usize {
        match self.sender.lock() {
            Ok(guard) => guard.as_ref().map_or(0, |s| s.receiver_count()),
            Err(poisoned) => poisoned.into_inner().as_ref().map_or(0, |s| s.receiver_count()),
        }
    }

    /// Tear the bus down. Idempotent.
    pub fn close(&self) {
        let mut guard = match self.sender.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.take().is_some() {
            tracing::debug!("Snapshot bus closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        match self.sender.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}
