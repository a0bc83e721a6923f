//! Status subscriptions
//!
//! Each subscriber owns the receiving half of an unbounded channel. Statuses
//! are pushed to subscribers in registration order; a subscriber whose
//! receiver was dropped is pruned on the next publish.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use vlc_parser::Status;

/// Identifies one subscription for later [`StatusSubscribers::unsubscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// Receiving end of a status subscription
#[derive(Debug)]
pub struct StatusSubscription {
    id: SubscriptionId,
    receiver: mpsc::UnboundedReceiver<Status>,
}

impl StatusSubscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Wait for the next status
    ///
    /// Returns `None` once the subscription was removed and every status
    /// published before that has been received.
    pub async fn recv(&mut self) -> Option<Status> {
        self.receiver.recv().await
    }

    /// Take a status if one is already queued
    pub fn try_recv(&mut self) -> Option<Status> {
        self.receiver.try_recv().ok()
    }
}

/// Registry of status observers
#[derive(Debug, Default)]
pub struct StatusSubscribers {
    senders: Mutex<Vec<(SubscriptionId, mpsc::UnboundedSender<Status>)>>,
    next_id: AtomicU64,
}

impl StatusSubscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new observer
    pub fn subscribe(&self) -> StatusSubscription {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let (sender, receiver) = mpsc::unbounded_channel();
        self.senders.lock().push((id, sender));

        tracing::debug!(%id, "Status subscriber registered");
        StatusSubscription { id, receiver }
    }

    /// Remove an observer; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut senders = self.senders.lock();
        let before = senders.len();
        senders.retain(|(existing, _)| *existing != id);
        let removed = senders.len() != before;

        if removed {
            tracing::debug!(%id, "Status subscriber removed");
        }
        removed
    }

    /// Deliver a status to every observer, returning how many received it
    pub fn publish(&self, status: &Status) -> usize {
        let mut senders = self.senders.lock();
        senders.retain(|(id, sender)| {
            let delivered = sender.send(status.clone()).is_ok();
            if !delivered {
                tracing::debug!(%id, "Pruning dropped status subscriber");
            }
            delivered
        });
        senders.len()
    }

    pub fn len(&self) -> usize {
        self.senders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
