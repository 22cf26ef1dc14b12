//! Persistence collaborator: record collections keyed by owner, plus live
//! subscriptions that re-deliver the owner's full record set after every
//! successful write.

pub mod json_backend;

use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::StoreError,
    records::{GoalDraft, GoalPatch, GoalRecord, TransactionDraft, TransactionRecord, UserId},
};

pub use json_backend::JsonStore;

pub type Result<T> = std::result::Result<T, StoreError>;

/// One full delivery of a user's records. Transactions and goals arrive
/// ordered by ascending creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub transactions: Vec<TransactionRecord>,
    pub goals: Vec<GoalRecord>,
}

/// Receiving end of a live subscription. The store pushes a fresh
/// [`Snapshot`] after every write touching the subscribed user.
pub struct Feed {
    rx: Receiver<Snapshot>,
}

impl Feed {
    pub fn new(rx: Receiver<Snapshot>) -> Self {
        Self { rx }
    }

    /// Drains pending deliveries and returns the most recent one, if any.
    /// Intermediate snapshots are superseded by design; each delivery is the
    /// full current state.
    pub fn poll(&self) -> Option<Snapshot> {
        let mut latest = None;
        while let Ok(snapshot) = self.rx.try_recv() {
            latest = Some(snapshot);
        }
        latest
    }

    /// Blocks until the next delivery; `None` once the store is gone.
    pub fn recv(&self) -> Option<Snapshot> {
        self.rx.recv().ok()
    }
}

/// Abstraction over document stores capable of holding transaction and goal
/// collections. The store assigns record ids and creation timestamps;
/// callers never pick either.
pub trait RecordStore: Send + Sync {
    fn add_transaction(&self, user: &UserId, draft: TransactionDraft) -> Result<Uuid>;
    fn delete_transaction(&self, user: &UserId, id: Uuid) -> Result<()>;

    fn add_goal(&self, user: &UserId, draft: GoalDraft) -> Result<Uuid>;
    fn update_goal(&self, user: &UserId, id: Uuid, patch: GoalPatch) -> Result<()>;
    fn delete_goal(&self, user: &UserId, id: Uuid) -> Result<()>;

    /// Current full record set for `user`, ordered by ascending creation
    /// time.
    fn snapshot(&self, user: &UserId) -> Result<Snapshot>;

    /// Registers a live subscription for `user`. An initial snapshot is
    /// pushed immediately so new sessions render without a separate read.
    fn subscribe(&self, user: &UserId) -> Feed;
}
