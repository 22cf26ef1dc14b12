use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        mpsc::{channel, Sender},
        Mutex, PoisonError,
    },
};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::StoreError,
    records::{GoalDraft, GoalPatch, GoalRecord, TransactionDraft, TransactionRecord, UserId},
    utils::{app_data_dir, ensure_dir, store_dir_in, write_atomic},
};

use super::{Feed, RecordStore, Result, Snapshot};

const TRANSACTIONS_FILE: &str = "transactions.json";
const GOALS_FILE: &str = "goals.json";

struct Listener {
    user: UserId,
    tx: Sender<Snapshot>,
}

/// File-backed [`RecordStore`]: one JSON document per collection, written
/// atomically (temp file then rename). Subscriptions are served from an
/// in-process listener registry; every successful write re-reads the
/// owner's records and pushes the full set.
pub struct JsonStore {
    transactions_path: PathBuf,
    goals_path: PathBuf,
    listeners: Mutex<Vec<Listener>>,
}

impl JsonStore {
    /// Opens (creating if needed) the store under `root`, defaulting to the
    /// application data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        let dir = store_dir_in(&base);
        ensure_dir(&dir)?;
        Ok(Self {
            transactions_path: dir.join(TRANSACTIONS_FILE),
            goals_path: dir.join(GOALS_FILE),
            listeners: Mutex::new(Vec::new()),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Vec::new())
        }
    }

    fn save_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(path, &json)?;
        Ok(())
    }

    fn build_snapshot(&self, user: &UserId) -> Result<Snapshot> {
        let mut transactions: Vec<TransactionRecord> =
            Self::load_collection(&self.transactions_path)?
                .into_iter()
                .filter(|tx: &TransactionRecord| tx.user_id == *user)
                .collect();
        transactions.sort_by_key(TransactionRecord::sort_key);

        let mut goals: Vec<GoalRecord> = Self::load_collection(&self.goals_path)?
            .into_iter()
            .filter(|goal: &GoalRecord| goal.user_id == *user)
            .collect();
        goals.sort_by_key(|goal| goal.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH));

        Ok(Snapshot {
            transactions,
            goals,
        })
    }

    /// Re-delivers the user's current record set to every live listener.
    /// Closed feeds are pruned here.
    fn notify(&self, user: &UserId) {
        let snapshot = match self.build_snapshot(user) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(user = user.as_str(), %err, "skipping feed delivery");
                return;
            }
        };
        let mut listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        listeners.retain(|listener| {
            listener.user != *user || listener.tx.send(snapshot.clone()).is_ok()
        });
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl RecordStore for JsonStore {
    fn add_transaction(&self, user: &UserId, draft: TransactionDraft) -> Result<Uuid> {
        let mut records: Vec<TransactionRecord> = Self::load_collection(&self.transactions_path)?;
        let record = TransactionRecord {
            id: Uuid::new_v4(),
            user_id: user.clone(),
            title: draft.title,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            created_at: Some(Utc::now()),
        };
        let id = record.id;
        records.push(record);
        Self::save_collection(&self.transactions_path, &records)?;
        self.notify(user);
        Ok(id)
    }

    fn delete_transaction(&self, user: &UserId, id: Uuid) -> Result<()> {
        let mut records: Vec<TransactionRecord> = Self::load_collection(&self.transactions_path)?;
        let position = records
            .iter()
            .position(|tx| tx.id == id && tx.user_id == *user)
            .ok_or(StoreError::NotFound(id))?;
        records.remove(position);
        Self::save_collection(&self.transactions_path, &records)?;
        self.notify(user);
        Ok(())
    }

    fn add_goal(&self, user: &UserId, draft: GoalDraft) -> Result<Uuid> {
        let mut records: Vec<GoalRecord> = Self::load_collection(&self.goals_path)?;
        let record = GoalRecord {
            id: Uuid::new_v4(),
            user_id: user.clone(),
            title: draft.title,
            target_amount: draft.target_amount,
            current_saved: 0.0,
            created_at: Some(Utc::now()),
        };
        let id = record.id;
        records.push(record);
        Self::save_collection(&self.goals_path, &records)?;
        self.notify(user);
        Ok(id)
    }

    fn update_goal(&self, user: &UserId, id: Uuid, patch: GoalPatch) -> Result<()> {
        let mut records: Vec<GoalRecord> = Self::load_collection(&self.goals_path)?;
        let goal = records
            .iter_mut()
            .find(|goal| goal.id == id && goal.user_id == *user)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply(goal);
        Self::save_collection(&self.goals_path, &records)?;
        self.notify(user);
        Ok(())
    }

    fn delete_goal(&self, user: &UserId, id: Uuid) -> Result<()> {
        let mut records: Vec<GoalRecord> = Self::load_collection(&self.goals_path)?;
        let position = records
            .iter()
            .position(|goal| goal.id == id && goal.user_id == *user)
            .ok_or(StoreError::NotFound(id))?;
        records.remove(position);
        Self::save_collection(&self.goals_path, &records)?;
        self.notify(user);
        Ok(())
    }

    fn snapshot(&self, user: &UserId) -> Result<Snapshot> {
        self.build_snapshot(user)
    }

    fn subscribe(&self, user: &UserId) -> Feed {
        let (tx, rx) = channel();
        match self.build_snapshot(user) {
            Ok(snapshot) => {
                // Initial delivery; the send only fails if the feed is
                // already dropped.
                let _ = tx.send(snapshot);
            }
            Err(err) => {
                tracing::warn!(user = user.as_str(), %err, "initial feed delivery failed");
            }
        }
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Listener {
                user: user.clone(),
                tx,
            });
        Feed::new(rx)
    }
}
