//! Record types owned by a single user: transactions, savings goals, profile.

pub mod goal;
pub mod transaction;
pub mod user;

pub use goal::{GoalDraft, GoalPatch, GoalRecord};
pub use transaction::{
    TransactionDraft, TransactionKind, TransactionRecord, DEFAULT_CATEGORY, SAVINGS_CATEGORY,
};
pub use user::{UserId, UserProfile};
