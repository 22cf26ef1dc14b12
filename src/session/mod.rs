//! The surface exposed to the presentation layer: one [`Session`] per
//! signed-in user, holding the live feed, the current derived view, the
//! display preferences, and every action entry point.
//!
//! Actions validate synchronously before any write is attempted. Store
//! failures are caught here, logged, surfaced as a notice, and never
//! partially applied to local state; the updated record set always arrives
//! back through the subscription channel rather than from the write's own
//! response.

pub mod view_state;

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::{
    aggregate::{DashboardView, TrendFilter},
    errors::StoreError,
    prefs::{Currency, Preferences, PrefsManager, Theme},
    records::{
        GoalDraft, GoalPatch, TransactionDraft, TransactionKind, UserProfile, SAVINGS_CATEGORY,
    },
    store::{Feed, RecordStore, Snapshot},
};

pub use view_state::{
    ActiveTab, GoalForm, Modal, Notice, NoticeLevel, SettingsTab, TransactionForm, ViewState,
};

pub type ActionResult<T> = Result<T, ActionError>;

#[derive(Debug, Error)]
pub enum ActionError {
    /// Rejected before any write was attempted.
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct Session {
    user: UserProfile,
    store: Arc<dyn RecordStore>,
    feed: Feed,
    prefs_manager: PrefsManager,
    prefs: Preferences,
    snapshot: Snapshot,
    trend_filter: TrendFilter,
    view: DashboardView,
    pub view_state: ViewState,
}

impl Session {
    /// Subscribes to the user's record feed and consumes the initial
    /// delivery so the first render has data.
    pub fn start(
        user: UserProfile,
        store: Arc<dyn RecordStore>,
        prefs_manager: PrefsManager,
    ) -> ActionResult<Self> {
        let prefs = prefs_manager.load()?;
        let feed = store.subscribe(&user.uid);
        let mut session = Self {
            user,
            store,
            feed,
            prefs_manager,
            prefs,
            snapshot: Snapshot::default(),
            trend_filter: TrendFilter::default(),
            view: DashboardView::empty(),
            view_state: ViewState::default(),
        };
        session.pump();
        Ok(session)
    }

    /// Drains the feed and recomputes the derived view if anything arrived.
    /// Synchronous by design; aggregation over a personal history is cheap.
    pub fn pump(&mut self) {
        if let Some(snapshot) = self.feed.poll() {
            self.snapshot = snapshot;
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.view = DashboardView::compute(
            &self.snapshot.transactions,
            &self.snapshot.goals,
            self.prefs.monthly_budget,
            self.trend_filter,
        );
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn set_trend_filter(&mut self, filter: TrendFilter) {
        self.trend_filter = filter;
        self.recompute();
    }

    pub fn add_transaction(
        &mut self,
        title: &str,
        amount: f64,
        kind: TransactionKind,
        category: Option<String>,
    ) -> ActionResult<Uuid> {
        if title.trim().is_empty() {
            return Err(self.reject("Title must not be empty"));
        }
        if amount <= 0.0 {
            return Err(self.reject("Amount must be greater than zero"));
        }
        let draft = TransactionDraft::new(title.trim(), amount, kind, category);
        match self.store.add_transaction(&self.user.uid, draft) {
            Ok(id) => {
                self.pump();
                Ok(id)
            }
            Err(err) => Err(self.store_failure("add the transaction", err)),
        }
    }

    /// Hard delete. The presentation layer routes through
    /// [`Modal::ConfirmDeleteTransaction`] before calling this.
    pub fn delete_transaction(&mut self, id: Uuid) -> ActionResult<()> {
        match self.store.delete_transaction(&self.user.uid, id) {
            Ok(()) => {
                self.pump();
                Ok(())
            }
            Err(err) => Err(self.store_failure("delete the transaction", err)),
        }
    }

    pub fn add_goal(&mut self, title: &str, target_amount: f64) -> ActionResult<Uuid> {
        if title.trim().is_empty() {
            return Err(self.reject("Title must not be empty"));
        }
        if target_amount <= 0.0 {
            return Err(self.reject("Target amount must be greater than zero"));
        }
        let draft = GoalDraft::new(title.trim(), target_amount);
        match self.store.add_goal(&self.user.uid, draft) {
            Ok(id) => {
                self.pump();
                Ok(id)
            }
            Err(err) => Err(self.store_failure("add the goal", err)),
        }
    }

    pub fn update_goal(&mut self, id: Uuid, patch: GoalPatch) -> ActionResult<()> {
        if matches!(patch.title.as_deref(), Some(title) if title.trim().is_empty()) {
            return Err(self.reject("Title must not be empty"));
        }
        if matches!(patch.target_amount, Some(target) if target <= 0.0) {
            return Err(self.reject("Target amount must be greater than zero"));
        }
        match self.store.update_goal(&self.user.uid, id, patch) {
            Ok(()) => {
                self.pump();
                Ok(())
            }
            Err(err) => Err(self.store_failure("update the goal", err)),
        }
    }

    pub fn delete_goal(&mut self, id: Uuid) -> ActionResult<()> {
        match self.store.delete_goal(&self.user.uid, id) {
            Ok(()) => {
                self.pump();
                Ok(())
            }
            Err(err) => Err(self.store_failure("delete the goal", err)),
        }
    }

    /// Moves money into a goal. Also records a compensating `Savings`
    /// expense so the overall balance reflects the transfer. The two writes
    /// are sequential, not atomic: if the second fails, the goal update
    /// stands and the gap is surfaced to the user.
    pub fn deposit(&mut self, goal_id: Uuid, amount: f64) -> ActionResult<()> {
        if amount <= 0.0 {
            return Err(self.reject("Deposit amount must be greater than zero"));
        }
        let Some(goal) = self.snapshot.goals.iter().find(|g| g.id == goal_id).cloned() else {
            return Err(self.reject("Goal not found"));
        };
        let patch = GoalPatch::default().current_saved(goal.current_saved + amount);
        if let Err(err) = self.store.update_goal(&self.user.uid, goal_id, patch) {
            return Err(self.store_failure("save the deposit", err));
        }
        self.record_goal_transfer(&goal.title, amount, TransactionKind::Expense);
        self.pump();
        Ok(())
    }

    /// Moves money out of a goal; rejected without any write when the
    /// requested amount exceeds what is saved. Records a compensating
    /// `Savings` income on success.
    pub fn withdraw(&mut self, goal_id: Uuid, amount: f64) -> ActionResult<()> {
        if amount <= 0.0 {
            return Err(self.reject("Withdrawal amount must be greater than zero"));
        }
        let Some(goal) = self.snapshot.goals.iter().find(|g| g.id == goal_id).cloned() else {
            return Err(self.reject("Goal not found"));
        };
        if amount > goal.current_saved {
            return Err(self.reject("Withdrawal exceeds the saved balance"));
        }
        let patch = GoalPatch::default().current_saved(goal.current_saved - amount);
        if let Err(err) = self.store.update_goal(&self.user.uid, goal_id, patch) {
            return Err(self.store_failure("save the withdrawal", err));
        }
        self.record_goal_transfer(&goal.title, amount, TransactionKind::Income);
        self.pump();
        Ok(())
    }

    fn record_goal_transfer(&mut self, goal_title: &str, amount: f64, kind: TransactionKind) {
        let draft = TransactionDraft::new(
            format!("Savings: {goal_title}"),
            amount,
            kind,
            Some(SAVINGS_CATEGORY.to_string()),
        );
        if let Err(err) = self.store.add_transaction(&self.user.uid, draft) {
            tracing::warn!(%err, "compensating savings transaction failed");
            self.view_state.push_notice(Notice::error(
                "Goal updated, but the matching transaction could not be recorded.",
            ));
        }
    }

    pub fn set_budget(&mut self, budget: f64) -> ActionResult<()> {
        if budget < 0.0 {
            return Err(self.reject("Budget must not be negative"));
        }
        let mut updated = self.prefs.clone();
        updated.monthly_budget = budget;
        let symbol = updated.currency.symbol.clone();
        self.commit_prefs(updated, format!("Budget set to {symbol}{budget}"))
    }

    pub fn set_currency(&mut self, currency: Currency) -> ActionResult<()> {
        let mut updated = self.prefs.clone();
        let label = currency.label.clone();
        updated.currency = currency;
        self.commit_prefs(updated, format!("Currency updated to {label}"))
    }

    pub fn set_theme(&mut self, theme: Theme) -> ActionResult<()> {
        let mut updated = self.prefs.clone();
        updated.theme = theme;
        self.commit_prefs(updated, format!("Theme set to {}", theme.name()))
    }

    /// Persists first, commits to memory only on success, so a failed save
    /// leaves the in-memory preferences untouched.
    fn commit_prefs(&mut self, updated: Preferences, confirmation: String) -> ActionResult<()> {
        if let Err(err) = self.prefs_manager.save(&updated) {
            return Err(self.store_failure("save preferences", err));
        }
        self.prefs = updated;
        self.view_state.push_notice(Notice::info(confirmation));
        self.recompute();
        Ok(())
    }

    /// Drops the feed subscription; auth sign-out itself belongs to the
    /// authentication collaborator.
    pub fn sign_out(self) {
        tracing::info!(user = self.user.uid.as_str(), "session closed");
    }

    fn reject(&mut self, message: &str) -> ActionError {
        self.view_state.push_notice(Notice::error(message));
        ActionError::Invalid(message.to_string())
    }

    fn store_failure(&mut self, action: &str, err: StoreError) -> ActionError {
        tracing::warn!(action, %err, "persistence write failed");
        self.view_state
            .push_notice(Notice::error(format!("Could not {action}. Please try again.")));
        err.into()
    }
}
