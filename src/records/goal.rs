use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// A savings goal. `current_saved` starts at zero and is the only mutable
/// field, moved by the deposit and withdraw actions. Saving past the target
/// is allowed and is the completed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_saved: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GoalRecord {
    /// Percentage of the target reached; zero when no target is set. May
    /// exceed 100.
    pub fn progress(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_saved / self.target_amount * 100.0
        } else {
            0.0
        }
    }

    pub fn completed(&self) -> bool {
        self.progress() >= 100.0
    }
}

/// Client-side payload for a new goal; the store assigns `id` and
/// `created_at` and initializes `current_saved` to zero.
#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub title: String,
    pub target_amount: f64,
}

impl GoalDraft {
    pub fn new(title: impl Into<String>, target_amount: f64) -> Self {
        Self {
            title: title.into(),
            target_amount,
        }
    }
}

/// Partial update for a goal record; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub target_amount: Option<f64>,
    pub current_saved: Option<f64>,
}

impl GoalPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn target_amount(mut self, target_amount: f64) -> Self {
        self.target_amount = Some(target_amount);
        self
    }

    pub fn current_saved(mut self, current_saved: f64) -> Self {
        self.current_saved = Some(current_saved);
        self
    }

    pub fn apply(&self, goal: &mut GoalRecord) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(target_amount) = self.target_amount {
            goal.target_amount = target_amount;
        }
        if let Some(current_saved) = self.current_saved {
            goal.current_saved = current_saved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: f64, saved: f64) -> GoalRecord {
        GoalRecord {
            id: Uuid::new_v4(),
            user_id: UserId::new("u1"),
            title: "Vacation".into(),
            target_amount: target,
            current_saved: saved,
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn progress_is_zero_without_a_target() {
        assert_eq!(goal(0.0, 250.0).progress(), 0.0);
    }

    #[test]
    fn progress_may_exceed_one_hundred() {
        let overfunded = goal(1000.0, 1100.0);
        assert_eq!(overfunded.progress(), 110.0);
        assert!(overfunded.completed());
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut record = goal(1000.0, 200.0);
        GoalPatch::default().current_saved(500.0).apply(&mut record);
        assert_eq!(record.current_saved, 500.0);
        assert_eq!(record.target_amount, 1000.0);
        assert_eq!(record.title, "Vacation");
    }
}
