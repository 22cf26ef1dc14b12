use serde::Serialize;
use uuid::Uuid;

use crate::records::GoalRecord;

/// Per-goal derived values for the goal cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub id: Uuid,
    pub title: String,
    pub target_amount: f64,
    pub current_saved: f64,
    /// Percentage of the target reached; may exceed 100.
    pub progress: f64,
    pub completed: bool,
}

impl GoalProgress {
    pub fn of(goal: &GoalRecord) -> Self {
        Self {
            id: goal.id,
            title: goal.title.clone(),
            target_amount: goal.target_amount,
            current_saved: goal.current_saved,
            progress: goal.progress(),
            completed: goal.completed(),
        }
    }

    /// Progress-bar width in percent, capped at the track size.
    pub fn bar_width(&self) -> f64 {
        self.progress.min(100.0)
    }
}

pub fn goal_progress(goals: &[GoalRecord]) -> Vec<GoalProgress> {
    goals.iter().map(GoalProgress::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::UserId;
    use chrono::Utc;

    fn goal(target: f64, saved: f64) -> GoalRecord {
        GoalRecord {
            id: Uuid::new_v4(),
            user_id: UserId::new("u1"),
            title: "Emergency fund".into(),
            target_amount: target,
            current_saved: saved,
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn halfway_goal_reports_fifty_percent() {
        let progress = GoalProgress::of(&goal(1000.0, 500.0));
        assert_eq!(progress.progress, 50.0);
        assert!(!progress.completed);
    }

    #[test]
    fn overfunded_goal_is_completed_with_capped_bar() {
        let progress = GoalProgress::of(&goal(1000.0, 1100.0));
        assert_eq!(progress.progress, 110.0);
        assert!(progress.completed);
        assert_eq!(progress.bar_width(), 100.0);
    }
}
