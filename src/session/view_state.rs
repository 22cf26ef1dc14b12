//! Ephemeral per-session UI state: selected tab, open modal, form field
//! contents, pending toast notices. Owned by the presentation layer, never
//! persisted, never shared.

use uuid::Uuid;

use crate::records::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Analytics,
    Goals,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Appearance,
    Preferences,
}

/// Hard deletes go through a confirmation modal before the delete action is
/// issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    AddTransaction,
    AddGoal,
    EditGoal(Uuid),
    ConfirmDeleteTransaction(Uuid),
    ConfirmDeleteGoal(Uuid),
}

/// Raw field values of the add-transaction form. Kept as entered on a failed
/// submit so the user can correct instead of retyping.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub title: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: String,
}

impl TransactionForm {
    pub fn clear(&mut self) {
        *self = TransactionForm::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub title: String,
    pub target_amount: String,
}

impl GoalForm {
    pub fn clear(&mut self) {
        *self = GoalForm::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient toast shown to the user and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub active_tab: ActiveTab,
    pub settings_tab: SettingsTab,
    pub modal: Modal,
    pub transaction_form: TransactionForm,
    pub goal_form: GoalForm,
    notices: Vec<Notice>,
}

impl ViewState {
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Hands pending toasts to the renderer, leaving the queue empty.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_drained_once() {
        let mut state = ViewState::default();
        state.push_notice(Notice::info("saved"));
        state.push_notice(Notice::error("nope"));
        assert_eq!(state.take_notices().len(), 2);
        assert!(state.take_notices().is_empty());
    }

    #[test]
    fn forms_clear_to_defaults() {
        let mut form = TransactionForm {
            title: "Coffee".into(),
            amount: "4.50".into(),
            kind: TransactionKind::Expense,
            category: "Food".into(),
        };
        form.clear();
        assert!(form.title.is_empty());
        assert!(form.amount.is_empty());
    }
}
