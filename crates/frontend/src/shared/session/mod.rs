//! Transient UI sessions layered on top of an [`EntityStore`]:
//! the create/update modal ([`EditSession`]) and the delete confirmation
//! ([`DeleteSession`]). Both are owned by the screen that shows them.
//!
//! [`EntityStore`]: crate::shared::store::EntityStore

pub mod delete;
pub mod edit;

pub use delete::{confirm_delete, DeleteSession};
pub use edit::{submit_edit, EditMode, EditSession, FormDraft, SubmitRejected, Submission};

/// Тексты уведомлений конкретного экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyTexts {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub mutation_failed: &'static str,
    pub delete_failed: &'static str,
}
