//! Frontend error taxonomy
//!
//! Remote helpers report failures as plain `String` messages; the view-model
//! layer wraps them into [`AppError`] so each screen can decide how to surface
//! them (banner, toast or inline form message). Nothing here is fatal.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Чтение коллекции не удалось: показываем устаревшие данные + баннер
    #[error("Failed to load data: {0}")]
    Fetch(String),

    /// create/update/delete не удался: toast, состояние сессии сохраняется
    #[error("Operation failed: {0}")]
    Mutation(String),

    /// Локальная проверка формы, до обращения к серверу
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}
