use axum::{Extension, Json};
use contracts::system::session::CurrentUser;

use crate::shared::config::SessionConfig;

/// GET /api/system/me
///
/// Авторизации нет: возвращается пользователь из секции `[session]` конфига.
pub async fn current_user(Extension(session): Extension<SessionConfig>) -> Json<CurrentUser> {
    Json(CurrentUser {
        username: session.username,
        display_name: session.display_name,
    })
}
