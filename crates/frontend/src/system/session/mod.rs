//! Текущий пользователь панели: читается один раз при старте.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::api_url;
use contracts::system::session::CurrentUser;
use gloo_net::http::Request;
use leptos::prelude::*;

/// Fetch the signed-in user shown in the sidebar footer
pub async fn fetch_current_user() -> Result<CurrentUser, String> {
    let response = Request::get(&api_url("/api/system/me"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch current user: {}", response.status()));
    }

    response
        .json::<CurrentUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Загрузить пользователя в контекст; при ошибке футер покажет гостя
pub fn load_current_user(ctx: AppGlobalContext) {
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_current_user().await {
            Ok(user) => {
                log::info!("signed in as {}", user.username);
                ctx.user.set(Some(user));
            }
            Err(e) => log::warn!("current user unavailable: {}", e),
        }
    });
}
