use axum::{
    routing::{get, put},
    Extension, Router,
};

use crate::handlers;
use crate::shared::config::SessionConfig;

/// Конфигурация всех роутов приложения
pub fn configure_routes(session: SessionConfig) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // System
        .route("/api/system/me", get(handlers::system::current_user))
        // a001: Brands
        .route(
            "/api/brands",
            get(handlers::a001_brand::list_all).post(handlers::a001_brand::create),
        )
        .route(
            "/api/brands/:id",
            put(handlers::a001_brand::update).delete(handlers::a001_brand::delete),
        )
        // a002: Commission settings
        .route(
            "/api/commission-settings",
            get(handlers::a002_commission_setting::list_all)
                .post(handlers::a002_commission_setting::create),
        )
        .route(
            "/api/commission-settings/:id",
            put(handlers::a002_commission_setting::update)
                .delete(handlers::a002_commission_setting::delete),
        )
        // a003: Doctors (read-only)
        .route("/api/doctors", get(handlers::a003_doctor::list_all))
        .layer(Extension(session))
}
