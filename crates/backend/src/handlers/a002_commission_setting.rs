use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_commission_setting::aggregate::{
    CommissionSetting, CommissionSettingDto, CommissionSettingId,
};

use crate::domain::a002_commission_setting::service;
use crate::shared::error::ServiceError;

/// GET /api/commission-settings
pub async fn list_all() -> Result<Json<Vec<CommissionSetting>>, ServiceError> {
    Ok(Json(service::list_all().await?))
}

/// POST /api/commission-settings
pub async fn create(
    Json(dto): Json<CommissionSettingDto>,
) -> Result<(StatusCode, Json<CommissionSetting>), ServiceError> {
    let created = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/commission-settings/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(dto): Json<CommissionSettingDto>,
) -> Result<Json<CommissionSetting>, ServiceError> {
    Ok(Json(
        service::update(CommissionSettingId::new(id), dto).await?,
    ))
}

/// DELETE /api/commission-settings/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, ServiceError> {
    service::delete(CommissionSettingId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
