use axum::Json;
use contracts::domain::a003_doctor::aggregate::Doctor;

use crate::domain::a003_doctor::service;
use crate::shared::error::ServiceError;

/// GET /api/doctors
pub async fn list_all() -> Result<Json<Vec<Doctor>>, ServiceError> {
    Ok(Json(service::list_all().await?))
}
