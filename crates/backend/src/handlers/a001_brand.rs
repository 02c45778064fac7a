use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_brand::aggregate::{Brand, BrandDto, BrandId};

use crate::domain::a001_brand::service;
use crate::shared::error::ServiceError;

/// GET /api/brands
pub async fn list_all() -> Result<Json<Vec<Brand>>, ServiceError> {
    Ok(Json(service::list_all().await?))
}

/// POST /api/brands
pub async fn create(Json(dto): Json<BrandDto>) -> Result<(StatusCode, Json<Brand>), ServiceError> {
    let brand = service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

/// PUT /api/brands/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(dto): Json<BrandDto>,
) -> Result<Json<Brand>, ServiceError> {
    Ok(Json(service::update(BrandId::new(id), dto).await?))
}

/// DELETE /api/brands/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, ServiceError> {
    service::delete(BrandId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
