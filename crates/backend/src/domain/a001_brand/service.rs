use super::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;
use contracts::domain::a001_brand::aggregate::{Brand, BrandDto, BrandId};
use contracts::domain::common::AggregateRoot;

pub async fn list_all() -> Result<Vec<Brand>, ServiceError> {
    Ok(repository::list_all(get_connection()).await?)
}

/// Создание бренда
pub async fn create(dto: BrandDto) -> Result<Brand, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;
    let brand = repository::insert(get_connection(), &dto).await?;
    tracing::info!("Created brand {} ({})", brand.id, brand.name);
    Ok(brand)
}

/// Обновление существующего бренда
pub async fn update(id: BrandId, dto: BrandDto) -> Result<Brand, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;
    let db = get_connection();
    let mut brand = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Brand::element_name(), id.value()))?;
    brand.update(&dto);
    Ok(repository::update(db, &brand).await?)
}

pub async fn delete(id: BrandId) -> Result<(), ServiceError> {
    if repository::delete(get_connection(), id).await? {
        tracing::info!("Deleted brand {}", id);
        Ok(())
    } else {
        Err(ServiceError::not_found(Brand::element_name(), id.value()))
    }
}
