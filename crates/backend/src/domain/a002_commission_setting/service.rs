use super::repository;
use crate::domain::a003_doctor::repository as doctors;
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;
use contracts::domain::a002_commission_setting::aggregate::{
    CommissionSetting, CommissionSettingDto, CommissionSettingId,
};
use contracts::domain::common::AggregateRoot;
use sea_orm::DatabaseConnection;

pub async fn list_all() -> Result<Vec<CommissionSetting>, ServiceError> {
    Ok(repository::list_all(get_connection()).await?)
}

/// Врач должен существовать в справочнике
async fn ensure_doctor(
    db: &DatabaseConnection,
    dto: &CommissionSettingDto,
) -> Result<(), ServiceError> {
    if !doctors::exists(db, dto.doctor_id).await? {
        return Err(ServiceError::Validation(format!(
            "Doctor {} does not exist",
            dto.doctor_id
        )));
    }
    Ok(())
}

pub async fn create(dto: CommissionSettingDto) -> Result<CommissionSetting, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;
    let db = get_connection();
    ensure_doctor(db, &dto).await?;
    let created = repository::insert(db, &dto).await?;
    tracing::info!("Created commission setting {}", created.id);
    Ok(created)
}

pub async fn update(
    id: CommissionSettingId,
    dto: CommissionSettingDto,
) -> Result<CommissionSetting, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;
    let db = get_connection();
    if !repository::exists(db, id).await? {
        return Err(ServiceError::not_found(
            CommissionSetting::element_name(),
            id.value(),
        ));
    }
    ensure_doctor(db, &dto).await?;
    Ok(repository::update(db, id, &dto).await?)
}

pub async fn delete(id: CommissionSettingId) -> Result<(), ServiceError> {
    if repository::delete(get_connection(), id).await? {
        tracing::info!("Deleted commission setting {}", id);
        Ok(())
    } else {
        Err(ServiceError::not_found(
            CommissionSetting::element_name(),
            id.value(),
        ))
    }
}
