use super::repository;
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;
use contracts::domain::a003_doctor::aggregate::Doctor;

/// Справочник врачей (только чтение)
pub async fn list_all() -> Result<Vec<Doctor>, ServiceError> {
    Ok(repository::list_all(get_connection()).await?)
}
