use contracts::domain::a002_commission_setting::aggregate::{
    CommissionSetting, CommissionSettingDto, CommissionSettingId,
};
use contracts::domain::a003_doctor::aggregate::DoctorId;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_commission_setting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub doctor_id: Option<i64>,
    pub commission_type: String,
    pub source: String,
    pub value: Option<f64>,
    pub calculation_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CommissionSetting {
    fn from(m: Model) -> Self {
        CommissionSetting {
            id: CommissionSettingId::new(m.id),
            doctor_id: m.doctor_id.map(DoctorId::new),
            commission_type: m.commission_type,
            source: m.source,
            value: m.value,
            calculation_type: m.calculation_type,
        }
    }
}

fn active_from_dto(id: Option<CommissionSettingId>, dto: &CommissionSettingDto) -> ActiveModel {
    ActiveModel {
        id: id.map(|id| Set(id.value())).unwrap_or(NotSet),
        doctor_id: Set(Some(dto.doctor_id.value())),
        commission_type: Set(dto.commission_type.trim().to_string()),
        source: Set(dto.source.trim().to_string()),
        value: Set(dto.value),
        calculation_type: Set(dto.calculation_type.trim().to_string()),
    }
}

/// Все настройки по возрастанию id
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<CommissionSetting>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn exists(db: &DatabaseConnection, id: CommissionSettingId) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id.value()).one(db).await?.is_some())
}

pub async fn insert(
    db: &DatabaseConnection,
    dto: &CommissionSettingDto,
) -> anyhow::Result<CommissionSetting> {
    let model = active_from_dto(None, dto).insert(db).await?;
    Ok(model.into())
}

pub async fn update(
    db: &DatabaseConnection,
    id: CommissionSettingId,
    dto: &CommissionSettingDto,
) -> anyhow::Result<CommissionSetting> {
    let model = active_from_dto(Some(id), dto).update(db).await?;
    Ok(model.into())
}

pub async fn delete(db: &DatabaseConnection, id: CommissionSettingId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_database;

    fn dto(doctor: i64, value: Option<f64>) -> CommissionSettingDto {
        CommissionSettingDto {
            doctor_id: DoctorId::new(doctor),
            commission_type: "OPD".to_string(),
            source: " Walk-in ".to_string(),
            value,
            calculation_type: "percentage".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_list_keeps_fields() {
        let db = memory_database().await;
        let created = insert(&db, &dto(2, Some(12.5))).await.unwrap();

        assert_eq!(created.doctor_id, Some(DoctorId::new(2)));
        assert_eq!(created.source, "Walk-in");
        assert_eq!(list_all(&db).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let db = memory_database().await;
        let created = insert(&db, &dto(2, Some(12.5))).await.unwrap();

        let updated = update(&db, created.id, &dto(3, None)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.doctor_id, Some(DoctorId::new(3)));
        assert_eq!(updated.value, None);

        assert!(delete(&db, created.id).await.unwrap());
        assert!(!exists(&db, created.id).await.unwrap());
    }
}
