use contracts::domain::a003_doctor::aggregate::{Doctor, DoctorId};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_doctor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub specialization: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Doctor {
    fn from(m: Model) -> Self {
        Doctor {
            id: DoctorId::new(m.id),
            name: m.name,
            specialization: m.specialization,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Doctor>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn exists(db: &DatabaseConnection, id: DoctorId) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id.value()).one(db).await?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::{memory_database, seed_doctors};

    #[tokio::test]
    async fn test_seeded_doctors_are_listed_by_name() {
        let db = memory_database().await;
        seed_doctors(&db).await.unwrap();

        let doctors = list_all(&db).await.unwrap();
        let names: Vec<&str> = doctors.iter().map(|d| d.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(exists(&db, doctors[0].id).await.unwrap());
        assert!(!exists(&db, DoctorId::new(10_000)).await.unwrap());
    }
}
