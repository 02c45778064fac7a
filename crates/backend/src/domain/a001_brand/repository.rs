use contracts::domain::a001_brand::aggregate::{Brand, BrandDto, BrandId};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_brand")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Brand {
    fn from(m: Model) -> Self {
        Brand::new(BrandId::new(m.id), m.name)
    }
}

/// Все бренды в порядке создания
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Brand>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: BrandId) -> anyhow::Result<Option<Brand>> {
    Ok(Entity::find_by_id(id.value()).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, dto: &BrandDto) -> anyhow::Result<Brand> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.trim().to_string()),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn update(db: &DatabaseConnection, brand: &Brand) -> anyhow::Result<Brand> {
    let active = ActiveModel {
        id: Set(brand.id.value()),
        name: Set(brand.name.clone()),
    };
    let model = active.update(db).await?;
    Ok(model.into())
}

/// Удалить запись; `false`, если такой не было
pub async fn delete(db: &DatabaseConnection, id: BrandId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_database;

    fn dto(name: &str) -> BrandDto {
        BrandDto {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let db = memory_database().await;
        let a = insert(&db, &dto("Acme")).await.unwrap();
        let b = insert(&db, &dto(" Zeta ")).await.unwrap();

        assert!(b.id > a.id);
        assert_eq!(b.name, "Zeta");
        assert_eq!(list_all(&db).await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = memory_database().await;
        let mut brand = insert(&db, &dto("Acme")).await.unwrap();

        brand.update(&dto("Acme Labs"));
        update(&db, &brand).await.unwrap();
        assert_eq!(
            get_by_id(&db, brand.id).await.unwrap().map(|b| b.name),
            Some("Acme Labs".to_string())
        );

        assert!(delete(&db, brand.id).await.unwrap());
        assert!(!delete(&db, brand.id).await.unwrap());
        assert!(list_all(&db).await.unwrap().is_empty());
    }
}
