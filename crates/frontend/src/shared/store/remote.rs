use async_trait::async_trait;
use contracts::domain::common::AggregateRoot;

/// Источник коллекции, доступный только для чтения (справочники)
#[async_trait(?Send)]
pub trait CollectionSource<E>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, String>;
}

/// Удалённая коллекция с поддержкой изменений.
///
/// Every call is exactly one remote request; none of them touch the local
/// cache.
#[async_trait(?Send)]
pub trait EntityApi<E: AggregateRoot>: CollectionSource<E> {
    async fn create(&self, dto: E::Dto) -> Result<E, String>;

    async fn update(&self, id: E::Id, dto: E::Dto) -> Result<E, String>;

    async fn delete(&self, id: E::Id) -> Result<(), String>;
}
