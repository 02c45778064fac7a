use super::AggregateId;
use serde::{de::DeserializeOwned, Serialize};

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех сущностей,
/// которыми управляет админ-панель.
pub trait AggregateRoot:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Полезная нагрузка для create/update запросов
    type Dto: Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Имя коллекции, оно же сегмент REST-пути (например, "brands")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;
}
