use super::entity_store::run_fetch;
use super::remote::CollectionSource;
use super::state::StoreState;
use crate::shared::error::AppError;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Подпись, под которой запись справочника показывается в чужих таблицах
pub trait Labeled {
    fn label(&self) -> String;
}

pub const MISSING_LABEL: &str = "Unknown";

/// Справочник: id → запись, собранный из последнего ответа сервера
#[derive(Debug, Clone)]
pub struct LookupTable<E: AggregateRoot> {
    by_id: HashMap<E::Id, E>,
    order: Vec<E::Id>,
}

impl<E: AggregateRoot> Default for LookupTable<E> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<E: AggregateRoot> LookupTable<E> {
    pub fn from_items(items: &[E]) -> Self {
        let mut table = Self::default();
        for item in items {
            let id = item.id();
            if table.by_id.insert(id, item.clone()).is_none() {
                table.order.push(id);
            }
        }
        table
    }

    /// Записи в порядке ответа сервера (для выпадающих списков)
    pub fn entries(&self) -> impl Iterator<Item = &E> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<E: AggregateRoot + Labeled> LookupTable<E> {
    /// Label for a foreign key. An unresolved key degrades to
    /// `"{Element} #{id}"` so the id stays visible; an absent one to
    /// [`MISSING_LABEL`].
    pub fn label(&self, id: Option<E::Id>) -> String {
        match id {
            Some(id) => self
                .by_id
                .get(&id)
                .map(Labeled::label)
                .unwrap_or_else(|| format!("{} #{}", E::element_name(), id.as_string())),
            None => MISSING_LABEL.to_string(),
        }
    }

    /// Same as [`label`](Self::label) but yields an empty string for absent
    /// keys, for use in search text.
    pub fn search_label(&self, id: Option<E::Id>) -> String {
        id.and_then(|id| self.by_id.get(&id))
            .map(Labeled::label)
            .unwrap_or_default()
    }
}

/// Стор справочника: читается независимо от основной коллекции экрана
#[derive(Clone)]
pub struct LookupStore<E: AggregateRoot> {
    state: RwSignal<StoreState<E>>,
    source: Arc<dyn CollectionSource<E>>,
}

impl<E: AggregateRoot> LookupStore<E> {
    pub fn new(source: Arc<dyn CollectionSource<E>>) -> Self {
        Self {
            state: RwSignal::new(StoreState::default()),
            source,
        }
    }

    pub async fn fetch(&self) -> Result<(), AppError> {
        run_fetch(self.state, E::collection_name(), self.source.list()).await
    }

    pub fn table(&self) -> LookupTable<E> {
        self.state.with(|s| LookupTable::from_items(s.items()))
    }

    pub fn table_untracked(&self) -> LookupTable<E> {
        self.state.with_untracked(|s| LookupTable::from_items(s.items()))
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }
}
