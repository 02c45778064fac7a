use super::remote::EntityApi;
use super::state::{FetchOutcome, StoreState};
use crate::shared::error::AppError;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use std::future::Future;
use std::sync::Arc;

/// Кеш коллекции сущностей одного вида + статусы загрузки.
///
/// Cheap to clone: the state lives in an arena signal and the API handle is
/// reference counted. The application root creates one store per entity kind
/// and provides it via context.
#[derive(Clone)]
pub struct EntityStore<E: AggregateRoot> {
    state: RwSignal<StoreState<E>>,
    api: Arc<dyn EntityApi<E>>,
}

impl<E: AggregateRoot> EntityStore<E> {
    pub fn new(api: Arc<dyn EntityApi<E>>) -> Self {
        Self {
            state: RwSignal::new(StoreState::default()),
            api,
        }
    }

    /// Реактивное состояние (для производных сигналов во view)
    pub fn state(&self) -> RwSignal<StoreState<E>> {
        self.state
    }

    #[cfg(test)]
    pub fn items_untracked(&self) -> Vec<E> {
        self.state.with_untracked(|s| s.items().to_vec())
    }

    /// Идёт хотя бы один запрос чтения (реактивно)
    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    /// Перечитать коллекцию целиком.
    ///
    /// On failure the previously held collection stays in place and the error
    /// is recorded on the store.
    pub async fn fetch_all(&self) -> Result<(), AppError> {
        run_fetch(self.state, E::collection_name(), self.api.list()).await
    }

    pub async fn create(&self, dto: E::Dto) -> Result<E, AppError> {
        log::debug!("{}: create", E::collection_name());
        self.api.create(dto).await.map_err(|e| {
            log::warn!("{}: create failed: {}", E::collection_name(), e);
            AppError::Mutation(e)
        })
    }

    pub async fn update(&self, id: E::Id, dto: E::Dto) -> Result<E, AppError> {
        log::debug!("{}: update {}", E::collection_name(), id.as_string());
        self.api.update(id, dto).await.map_err(|e| {
            log::warn!(
                "{}: update {} failed: {}",
                E::collection_name(),
                id.as_string(),
                e
            );
            AppError::Mutation(e)
        })
    }

    pub async fn delete(&self, id: E::Id) -> Result<(), AppError> {
        log::debug!("{}: delete {}", E::collection_name(), id.as_string());
        self.api.delete(id).await.map_err(|e| {
            log::warn!(
                "{}: delete {} failed: {}",
                E::collection_name(),
                id.as_string(),
                e
            );
            AppError::Mutation(e)
        })
    }
}

/// Общая последовательность чтения для сторов и справочников
pub(crate) async fn run_fetch<E, F>(
    state: RwSignal<StoreState<E>>,
    collection: &str,
    request: F,
) -> Result<(), AppError>
where
    E: Send + Sync + 'static,
    F: Future<Output = Result<Vec<E>, String>>,
{
    let ticket = state
        .try_update(|s| s.begin_fetch())
        .ok_or_else(|| AppError::Fetch("store is no longer available".to_string()))?;

    let result = request.await;
    let error = result.as_ref().err().cloned();
    let count = result.as_ref().map(Vec::len).unwrap_or_default();

    let outcome = state
        .try_update(move |s| s.finish_fetch(ticket, result))
        .unwrap_or(FetchOutcome::Stale);

    match outcome {
        FetchOutcome::Applied => {
            log::debug!("{}: loaded {} items (#{})", collection, count, ticket.seq());
            Ok(())
        }
        FetchOutcome::Failed => {
            let e = error.unwrap_or_default();
            log::error!("{}: fetch failed: {}", collection, e);
            Err(AppError::Fetch(e))
        }
        FetchOutcome::Stale => {
            log::debug!("{}: dropped stale response #{}", collection, ticket.seq());
            Ok(())
        }
    }
}
