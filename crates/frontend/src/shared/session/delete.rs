use super::NotifyTexts;
use crate::shared::error::AppError;
use crate::shared::store::EntityStore;
use crate::shared::toast::Notifier;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Подтверждение удаления: хранит id, ожидающий подтверждения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteSession<Id> {
    Idle,
    PendingDelete(Id),
}

impl<Id> Default for DeleteSession<Id> {
    fn default() -> Self {
        DeleteSession::Idle
    }
}

impl<Id: Copy> DeleteSession<Id> {
    /// Idle -> PendingDelete(id). A second request replaces the pending id.
    pub fn request(&mut self, id: Id) {
        *self = DeleteSession::PendingDelete(id);
    }

    pub fn cancel(&mut self) {
        *self = DeleteSession::Idle;
    }

    pub fn pending(&self) -> Option<Id> {
        match self {
            DeleteSession::Idle => None,
            DeleteSession::PendingDelete(id) => Some(*id),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Confirm: returns the pending id and goes back to `Idle`.
    pub fn take_confirmed(&mut self) -> Option<Id> {
        let id = self.pending();
        *self = DeleteSession::Idle;
        id
    }
}

/// Удалить подтверждённую запись.
///
/// Exactly one delete call per confirmation. The session is back to `Idle`
/// whatever the outcome; the collection is re-read only after a success.
pub async fn confirm_delete<E: AggregateRoot>(
    session: RwSignal<DeleteSession<E::Id>>,
    store: &EntityStore<E>,
    notifier: &dyn Notifier,
    texts: &NotifyTexts,
) -> Result<(), AppError> {
    let Some(id) = session.try_update(|s| s.take_confirmed()).flatten() else {
        return Ok(());
    };

    match store.delete(id).await {
        Ok(()) => {
            notifier.success(texts.deleted);
            let _ = store.fetch_all().await;
            Ok(())
        }
        Err(e) => {
            notifier.error(texts.delete_failed);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{brand, brand_store, Call, RecordingNotifier, TEXTS};
    use contracts::domain::a001_brand::aggregate::BrandId;

    fn owner() -> Owner {
        let owner = Owner::new();
        owner.set();
        owner
    }

    #[test]
    fn test_second_request_replaces_pending_id() {
        let mut s = DeleteSession::default();
        s.request(1);
        s.request(2);
        assert_eq!(s.pending(), Some(2));
        assert_eq!(s.take_confirmed(), Some(2));
        assert_eq!(s, DeleteSession::Idle);
        assert_eq!(s.take_confirmed(), None);
    }

    #[tokio::test]
    async fn test_cancel_never_deletes() {
        let _owner = owner();
        let (store, api) = brand_store(vec![brand(3, "Acme")]);
        let notifier = RecordingNotifier::default();
        let session = RwSignal::new(DeleteSession::default());

        session.update(|s| s.request(BrandId::new(3)));
        session.update(|s| s.cancel());
        confirm_delete(session, &store, &notifier, &TEXTS).await.unwrap();

        assert!(api.calls().is_empty());
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_confirm_deletes_exactly_once_and_refetches() {
        let _owner = owner();
        let (store, api) = brand_store(vec![brand(3, "Acme"), brand(4, "Globex")]);
        let notifier = RecordingNotifier::default();
        let session = RwSignal::new(DeleteSession::default());

        session.update(|s| s.request(BrandId::new(3)));
        confirm_delete(session, &store, &notifier, &TEXTS).await.unwrap();
        // повторное подтверждение ничего не делает
        confirm_delete(session, &store, &notifier, &TEXTS).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Delete("3".into()), Call::List]);
        assert_eq!(session.get_untracked(), DeleteSession::Idle);
        assert_eq!(notifier.successes(), vec![TEXTS.deleted.to_string()]);
        assert_eq!(store.items_untracked(), vec![brand(4, "Globex")]);
    }

    #[tokio::test]
    async fn test_failed_delete_returns_to_idle_without_refetch() {
        let _owner = owner();
        let (store, api) = brand_store(vec![brand(3, "Acme")]);
        store.fetch_all().await.unwrap();
        api.clear_calls();
        api.fail_mutations(true);

        let notifier = RecordingNotifier::default();
        let session = RwSignal::new(DeleteSession::default());
        session.update(|s| s.request(BrandId::new(3)));

        let err = confirm_delete(session, &store, &notifier, &TEXTS)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Mutation(_)));
        assert_eq!(session.get_untracked(), DeleteSession::Idle);
        assert_eq!(api.calls(), vec![Call::Delete("3".into())]);
        assert_eq!(notifier.errors(), vec![TEXTS.delete_failed.to_string()]);
        assert!(notifier.successes().is_empty());
        assert_eq!(store.items_untracked(), vec![brand(3, "Acme")]);
    }
}
