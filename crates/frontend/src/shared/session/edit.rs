use super::NotifyTexts;
use crate::shared::error::AppError;
use crate::shared::store::EntityStore;
use crate::shared::toast::Notifier;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

type EntityOf<D> = <D as FormDraft>::Entity;
type IdOf<D> = <<D as FormDraft>::Entity as AggregateRoot>::Id;
type DtoOf<D> = <<D as FormDraft>::Entity as AggregateRoot>::Dto;

/// Черновик формы: изменяемая копия редактируемых полей.
///
/// A draft never references the store. `to_dto` copies its values into a new
/// request payload and is the single place where a screen validates input.
pub trait FormDraft: Clone + Default + PartialEq + Send + Sync + 'static {
    type Entity: AggregateRoot;

    fn from_entity(entity: &Self::Entity) -> Self;

    fn to_dto(&self) -> Result<DtoOf<Self>, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode<Id> {
    Closed,
    CreatingNew,
    EditingExisting(Id),
}

/// Запрос, собранный из черновика
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<Id, Dto> {
    Create(Dto),
    Update(Id, Dto),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    NotOpen,
    InFlight,
    Invalid(String),
}

/// Identifies the session instance a submit was started from. Every open or
/// cancel starts a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

/// Состояние модального окна создания/редактирования
#[derive(Debug, Clone)]
pub struct EditSession<D: FormDraft> {
    mode: EditMode<IdOf<D>>,
    draft: D,
    validation_error: Option<String>,
    submitting: bool,
    generation: u64,
}

impl<D: FormDraft> Default for EditSession<D> {
    fn default() -> Self {
        Self {
            mode: EditMode::Closed,
            draft: D::default(),
            validation_error: None,
            submitting: false,
            generation: 0,
        }
    }
}

impl<D: FormDraft> EditSession<D> {
    pub fn mode(&self) -> EditMode<IdOf<D>> {
        self.mode
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditMode::Closed
    }

    pub fn is_editing_existing(&self) -> bool {
        matches!(self.mode, EditMode::EditingExisting(_))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Closed -> CreatingNew, черновик сбрасывается в значения по умолчанию
    pub fn open_new(&mut self) {
        self.restart(EditMode::CreatingNew, D::default());
    }

    /// Closed -> EditingExisting(id), черновик копируется из сущности
    pub fn open_edit(&mut self, entity: &EntityOf<D>) {
        self.restart(EditMode::EditingExisting(entity.id()), D::from_entity(entity));
    }

    /// * -> Closed без записи
    pub fn cancel(&mut self) {
        self.restart(EditMode::Closed, D::default());
    }

    /// Изменить черновик. Любая правка снимает ошибку валидации.
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut D)) {
        if !self.is_open() {
            return;
        }
        f(&mut self.draft);
        self.validation_error = None;
    }

    /// Validate the draft and mark the session as submitting.
    pub fn begin_submit(
        &mut self,
    ) -> Result<(SubmitToken, Submission<IdOf<D>, DtoOf<D>>), SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        let dto = match self.draft.to_dto() {
            Ok(dto) => dto,
            Err(msg) if self.is_open() => {
                self.validation_error = Some(msg.clone());
                return Err(SubmitRejected::Invalid(msg));
            }
            Err(_) => return Err(SubmitRejected::NotOpen),
        };
        let submission = match self.mode {
            EditMode::Closed => return Err(SubmitRejected::NotOpen),
            EditMode::CreatingNew => Submission::Create(dto),
            EditMode::EditingExisting(id) => Submission::Update(id, dto),
        };
        self.validation_error = None;
        self.submitting = true;
        Ok((SubmitToken(self.generation), submission))
    }

    /// Успех: закрыть и сбросить, если пользователь не открыл другую сессию
    pub fn finish_success(&mut self, token: SubmitToken) {
        if token.0 == self.generation {
            self.restart(EditMode::Closed, D::default());
        }
    }

    /// Ошибка: окно остаётся открытым, ввод пользователя сохраняется
    pub fn finish_failure(&mut self, token: SubmitToken) {
        if token.0 == self.generation {
            self.submitting = false;
        }
    }

    fn restart(&mut self, mode: EditMode<IdOf<D>>, draft: D) {
        self.mode = mode;
        self.draft = draft;
        self.validation_error = None;
        self.submitting = false;
        self.generation += 1;
    }
}

/// Отправить форму: mutation, затем (только при успехе) перечитать коллекцию.
///
/// Validation failures never reach the network. Remote failures are reported
/// through `notifier` and leave the session open with the user's input.
pub async fn submit_edit<D: FormDraft>(
    session: RwSignal<EditSession<D>>,
    store: &EntityStore<EntityOf<D>>,
    notifier: &dyn Notifier,
    texts: &NotifyTexts,
) -> Result<(), AppError> {
    let (token, submission) = match session.try_update(|s| s.begin_submit()) {
        Some(Ok(started)) => started,
        Some(Err(SubmitRejected::Invalid(msg))) => return Err(AppError::Validation(msg)),
        Some(Err(rejected)) => {
            log::debug!(
                "{}: submit ignored: {:?}",
                <EntityOf<D>>::collection_name(),
                rejected
            );
            return Ok(());
        }
        None => return Ok(()),
    };

    let result = match submission {
        Submission::Create(dto) => store.create(dto).await.map(|_| texts.created),
        Submission::Update(id, dto) => {
            log::debug!("submitting update for {}", id.as_string());
            store.update(id, dto).await.map(|_| texts.updated)
        }
    };

    match result {
        Ok(message) => {
            session.update(|s| s.finish_success(token));
            notifier.success(message);
            // Ошибка чтения уже отражена в сторе (баннер), запись при этом прошла
            let _ = store.fetch_all().await;
            Ok(())
        }
        Err(e) => {
            session.update(|s| s.finish_failure(token));
            notifier.error(texts.mutation_failed);
            Err(e)
        }
    }
}
