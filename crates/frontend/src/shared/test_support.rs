//! Test doubles for the remote API and the notification sink.

use crate::shared::session::NotifyTexts;
use crate::shared::store::{CollectionSource, EntityApi, EntityStore};
use crate::shared::toast::Notifier;
use async_trait::async_trait;
use contracts::domain::a001_brand::aggregate::{Brand, BrandDto, BrandId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const TEXTS: NotifyTexts = NotifyTexts {
    created: "created",
    updated: "updated",
    deleted: "deleted",
    mutation_failed: "mutation failed",
    delete_failed: "delete failed",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create,
    Update(String),
    Delete(String),
}

type Build<E> = dyn Fn(Option<<E as AggregateRoot>::Id>, &<E as AggregateRoot>::Dto) -> E + Send + Sync;

/// In-memory remote collection that records every request
pub struct MockApi<E: AggregateRoot> {
    items: Mutex<Vec<E>>,
    calls: Mutex<Vec<Call>>,
    fail_list: AtomicBool,
    fail_mutations: AtomicBool,
    build: Box<Build<E>>,
}

impl<E: AggregateRoot> MockApi<E> {
    pub fn new(
        items: Vec<E>,
        build: impl Fn(Option<E::Id>, &E::Dto) -> E + Send + Sync + 'static,
    ) -> Self {
        Self {
            items: Mutex::new(items),
            calls: Mutex::new(Vec::new()),
            fail_list: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            build: Box::new(build),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn current_items(&self) -> Vec<E> {
        self.items.lock().unwrap().clone()
    }

    pub fn set_items(&self, items: Vec<E>) {
        *self.items.lock().unwrap() = items;
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_guard(&self) -> Result<(), String> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            Err("HTTP 500".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl<E: AggregateRoot> CollectionSource<E> for MockApi<E> {
    async fn list(&self) -> Result<Vec<E>, String> {
        self.record(Call::List);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err("HTTP 503".to_string());
        }
        Ok(self.current_items())
    }
}

#[async_trait(?Send)]
impl<E: AggregateRoot> EntityApi<E> for MockApi<E> {
    async fn create(&self, dto: E::Dto) -> Result<E, String> {
        self.record(Call::Create);
        self.mutation_guard()?;
        let created = (self.build)(None, &dto);
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: E::Id, dto: E::Dto) -> Result<E, String> {
        self.record(Call::Update(id.as_string()));
        self.mutation_guard()?;
        let updated = (self.build)(Some(id), &dto);
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|e| e.id() == id) {
            Some(slot) => *slot = updated.clone(),
            None => return Err("HTTP 404".to_string()),
        }
        Ok(updated)
    }

    async fn delete(&self, id: E::Id) -> Result<(), String> {
        self.record(Call::Delete(id.as_string()));
        self.mutation_guard()?;
        self.items.lock().unwrap().retain(|e| e.id() != id);
        Ok(())
    }
}

pub fn brand(id: i64, name: &str) -> Brand {
    Brand::new(BrandId::new(id), name)
}

/// Стор брендов поверх мока; новые записи получают id начиная с 100
pub fn brand_store(items: Vec<Brand>) -> (EntityStore<Brand>, Arc<MockApi<Brand>>) {
    let next = Arc::new(Mutex::new(100));
    let api = Arc::new(MockApi::new(items, move |id, dto: &BrandDto| {
        let id = id.unwrap_or_else(|| {
            let mut n = next.lock().unwrap();
            *n += 1;
            BrandId::new(*n)
        });
        Brand::new(id, dto.name.clone())
    }));
    (EntityStore::new(api.clone()), api)
}

#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.successes().is_empty() && self.errors().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
