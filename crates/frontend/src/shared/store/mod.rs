//! Entity Store: process-wide cache of one remote collection plus its
//! loading/error status.
//!
//! The store is created by the application root and handed to screens through
//! Leptos context. Mutations never patch the cached collection; callers
//! re-read it with [`EntityStore::fetch_all`] once a mutation succeeded.

pub mod entity_store;
pub mod lookup;
pub mod remote;
pub mod state;

pub use entity_store::EntityStore;
pub use lookup::{Labeled, LookupStore, LookupTable};
pub use remote::{CollectionSource, EntityApi};
pub use state::{FetchOutcome, FetchTicket, StoreState};
