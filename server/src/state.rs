//! Shared handle to the todo store.
//!
//! Every handler receives a clone of `AppState`; all clones point at the same
//! store. Reads take the read lock, mutations hold the write lock for the whole
//! operation so concurrent creates get distinct, ordered ids.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::TodoStore;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    store: Arc<RwLock<TodoStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(TodoStore::new())
    }

    pub fn with_store(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, TodoStore> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, TodoStore> {
        self.store.write().await
    }

    /// Clear all todos and restart ids at 1. Test hook; not routed.
    pub async fn reset(&self) {
        self.store.write().await.reset();
        tracing::debug!("todo store reset");
    }
}
