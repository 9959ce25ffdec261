use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::DebounceConfig;
use crate::engine::DraftStore;
use crate::entities::{Coordinates, FieldSlot};
use crate::external::geocoding::ResolveAddress;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub draft: Uuid,
    pub slot: FieldSlot,
}

// One quiescence timer and at most one in-flight resolution per field.
// Superseding an attempt aborts its task; the generation check in
// AddressField::apply_resolution is what guarantees a stale attempt can
// never commit, even if it slips past the abort.
pub struct DebounceCoordinator {
    quiescence: Duration,
    min_query_len: usize,
    resolver: Arc<dyn ResolveAddress>,
    tasks: Mutex<HashMap<FieldKey, JoinHandle<()>>>,
}

impl DebounceCoordinator {
    pub fn new(config: &DebounceConfig, resolver: Arc<dyn ResolveAddress>) -> Self {
        Self {
            quiescence: Duration::from_millis(config.quiescence_ms),
            min_query_len: config.min_query_len,
            resolver,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    // Waits out the quiescence interval, resolves the text as it stood at
    // `generation`, and commits the outcome unless a newer edit has landed.
    pub async fn schedule(&self, store: DraftStore, key: FieldKey, text: String, generation: u64) {
        let resolver = Arc::clone(&self.resolver);
        let quiescence = self.quiescence;

        let task = tokio::spawn(async move {
            tokio::time::sleep(quiescence).await;
            let outcome = resolver.resolve(&text).await;
            commit(store, key, generation, outcome).await;
        });

        if let Some(superseded) = self.tasks.lock().await.insert(key, task) {
            superseded.abort();
        }
    }

    pub async fn cancel(&self, key: FieldKey) {
        if let Some(task) = self.tasks.lock().await.remove(&key) {
            task.abort();
        }
    }

    pub async fn cancel_draft(&self, draft: Uuid) {
        self.tasks.lock().await.retain(|key, task| {
            if key.draft == draft {
                task.abort();
                return false;
            }

            true
        });
    }

    pub async fn shutdown(&self) {
        for (_, task) in self.tasks.lock().await.drain() {
            task.abort();
        }
    }
}

async fn commit(store: DraftStore, key: FieldKey, generation: u64, outcome: Option<Coordinates>) {
    let mut drafts = store.write().await;

    let field = drafts
        .get_mut(&key.draft)
        .and_then(|draft| draft.field_mut(key.slot));

    if let Some(field) = field {
        if field.apply_resolution(generation, outcome) {
            tracing::debug!(?key, "resolution committed");
        } else {
            tracing::debug!(?key, "stale resolution discarded");
        }
    }
}
