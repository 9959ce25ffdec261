mod debounce;
mod estimate_api;
mod geocode_api;
mod route_draft_api;

pub use debounce::{DebounceCoordinator, FieldKey};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::api::API;
use crate::config::Config;
use crate::entities::RouteDraft;
use crate::error::Error;
use crate::external::geocoding::{Geocoder, ResolveAddress};

pub type DraftStore = Arc<RwLock<HashMap<Uuid, RouteDraft>>>;

pub struct Engine {
    drafts: DraftStore,
    resolver: Arc<dyn ResolveAddress>,
    coordinator: DebounceCoordinator,
    average_speed_kmh: f64,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        let resolver = Arc::new(Geocoder::new(&config.geocoder)?);

        Ok(Self::with_resolver(config, resolver))
    }

    // Seam for scripted resolvers in tests and alternative providers.
    pub fn with_resolver(config: &Config, resolver: Arc<dyn ResolveAddress>) -> Self {
        Self {
            drafts: Arc::new(RwLock::new(HashMap::new())),
            resolver: Arc::clone(&resolver),
            coordinator: DebounceCoordinator::new(&config.debounce, resolver),
            average_speed_kmh: config.average_speed_kmh,
        }
    }

    // Aborts every outstanding quiescence timer and in-flight resolution.
    pub async fn shutdown(&self) {
        self.coordinator.shutdown().await;
    }
}

impl API for Engine {}
