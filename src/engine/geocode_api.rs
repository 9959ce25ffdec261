use super::Engine;

use async_trait::async_trait;

use crate::api::GeocodeAPI;
use crate::auth::User;
use crate::entities::Resolution;
use crate::error::{invalid_input_error, Error};

#[async_trait]
impl GeocodeAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_address(&self, user: User, query: String) -> Result<Resolution, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(invalid_input_error());
        }

        match self.resolver.resolve(query).await {
            Some(coordinates) => Ok(Resolution::Resolved { coordinates }),
            None => Ok(Resolution::NotFound),
        }
    }
}
