use super::Engine;

use async_trait::async_trait;

use crate::api::EstimateAPI;
use crate::auth::User;
use crate::entities::Coordinates;
use crate::error::{invalid_coordinates_error, Error};
use crate::estimate::{self, Estimate};

#[async_trait]
impl EstimateAPI for Engine {
    // Inputs arrive straight from the request layer, so they are re-validated
    // before the math runs.
    #[tracing::instrument(skip(self))]
    async fn estimate_leg(
        &self,
        user: User,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<Estimate, Error> {
        let from = Coordinates::new(from.latitude, from.longitude)
            .ok_or_else(|| invalid_coordinates_error())?;
        let to =
            Coordinates::new(to.latitude, to.longitude).ok_or_else(|| invalid_coordinates_error())?;

        Ok(estimate::leg(Some(from), Some(to), self.average_speed_kmh))
    }
}
