use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::entities::Coordinates;
use crate::error::Error;
use crate::estimate::Estimate;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    from_latitude: f64,
    from_longitude: f64,
    to_latitude: f64,
    to_longitude: f64,
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Query(params): Query<EstimateParams>,
) -> Result<Json<Estimate>, Error> {
    let from = Coordinates {
        latitude: params.from_latitude,
        longitude: params.from_longitude,
    };
    let to = Coordinates {
        latitude: params.to_latitude,
        longitude: params.to_longitude,
    };

    let estimate = api.estimate_leg(user, from, to).await?;

    Ok(estimate.into())
}
