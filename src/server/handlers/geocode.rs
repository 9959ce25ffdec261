use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::entities::Resolution;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct ResolveParams {
    q: String,
}

pub async fn resolve(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<Resolution>, Error> {
    let resolution = api.resolve_address(user, params.q).await?;

    Ok(resolution.into())
}
