use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{AddressField, RouteDraft, Stop, Submission};
use crate::error::Error;
use crate::estimate::Estimate;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
}

#[derive(Serialize, Deserialize)]
pub struct AddStopParams {
    name: String,
}

#[derive(Serialize, Deserialize)]
pub struct AddressParams {
    text: String,
}

#[derive(Serialize, Deserialize)]
pub struct CoordinatesParams {
    latitude: f64,
    longitude: f64,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Json(params): Json<CreateParams>,
) -> Result<Json<RouteDraft>, Error> {
    let draft = api.create_draft(user, params.name).await?;

    Ok(draft.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
) -> Result<Json<RouteDraft>, Error> {
    let draft = api.find_draft(user, token).await?;

    Ok(draft.into())
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
) -> Result<(), Error> {
    api.delete_draft(user, token).await
}

pub async fn add_stop(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
    Json(params): Json<AddStopParams>,
) -> Result<Json<Stop>, Error> {
    let stop = api.add_stop(user, token, params.name).await?;

    Ok(stop.into())
}

pub async fn remove_stop(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path((token, stop_id)): Path<(Uuid, Uuid)>,
) -> Result<(), Error> {
    api.remove_stop(user, token, stop_id).await
}

pub async fn update_origin_address(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
    Json(params): Json<AddressParams>,
) -> Result<Json<AddressField>, Error> {
    let field = api.update_origin_address(user, token, params.text).await?;

    Ok(field.into())
}

pub async fn update_destination_address(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
    Json(params): Json<AddressParams>,
) -> Result<Json<AddressField>, Error> {
    let field = api
        .update_destination_address(user, token, params.text)
        .await?;

    Ok(field.into())
}

pub async fn update_stop_address(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path((token, stop_id)): Path<(Uuid, Uuid)>,
    Json(params): Json<AddressParams>,
) -> Result<Json<AddressField>, Error> {
    let field = api
        .update_stop_address(user, token, stop_id, params.text)
        .await?;

    Ok(field.into())
}

pub async fn set_origin_coordinates(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
    Json(params): Json<CoordinatesParams>,
) -> Result<Json<AddressField>, Error> {
    let field = api
        .set_origin_coordinates(user, token, params.latitude, params.longitude)
        .await?;

    Ok(field.into())
}

pub async fn set_destination_coordinates(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
    Json(params): Json<CoordinatesParams>,
) -> Result<Json<AddressField>, Error> {
    let field = api
        .set_destination_coordinates(user, token, params.latitude, params.longitude)
        .await?;

    Ok(field.into())
}

pub async fn set_stop_coordinates(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path((token, stop_id)): Path<(Uuid, Uuid)>,
    Json(params): Json<CoordinatesParams>,
) -> Result<Json<AddressField>, Error> {
    let field = api
        .set_stop_coordinates(user, token, stop_id, params.latitude, params.longitude)
        .await?;

    Ok(field.into())
}

pub async fn refresh_estimate(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
) -> Result<Json<Estimate>, Error> {
    let estimate = api.refresh_estimate(user, token).await?;

    Ok(estimate.into())
}

pub async fn submit(
    Extension(api): Extension<DynAPI>,
    Extension(user): Extension<User>,
    Path(token): Path<Uuid>,
) -> Result<Json<Submission>, Error> {
    let submission = api.submit_draft(user, token).await?;

    Ok(submission.into())
}
