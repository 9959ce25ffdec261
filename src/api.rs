use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::{AddressField, Coordinates, Resolution, RouteDraft, Stop, Submission};
use crate::error::Error;
use crate::estimate::Estimate;

#[async_trait]
pub trait GeocodeAPI {
    async fn resolve_address(&self, user: User, query: String) -> Result<Resolution, Error>;
}

#[async_trait]
pub trait EstimateAPI {
    async fn estimate_leg(
        &self,
        user: User,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<Estimate, Error>;
}

#[async_trait]
pub trait RouteDraftAPI {
    async fn create_draft(&self, user: User, name: String) -> Result<RouteDraft, Error>;

    async fn find_draft(&self, user: User, token: Uuid) -> Result<RouteDraft, Error>;

    async fn delete_draft(&self, user: User, token: Uuid) -> Result<(), Error>;

    async fn add_stop(&self, user: User, token: Uuid, name: String) -> Result<Stop, Error>;

    async fn remove_stop(&self, user: User, token: Uuid, stop_id: Uuid) -> Result<(), Error>;

    async fn update_origin_address(
        &self,
        user: User,
        token: Uuid,
        text: String,
    ) -> Result<AddressField, Error>;

    async fn update_destination_address(
        &self,
        user: User,
        token: Uuid,
        text: String,
    ) -> Result<AddressField, Error>;

    async fn update_stop_address(
        &self,
        user: User,
        token: Uuid,
        stop_id: Uuid,
        text: String,
    ) -> Result<AddressField, Error>;

    async fn set_origin_coordinates(
        &self,
        user: User,
        token: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressField, Error>;

    async fn set_destination_coordinates(
        &self,
        user: User,
        token: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressField, Error>;

    async fn set_stop_coordinates(
        &self,
        user: User,
        token: Uuid,
        stop_id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressField, Error>;

    async fn refresh_estimate(&self, user: User, token: Uuid) -> Result<Estimate, Error>;

    async fn submit_draft(&self, user: User, token: Uuid) -> Result<Submission, Error>;
}

pub trait API: GeocodeAPI + EstimateAPI + RouteDraftAPI {}
