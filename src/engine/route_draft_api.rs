use super::{Engine, FieldKey};

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::RouteDraftAPI;
use crate::auth::User;
use crate::entities::{
    AddressField, Coordinates, EditAction, FieldSlot, RouteDraft, Stop, Submission,
};
use crate::error::{invalid_coordinates_error, invalid_input_error, Error};
use crate::estimate::{self, Estimate};

impl Engine {
    async fn edit_field(
        &self,
        token: Uuid,
        slot: FieldSlot,
        text: String,
    ) -> Result<AddressField, Error> {
        let key = FieldKey { draft: token, slot };

        let (action, snapshot) = {
            let mut drafts = self.drafts.write().await;
            let draft = drafts.get_mut(&token).ok_or_else(|| invalid_input_error())?;
            let field = draft.field_mut(slot).ok_or_else(|| invalid_input_error())?;

            let action = field.begin_edit(&text, self.coordinator.min_query_len());
            (action, field.clone())
        };

        match action {
            EditAction::Reset => self.coordinator.cancel(key).await,
            EditAction::Debounce(generation) => {
                self.coordinator
                    .schedule(Arc::clone(&self.drafts), key, text, generation)
                    .await
            }
        }

        Ok(snapshot)
    }

    async fn set_field_coordinates(
        &self,
        token: Uuid,
        slot: FieldSlot,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressField, Error> {
        let coordinates =
            Coordinates::new(latitude, longitude).ok_or_else(|| invalid_coordinates_error())?;

        let snapshot = {
            let mut drafts = self.drafts.write().await;
            let draft = drafts.get_mut(&token).ok_or_else(|| invalid_input_error())?;
            let field = draft.field_mut(slot).ok_or_else(|| invalid_input_error())?;

            field.set_coordinates(coordinates);
            field.clone()
        };

        // manual entry supersedes any in-flight lookup
        self.coordinator.cancel(FieldKey { draft: token, slot }).await;

        Ok(snapshot)
    }
}

#[async_trait]
impl RouteDraftAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_draft(&self, user: User, name: String) -> Result<RouteDraft, Error> {
        let draft = RouteDraft::new(name);

        let mut drafts = self.drafts.write().await;
        drafts.insert(draft.token, draft.clone());

        Ok(draft)
    }

    #[tracing::instrument(skip(self))]
    async fn find_draft(&self, user: User, token: Uuid) -> Result<RouteDraft, Error> {
        let drafts = self.drafts.read().await;

        drafts
            .get(&token)
            .cloned()
            .ok_or_else(|| invalid_input_error())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_draft(&self, user: User, token: Uuid) -> Result<(), Error> {
        {
            let mut drafts = self.drafts.write().await;
            drafts.remove(&token).ok_or_else(|| invalid_input_error())?;
        }

        self.coordinator.cancel_draft(token).await;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn add_stop(&self, user: User, token: Uuid, name: String) -> Result<Stop, Error> {
        let mut drafts = self.drafts.write().await;
        let draft = drafts.get_mut(&token).ok_or_else(|| invalid_input_error())?;

        Ok(draft.add_stop(name))
    }

    #[tracing::instrument(skip(self))]
    async fn remove_stop(&self, user: User, token: Uuid, stop_id: Uuid) -> Result<(), Error> {
        {
            let mut drafts = self.drafts.write().await;
            let draft = drafts.get_mut(&token).ok_or_else(|| invalid_input_error())?;
            draft
                .remove_stop(stop_id)
                .ok_or_else(|| invalid_input_error())?;
        }

        // a late callback must not land in a deleted field
        self.coordinator
            .cancel(FieldKey {
                draft: token,
                slot: FieldSlot::Stop(stop_id),
            })
            .await;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn update_origin_address(
        &self,
        user: User,
        token: Uuid,
        text: String,
    ) -> Result<AddressField, Error> {
        self.edit_field(token, FieldSlot::Origin, text).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_destination_address(
        &self,
        user: User,
        token: Uuid,
        text: String,
    ) -> Result<AddressField, Error> {
        self.edit_field(token, FieldSlot::Destination, text).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_stop_address(
        &self,
        user: User,
        token: Uuid,
        stop_id: Uuid,
        text: String,
    ) -> Result<AddressField, Error> {
        self.edit_field(token, FieldSlot::Stop(stop_id), text).await
    }

    #[tracing::instrument(skip(self))]
    async fn set_origin_coordinates(
        &self,
        user: User,
        token: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressField, Error> {
        self.set_field_coordinates(token, FieldSlot::Origin, latitude, longitude)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn set_destination_coordinates(
        &self,
        user: User,
        token: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressField, Error> {
        self.set_field_coordinates(token, FieldSlot::Destination, latitude, longitude)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn set_stop_coordinates(
        &self,
        user: User,
        token: Uuid,
        stop_id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<AddressField, Error> {
        self.set_field_coordinates(token, FieldSlot::Stop(stop_id), latitude, longitude)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn refresh_estimate(&self, user: User, token: Uuid) -> Result<Estimate, Error> {
        let mut drafts = self.drafts.write().await;
        let draft = drafts.get_mut(&token).ok_or_else(|| invalid_input_error())?;

        let leg = estimate::leg(
            draft.origin.coordinates,
            draft.destination.coordinates,
            self.average_speed_kmh,
        );
        draft.set_estimate(leg);

        Ok(leg)
    }

    #[tracing::instrument(skip(self))]
    async fn submit_draft(&self, user: User, token: Uuid) -> Result<Submission, Error> {
        let mut drafts = self.drafts.write().await;
        let draft = drafts.get_mut(&token).ok_or_else(|| invalid_input_error())?;

        let failures = draft.validate_for_submit();
        if !failures.is_empty() {
            return Ok(Submission::Rejected { failures });
        }

        let leg = estimate::leg(
            draft.origin.coordinates,
            draft.destination.coordinates,
            self.average_speed_kmh,
        );
        draft.set_estimate(leg);
        draft.is_active = true;

        Ok(Submission::Accepted {
            draft: draft.clone(),
        })
    }
}
