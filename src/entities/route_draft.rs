use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{AddressField, Stop};
use crate::estimate::Estimate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    Origin,
    Destination,
    Stop(Uuid),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum ValidationFailure {
    NoStops,
    UnresolvedOrigin,
    UnresolvedDestination,
    UnresolvedStop { stop_id: Uuid },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Submission {
    Accepted { draft: RouteDraft },
    Rejected { failures: Vec<ValidationFailure> },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteDraft {
    pub token: Uuid,
    pub name: String,
    pub origin: AddressField,
    pub destination: AddressField,
    pub stops: Vec<Stop>,
    pub estimated_distance_km: Option<f64>,
    pub estimated_time_minutes: Option<i64>,
    pub is_active: bool,
}

impl RouteDraft {
    pub fn new(name: String) -> Self {
        Self {
            token: Uuid::new_v4(),
            name,
            origin: AddressField::new(),
            destination: AddressField::new(),
            stops: Vec::new(),
            estimated_distance_km: None,
            estimated_time_minutes: None,
            is_active: false,
        }
    }

    pub fn add_stop(&mut self, name: String) -> Stop {
        let stop = Stop::new(name, self.stops.len() as u32 + 1);
        self.stops.push(stop.clone());
        stop
    }

    // Remaining stops are renumbered contiguously, matching the dashboard's
    // renumbered rows.
    pub fn remove_stop(&mut self, stop_id: Uuid) -> Option<Stop> {
        let index = self.stops.iter().position(|stop| stop.id == stop_id)?;
        let removed = self.stops.remove(index);

        for (i, stop) in self.stops.iter_mut().enumerate() {
            stop.sequence_number = i as u32 + 1;
        }

        Some(removed)
    }

    pub fn field_mut(&mut self, slot: FieldSlot) -> Option<&mut AddressField> {
        match slot {
            FieldSlot::Origin => Some(&mut self.origin),
            FieldSlot::Destination => Some(&mut self.destination),
            FieldSlot::Stop(stop_id) => self
                .stops
                .iter_mut()
                .find(|stop| stop.id == stop_id)
                .map(|stop| &mut stop.address),
        }
    }

    // One failure per offending field, so the form can highlight all of them
    // in a single pass.
    pub fn validate_for_submit(&self) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        if self.stops.is_empty() {
            failures.push(ValidationFailure::NoStops);
        }

        if !self.origin.is_resolved() {
            failures.push(ValidationFailure::UnresolvedOrigin);
        }

        if !self.destination.is_resolved() {
            failures.push(ValidationFailure::UnresolvedDestination);
        }

        for stop in &self.stops {
            if !stop.address.is_resolved() {
                failures.push(ValidationFailure::UnresolvedStop { stop_id: stop.id });
            }
        }

        failures
    }

    pub fn set_estimate(&mut self, estimate: Estimate) {
        self.estimated_distance_km = Some(estimate.distance_km);
        self.estimated_time_minutes = Some(estimate.time_minutes);
    }
}
