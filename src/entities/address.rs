use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressStatus {
    Empty,
    Pending,
    Resolved,
    NotFound,
}

// Outcome of a direct geocode lookup, as served to the single-field screens.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Resolved { coordinates: Coordinates },
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditAction {
    Reset,
    Debounce(u64),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddressField {
    pub raw_text: String,
    pub status: AddressStatus,
    pub coordinates: Option<Coordinates>,
    #[serde(skip)]
    pub generation: u64,
}

impl AddressField {
    pub fn new() -> Self {
        Self {
            raw_text: String::new(),
            status: AddressStatus::Empty,
            coordinates: None,
            generation: 0,
        }
    }

    // Every edit supersedes whatever attempt is in flight for this field.
    // Text at or below the threshold resets the field outright; longer text
    // arms a new resolution attempt identified by the bumped generation.
    pub fn begin_edit(&mut self, text: &str, min_query_len: usize) -> EditAction {
        self.generation += 1;
        self.raw_text = text.to_string();
        self.coordinates = None;

        if text.trim().len() <= min_query_len {
            self.status = AddressStatus::Empty;
            EditAction::Reset
        } else {
            self.status = AddressStatus::Pending;
            EditAction::Debounce(self.generation)
        }
    }

    // Commits a resolution outcome. Attempts carrying a stale generation are
    // discarded, which is what keeps a superseded lookup from overwriting the
    // state of a newer one.
    pub fn apply_resolution(&mut self, generation: u64, outcome: Option<Coordinates>) -> bool {
        if generation != self.generation {
            return false;
        }

        match outcome {
            Some(coordinates) => {
                self.coordinates = Some(coordinates);
                self.status = AddressStatus::Resolved;
            }
            None => {
                self.coordinates = None;
                self.status = AddressStatus::NotFound;
            }
        }

        true
    }

    // Manual entry; supersedes any in-flight attempt.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.generation += 1;
        self.coordinates = Some(coordinates);
        self.status = AddressStatus::Resolved;
    }

    pub fn is_resolved(&self) -> bool {
        self.status == AddressStatus::Resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_QUERY_LEN: usize = 3;

    #[test]
    fn starts_empty() {
        let field = AddressField::new();
        assert_eq!(field.status, AddressStatus::Empty);
        assert!(field.coordinates.is_none());
    }

    #[test]
    fn short_text_resets_to_empty() {
        let mut field = AddressField::new();
        assert_eq!(
            field.begin_edit("Sector 62, Noida", MIN_QUERY_LEN),
            EditAction::Debounce(1)
        );

        assert_eq!(field.begin_edit("Se", MIN_QUERY_LEN), EditAction::Reset);
        assert_eq!(field.status, AddressStatus::Empty);
        assert!(field.coordinates.is_none());
    }

    #[test]
    fn resolution_commits_for_current_generation() {
        let mut field = AddressField::new();
        let EditAction::Debounce(generation) = field.begin_edit("Sector 62, Noida", MIN_QUERY_LEN)
        else {
            panic!("expected a debounced edit");
        };

        let coordinates = Coordinates::new(28.609, 77.363).unwrap();
        assert!(field.apply_resolution(generation, Some(coordinates)));
        assert_eq!(field.status, AddressStatus::Resolved);
        assert_eq!(field.coordinates, Some(coordinates));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut field = AddressField::new();
        let EditAction::Debounce(old) = field.begin_edit("Old Colony Road", MIN_QUERY_LEN) else {
            panic!("expected a debounced edit");
        };
        let EditAction::Debounce(new) = field.begin_edit("New Colony Road", MIN_QUERY_LEN) else {
            panic!("expected a debounced edit");
        };

        let newer = Coordinates::new(28.6327, 77.2198).unwrap();
        assert!(field.apply_resolution(new, Some(newer)));

        let stale = Coordinates::new(12.9716, 77.5946).unwrap();
        assert!(!field.apply_resolution(old, Some(stale)));
        assert_eq!(field.coordinates, Some(newer));
    }

    #[test]
    fn not_found_keeps_text_and_clears_coordinates() {
        let mut field = AddressField::new();
        let EditAction::Debounce(generation) =
            field.begin_edit("no such place anywhere", MIN_QUERY_LEN)
        else {
            panic!("expected a debounced edit");
        };

        assert!(field.apply_resolution(generation, None));
        assert_eq!(field.status, AddressStatus::NotFound);
        assert_eq!(field.raw_text, "no such place anywhere");
        assert!(field.coordinates.is_none());
    }

    #[test]
    fn manual_entry_supersedes_pending_attempt() {
        let mut field = AddressField::new();
        let EditAction::Debounce(generation) = field.begin_edit("Sector 62, Noida", MIN_QUERY_LEN)
        else {
            panic!("expected a debounced edit");
        };

        let manual = Coordinates::new(28.609, 77.363).unwrap();
        field.set_coordinates(manual);
        assert!(field.is_resolved());

        let late = Coordinates::new(12.9716, 77.5946).unwrap();
        assert!(!field.apply_resolution(generation, Some(late)));
        assert_eq!(field.coordinates, Some(manual));
    }
}
