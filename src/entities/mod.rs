mod address;
mod coordinates;
mod route_draft;
mod stop;

pub use address::{AddressField, AddressStatus, EditAction, Resolution};
pub use coordinates::Coordinates;
pub use route_draft::{FieldSlot, RouteDraft, Submission, ValidationFailure};
pub use stop::Stop;
