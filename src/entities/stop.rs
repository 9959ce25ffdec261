use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::AddressField;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stop {
    pub id: Uuid,
    pub name: String,
    pub address: AddressField,
    pub sequence_number: u32,
}

impl Stop {
    pub fn new(name: String, sequence_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            address: AddressField::new(),
            sequence_number,
        }
    }
}
