use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Explicit request context; handlers inject it per request so nothing in the
// core reaches for ambient session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub roles: Vec<String>,
}

impl User {
    pub fn new_system_user() -> Self {
        Self {
            id: Uuid::new_v4(),
            roles: vec!["system".into()],
        }
    }
}
