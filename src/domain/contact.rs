use serde::{Deserialize, Serialize};

/// One entry of the contact list. Immutable once created; the list itself
/// is append-only except for full replacement on refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(id: String, name: String, phone: String) -> Self {
        Self { id, name, phone }
    }
}
