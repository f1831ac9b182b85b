use serde::{Deserialize, Serialize};

/// Lookup entry used for sports, teams and venues alike.
///
/// The server sends more than this for some lists (a venue's city, a team's
/// city); anything beyond `id` and `name` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceItem {
    pub id: i64,
    pub name: String,
}

impl ReferenceItem {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
