use crate::dto::reference::ReferenceItem;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One row of the public listing, as the server sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventSummary {
    pub id: i64,
    pub sport: ReferenceItem,
    pub home_team: ReferenceItem,
    pub away_team: ReferenceItem,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub venue: Option<ReferenceItem>,
    /// ISO-8601 timestamp, kept as sent so a malformed value can still be shown
    pub event_datetime: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for `POST /events`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CreateEventRequest {
    /// UTC instant, e.g. `2024-05-01T08:00:00.000Z`
    #[validate(length(min = 1, message = "Datetime value is required"))]
    pub event_datetime: String,
    #[validate(range(min = 1, message = "Sport must be selected"))]
    pub sport_id: i64,
    #[validate(range(min = 1, message = "Home team must be selected"))]
    pub home_team_id: i64,
    #[validate(range(min = 1, message = "Away team must be selected"))]
    pub away_team_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Venue must be a valid selection"))]
    pub venue_id: Option<i64>,
}
