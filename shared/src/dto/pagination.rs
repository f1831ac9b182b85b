use crate::dto::event::EventSummary;
use serde::{Deserialize, Serialize};

/// Pagination metadata reported alongside a listing page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub page_size: u32,
}

/// Body of `GET /events`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventListResponse {
    pub events: Vec<EventSummary>,
    pub pagination: PaginationInfo,
}
