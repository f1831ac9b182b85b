use crate::api::api_url;
use crate::api::utils::{get_json, post_json};
use log::debug;
use shared::endpoints::EVENTS;
use shared::{CreateEventRequest, CreatedResponse, EventListResponse, ListQueryState, Result};
use web_sys::AbortSignal;

pub async fn list_events(
    query: &ListQueryState,
    signal: Option<&AbortSignal>,
) -> Result<EventListResponse> {
    let url = query.events_url(&api_url(""));
    debug!("Fetching events: {}", url);

    let listing = get_json::<EventListResponse>(&url, signal).await?;

    debug!(
        "Fetched {} events, page {}/{}",
        listing.events.len(),
        listing.pagination.current_page,
        listing.pagination.total_pages
    );
    Ok(listing)
}

pub async fn create_event(event: CreateEventRequest) -> Result<CreatedResponse> {
    debug!(
        "Creating event: sport {} home {} away {}",
        event.sport_id, event.home_team_id, event.away_team_id
    );

    let created = post_json::<_, CreatedResponse>(&api_url(EVENTS), &event).await?;

    debug!("Successfully created event with ID: {}", created.id);
    Ok(created)
}
