//! In-memory events catalog behind the stub API.
//!
//! Listing and create rules follow the production service: events are
//! ordered by start time, `date_from` is inclusive, page and limit fall back
//! to the defaults when missing or zero, and a create is rejected when it
//! points at an unknown sport, team or venue.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Deserialize;
use shared::endpoints::{DEFAULT_LIMIT, DEFAULT_PAGE};
use shared::{CreateEventRequest, EventListResponse, EventSummary, PaginationInfo, ReferenceItem};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    BadRequest(String),
}

/// Query parameters accepted by `GET /events`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub date_from: Option<String>,
    pub sport_id: Option<i64>,
}

#[derive(Debug, Clone)]
struct StoredEvent {
    id: i64,
    starts_at: DateTime<Utc>,
    sport_id: i64,
    home_team_id: i64,
    away_team_id: i64,
    venue_id: Option<i64>,
    home_score: Option<i32>,
    away_score: Option<i32>,
    description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sports: Vec<ReferenceItem>,
    teams: Vec<ReferenceItem>,
    venues: Vec<ReferenceItem>,
    events: Vec<StoredEvent>,
    next_id: i64,
}

impl Catalog {
    /// Two sports, four teams, two venues and a dozen football fixtures
    /// spread over May 2024, plus one ice hockey game.
    pub fn seeded() -> Self {
        let mut catalog = Self {
            sports: vec![ReferenceItem::new(1, "Football"), ReferenceItem::new(2, "Ice Hockey")],
            teams: vec![
                ReferenceItem::new(1, "Salzburg"),
                ReferenceItem::new(2, "Sturm"),
                ReferenceItem::new(3, "KAC"),
                ReferenceItem::new(4, "Capitals"),
            ],
            venues: vec![
                ReferenceItem::new(1, "Red Bull Arena"),
                ReferenceItem::new(2, "Stadthalle Klagenfurt"),
            ],
            events: Vec::new(),
            next_id: 1,
        };

        for day in 1..=12u32 {
            let (home, away) = if day % 2 == 0 { (1, 2) } else { (2, 1) };
            let played = day <= 6;
            catalog.insert(StoredEvent {
                id: 0,
                starts_at: Utc.with_ymd_and_hms(2024, 5, day, 18, 30, 0).single().unwrap_or_default(),
                sport_id: 1,
                home_team_id: home,
                away_team_id: away,
                venue_id: (day % 3 != 0).then_some(1),
                home_score: played.then_some(day as i32 % 4),
                away_score: played.then_some(1),
                description: (day == 1).then(|| "Season opener".to_string()),
            });
        }
        catalog.insert(StoredEvent {
            id: 0,
            starts_at: Utc.with_ymd_and_hms(2024, 5, 3, 19, 15, 0).single().unwrap_or_default(),
            sport_id: 2,
            home_team_id: 3,
            away_team_id: 4,
            venue_id: Some(2),
            home_score: None,
            away_score: None,
            description: None,
        });
        catalog
    }

    pub fn sports(&self) -> &[ReferenceItem] {
        &self.sports
    }

    pub fn teams(&self) -> &[ReferenceItem] {
        &self.teams
    }

    pub fn venues(&self) -> &[ReferenceItem] {
        &self.venues
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn list(&self, params: &ListParams) -> Result<EventListResponse, CatalogError> {
        let page = params.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = params.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        let date_from = params.date_from.as_deref().map(parse_date_from).transpose()?;

        let mut matching: Vec<&StoredEvent> = self
            .events
            .iter()
            .filter(|e| params.sport_id.map_or(true, |id| e.sport_id == id))
            .filter(|e| date_from.map_or(true, |from| e.starts_at >= from))
            .collect();
        matching.sort_by_key(|e| (e.starts_at, e.id));

        let total_items = matching.len() as u64;
        let total_pages = total_items.div_ceil(u64::from(limit)) as u32;
        let offset = (page as usize - 1) * limit as usize;

        let events = matching
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .filter_map(|e| self.summary(e))
            .collect();

        Ok(EventListResponse {
            events,
            pagination: PaginationInfo {
                current_page: page,
                total_pages,
                total_items,
                page_size: limit,
            },
        })
    }

    pub fn create(&mut self, request: &CreateEventRequest) -> Result<i64, CatalogError> {
        let starts_at = DateTime::parse_from_rfc3339(&request.event_datetime)
            .map_err(|_| CatalogError::BadRequest("invalid event_datetime".to_string()))?
            .with_timezone(&Utc);
        if starts_at < Utc::now() {
            return Err(CatalogError::BadRequest("cannot create an event in the past".to_string()));
        }

        lookup(&self.sports, request.sport_id).ok_or(CatalogError::NotFound("sport"))?;
        lookup(&self.teams, request.home_team_id).ok_or(CatalogError::NotFound("home team"))?;
        lookup(&self.teams, request.away_team_id).ok_or(CatalogError::NotFound("away team"))?;
        if request.home_team_id == request.away_team_id {
            return Err(CatalogError::BadRequest(
                "home and away team must be different".to_string(),
            ));
        }
        if let Some(venue_id) = request.venue_id {
            lookup(&self.venues, venue_id).ok_or(CatalogError::NotFound("venue"))?;
        }

        Ok(self.insert(StoredEvent {
            id: 0,
            starts_at,
            sport_id: request.sport_id,
            home_team_id: request.home_team_id,
            away_team_id: request.away_team_id,
            venue_id: request.venue_id,
            home_score: None,
            away_score: None,
            description: request.description.clone(),
        }))
    }

    fn insert(&mut self, mut event: StoredEvent) -> i64 {
        event.id = self.next_id;
        self.next_id += 1;
        self.events.push(event);
        self.next_id - 1
    }

    fn summary(&self, event: &StoredEvent) -> Option<EventSummary> {
        Some(EventSummary {
            id: event.id,
            sport: lookup(&self.sports, event.sport_id)?.clone(),
            home_team: lookup(&self.teams, event.home_team_id)?.clone(),
            away_team: lookup(&self.teams, event.away_team_id)?.clone(),
            home_score: event.home_score,
            away_score: event.away_score,
            venue: event.venue_id.and_then(|id| lookup(&self.venues, id)).cloned(),
            event_datetime: event.starts_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            description: event.description.clone(),
        })
    }
}

fn lookup(items: &[ReferenceItem], id: i64) -> Option<&ReferenceItem> {
    items.iter().find(|item| item.id == id)
}

/// Accepts an RFC 3339 instant, a `datetime-local` value (read as UTC) or a bare date.
fn parse_date_from(raw: &str) -> Result<DateTime<Utc>, CatalogError> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CatalogError::BadRequest("invalid date_from".to_string()))
}
