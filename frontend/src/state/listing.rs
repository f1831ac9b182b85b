use log::{debug, warn};
use shared::datetime::format_local_datetime;
use shared::{ClientError, EventListResponse, EventSummary, ListQueryState, PaginationInfo};
use std::rc::Rc;
use yew::prelude::*;

pub const EVENT_TABLE_COLUMNS: [&str; 6] = ["Sport", "Match", "Score", "Venue", "Date & Time", "Description"];

pub const NO_EVENTS_TEXT: &str = "No events found matching your criteria.";
pub const LOADING_TEXT: &str = "Loading...";
pub const LOAD_ERROR_TEXT: &str = "Error loading events. Please try again later.";

/// A fetch the listing screen must issue: the query plus the sequence number
/// its result has to carry back to be accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQueryState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingStatus {
    Loading,
    Loaded(EventListResponse),
    Failed(ClientError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingAction {
    ApplyFilter {
        date: Option<String>,
        sport_id: Option<i64>,
    },
    ClearFilters,
    SetPage(u32),
    Loaded {
        seq: u64,
        result: Result<EventListResponse, ClientError>,
    },
}

/// Owns the listing query state and the outcome of the latest fetch.
///
/// Every query mutation bumps `seq`; a fetch result is only accepted when it
/// carries the current `seq`, so a slow response can never overwrite the
/// result of a later query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingController {
    query: ListQueryState,
    seq: u64,
    status: ListingStatus,
}

impl Default for ListingController {
    fn default() -> Self {
        Self::new(ListQueryState::default())
    }
}

impl ListingController {
    pub fn new(query: ListQueryState) -> Self {
        Self {
            query,
            seq: 1,
            status: ListingStatus::Loading,
        }
    }

    pub fn query(&self) -> &ListQueryState {
        &self.query
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            seq: self.seq,
            query: self.query.clone(),
        }
    }

    pub fn apply_filter(&mut self, date: Option<String>, sport_id: Option<i64>) -> FetchTicket {
        self.query.apply_filter(date, sport_id);
        self.dispatch_fetch()
    }

    pub fn clear_filters(&mut self) -> FetchTicket {
        self.query.clear_filters();
        self.dispatch_fetch()
    }

    pub fn set_page(&mut self, page: u32) -> FetchTicket {
        self.query.set_page(page);
        self.dispatch_fetch()
    }

    /// Records a fetch outcome. Returns `false` when it belongs to a superseded fetch.
    pub fn accept(&mut self, seq: u64, result: Result<EventListResponse, ClientError>) -> bool {
        if seq != self.seq {
            debug!("Discarding stale events response {} (latest {})", seq, self.seq);
            return false;
        }

        self.status = match result {
            Ok(listing) => {
                if listing.pagination.current_page != self.query.page() {
                    warn!(
                        "Server reported page {} for requested page {}",
                        listing.pagination.current_page,
                        self.query.page()
                    );
                }
                ListingStatus::Loaded(listing)
            }
            Err(e) => ListingStatus::Failed(e),
        };
        true
    }

    pub fn table(&self) -> TableView {
        match &self.status {
            ListingStatus::Loading => TableView::placeholder(LOADING_TEXT, PlaceholderTone::Muted),
            ListingStatus::Failed(_) => TableView::placeholder(LOAD_ERROR_TEXT, PlaceholderTone::Error),
            ListingStatus::Loaded(listing) => render_table(&listing.events),
        }
    }

    /// Page controls from the latest accepted response only.
    pub fn pagination(&self) -> Vec<PageControl> {
        match &self.status {
            ListingStatus::Loaded(listing) => render_pagination(&listing.pagination),
            _ => Vec::new(),
        }
    }

    fn dispatch_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        self.status = ListingStatus::Loading;
        self.ticket()
    }
}

impl Reducible for ListingController {
    type Action = ListingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListingAction::ApplyFilter { date, sport_id } => {
                next.apply_filter(date, sport_id);
            }
            ListingAction::ClearFilters => {
                next.clear_filters();
            }
            ListingAction::SetPage(page) => {
                next.set_page(page);
            }
            ListingAction::Loaded { seq, result } => {
                if !next.accept(seq, result) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Filter inputs as typed, before they are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterDraft {
    pub date: String,
    pub sport: String,
}

impl FilterDraft {
    /// The apply action for these inputs. An unparsable sport id means no sport filter.
    pub fn to_action(&self) -> ListingAction {
        let sport_id = match self.sport.trim() {
            "" => None,
            raw => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("Ignoring invalid sport filter {:?}", raw);
                    None
                }
            },
        };
        ListingAction::ApplyFilter {
            date: Some(self.date.clone()),
            sport_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderTone {
    Muted,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Single row spanning every column
    Placeholder {
        text: &'static str,
        colspan: usize,
        tone: PlaceholderTone,
    },
    Rows(Vec<EventRow>),
}

impl TableView {
    fn placeholder(text: &'static str, tone: PlaceholderTone) -> Self {
        Self::Placeholder {
            text,
            colspan: EVENT_TABLE_COLUMNS.len(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub id: i64,
    pub sport: String,
    pub matchup: String,
    pub score: String,
    pub venue: String,
    pub datetime: String,
    pub description: String,
}

impl From<&EventSummary> for EventRow {
    fn from(event: &EventSummary) -> Self {
        let score = match event.home_score {
            Some(home) => format!(
                "{} - {}",
                home,
                event
                    .away_score
                    .map(|away| away.to_string())
                    .unwrap_or_else(|| "N/A".to_string())
            ),
            None => "N/A".to_string(),
        };

        Self {
            id: event.id,
            sport: event.sport.name.clone(),
            matchup: format!("{} vs {}", event.home_team.name, event.away_team.name),
            score,
            venue: event
                .venue
                .as_ref()
                .map(|v| v.name.clone())
                .unwrap_or_else(|| "TBD".to_string()),
            datetime: format_local_datetime(&event.event_datetime),
            description: event.description.clone().unwrap_or_default(),
        }
    }
}

impl EventRow {
    /// Cell texts in column order
    pub fn cells(&self) -> [&str; 6] {
        [
            self.sport.as_str(),
            self.matchup.as_str(),
            self.score.as_str(),
            self.venue.as_str(),
            self.datetime.as_str(),
            self.description.as_str(),
        ]
    }
}

pub fn render_table(events: &[EventSummary]) -> TableView {
    if events.is_empty() {
        return TableView::placeholder(NO_EVENTS_TEXT, PlaceholderTone::Muted);
    }
    TableView::Rows(events.iter().map(EventRow::from).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: u32,
    /// The page on screen; rendered disabled with no click handler
    pub current: bool,
}

impl PageControl {
    /// Action dispatched on click, `None` for the current page.
    pub fn action(&self) -> Option<ListingAction> {
        (!self.current).then_some(ListingAction::SetPage(self.number))
    }
}

pub fn render_pagination(info: &PaginationInfo) -> Vec<PageControl> {
    (1..=info.total_pages)
        .map(|number| PageControl {
            number,
            current: number == info.current_page,
        })
        .collect()
}
