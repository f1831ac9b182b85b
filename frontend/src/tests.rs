// Listing and create flows driven end to end through the state layer,
// with server bodies decoded from JSON the way the API layer sees them.
use crate::state::create_event::{submit_create_event, EventForm, FormField, FormMessage};
use crate::state::listing::{
    FilterDraft, ListingAction, ListingController, ListingStatus, TableView, LOAD_ERROR_TEXT,
    NO_EVENTS_TEXT,
};
use futures::executor::block_on;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared::{ClientError, CreatedResponse, EventListResponse, ListQueryState};
use std::rc::Rc;
use yew::functional::Reducible;

fn listing_body(page: u32, total_pages: u32, names: &[&str]) -> EventListResponse {
    let events: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, home)| {
            json!({
                "id": i + 1,
                "event_datetime": "2024-05-01T18:30:00Z",
                "sport": {"id": 1, "name": "Football"},
                "home_team": {"id": 10 + i, "name": home},
                "away_team": {"id": 99, "name": "Rapid"}
            })
        })
        .collect();
    serde_json::from_value(json!({
        "events": events,
        "pagination": {"current_page": page, "total_pages": total_pages}
    }))
    .unwrap()
}

fn reduce(state: Rc<ListingController>, action: ListingAction) -> Rc<ListingController> {
    state.reduce(action)
}

#[test]
fn test_filter_then_page_then_clear() {
    let mut state = Rc::new(ListingController::default());
    assert_eq!(state.ticket().query.events_url(""), "/api/v1/events?page=1&limit=10");

    let first = state.ticket();
    state = reduce(state, ListingAction::Loaded { seq: first.seq, result: Ok(listing_body(1, 3, &["Salzburg"])) });
    assert_eq!(state.pagination().len(), 3);

    let draft = FilterDraft { date: "2024-05-01T10:00".to_string(), sport: "1".to_string() };
    state = reduce(state, draft.to_action());
    assert_eq!(
        state.ticket().query.events_url(""),
        "/api/v1/events?page=1&limit=10&date_from=2024-05-01T10%3A00&sport_id=1"
    );

    state = reduce(state, ListingAction::SetPage(2));
    assert_eq!(state.query().page(), 2);
    assert_eq!(state.query().sport_filter(), Some(1));

    state = reduce(state, ListingAction::ClearFilters);
    assert_eq!(state.ticket().query, ListQueryState::default());
    assert_eq!(*state.status(), ListingStatus::Loading);
}

#[test]
fn test_out_of_order_responses_keep_latest() {
    let mut state = Rc::new(ListingController::default());
    let slow = state.ticket();
    state = reduce(state, ListingAction::SetPage(2));
    let fast = state.ticket();

    state = reduce(state, ListingAction::Loaded { seq: fast.seq, result: Ok(listing_body(2, 2, &["Linz"])) });
    state = reduce(state, ListingAction::Loaded { seq: slow.seq, result: Ok(listing_body(1, 2, &["Graz"])) });

    match state.table() {
        TableView::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].matchup, "Linz vs Rapid");
        }
        other => panic!("expected rows, got {:?}", other),
    }
    let current: Vec<_> = state.pagination().iter().filter(|c| c.current).map(|c| c.number).collect();
    assert_eq!(current, vec![2]);
}

#[test]
fn test_failure_then_recovery() {
    let mut state = Rc::new(ListingController::default());
    let seq = state.ticket().seq;
    state = reduce(
        state,
        ListingAction::Loaded { seq, result: Err(ClientError::Network("offline".to_string())) },
    );
    assert!(matches!(state.table(), TableView::Placeholder { text, .. } if text == LOAD_ERROR_TEXT));
    assert!(state.pagination().is_empty());

    state = reduce(state, ListingAction::ClearFilters);
    let seq = state.ticket().seq;
    state = reduce(state, ListingAction::Loaded { seq, result: Ok(listing_body(1, 0, &[])) });
    assert!(matches!(state.table(), TableView::Placeholder { text, colspan: 6, .. } if text == NO_EVENTS_TEXT));
    assert!(state.pagination().is_empty());
}

#[test]
fn test_create_flow_resets_form_only_on_success() {
    let mut form = EventForm::default();
    form.set(FormField::Datetime, "2024-05-01T10:00".to_string());
    form.set(FormField::Sport, "1".to_string());
    form.set(FormField::HomeTeam, "2".to_string());
    form.set(FormField::AwayTeam, "3".to_string());
    form.set(FormField::Venue, "42".to_string());

    let rejected = block_on(submit_create_event(&form, |_| async {
        Err(ClientError::api(400, "Bad Request", r#"{"error":"venue not found"}"#))
    }));
    assert_eq!(FormMessage::from_result(&rejected).text(), "venue not found");

    let body: CreatedResponse = serde_json::from_value(json!({"id": 314})).unwrap();
    let created = block_on(submit_create_event(&form, |payload| async move {
        let sent = serde_json::to_value(&payload).unwrap();
        assert_eq!(sent["venue_id"], 42);
        assert!(sent.get("description").is_none());
        Ok(body)
    }));
    assert_eq!(created, Ok(314));
    assert_eq!(
        FormMessage::from_result(&created).text(),
        "Successfully created event with ID: 314"
    );
}
