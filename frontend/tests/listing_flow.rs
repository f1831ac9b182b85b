use frontend::state::create_event::{loading_options, select_options, SelectOption};
use frontend::state::listing::{render_pagination, ListingAction, PageControl};
use pretty_assertions::assert_eq;
use shared::{PaginationInfo, ReferenceItem};

#[test]
fn test_page_buttons_dispatch_set_page_except_current() {
    let controls = render_pagination(&PaginationInfo {
        current_page: 2,
        total_pages: 3,
        ..Default::default()
    });

    let actions: Vec<_> = controls.iter().map(PageControl::action).collect();
    assert_eq!(
        actions,
        vec![
            Some(ListingAction::SetPage(1)),
            None,
            Some(ListingAction::SetPage(3)),
        ]
    );
}

#[test]
fn test_single_page_still_gets_a_button() {
    let controls = render_pagination(&PaginationInfo {
        current_page: 1,
        total_pages: 1,
        ..Default::default()
    });
    assert_eq!(controls, vec![PageControl { number: 1, current: true }]);
}

#[test]
fn test_reference_selects_before_and_after_load() {
    assert_eq!(
        loading_options(),
        vec![SelectOption {
            value: String::new(),
            label: "Loading...".to_string(),
            disabled: true,
        }]
    );

    let teams = vec![ReferenceItem::new(4, "Austria Wien"), ReferenceItem::new(9, "LASK")];
    let labels: Vec<_> = select_options(&teams, "Select Home Team", true)
        .into_iter()
        .map(|o| o.label)
        .collect();
    assert_eq!(labels, vec!["Select Home Team", "Austria Wien", "LASK"]);
}
