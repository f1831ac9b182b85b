use crate::components::reference_select::ReferenceSelect;
use crate::state::create_event::select_options;
use crate::state::listing::{FilterDraft, ListingAction};
use shared::ReferenceItem;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventFiltersProps {
    pub sports: Vec<ReferenceItem>,
    /// Receives `ApplyFilter` on submit and `ClearFilters` on clear
    pub on_action: Callback<ListingAction>,
}

/// Date and sport filters. Inputs are drafts until the form is submitted.
#[function_component(EventFilters)]
pub fn event_filters(props: &EventFiltersProps) -> Html {
    let draft = use_state(FilterDraft::default);

    let on_date_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.date = input.value();
            draft.set(next);
        })
    };

    let on_sport_change = {
        let draft = draft.clone();
        Callback::from(move |sport: String| {
            let mut next = (*draft).clone();
            next.sport = sport;
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_action.emit(draft.to_action());
        })
    };

    let on_clear = {
        let draft = draft.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(FilterDraft::default());
            on_action.emit(ListingAction::ClearFilters);
        })
    };

    html! {
        <form id="filter-form" onsubmit={on_submit} class="flex flex-wrap items-end gap-4 mb-4">
            <label for="date-filter" class="block">
                <span class="block text-sm font-medium mb-1">{"From date"}</span>
                <input
                    id="date-filter"
                    type="date"
                    value={draft.date.clone()}
                    onchange={on_date_change}
                    class="rounded border border-gray-300 px-2 py-1"
                />
            </label>
            <ReferenceSelect
                id="sport-filter"
                label="Sport"
                options={select_options(&props.sports, "All Sports", false)}
                value={draft.sport.clone()}
                on_change={on_sport_change}
            />
            <div class="flex gap-2 mb-3">
                <button type="submit" class="px-4 py-1 rounded bg-blue-600 text-white">{"Filter"}</button>
                <button id="filter-clear" type="button" onclick={on_clear} class="px-4 py-1 rounded border border-gray-300">
                    {"Clear"}
                </button>
            </div>
        </form>
    }
}
