use crate::api::events::list_events;
use crate::api::reference::get_sports;
use crate::components::event_filters::EventFilters;
use crate::components::event_table::EventTable;
use crate::components::pagination::Pagination;
use crate::config::Config;
use crate::state::listing::{ListingAction, ListingController};
use log::debug;
use shared::{ListQueryState, ReferenceItem};
use web_sys::AbortController;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventsProps {}

/// Public listing: filters, event table and page buttons.
#[function_component(Events)]
pub fn events(_props: &EventsProps) -> Html {
    let controller = use_reducer_eq(|| {
        ListingController::new(ListQueryState::new(Config::default_page_size()))
    });
    let sports = use_state(Vec::<ReferenceItem>::new);

    // Load sports for the filter on mount
    {
        let sports = sports.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_sports().await {
                    Ok(list) => sports.set(list),
                    Err(e) => e.log("load_sports_filter"),
                }
            });
        });
    }

    // Refetch whenever the controller issues a new ticket. The previous
    // request is aborted on the way out; its result would be discarded anyway.
    {
        let dispatcher = controller.dispatcher();
        use_effect_with(controller.ticket(), move |ticket| {
            let ticket = ticket.clone();
            let abort = AbortController::new().ok();
            let signal = abort.as_ref().map(|a| a.signal());

            wasm_bindgen_futures::spawn_local(async move {
                let result = list_events(&ticket.query, signal.as_ref()).await;
                if signal.as_ref().map(|s| s.aborted()).unwrap_or(false) {
                    debug!("Events request {} superseded", ticket.seq);
                    return;
                }
                if let Err(e) = &result {
                    e.log("fetch_events");
                }
                dispatcher.dispatch(ListingAction::Loaded {
                    seq: ticket.seq,
                    result,
                });
            });

            move || {
                if let Some(abort) = abort {
                    abort.abort();
                }
            }
        });
    }

    let on_action = {
        let dispatcher = controller.dispatcher();
        Callback::from(move |action: ListingAction| dispatcher.dispatch(action))
    };

    let on_page_change = {
        let dispatcher = controller.dispatcher();
        Callback::from(move |page: u32| dispatcher.dispatch(ListingAction::SetPage(page)))
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold mb-6">{"Upcoming & Past Events"}</h1>
            <EventFilters sports={(*sports).clone()} {on_action} />
            <div class="overflow-x-auto bg-white rounded shadow">
                <EventTable table={controller.table()} />
            </div>
            <Pagination controls={controller.pagination()} {on_page_change} />
        </div>
    }
}
