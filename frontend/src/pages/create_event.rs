use crate::api::events::create_event;
use crate::api::reference::{load_reference_data, ReferenceData};
use crate::components::form_message::FormMessageView;
use crate::components::reference_select::ReferenceSelect;
use crate::state::create_event::{
    loading_options, select_options, submit_create_event, EventForm, FormField, FormMessage,
};
use shared::ReferenceItem;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const LOAD_FAILED_TEXT: &str = "Failed to load initial data.";

#[derive(Properties, PartialEq)]
pub struct CreateEventProps {}

#[derive(Debug, Clone, PartialEq)]
enum ReferenceStatus {
    Loading,
    Ready(ReferenceData),
    Failed,
}

/// Admin console: create an event from reference-data dropdowns.
#[function_component(CreateEvent)]
pub fn create_event_page(_props: &CreateEventProps) -> Html {
    let reference = use_state(|| ReferenceStatus::Loading);
    let form = use_state(EventForm::default);
    let message = use_state(|| None::<FormMessage>);
    let is_submitting = use_state(|| false);

    // Load sports, teams and venues on mount
    {
        let reference = reference.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match load_reference_data().await {
                    Ok(data) => reference.set(ReferenceStatus::Ready(data)),
                    Err(e) => {
                        e.log("load_reference_data");
                        reference.set(ReferenceStatus::Failed);
                    }
                }
            });
        });
    }

    let on_field_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let message = message.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let form = form.clone();
            let message = message.clone();
            let is_submitting = is_submitting.clone();
            let draft = (*form).clone();
            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let result = submit_create_event(&draft, create_event).await;
                match &result {
                    Ok(_) => form.set(EventForm::default()),
                    Err(e) => e.log("handle_form_submit"),
                }
                message.set(Some(FormMessage::from_result(&result)));
                is_submitting.set(false);
            });
        })
    };

    let items = match &*reference {
        ReferenceStatus::Ready(data) => Some(data),
        _ => None,
    };
    let select_for = |field: FormField, label: &'static str, placeholder: &'static str, list: Option<&Vec<ReferenceItem>>, required: bool| {
        reference_field(field, label, placeholder, list, required, &form, &on_field_change)
    };

    let on_datetime_change = on_field_change.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (FormField::Datetime, input.value())
    });

    let on_description_input = on_field_change.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        (FormField::Description, input.value())
    });

    html! {
        <div class="max-w-3xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold mb-6">{"Create Event"}</h1>
            if *reference == ReferenceStatus::Failed {
                <div class="mb-4" role="alert">
                    <mark class="text-red-600">{LOAD_FAILED_TEXT}</mark>
                </div>
            }
            <form id="create-event-form" onsubmit={on_submit} class="bg-white rounded shadow p-6">
                <label for="datetime" class="block mb-3">
                    <span class="block text-sm font-medium mb-1">{"Date & Time"}</span>
                    <input
                        id="datetime"
                        name="datetime"
                        type="datetime-local"
                        required=true
                        value={form.datetime.clone()}
                        onchange={on_datetime_change}
                        class="w-full rounded border border-gray-300 px-2 py-1"
                    />
                </label>
                { select_for(FormField::Sport, "Sport", "Select Sport", items.map(|d| &d.sports), true) }
                { select_for(FormField::HomeTeam, "Home Team", "Select Home Team", items.map(|d| &d.teams), true) }
                { select_for(FormField::AwayTeam, "Away Team", "Select Away Team", items.map(|d| &d.teams), true) }
                { select_for(FormField::Venue, "Venue", "Select Venue (Optional)", items.map(|d| &d.venues), false) }
                <label for="description" class="block mb-3">
                    <span class="block text-sm font-medium mb-1">{"Description"}</span>
                    <textarea
                        id="description"
                        name="description"
                        value={form.description.clone()}
                        oninput={on_description_input}
                        class="w-full rounded border border-gray-300 px-2 py-1"
                    />
                </label>
                <button
                    type="submit"
                    disabled={*is_submitting || !matches!(*reference, ReferenceStatus::Ready(_))}
                    class="px-4 py-2 rounded bg-blue-600 text-white disabled:opacity-50"
                >
                    { if *is_submitting { "Creating..." } else { "Create Event" } }
                </button>
                <FormMessageView message={(*message).clone()} />
            </form>
        </div>
    }
}

/// Select for one reference field; shows a loading entry until `list` arrives.
fn reference_field(
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    list: Option<&Vec<ReferenceItem>>,
    required: bool,
    form: &EventForm,
    on_field_change: &Callback<(FormField, String)>,
) -> Html {
    let options = match list {
        Some(items) => select_options(items, placeholder, required),
        None => loading_options(),
    };
    html! {
        <ReferenceSelect
            id={field.name()}
            {label}
            {options}
            value={form.value(field).to_string()}
            {required}
            on_change={on_field_change.reform(move |value: String| (field, value))}
        />
    }
}
