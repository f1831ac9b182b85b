use crate::state::create_event::SelectOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReferenceSelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    /// Currently selected value, empty for the placeholder
    pub value: String,
    #[prop_or_default]
    pub required: bool,
    pub on_change: Callback<String>,
}

/// Controlled `<select>` over precomputed options.
///
/// `selected` only covers the first paint. Once the user has picked an option
/// the browser ignores attribute changes, so the value is pushed onto the
/// element whenever it or the options change.
#[function_component(ReferenceSelect)]
pub fn reference_select(props: &ReferenceSelectProps) -> Html {
    let select_ref = use_node_ref();

    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (props.value.clone(), props.options.clone()),
            move |(value, _)| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value(value);
                }
            },
        );
    }

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label for={props.id.clone()} class="block mb-3">
            <span class="block text-sm font-medium mb-1">{props.label.clone()}</span>
            <select
                ref={select_ref}
                id={props.id.clone()}
                name={props.id.clone()}
                required={props.required}
                {onchange}
                class="w-full rounded border border-gray-300 px-2 py-1"
            >
                { for props.options.iter().map(|option| html! {
                    <option
                        value={option.value.clone()}
                        disabled={option.disabled}
                        selected={option.value == props.value}
                    >
                        {option.label.clone()}
                    </option>
                }) }
            </select>
        </label>
    }
}
