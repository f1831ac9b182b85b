use crate::state::listing::PageControl;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub controls: Vec<PageControl>,
    pub on_page_change: Callback<u32>,
}

/// One button per page; the current page is inert.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.controls.is_empty() {
        return html! {};
    }

    html! {
        <nav id="pagination-controls" class="flex flex-wrap gap-2 mt-4" aria-label="Pagination">
            { for props.controls.iter().map(|control| {
                let number = control.number;
                if control.current {
                    html! {
                        <button
                            key={number.to_string()}
                            aria-current="page"
                            disabled=true
                            class="px-3 py-1 rounded bg-blue-600 text-white"
                        >
                            {number.to_string()}
                        </button>
                    }
                } else {
                    html! {
                        <button
                            key={number.to_string()}
                            onclick={props.on_page_change.reform(move |_| number)}
                            class="px-3 py-1 rounded border border-gray-300 hover:bg-gray-100"
                        >
                            {number.to_string()}
                        </button>
                    }
                }
            }) }
        </nav>
    }
}
