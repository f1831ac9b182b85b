use crate::state::listing::{PlaceholderTone, TableView, EVENT_TABLE_COLUMNS};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventTableProps {
    pub table: TableView,
}

#[function_component(EventTable)]
pub fn event_table(props: &EventTableProps) -> Html {
    let body = match &props.table {
        TableView::Placeholder { text, colspan, tone } => {
            let tone_class = match tone {
                PlaceholderTone::Muted => "text-gray-500",
                PlaceholderTone::Error => "text-red-600",
            };
            html! {
                <tr>
                    <td colspan={colspan.to_string()} class={classes!("text-center", "py-6", tone_class)}>
                        {*text}
                    </td>
                </tr>
            }
        }
        TableView::Rows(rows) => rows
            .iter()
            .map(|row| {
                html! {
                    <tr key={row.id.to_string()} class="border-t border-gray-100">
                        { for row.cells().iter().map(|cell| html! { <td class="px-3 py-2">{cell.to_string()}</td> }) }
                    </tr>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <table class="w-full text-sm text-left">
            <thead>
                <tr>
                    { for EVENT_TABLE_COLUMNS.iter().map(|title| html! { <th class="px-3 py-2 font-semibold">{*title}</th> }) }
                </tr>
            </thead>
            <tbody id="event-list-body">
                {body}
            </tbody>
        </table>
    }
}
