use crate::state::create_event::FormMessage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub message: Option<FormMessage>,
}

#[function_component(FormMessageView)]
pub fn form_message_view(props: &FormMessageProps) -> Html {
    match &props.message {
        None => html! { <div id="form-message"></div> },
        Some(message) if message.is_error() => html! {
            <div id="form-message" role="alert">
                <mark class="text-red-600">
                    <strong>{"Error: "}</strong>
                    <span class="message-text">{message.text()}</span>
                </mark>
            </div>
        },
        Some(message) => html! {
            <div id="form-message" role="status">
                <mark class="text-green-700">{message.text()}</mark>
            </div>
        },
    }
}
