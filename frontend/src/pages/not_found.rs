use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {}

#[function_component(NotFound)]
pub fn not_found(_props: &NotFoundProps) -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-4 py-16 text-center">
            <h1 class="text-2xl font-bold mb-4">{"404 - Page Not Found"}</h1>
            <p class="mb-6">{"There is no event page at this address."}</p>
            <Link<Route> to={Route::Events} classes={classes!("text-blue-600", "hover:underline")}>
                {"Back to events"}
            </Link<Route>>
        </div>
    }
}
