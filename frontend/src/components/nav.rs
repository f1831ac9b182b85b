use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Events);

    let link_classes = |route: Route| {
        classes!(
            "px-3", "py-2", "rounded", "text-sm", "font-medium", "transition-colors",
            if current_route == route { "bg-white text-blue-600" } else { "text-white hover:bg-blue-500" }
        )
    };

    html! {
        <nav class={classes!("sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600", "text-white", "shadow-lg")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <Link<Route> to={Route::Events} classes={classes!("text-lg", "font-semibold")}>
                        {"Sports Events"}
                    </Link<Route>>
                    <div class={classes!("flex", "space-x-2")}>
                        <Link<Route> to={Route::Events} classes={link_classes(Route::Events)}>{"Events"}</Link<Route>>
                        <Link<Route> to={Route::Admin} classes={link_classes(Route::Admin)}>{"Create Event"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}
