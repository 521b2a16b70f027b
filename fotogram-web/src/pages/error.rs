use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// Fallback for unknown paths.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found">
            <h1>{ "Page not found" }</h1>
            <p>{ "The link you followed may be broken, or the page may have been removed." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="signup-link">
                { "Back to Fotogram" }
            </Link<MainRoute>>
        </div>
    }
}
