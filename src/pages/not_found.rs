use leptos::prelude::*;

use crate::components::NavLink;
use crate::router::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p class="muted">"The page you are looking for does not exist."</p>
            <NavLink route=Route::Home class="btn btn-primary".to_string()>
                "Back to search"
            </NavLink>
        </div>
    }
}
