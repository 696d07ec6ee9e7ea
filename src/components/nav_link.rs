//! In-App Link Component
//!
//! Anchor that switches routes without a page reload.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;

/// Link to `route`. Modified clicks (ctrl/cmd/shift, middle button) fall
/// through to the browser so "open in new tab" still works.
#[component]
pub fn NavLink(
    route: Route,
    #[prop(into, optional)] class: MaybeProp<String>,
    #[prop(into, optional)] on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route);
        if let Some(cb) = on_navigate {
            cb.run(());
        }
    };

    view! {
        <a href=route.path() class=move || class.get().unwrap_or_default() on:click=on_click>
            {children()}
        </a>
    }
}
