//! Route Guard Component
//!
//! Renders its children only when the session may see the current route,
//! otherwise redirects.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::{guard, redirect_target, Route};

#[component]
pub fn RequireRole(route: Route, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let allowed = Memo::new(move |_| ctx.session.with(|s| guard(route, s).is_none()));

    Effect::new(move |_| {
        let target = ctx.session.with(|s| redirect_target(ctx.route.get_untracked(), route, s));
        if let Some(target) = target {
            log::info!("{:?} not allowed for this session, redirecting to {:?}", route, target);
            ctx.redirect(target);
        }
    });

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
