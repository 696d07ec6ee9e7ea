//! Navigation Bar Component
//!
//! Role-dependent links, active highlighting, logout and a mobile menu.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::context::use_app_context;
use crate::models::Role;
use crate::router::Route;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn item(route: Route, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { route, label, icon }
}

/// Links shown for the current session
pub fn nav_items(session: &Session) -> Vec<NavItem> {
    let home = item(Route::Home, "Home", "🏠");
    if !session.is_logged_in() {
        return vec![
            home,
            item(Route::Register, "Register", "➕"),
            item(Route::Login, "Login", "🔑"),
        ];
    }
    match session.role {
        Role::Admin => vec![home, item(Route::Admin, "Dashboard", "🛡")],
        Role::Consultancy => vec![home, item(Route::Profile, "Dashboard", "📋")],
        Role::Public => vec![home],
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let (menu_open, set_menu_open) = signal(false);

    let items = Memo::new(move |_| ctx.session.with(nav_items));

    let logout = move |_| {
        set_menu_open.set(false);
        ctx.sign_out();
    };

    let links = move |mobile: bool| {
        items.get().into_iter().map(move |nav| {
            let route = nav.route;
            let class = move || {
                let base = if mobile { "nav-link mobile" } else { "nav-link" };
                if ctx.route.get() == route { format!("{} active", base) } else { base.to_string() }
            };
            view! {
                <NavLink route=route class=Signal::derive(move || Some(class())) on_navigate=move |_| set_menu_open.set(false)>
                    <span class="nav-icon">{nav.icon}</span>
                    <span>{nav.label}</span>
                </NavLink>
            }
        }).collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <NavLink route=Route::Home class="navbar-brand".to_string()>
                    <span class="brand-icon">"🎓"</span>
                    <span>"EduSearch"</span>
                </NavLink>

                <div class="navbar-links">
                    {move || links(false)}
                    <Show when=move || ctx.is_logged_in()>
                        <button type="button" class="nav-link logout" on:click=logout>"Logout"</button>
                    </Show>
                </div>

                <button
                    type="button"
                    class="navbar-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar-mobile">
                    {move || links(true)}
                    <Show when=move || ctx.is_logged_in()>
                        <button type="button" class="nav-link mobile logout" on:click=logout>"Logout"</button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(session: &Session) -> Vec<Route> {
        nav_items(session).into_iter().map(|i| i.route).collect()
    }

    #[test]
    fn test_logged_out_links() {
        assert_eq!(routes(&Session::default()), vec![Route::Home, Route::Register, Route::Login]);
    }

    #[test]
    fn test_role_links() {
        assert_eq!(routes(&Session::new("t", Role::Admin)), vec![Route::Home, Route::Admin]);
        assert_eq!(routes(&Session::new("t", Role::Consultancy)), vec![Route::Home, Route::Profile]);
        assert_eq!(routes(&Session::new("t", Role::Public)), vec![Route::Home]);
    }

    #[test]
    fn test_stale_role_without_token_is_public() {
        let session = Session { token: None, role: Role::Admin };
        assert_eq!(routes(&session), vec![Route::Home, Route::Register, Route::Login]);
    }
}
