//! Client-Side Routing
//!
//! Path <-> route mapping, role guards and browser history plumbing.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::Role;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Register,
    Login,
    Profile,
    Admin,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/register" => Route::Register,
            "/login" => Route::Login,
            "/profile" => Route::Profile,
            "/admin" => Route::Admin,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home | Route::NotFound => "/",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Profile => "/profile",
            Route::Admin => "/admin",
        }
    }

    /// Role a route demands, if any
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Profile => Some(Role::Consultancy),
            Route::Admin => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Where to send the visitor instead, when `session` may not see `route`.
///
/// No token goes to the login page; a token with the wrong role goes home.
pub fn guard(route: Route, session: &Session) -> Option<Route> {
    let required = route.required_role()?;
    if !session.is_logged_in() {
        Some(Route::Login)
    } else if session.role != required {
        Some(Route::Home)
    } else {
        None
    }
}

/// Redirect a guarded page should issue while `current` is on screen.
///
/// Only the page that is actually shown redirects; once navigation has moved
/// elsewhere (logout heading home) a stale guard stays quiet.
pub fn redirect_target(current: Route, guarded: Route, session: &Session) -> Option<Route> {
    if current != guarded {
        return None;
    }
    guard(guarded, session)
}

/// Route for the browser's current location
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|p| Route::from_path(&p))
        .unwrap_or(Route::Home)
}

/// Push `route` onto the history stack (no reload).
pub fn push_history(route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
            log::warn!("pushState failed: {:?}", e);
        }
    }
}

/// Replace the current history entry with `route` (used by redirects).
pub fn replace_history(route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()));
    }
}

/// Call `on_change` with the new route whenever back/forward is used.
pub fn bind_popstate<F>(on_change: F)
where
    F: Fn(Route) + 'static,
{
    let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
        on_change(current_route());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/register?ref=ad"), Route::Register);
        assert_eq!(Route::from_path("/profile#courses"), Route::Profile);
        assert_eq!(Route::from_path("/admin"), Route::Admin);
        assert_eq!(Route::from_path("/admin/users"), Route::NotFound);
        assert_eq!(Route::from_path("/nowhere"), Route::NotFound);
    }

    #[test]
    fn test_path_roundtrip_for_known_routes() {
        for route in [Route::Home, Route::Register, Route::Login, Route::Profile, Route::Admin] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_guard_public_routes_always_open() {
        let anon = Session::default();
        for route in [Route::Home, Route::Register, Route::Login, Route::NotFound] {
            assert_eq!(guard(route, &anon), None);
        }
    }

    #[test]
    fn test_guard_requires_token() {
        let anon = Session::default();
        assert_eq!(guard(Route::Profile, &anon), Some(Route::Login));
        assert_eq!(guard(Route::Admin, &anon), Some(Route::Login));
    }

    #[test]
    fn test_guard_requires_role() {
        let consultancy = Session::new("t", Role::Consultancy);
        let admin = Session::new("t", Role::Admin);

        assert_eq!(guard(Route::Profile, &consultancy), None);
        assert_eq!(guard(Route::Admin, &consultancy), Some(Route::Home));
        assert_eq!(guard(Route::Admin, &admin), None);
        assert_eq!(guard(Route::Profile, &admin), Some(Route::Home));
    }

    #[test]
    fn test_redirect_target_after_sign_out() {
        let anon = Session::default();
        // Signed out from the dashboard and already heading home
        assert_eq!(redirect_target(Route::Home, Route::Profile, &anon), None);
        assert_eq!(redirect_target(Route::Home, Route::Admin, &anon), None);
        // Landing on a guarded page without a session still redirects
        assert_eq!(redirect_target(Route::Profile, Route::Profile, &anon), Some(Route::Login));
        assert_eq!(
            redirect_target(Route::Admin, Route::Admin, &Session::new("t", Role::Consultancy)),
            Some(Route::Home)
        );
        assert_eq!(redirect_target(Route::Admin, Route::Admin, &Session::new("t", Role::Admin)), None);
    }
}
