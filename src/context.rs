//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Role;
use crate::router::{self, Route};
use crate::session::{BrowserStorage, Session};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub route: ReadSignal<Route>,
    /// Page currently shown - write
    set_route: WriteSignal<Route>,
    /// Token + role mirrored from storage - read
    pub session: ReadSignal<Session>,
    /// Token + role mirrored from storage - write
    set_session: WriteSignal<Session>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        session: (ReadSignal<Session>, WriteSignal<Session>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session: session.0,
            set_session: session.1,
        }
    }

    /// Show `route`, adding a history entry.
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() != route {
            router::push_history(route);
        }
        self.set_route.set(route);
    }

    /// Show `route` in place of the current history entry.
    pub fn redirect(&self, route: Route) {
        router::replace_history(route);
        self.set_route.set(route);
    }

    /// Follow browser back/forward.
    pub fn sync_from_location(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Persist a fresh token/role and publish it.
    pub fn sign_in(&self, token: String, role: Role) {
        let session = Session::new(token, role);
        if let Err(e) = session.persist(&BrowserStorage) {
            log::error!("failed to persist session: {}", e);
        }
        self.set_session.set(session);
    }

    /// Forget the session and return to the landing page.
    pub fn sign_out(&self) {
        Session::clear(&BrowserStorage);
        self.set_session.set(Session::default());
        self.navigate(Route::Home);
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(Session::is_logged_in)
    }

    pub fn role(&self) -> Role {
        self.session.with(|s| s.role)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
