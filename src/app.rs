//! EduSearch App
//!
//! Root component: navbar, the page for the current route, footer.

use leptos::prelude::*;

use crate::components::{Footer, Navbar, RequireRole};
use crate::context::AppContext;
use crate::pages::{AdminPage, HomePage, LoginPage, NotFoundPage, ProfilePage, RegisterPage};
use crate::router::{self, Route};
use crate::session::{BrowserStorage, Session};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(router::current_route());
    let (session, set_session) = signal(Session::load(&BrowserStorage));

    let ctx = AppContext::new((route, set_route), (session, set_session));
    provide_context(ctx);

    // Browser back/forward
    router::bind_popstate(move |r| ctx.sync_from_location(r));

    Effect::new(move |_| {
        log::debug!("route: {:?}", route.get());
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="main-content">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Register => view! { <RegisterPage /> }.into_any(),
                    Route::Login => view! { <LoginPage /> }.into_any(),
                    Route::Profile => view! {
                        <RequireRole route=Route::Profile>
                            <ProfilePage />
                        </RequireRole>
                    }.into_any(),
                    Route::Admin => view! {
                        <RequireRole route=Route::Admin>
                            <AdminPage />
                        </RequireRole>
                    }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
