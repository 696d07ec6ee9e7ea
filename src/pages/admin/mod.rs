//! Admin Dashboard
//!
//! Verification queue and CRUD tables over consultancies, users and courses,
//! backed by a reactive store shared through context.

mod consultancies_tab;
mod courses_tab;
mod users_tab;
mod verification_tab;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ErrorBanner, TabBar, TabItem};
use crate::store::{pending_verification, AdminState, AdminStateStoreFields, AdminStore};

use consultancies_tab::ConsultanciesTab;
use courses_tab::CoursesTab;
use users_tab::UsersTab;
use verification_tab::VerificationTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Verification,
    Consultancies,
    Users,
    Courses,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let store: AdminStore = Store::new(AdminState::default());
    provide_context(store);

    let (error, set_error) = signal(String::new());
    let (tab, set_tab) = signal(AdminTab::Verification);

    // Initial load; each listing reports its own failure
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_consultancies().await {
                Ok(records) => *store.consultancies().write() = records,
                Err(e) => {
                    log::warn!("consultancy listing failed: {}", e);
                    set_error.set("Failed to load consultancies".to_string());
                }
            }
        });
        spawn_local(async move {
            match api::list_users().await {
                Ok(records) => *store.users().write() = records,
                Err(e) => {
                    log::warn!("user listing failed: {}", e);
                    set_error.set("Failed to load users".to_string());
                }
            }
        });
        spawn_local(async move {
            match api::list_courses().await {
                Ok(records) => *store.courses().write() = records,
                Err(e) => {
                    log::warn!("course listing failed: {}", e);
                    set_error.set("Failed to load courses".to_string());
                }
            }
        });
    });

    let pending_count = Signal::derive(move || store.consultancies().with(|c| pending_verification(c).len()));

    let tabs = vec![
        TabItem::new(AdminTab::Verification, "Verification").with_badge(pending_count),
        TabItem::new(AdminTab::Consultancies, "Consultancies"),
        TabItem::new(AdminTab::Users, "Users"),
        TabItem::new(AdminTab::Courses, "Courses"),
    ];

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1 class="dashboard-title">"Admin Dashboard"</h1>
            </header>

            <ErrorBanner message=error />

            <TabBar tabs=tabs active=tab set_active=set_tab />

            {move || match tab.get() {
                AdminTab::Verification => view! { <VerificationTab set_error=set_error /> }.into_any(),
                AdminTab::Consultancies => view! { <ConsultanciesTab set_error=set_error /> }.into_any(),
                AdminTab::Users => view! { <UsersTab set_error=set_error /> }.into_any(),
                AdminTab::Courses => view! { <CoursesTab set_error=set_error /> }.into_any(),
            }}
        </div>
    }
}

/// Labelled input used by the admin modal forms
#[component]
fn FormField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-label">{label}</label>
        <input
            type=input_type
            class="form-input"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
