//! Consultancy Dashboard
//!
//! Profile details, course listings and account settings for the logged-in
//! consultancy.

mod info_tab;
mod courses_tab;
mod settings_tab;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, LoadingIndicator, TabBar, TabItem};
use crate::models::{Consultancy, Course};

use courses_tab::CoursesTab;
use info_tab::InfoTab;
use settings_tab::SettingsTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Info,
    Courses,
    Settings,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (profile, set_profile) = signal(None::<Consultancy>);
    let (catalogue, set_catalogue) = signal(Vec::<Course>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (tab, set_tab) = signal(ProfileTab::Info);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load profile on mount and whenever a mutation asks for it
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("loading profile, trigger={}", trigger);
        spawn_local(async move {
            match api::get_profile().await {
                Ok(loaded) => set_profile.set(Some(loaded)),
                Err(e) => {
                    log::warn!("profile load failed: {}", e);
                    set_error.set("Failed to load profile".to_string());
                }
            }
            set_loading.set(false);
        });
    });

    // Course catalogue for the link panel; failures only logged
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_courses().await {
                Ok(courses) => set_catalogue.set(courses),
                Err(e) => log::warn!("Failed to load courses: {}", e),
            }
        });
    });

    let reload = Callback::new(move |_: ()| set_reload_trigger.update(|v| *v += 1));
    let current = Signal::derive(move || profile.get().unwrap_or_default());

    let tabs = vec![
        TabItem::new(ProfileTab::Info, "Consultancy Info"),
        TabItem::new(ProfileTab::Courses, "Courses"),
        TabItem::new(ProfileTab::Settings, "Settings"),
    ];

    view! {
        <div class="dashboard">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingIndicator label="Loading dashboard...".to_string() /> }
            >
                <header class="dashboard-header">
                    <h1 class="dashboard-title">{move || current.with(|p| p.name.clone())}</h1>
                    {move || if current.with(|p| p.is_verified) {
                        view! { <span class="badge badge-verified">"Verified"</span> }.into_any()
                    } else {
                        view! { <span class="badge badge-pending">"Pending verification"</span> }.into_any()
                    }}
                </header>

                <ErrorBanner message=error />

                <TabBar tabs=tabs.clone() active=tab set_active=set_tab />

                <Show when=move || profile.with(Option::is_some)>
                    {move || match tab.get() {
                        ProfileTab::Info => view! {
                            <InfoTab profile=current set_profile=set_profile set_error=set_error reload=reload />
                        }.into_any(),
                        ProfileTab::Courses => view! {
                            <CoursesTab profile=current catalogue=catalogue set_error=set_error reload=reload />
                        }.into_any(),
                        ProfileTab::Settings => view! {
                            <SettingsTab set_error=set_error />
                        }.into_any(),
                    }}
                </Show>
            </Show>
        </div>
    }
}
