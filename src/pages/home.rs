//! Home Page
//!
//! Course/country search with suggestions drawn from the last result set.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConsultancyCard, CourseSuggestInput, ErrorBanner, LoadingIndicator};
use crate::config::COUNTRY_LIST;
use crate::models::Consultancy;
use crate::search::{collect_course_names, result_summary, validate_search};

const SEARCH_FAILED: &str = "Failed to fetch consultancies. Try again.";

#[component]
pub fn HomePage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (results, set_results) = signal(Vec::<Consultancy>::new());
    let (course_names, set_course_names) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());
    let (suggest_open, set_suggest_open) = signal(false);
    let (searched, set_searched) = signal(false);

    let run_search = move || {
        let q = query.get_untracked();
        let c = country.get_untracked();
        if let Some(message) = validate_search(&q, &c) {
            set_error.set(message.to_string());
            return;
        }

        set_error.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            match api::search_consultancies(q.trim(), &c).await {
                Ok(found) => {
                    log::debug!("search {:?}/{:?} -> {} results", q, c, found.len());
                    set_course_names.set(collect_course_names(&found));
                    set_results.set(found);
                }
                Err(e) => {
                    log::warn!("search failed: {}", e);
                    set_error.set(SEARCH_FAILED.to_string());
                }
            }
            set_searched.set(true);
            set_loading.set(false);
            set_suggest_open.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run_search();
    };

    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero-title">"Find the Best Consultancy for Your Course Abroad"</h1>
                <p class="hero-subtitle">"Search for courses and discover trusted consultancies worldwide."</p>

                <form class="search-form" on:submit=on_submit>
                    <CourseSuggestInput
                        query=query
                        set_query=set_query
                        course_names=course_names
                        open=suggest_open
                        set_open=set_suggest_open
                    />

                    <select
                        class="search-select"
                        prop:value=move || country.get()
                        on:change=move |ev| set_country.set(event_target_value(&ev))
                    >
                        <option value="">"Select Country"</option>
                        {COUNTRY_LIST.iter().map(|(code, name)| view! {
                            <option value=*name data-code=*code>{*name}</option>
                        }).collect_view()}
                    </select>

                    <button type="submit" class="btn btn-primary">"Search"</button>
                </form>
            </section>

            <section class="results">
                <Show when=move || loading.get()>
                    <LoadingIndicator label="Loading...".to_string() />
                </Show>

                <ErrorBanner message=error />

                <Show when=move || !results.with(Vec::is_empty)>
                    <p class="results-summary">{move || result_summary(results.with(Vec::len))}</p>
                    <ul class="results-list">
                        <For
                            each=move || results.get()
                            key=|c| c.id
                            children=|c| view! { <ConsultancyCard consultancy=c /> }
                        />
                    </ul>
                </Show>

                <Show when=move || searched.get() && !loading.get() && results.with(Vec::is_empty) && error.with(String::is_empty)>
                    <div class="empty-state">
                        <p class="empty-title">"No consultancies found"</p>
                        <p class="empty-text">"Try searching with different keywords or selecting a different country"</p>
                    </div>
                </Show>
            </section>
        </div>
    }
}
