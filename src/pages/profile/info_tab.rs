//! Consultancy Info Tab
//!
//! Logo upload and the editable details card.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement, Url};

use crate::api;
use crate::config::config;
use crate::forms::ConsultancyForm;
use crate::models::Consultancy;

type FieldGet = fn(&ConsultancyForm) -> &str;
type FieldSet = fn(&mut ConsultancyForm, String);

/// (label, placeholder, getter, setter) for each editable detail
const DETAIL_FIELDS: &[(&str, &str, FieldGet, FieldSet)] = &[
    ("Name", "Consultancy name", |f| &f.name, |f, v| f.name = v),
    ("Address", "Street, city", |f| &f.address, |f, v| f.address = v),
    ("Phone", "+977 ...", |f| &f.phone_no, |f, v| f.phone_no = v),
    ("Website", "https://", |f| &f.website, |f, v| f.website = v),
    ("Countries Operating", "Comma separated (e.g., USA, UK, Canada)", |f| &f.countries, |f, v| f.countries = v),
];

#[component]
pub fn InfoTab(
    profile: Signal<Consultancy>,
    set_profile: WriteSignal<Option<Consultancy>>,
    set_error: WriteSignal<String>,
    reload: Callback<()>,
) -> impl IntoView {
    let (logo_file, set_logo_file) = signal_local(None::<File>);
    let (logo_preview, set_logo_preview) = signal(None::<String>);
    let (uploading, set_uploading) = signal(false);

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(ConsultancyForm::default());
    let (saving, set_saving) = signal(false);

    let clear_preview = move || {
        if let Some(url) = logo_preview.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
        set_logo_preview.set(None);
        set_logo_file.set(None);
    };

    let on_logo_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        clear_preview();
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => set_logo_preview.set(Some(url)),
            Err(e) => log::warn!("logo preview failed: {:?}", e),
        }
        set_logo_file.set(Some(file));
    };

    let upload_logo = move |_| {
        let Some(file) = logo_file.get_untracked() else {
            return;
        };
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_logo(&file).await {
                Ok(_) => {
                    log::info!("logo uploaded");
                    clear_preview();
                    reload.run(());
                }
                Err(e) => {
                    log::warn!("logo upload failed: {}", e);
                    set_error.set(e.user_message("Failed to upload logo"));
                }
            }
            set_uploading.set(false);
        });
    };

    let start_edit = move |_| {
        set_draft.set(ConsultancyForm::from_consultancy(&profile.get_untracked()));
        set_editing.set(true);
    };

    let save = move |_| {
        let patch = draft.get_untracked().to_profile_patch();
        set_saving.set(true);
        spawn_local(async move {
            match api::update_profile(&patch).await {
                Ok(updated) => {
                    set_profile.set(Some(updated));
                    set_editing.set(false);
                    set_error.set(String::new());
                }
                Err(e) => {
                    log::warn!("profile update failed: {}", e);
                    set_error.set(e.user_message("Failed to update profile"));
                }
            }
            set_saving.set(false);
        });
    };

    let logo_view = move || {
        let current = profile.with(|p| p.profile_image.clone()).filter(|p| !p.is_empty());
        match (logo_preview.get(), current) {
            (Some(preview), _) => view! { <img class="logo-image" src=preview alt="Logo preview" /> }.into_any(),
            (None, Some(path)) => {
                view! { <img class="logo-image" src=config().media_url(&path) alt="Logo" /> }.into_any()
            }
            (None, None) => view! { <div class="logo-placeholder">"No logo"</div> }.into_any(),
        }
    };

    let read_only = move || {
        let p = profile.get();
        let countries = if p.countries_operated.is_empty() {
            view! { <p class="muted">"No countries set"</p> }.into_any()
        } else {
            view! {
                <div class="chip-row">
                    {p.countries_operated.iter().map(|c| view! { <span class="chip">{c.clone()}</span> }).collect_view()}
                </div>
            }.into_any()
        };
        view! {
            <dl class="detail-list">
                <dt>"Name"</dt><dd>{p.name.clone()}</dd>
                <dt>"Email"</dt><dd>{p.email.clone()}</dd>
                <dt>"Address"</dt><dd>{p.address.clone()}</dd>
                <dt>"Phone"</dt><dd>{p.phone_no.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Website"</dt><dd>{p.website.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt>"Description"</dt><dd>{p.description.clone().unwrap_or_default()}</dd>
                <dt>"Countries"</dt><dd>{countries}</dd>
            </dl>
        }
    };

    let edit_form = move || {
        view! {
            <div class="detail-form">
                {DETAIL_FIELDS.iter().map(|&(label, placeholder, get, set)| view! {
                    <label class="form-label">{label}</label>
                    <input
                        type="text"
                        class="form-input"
                        placeholder=placeholder
                        prop:value=move || draft.with(|d| get(d).to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| set(d, value));
                        }
                    />
                }).collect_view()}

                <label class="form-label">"Email"</label>
                <input type="email" class="form-input" disabled=true prop:value=move || draft.with(|d| d.email.clone()) />

                <label class="form-label">"Description"</label>
                <textarea
                    class="form-input"
                    rows="4"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>

                <div class="form-actions">
                    <button type="button" class="btn btn-success" disabled=move || saving.get() on:click=save>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="info-grid">
            <section class="panel">
                <h2 class="panel-title">"Logo"</h2>
                <div class="logo-box">{logo_view}</div>
                <input type="file" accept="image/*" on:change=on_logo_change />
                <Show when=move || logo_file.with(Option::is_some)>
                    <button type="button" class="btn btn-primary" disabled=move || uploading.get() on:click=upload_logo>
                        {move || if uploading.get() { "Uploading..." } else { "Upload Logo" }}
                    </button>
                </Show>
            </section>

            <section class="panel wide">
                <div class="panel-header">
                    <h2 class="panel-title">"Consultancy Details"</h2>
                    <Show when=move || !editing.get()>
                        <button type="button" class="btn btn-secondary" on:click=start_edit>"Edit"</button>
                    </Show>
                </div>
                {move || if editing.get() { edit_form().into_any() } else { read_only().into_any() }}
            </section>
        </div>
    }
}
