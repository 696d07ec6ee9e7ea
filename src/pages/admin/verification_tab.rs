//! Verification queue: unverified consultancies with a Verify action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{pending_verification, store_mark_verified, use_admin_store, AdminStateStoreFields};

#[component]
pub fn VerificationTab(set_error: WriteSignal<String>) -> impl IntoView {
    let store = use_admin_store();
    let (verifying_id, set_verifying_id) = signal(None::<u32>);

    let pending = move || store.consultancies().with(|c| pending_verification(c));

    let verify = move |id: u32| {
        set_verifying_id.set(Some(id));
        spawn_local(async move {
            match api::verify_consultancy(id).await {
                Ok(()) => {
                    log::info!("consultancy {} verified", id);
                    store_mark_verified(&store, id);
                    set_error.set(String::new());
                }
                Err(e) => {
                    log::warn!("verify consultancy {} failed: {}", id, e);
                    set_error.set("Failed to verify consultancy. Please try again.".to_string());
                }
            }
            set_verifying_id.set(None);
        });
    };

    view! {
        <section class="panel">
            <h2 class="panel-title">"Pending Verification"</h2>
            <Show
                when=move || !pending().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"All consultancies are verified."</p>
                    </div>
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Address"</th>
                            <th>"Countries"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=pending
                            key=|c| c.id
                            children=move |c| {
                                let id = c.id;
                                let busy = move || verifying_id.get() == Some(id);
                                view! {
                                    <tr>
                                        <td>{c.name.clone()}</td>
                                        <td>{c.email.clone()}</td>
                                        <td>{c.address.clone()}</td>
                                        <td>{c.countries_operated.join(", ")}</td>
                                        <td>
                                            <button
                                                type="button"
                                                class="btn btn-success"
                                                disabled=busy
                                                on:click=move |_| verify(id)
                                            >
                                                {move || if busy() { "Verifying..." } else { "Verify" }}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
