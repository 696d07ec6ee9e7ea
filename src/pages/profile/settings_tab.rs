//! Account settings: sign out or delete the consultancy account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::ConfirmButton;

use crate::api;
use crate::context::use_app_context;

#[component]
pub fn SettingsTab(set_error: WriteSignal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let (deleting, set_deleting) = signal(false);

    let delete_account = move |_: ()| {
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_account().await {
                Ok(()) => {
                    log::info!("account deleted");
                    ctx.sign_out();
                }
                Err(e) => {
                    log::warn!("account deletion failed: {}", e);
                    set_error.set(e.user_message("Failed to delete account"));
                    set_deleting.set(false);
                }
            }
        });
    };

    view! {
        <div class="settings-tab">
            <section class="panel">
                <h2 class="panel-title">"Session"</h2>
                <button type="button" class="btn btn-secondary" on:click=move |_| ctx.sign_out()>
                    "Logout"
                </button>
            </section>

            <section class="panel panel-danger">
                <h2 class="panel-title">"Delete Account"</h2>
                <p class="muted">
                    "This permanently removes your consultancy and its courses."
                </p>
                <ConfirmButton
                    button_class="btn btn-danger"
                    label="Delete Account"
                    prompt="Delete permanently?"
                    on_confirm=Callback::new(delete_account)
                    disabled=Signal::derive(move || Some(deleting.get()))
                />
            </section>
        </div>
    }
}
