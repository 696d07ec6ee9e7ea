//! Users table with create/edit modal and inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::{ConfirmButton, Modal};

use super::FormField;
use crate::api;
use crate::forms::UserForm;
use crate::store::{store_remove_user, store_upsert_user, use_admin_store, AdminStateStoreFields};

#[component]
pub fn UsersTab(set_error: WriteSignal<String>) -> impl IntoView {
    let store = use_admin_store();

    let (modal_open, set_modal_open) = signal(false);
    let (editing_id, set_editing_id) = signal(None::<u32>);
    let (form, set_form) = signal(UserForm::default());
    let (saving, set_saving) = signal(false);

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form.set(UserForm::default());
        set_modal_open.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = form.get_untracked().to_draft();
        let id = editing_id.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_user(id, &draft).await,
                None => api::create_user(&draft).await,
            };
            match result {
                Ok(user) => {
                    store_upsert_user(&store, user);
                    set_modal_open.set(false);
                    set_error.set(String::new());
                }
                Err(e) => {
                    log::warn!("save user failed: {}", e);
                    let fallback = if id.is_some() { "Failed to update user" } else { "Failed to create user" };
                    set_error.set(e.user_message(fallback));
                }
            }
            set_saving.set(false);
        });
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_user(id).await {
                Ok(()) => store_remove_user(&store, id),
                Err(e) => {
                    log::warn!("delete user {} failed: {}", id, e);
                    set_error.set(e.user_message("Failed to delete user"));
                }
            }
        });
    };

    let title = Signal::derive(move || {
        if editing_id.get().is_some() { "Edit User" } else { "Add User" }.to_string()
    });

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2 class="panel-title">"Users"</h2>
                <button type="button" class="btn btn-primary" on:click=open_create>"Add User"</button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.users().get()
                        key=|u| (u.id, u.username.clone(), u.email.clone(), u.is_consultancy, u.is_staff)
                        children=move |u| {
                            let id = u.id;
                            let edit = {
                                let u = u.clone();
                                move |_| {
                                    set_form.set(UserForm::from_user(&u));
                                    set_editing_id.set(Some(id));
                                    set_modal_open.set(true);
                                }
                            };
                            view! {
                                <tr>
                                    <td>{u.username.clone()}</td>
                                    <td>{u.email.clone()}</td>
                                    <td><span class="badge">{u.role_label()}</span></td>
                                    <td class="row-actions">
                                        <button type="button" class="btn btn-secondary" on:click=edit>"Edit"</button>
                                        <ConfirmButton button_class="btn btn-danger" on_confirm=Callback::new(move |_: ()| delete(id)) />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Modal open=modal_open title=title on_close=Callback::new(move |_: ()| set_modal_open.set(false))>
                <form class="modal-form" on:submit=save>
                    <FormField
                        label="Username"
                        value=Signal::derive(move || form.with(|f| f.username.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.username = v))
                    />
                    <FormField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.email = v))
                    />
                    <FormField
                        label="Password"
                        input_type="password"
                        placeholder="Leave blank to keep unchanged"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.password = v))
                    />
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_consultancy)
                            on:change=move |ev| set_form.update(|f| f.is_consultancy = event_target_checked(&ev))
                        />
                        " Is consultancy"
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-success" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| set_modal_open.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Modal>
        </section>
    }
}
