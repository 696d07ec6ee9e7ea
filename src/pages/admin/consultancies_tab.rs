//! Consultancies table with create/edit modal and inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::{ConfirmButton, Modal};

use super::FormField;
use crate::api;
use crate::forms::ConsultancyForm;
use crate::store::{store_remove_consultancy, store_upsert_consultancy, use_admin_store, AdminStateStoreFields};

#[component]
pub fn ConsultanciesTab(set_error: WriteSignal<String>) -> impl IntoView {
    let store = use_admin_store();

    let (modal_open, set_modal_open) = signal(false);
    let (editing_id, set_editing_id) = signal(None::<u32>);
    let (form, set_form) = signal(ConsultancyForm::default());
    let (saving, set_saving) = signal(false);

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form.set(ConsultancyForm::default());
        set_modal_open.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let patch = form.get_untracked().to_admin_patch();
        let id = editing_id.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_consultancy(id, &patch).await,
                None => api::create_consultancy(&patch).await,
            };
            match result {
                Ok(record) => {
                    store_upsert_consultancy(&store, record);
                    set_modal_open.set(false);
                    set_error.set(String::new());
                }
                Err(e) => {
                    log::warn!("save consultancy failed: {}", e);
                    let fallback = if id.is_some() { "Failed to update consultancy" } else { "Failed to create consultancy" };
                    set_error.set(e.user_message(fallback));
                }
            }
            set_saving.set(false);
        });
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_consultancy(id).await {
                Ok(()) => store_remove_consultancy(&store, id),
                Err(e) => {
                    log::warn!("delete consultancy {} failed: {}", id, e);
                    set_error.set(e.user_message("Failed to delete consultancy"));
                }
            }
        });
    };

    let title = Signal::derive(move || {
        if editing_id.get().is_some() { "Edit Consultancy" } else { "Add Consultancy" }.to_string()
    });

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2 class="panel-title">"Consultancies"</h2>
                <button type="button" class="btn btn-primary" on:click=open_create>"Add Consultancy"</button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Address"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.consultancies().get()
                        key=|c| (c.id, c.name.clone(), c.email.clone(), c.address.clone(), c.is_verified)
                        children=move |c| {
                            let id = c.id;
                            let edit = {
                                let c = c.clone();
                                move |_| {
                                    set_form.set(ConsultancyForm::from_consultancy(&c));
                                    set_editing_id.set(Some(id));
                                    set_modal_open.set(true);
                                }
                            };
                            view! {
                                <tr>
                                    <td>{c.name.clone()}</td>
                                    <td>{c.email.clone()}</td>
                                    <td>{c.address.clone()}</td>
                                    <td>
                                        {if c.is_verified {
                                            view! { <span class="badge badge-verified">"Verified"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge-pending">"Pending"</span> }.into_any()
                                        }}
                                    </td>
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
                        label="Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.name = v))
                    />
                    <FormField
                        label="Address"
                        value=Signal::derive(move || form.with(|f| f.address.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.address = v))
                    />
                    <FormField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.email = v))
                    />
                    <FormField
                        label="Website"
                        placeholder="https://"
                        value=Signal::derive(move || form.with(|f| f.website.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.website = v))
                    />
                    <FormField
                        label="Countries"
                        placeholder="Comma separated (e.g., USA, UK, Canada)"
                        value=Signal::derive(move || form.with(|f| f.countries.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.countries = v))
                    />
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
