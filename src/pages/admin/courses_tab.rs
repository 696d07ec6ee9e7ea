//! Courses table with create/edit modal and inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::{ConfirmButton, Modal};

use super::FormField;
use crate::api;
use crate::forms::CourseForm;
use crate::models::{Consultancy, Course};
use crate::store::{store_remove_course, store_upsert_course, use_admin_store, AdminStateStoreFields};

/// Owning consultancy's name, falling back to the server-provided label.
fn owner_name(course: &Course, consultancies: &[Consultancy]) -> String {
    course
        .consultancy
        .and_then(|id| consultancies.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .or_else(|| course.consultancy_name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn CoursesTab(set_error: WriteSignal<String>) -> impl IntoView {
    let store = use_admin_store();

    let (modal_open, set_modal_open) = signal(false);
    let (editing_id, set_editing_id) = signal(None::<u32>);
    let (form, set_form) = signal(CourseForm::default());
    let (saving, set_saving) = signal(false);

    let open_create = move |_| {
        set_editing_id.set(None);
        set_form.set(CourseForm::default());
        set_modal_open.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Some(msg) = current.validate_admin() {
            set_error.set(msg.to_string());
            return;
        }
        let draft = current.to_admin_draft();
        let id = editing_id.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_course(id, &draft).await,
                None => api::create_course(&draft).await,
            };
            match result {
                Ok(course) => {
                    store_upsert_course(&store, course);
                    set_modal_open.set(false);
                    set_error.set(String::new());
                }
                Err(e) => {
                    log::warn!("save course failed: {}", e);
                    let fallback = if id.is_some() { "Failed to update course" } else { "Failed to create course" };
                    set_error.set(e.user_message(fallback));
                }
            }
            set_saving.set(false);
        });
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_course_admin(id).await {
                Ok(()) => store_remove_course(&store, id),
                Err(e) => {
                    log::warn!("delete course {} failed: {}", id, e);
                    set_error.set(e.user_message("Failed to delete course"));
                }
            }
        });
    };

    let title = Signal::derive(move || {
        if editing_id.get().is_some() { "Edit Course" } else { "Add Course" }.to_string()
    });

    let on_owner_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_form.update(|f| f.consultancy = value.parse().ok());
    };

    view! {
        <section class="panel">
            <div class="panel-header">
                <h2 class="panel-title">"Courses"</h2>
                <button type="button" class="btn btn-primary" on:click=open_create>"Add Course"</button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Tags"</th>
                        <th>"Consultancy"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.courses().get()
                        key=|c| (c.id, c.name.clone(), c.tags.clone(), c.consultancy)
                        children=move |course| {
                            let id = course.id;
                            let owner = {
                                let course = course.clone();
                                move || store.consultancies().with(|all| owner_name(&course, all))
                            };
                            let edit = {
                                let course = course.clone();
                                move |_| {
                                    set_form.set(CourseForm::from_course(&course));
                                    set_editing_id.set(Some(id));
                                    set_modal_open.set(true);
                                }
                            };
                            view! {
                                <tr>
                                    <td>{course.name.clone()}</td>
                                    <td>
                                        {course.tags.iter().map(|t| view! { <span class="chip">{t.clone()}</span> }).collect_view()}
                                    </td>
                                    <td>{owner}</td>
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
                        label="Tags"
                        placeholder="Comma separated"
                        value=Signal::derive(move || form.with(|f| f.tags.clone()))
                        on_input=Callback::new(move |v: String| set_form.update(|f| f.tags = v))
                    />
                    <label class="form-label">"Consultancy"</label>
                    <select
                        class="form-input"
                        prop:value=move || form.with(|f| f.consultancy.map(|id| id.to_string()).unwrap_or_default())
                        on:change=on_owner_change
                    >
                        <option value="">"Select consultancy"</option>
                        {move || store.consultancies().get().into_iter().map(|c| view! {
                            <option value=c.id.to_string()>{c.name}</option>
                        }).collect_view()}
                    </select>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_name() {
        let consultancies = vec![Consultancy { id: 3, name: "Global Ed".into(), ..Default::default() }];
        let owned = Course { id: 1, consultancy: Some(3), ..Default::default() };
        let labelled = Course { id: 2, consultancy: Some(9), consultancy_name: Some("Other".into()), ..Default::default() };
        let orphan = Course { id: 4, ..Default::default() };

        assert_eq!(owner_name(&owned, &consultancies), "Global Ed");
        assert_eq!(owner_name(&labelled, &consultancies), "Other");
        assert_eq!(owner_name(&orphan, &consultancies), "-");
    }
}
