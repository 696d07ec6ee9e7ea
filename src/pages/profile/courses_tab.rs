//! Consultancy Courses Tab
//!
//! Own courses (add / edit / delete) and linking to courses from the shared
//! catalogue.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_modal::ConfirmButton;

use crate::api;
use crate::forms::CourseForm;
use crate::models::{Consultancy, Course};
use crate::search::course_label;

/// Banner text once a course action settles; success clears it.
fn banner_after(result: &Result<(), String>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(msg) => msg.clone(),
    }
}

#[component]
pub fn CoursesTab(
    profile: Signal<Consultancy>,
    catalogue: ReadSignal<Vec<Course>>,
    set_error: WriteSignal<String>,
    reload: Callback<()>,
) -> impl IntoView {
    let (new_course, set_new_course) = signal(CourseForm::default());
    let (adding, set_adding) = signal(false);

    let (editing_id, set_editing_id) = signal(None::<u32>);
    let (edit_form, set_edit_form) = signal(CourseForm::default());

    let (busy_id, set_busy_id) = signal(None::<u32>);

    let add_course = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = new_course.get_untracked();
        if let Some(msg) = form.validate() {
            set_error.set(msg.to_string());
            return;
        }
        set_adding.set(true);
        spawn_local(async move {
            match api::add_course(&form.to_draft()).await {
                Ok(course) => {
                    log::info!("course added: {}", course.name);
                    set_new_course.set(CourseForm::default());
                    set_error.set(String::new());
                    reload.run(());
                }
                Err(e) => {
                    log::warn!("add course failed: {}", e);
                    set_error.set(e.user_message("Failed to add course"));
                }
            }
            set_adding.set(false);
        });
    };

    let save_edit = move |id: u32| {
        let form = edit_form.get_untracked();
        if let Some(msg) = form.validate() {
            set_error.set(msg.to_string());
            return;
        }
        set_busy_id.set(Some(id));
        spawn_local(async move {
            match api::edit_course(id, &form.to_draft()).await {
                Ok(_) => {
                    set_editing_id.set(None);
                    set_error.set(String::new());
                    reload.run(());
                }
                Err(e) => {
                    log::warn!("edit course {} failed: {}", id, e);
                    set_error.set(e.user_message("Failed to update course"));
                }
            }
            set_busy_id.set(None);
        });
    };

    let delete = move |id: u32| {
        set_busy_id.set(Some(id));
        spawn_local(async move {
            let result = api::delete_course(id).await.map_err(|e| e.user_message("Failed to delete course"));
            if let Err(msg) = &result {
                log::warn!("delete course {} failed: {}", id, msg);
            }
            set_error.set(banner_after(&result));
            if result.is_ok() {
                reload.run(());
            }
            set_busy_id.set(None);
        });
    };

    let toggle_link = move |id: u32, linked: bool| {
        set_busy_id.set(Some(id));
        spawn_local(async move {
            let result = if linked {
                api::unlink_course(id).await.map_err(|e| e.user_message("Failed to unlink course"))
            } else {
                api::link_course(id).await.map(|_| ()).map_err(|e| e.user_message("Failed to link course"))
            };
            if let Err(msg) = &result {
                log::warn!("course {} link toggle failed: {}", id, msg);
            }
            set_error.set(banner_after(&result));
            if result.is_ok() {
                reload.run(());
            }
            set_busy_id.set(None);
        });
    };

    let own_courses = move || profile.with(|p| p.courses.clone());

    view! {
        <div class="courses-tab">
            <section class="panel">
                <h2 class="panel-title">"Add Course"</h2>
                <form class="inline-form" on:submit=add_course>
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Course name"
                        prop:value=move || new_course.with(|f| f.name.clone())
                        on:input=move |ev| set_new_course.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Tags (comma separated)"
                        prop:value=move || new_course.with(|f| f.tags.clone())
                        on:input=move |ev| set_new_course.update(|f| f.tags = event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || adding.get()>
                        {move || if adding.get() { "Adding..." } else { "Add" }}
                    </button>
                </form>
            </section>

            <section class="panel">
                <h2 class="panel-title">"Your Courses"</h2>
                <Show
                    when=move || !own_courses().is_empty()
                    fallback=|| view! { <p class="muted">"No courses yet. Add one above or link from the catalogue."</p> }
                >
                    <ul class="course-list">
                        <For
                            each=own_courses
                            key=|c| (c.id, c.name.clone(), c.tags.clone())
                            children=move |course| {
                                let id = course.id;
                                let label = course_label(&course.name, &course.tags);
                                let is_editing = move || editing_id.get() == Some(id);
                                let start = {
                                    let course = course.clone();
                                    move |_| {
                                        set_edit_form.set(CourseForm::from_course(&course));
                                        set_editing_id.set(Some(id));
                                    }
                                };
                                view! {
                                    <li class="course-row">
                                        <Show
                                            when=is_editing
                                            fallback=move || view! { <span class="course-name">{label.clone()}</span> }
                                        >
                                            <input
                                                type="text"
                                                class="form-input"
                                                prop:value=move || edit_form.with(|f| f.name.clone())
                                                on:input=move |ev| set_edit_form.update(|f| f.name = event_target_value(&ev))
                                            />
                                            <input
                                                type="text"
                                                class="form-input"
                                                prop:value=move || edit_form.with(|f| f.tags.clone())
                                                on:input=move |ev| set_edit_form.update(|f| f.tags = event_target_value(&ev))
                                            />
                                            <button type="button" class="btn btn-success" on:click=move |_| save_edit(id)>"Save"</button>
                                            <button type="button" class="btn btn-secondary" on:click=move |_| set_editing_id.set(None)>"Cancel"</button>
                                        </Show>
                                        <Show when=move || !is_editing()>
                                            <button type="button" class="btn btn-secondary" on:click=start.clone()>"Edit"</button>
                                            <ConfirmButton
                                                button_class="btn btn-danger"
                                                on_confirm=Callback::new(move |_: ()| delete(id))
                                                disabled=Signal::derive(move || Some(busy_id.get() == Some(id)))
                                            />
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>

            <section class="panel">
                <h2 class="panel-title">"Course Catalogue"</h2>
                <Show
                    when=move || catalogue.with(|c| !c.is_empty())
                    fallback=|| view! { <p class="muted">"No courses available."</p> }
                >
                    <ul class="course-list">
                        <For
                            each=move || catalogue.get()
                            key=|c| c.id
                            children=move |course| {
                                let id = course.id;
                                let linked = move || profile.with(|p| p.owns_course(id));
                                view! {
                                    <li class="course-row">
                                        <span class="course-name">{course_label(&course.name, &course.tags)}</span>
                                        <button
                                            type="button"
                                            class=move || if linked() { "btn btn-secondary" } else { "btn btn-primary" }
                                            disabled=move || busy_id.get() == Some(id)
                                            on:click=move |_| toggle_link(id, linked())
                                        >
                                            {move || if linked() { "Unlink" } else { "Link" }}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_cleared_on_success() {
        assert_eq!(banner_after(&Ok(())), "");
        assert_eq!(banner_after(&Err("Failed to unlink course".to_string())), "Failed to unlink course");
    }
}
