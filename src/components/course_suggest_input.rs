//! Course Suggestion Input Component
//!
//! Course text input with a dropdown of course names from the last search.

use leptos::prelude::*;

use crate::search::filter_suggestions;

/// Highlight index after ArrowDown
fn next_index(current: usize, len: usize) -> usize {
    if current + 1 < len { current + 1 } else { current }
}

/// Highlight index after ArrowUp
fn prev_index(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Course input with suggestions
///
/// Props:
/// - query / set_query: the text being typed
/// - course_names: names collected from the last search
/// - open / set_open: whether the user is typing (list may show)
#[component]
pub fn CourseSuggestInput(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    course_names: ReadSignal<Vec<String>>,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = Memo::new(move |_| {
        if !open.get() {
            return Vec::new();
        }
        course_names.with(|names| filter_suggestions(names, &query.get()))
    });

    let accept = move |name: String| {
        set_query.set(name);
        set_open.set(false);
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions.get();
        if sugg.is_empty() {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_selected_idx.update(|i| *i = next_index(*i, sugg.len()));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.update(|i| *i = prev_index(*i));
            }
            "Enter" | "Tab" => {
                // Enter on an open list picks the suggestion instead of searching
                if let Some(name) = sugg.get(selected_idx.get()).cloned() {
                    ev.prevent_default();
                    accept(name);
                }
            }
            "Escape" => set_open.set(false),
            _ => {}
        }
    };

    view! {
        <div class="suggest-wrapper">
            <input
                type="text"
                class="search-input"
                placeholder="Search course"
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_open.set(true);
                    set_selected_idx.set(0);
                }
                on:keydown=on_keydown
            />

            <Show when=move || !suggestions.get().is_empty()>
                <div class="suggest-list">
                    {move || {
                        let selected = selected_idx.get();
                        suggestions.get().into_iter().enumerate().map(|(i, name)| {
                            let name_for_click = name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if i == selected { "suggest-item selected" } else { "suggest-item" }
                                    on:mousedown=move |ev: web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        accept(name_for_click.clone());
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_moves_within_bounds() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 2);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(2), 1);
        assert_eq!(prev_index(0), 0);
    }
}
