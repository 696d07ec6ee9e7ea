//! Tab Bar Component
//!
//! Row of tabs for switching between dashboard sections.

use leptos::prelude::*;

/// One tab: value, label, optional badge count
#[derive(Clone)]
pub struct TabItem<T> {
    pub value: T,
    pub label: &'static str,
    pub badge: Option<Signal<usize>>,
}

impl<T> TabItem<T> {
    pub fn new(value: T, label: &'static str) -> Self {
        Self { value, label, badge: None }
    }

    pub fn with_badge(mut self, badge: Signal<usize>) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Tab Bar component
#[component]
pub fn TabBar<T>(
    tabs: Vec<TabItem<T>>,
    active: ReadSignal<T>,
    set_active: WriteSignal<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="tab-bar">
            {tabs.into_iter().map(|tab| {
                let value = tab.value;
                let is_active = move || active.get() == value;
                let tab_class = move || {
                    if is_active() { "tab active" } else { "tab" }
                };
                let badge = tab.badge;

                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| set_active.set(value)
                    >
                        {tab.label}
                        {badge.map(|count| view! {
                            <Show when=move || { count.get() > 0 }>
                                <span class="tab-badge">{move || count.get()}</span>
                            </Show>
                        })}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
