//! Password Input Component
//!
//! Password field with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] invalid: MaybeProp<bool>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="password-wrapper">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                name="password"
                placeholder="Enter your password"
                class=move || if invalid.get().unwrap_or(false) { "form-input invalid" } else { "form-input" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-toggle"
                title=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}
