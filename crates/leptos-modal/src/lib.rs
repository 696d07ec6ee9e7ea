//! Leptos Modal Utilities
//!
//! Overlay dialog and inline confirm button shared by the dashboard pages.

use leptos::prelude::*;

/// Overlay dialog rendered only while `open` is true.
///
/// Clicking the backdrop or the × button runs `on_close`. Clicks inside the
/// dialog body do not reach the backdrop.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal-dialog"
                    role="dialog"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h3 class="modal-title">{move || title.get()}</h3>
                        <button
                            type="button"
                            class="modal-close-btn"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

/// Inline confirmation button
///
/// Shows `label` initially. When clicked, shows `prompt` with ✓/✗ buttons and
/// only runs `on_confirm` after ✓.
#[component]
pub fn ConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                disabled=move || disabled.get().unwrap_or(false)
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="confirm-inline">
                <span class="confirm-inline-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
