//! Register Page
//!
//! Creates a consultancy account and signs straight in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, NavLink, PasswordInput};
use crate::context::use_app_context;
use crate::forms::{register_field, set_register_field, validate_register, RegisterErrors, RegisterField};
use crate::models::{RegisterRequest, Role};
use crate::router::Route;

const REGISTER_FAILED: &str = "Registration failed. Please try again.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();

    let (form, set_form) = signal(RegisterRequest::default());
    let (errors, set_errors) = signal(RegisterErrors::default());
    let (server_error, set_server_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let update = move |field: RegisterField, value: String| {
        set_form.update(|f| set_register_field(f, field, value));
        set_errors.update(|e| e.clear(field));
        set_server_error.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = form.get_untracked();
        let found = validate_register(&request);
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(resp) => {
                    log::info!("registered consultancy {:?}", resp.consultancy_id);
                    ctx.sign_in(resp.token, Role::Consultancy);
                    ctx.navigate(Route::Profile);
                }
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    set_server_error.set(e.user_message(REGISTER_FAILED));
                }
            }
            set_loading.set(false);
        });
    };

    let text_field = move |field: RegisterField, label: &'static str, input_type: &'static str, placeholder: &'static str| {
        let current = move || form.with(|f| register_field(f, field).to_string());
        let message = move || errors.with(|e| e.get(field));
        view! {
            <div class="form-field">
                <label class="form-label">{label}</label>
                <input
                    type=input_type
                    class=move || if message().is_some() { "form-input invalid" } else { "form-input" }
                    placeholder=placeholder
                    prop:value=current
                    on:input=move |ev| update(field, event_target_value(&ev))
                />
                {move || message().map(|m| view! { <p class="field-error">{m}</p> })}
            </div>
        }
    };

    let password = Signal::derive(move || form.with(|f| register_field(f, RegisterField::Password).to_string()));
    let password_error = move || errors.with(|e| e.get(RegisterField::Password));

    view! {
        <div class="auth-page">
            <div class="auth-card wide">
                <h1 class="auth-title">"Register Consultancy"</h1>
                <p class="auth-subtitle">"Create your consultancy account to get started"</p>

                <ErrorBanner message=server_error />

                <form class="auth-form" on:submit=on_submit>
                    {text_field(RegisterField::Username, "Username", "text", "Enter your username")}
                    {text_field(RegisterField::Email, "Email", "email", "Enter your email")}

                    <div class="form-field">
                        <label class="form-label">"Password"</label>
                        <PasswordInput
                            value=password
                            invalid=Signal::derive(move || Some(password_error().is_some()))
                            on_input=move |v: String| update(RegisterField::Password, v)
                        />
                        {move || password_error().map(|m| view! { <p class="field-error">{m}</p> })}
                    </div>

                    {text_field(RegisterField::Name, "Consultancy Name", "text", "Enter consultancy name")}
                    {text_field(RegisterField::Address, "Address", "text", "Enter address")}

                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "Already have an account? "
                    <NavLink route=Route::Login class="auth-link".to_string()>"Sign in here"</NavLink>
                </p>
            </div>
        </div>
    }
}
