//! Login Page
//!
//! Exchanges credentials for a token, then works out the account's role.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorBanner, NavLink, PasswordInput};
use crate::context::use_app_context;
use crate::forms::validate_login;
use crate::models::Role;
use crate::router::Route;
use crate::session::{BrowserStorage, Session};

const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Landing route after login
pub fn home_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::Admin,
        _ => Route::Profile,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if let Some(message) = validate_login(&user, &pass) {
            set_error.set(message.to_string());
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let outcome = async {
                let token = api::login(user.trim(), &pass).await?.token;
                // Role probing needs the token attached
                Session::new(token.clone(), Role::Public).persist(&BrowserStorage)?;
                let role = api::resolve_role().await?;
                Ok::<_, crate::error::ApiError>((token, role))
            }
            .await;

            match outcome {
                Ok((token, role)) => {
                    log::info!("logged in as {}", role.as_str());
                    ctx.sign_in(token, role);
                    ctx.navigate(home_for(role));
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    Session::clear(&BrowserStorage);
                    set_error.set(e.user_message(LOGIN_FAILED));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Welcome Back"</h1>
                <p class="auth-subtitle">"Sign in to your consultancy account"</p>

                <ErrorBanner message=error />

                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label">"Username"</label>
                    <input
                        type="text"
                        name="username"
                        class="form-input"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                            set_error.set(String::new());
                        }
                    />

                    <label class="form-label">"Password"</label>
                    <PasswordInput
                        value=password
                        on_input=move |v: String| {
                            set_password.set(v);
                            set_error.set(String::new());
                        }
                    />

                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "Don't have an account? "
                    <NavLink route=Route::Register class="auth-link".to_string()>"Register here"</NavLink>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_for_role() {
        assert_eq!(home_for(Role::Admin), Route::Admin);
        assert_eq!(home_for(Role::Consultancy), Route::Profile);
        assert_eq!(home_for(Role::Public), Route::Profile);
    }
}
