use contracts::shared::forms::{ActionResult, RequestOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::feedback::{AlertList, ToastList};
use crate::shared::navigate;
use crate::system::auth::api::{self, LoginReply};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;

const FORM_TITLE: &str = "Sign in";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_result, set_form_result) = signal(Option::<ActionResult>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let field_error = move |name: &'static str| {
        form_result.with(|result| {
            result
                .as_ref()
                .and_then(|r| r.field_error(name))
                .map(str::to_string)
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_form_result.set(None);

        spawn_local(async move {
            let result = match api::login(username_val, password_val).await {
                Ok(LoginReply::Accepted(response)) => {
                    storage::save_access_token(&response.access_token);
                    storage::save_refresh_token(&response.refresh_token);

                    // Updating auth state switches the shell to the main layout
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                    });

                    ActionResult::from_outcome(RequestOutcome::ok(), FORM_TITLE, Some("/"))
                }
                Ok(LoginReply::Rejected(outcome)) => {
                    ActionResult::from_outcome(outcome, FORM_TITLE, None)
                }
                Err(error) => ActionResult::from_exception(&error, FORM_TITLE),
            };

            if let Some(redirect) = result.redirect.as_deref() {
                navigate::go_to(redirect);
            }

            set_form_result.set(Some(result));
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Admin console"</h1>
                <h2>"Sign in"</h2>

                {move || {
                    let alerts = form_result.with(|r| {
                        r.as_ref().and_then(|r| r.alert_msgs.clone()).unwrap_or_default()
                    });
                    (!alerts.is_empty()).then(|| view! { <AlertList messages=alerts /> })
                }}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <Show when=move || field_error("username").is_some()>
                            <div class="form-group__error">
                                {move || field_error("username").unwrap_or_default()}
                            </div>
                        </Show>
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <Show when=move || field_error("password").is_some()>
                            <div class="form-group__error">
                                {move || field_error("password").unwrap_or_default()}
                            </div>
                        </Show>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                {move || {
                    let toasts = form_result.with(|r| {
                        r.as_ref().and_then(|r| r.toast_msgs.clone()).unwrap_or_default()
                    });
                    (!toasts.is_empty()).then(|| view! { <ToastList messages=toasts /> })
                }}
            </div>
        </div>
    }
}
