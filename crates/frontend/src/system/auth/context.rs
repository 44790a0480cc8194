use contracts::shared::menu::ViewerAuth;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    /// Viewer flag handed to the menu resolver.
    pub fn viewer(&self) -> ViewerAuth {
        ViewerAuth {
            is_authenticated: self.access_token.is_some(),
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore the session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };

            // Validate the token by fetching the current user
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    // Token invalid, try refresh
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);

                            if let Ok(user_info) =
                                api::get_current_user(&response.access_token).await
                            {
                                set_auth_state.set(AuthState {
                                    access_token: Some(response.access_token),
                                    user_info: Some(user_info),
                                });
                            }
                        }
                        Err(_) => {
                            // Refresh failed, clear tokens
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
