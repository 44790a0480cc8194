use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication.
/// Shows fallback if not authenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <div>"Not authenticated. Please login."</div> }
        >
            {children()}
        </Show>
    }
}
