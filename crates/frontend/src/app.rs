use crate::layout::header::Navbar;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

/// Switches between the login page and the main layout on auth state.
#[component]
fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            header=|| view! { <Navbar /> }.into_any()
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ContentPane /> }.into_any()
        />
    }
}

/// Placeholder content pane; real pages mount here.
#[component]
fn ContentPane() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="app-welcome">
                <h2>"Admin console"</h2>
                <p>"Select a section from the menu."</p>
            </div>
        </RequireAuth>
    }
}
