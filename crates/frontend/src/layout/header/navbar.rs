//! Flat top navigation over the same menu configuration.
//!
//! Unlike the sidebar this variant does not gate on authentication: every
//! entry renders and only the group/leaf shape matters.

use contracts::shared::menu::{
    parse_menu, resolve_menu, MenuEntry, MenuGroup, MenuItem, ResolveOptions, ViewerAuth,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::layout::menu::main_menu;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

#[component]
pub fn Navbar() -> impl IntoView {
    // Viewer state is not consulted while the gate is disabled.
    let entries = resolve_menu(
        parse_menu(main_menu()),
        &ViewerAuth::anonymous(),
        ResolveOptions {
            enforce_auth_gate: false,
        },
    );

    view! {
        <nav class="main-nav-bar">
            <ul>
                {entries.into_iter().map(|entry| match entry {
                    MenuEntry::Simple(item) => view! { <NavLeaf item=item /> }.into_any(),
                    MenuEntry::Composed(group) => view! { <NavGroup group=group /> }.into_any(),
                }).collect_view()}
            </ul>
            <UserBadge />
        </nav>
    }
}

#[component]
fn NavLeaf(item: MenuItem) -> impl IntoView {
    let MenuItem {
        title,
        target,
        icon: icon_name,
        ..
    } = item;

    view! {
        <li class="main-nav-bar__leaf">
            <a href=target>
                {icon_name.as_deref().map(icon)}
                <span>{title}</span>
            </a>
        </li>
    }
}

/// Hover dropdown for a composed entry.
#[component]
fn NavGroup(group: MenuGroup) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let MenuGroup { title, items, .. } = group;

    view! {
        <li
            class="main-nav-bar__group"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="main-nav-bar__group-btn"
                class:main-nav-bar__group-btn--active=move || is_open.get()
            >
                <span>{title}</span>
                <span
                    class="main-nav-bar__chevron"
                    class:main-nav-bar__chevron--open=move || is_open.get()
                >
                    {icon("chevron-down")}
                </span>
            </button>

            <div
                class="main-nav-bar__panel"
                class:main-nav-bar__panel--open=move || is_open.get()
            >
                {items.into_iter().map(|item| {
                    let MenuItem { title, target, icon: icon_name, .. } = item;
                    view! {
                        <a class="main-nav-bar__card" href=target>
                            {icon_name.as_deref().map(icon)}
                            <span>{title}</span>
                        </a>
                    }
                }).collect_view()}
            </div>
        </li>
    }
}

/// Current user name and logout control.
#[component]
fn UserBadge() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let display_name = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        // Revoke the refresh token server-side, fire-and-forget.
        if let Some(refresh_token) = storage::get_refresh_token() {
            spawn_local(async move {
                let _ = api::logout(refresh_token).await;
            });
        }
        storage::clear_tokens();
        set_auth_state.set(AuthState::default());
    };

    view! {
        <div class="main-nav-bar__user">
            <span class="main-nav-bar__user-name">{display_name}</span>
            <button class="main-nav-bar__logout" on:click=on_logout>
                {icon("log-out")}
                <span>"Sign out"</span>
            </button>
        </div>
    }
}
