//! Sidebar component with collapsible menu groups.
//!
//! Renders the auth-gated resolution of the main menu: leaves are plain
//! navigation anchors, groups expand and collapse in place.

use contracts::shared::menu::{
    parse_menu, resolve_menu, MenuEntry, MenuGroup, MenuItem, ResolveOptions,
};
use leptos::prelude::*;

use crate::layout::menu::main_menu;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();

    // Auth state read once, untracked, for filtering menu entries; the
    // sidebar is recreated by the login switch on every auth transition.
    let viewer = auth_state.with_untracked(|state| state.viewer());

    let entries = resolve_menu(
        parse_menu(main_menu()),
        &viewer,
        ResolveOptions {
            enforce_auth_gate: true,
        },
    );

    let expanded_groups = RwSignal::new(Vec::<String>::new());

    view! {
        <div class="app-sidebar__content">
            {entries.into_iter().map(|entry| match entry {
                MenuEntry::Simple(item) => view! { <SidebarLeaf item=item /> }.into_any(),
                MenuEntry::Composed(group) => {
                    view! { <SidebarGroup group=group expanded_groups=expanded_groups /> }.into_any()
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn SidebarLeaf(item: MenuItem) -> impl IntoView {
    let MenuItem {
        title,
        target,
        icon: icon_name,
        ..
    } = item;

    view! {
        <a class="app-sidebar__item" href=target>
            <div class="app-sidebar__item-content">
                {icon_name.as_deref().map(icon)}
                <span>{title}</span>
            </div>
        </a>
    }
}

#[component]
fn SidebarGroup(group: MenuGroup, expanded_groups: RwSignal<Vec<String>>) -> impl IntoView {
    let MenuGroup {
        title,
        icon: icon_name,
        items,
        ..
    } = group;

    let title_stored = StoredValue::new(title.clone());
    let items_stored = StoredValue::new(items);
    let title_for_exp = title.clone();
    let title_for_click = title.clone();

    view! {
        <div>
            <div
                class="app-sidebar__item"
                on:click=move |_| {
                    let t = title_for_click.clone();
                    expanded_groups.update(move |open| {
                        if let Some(pos) = open.iter().position(|x| x == &t) {
                            open.remove(pos);
                        } else {
                            open.push(t);
                        }
                    });
                }
            >
                <div class="app-sidebar__item-content">
                    {icon_name.as_deref().map(icon)}
                    <span>{title}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=move || {
                        expanded_groups.get().contains(&title_for_exp)
                    }
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=move || expanded_groups.get().contains(&title_stored.get_value())>
                <div class="app-sidebar__children">
                    {items_stored.get_value().into_iter().map(|item| {
                        view! { <SidebarLeaf item=item /> }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
