pub mod header;
pub mod left;
pub mod menu;

use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<H, L, C>(header: H, left: L, center: C) -> impl IntoView
where
    H: Fn() -> AnyView + 'static + Send,
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header class="app-header">
                {header()}
            </header>

            <div class="app-body">
                <aside class="app-sidebar">
                    {left()}
                </aside>

                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
