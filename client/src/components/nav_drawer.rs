//! App bar plus permanent navigation drawer wrapping the routed view.
//!
//! DESIGN
//! ======
//! The entry list is static (`routes::NAV_ENTRIES`). The only reactive input
//! is the current pathname, used to highlight the entry whose path matches
//! it exactly. Plain `<a>` links are intercepted by the router for
//! client-side navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::NAV_ENTRIES;

pub const DRAWER_WIDTH_PX: u32 = 240;
pub const APP_TITLE: &str = "Forcastock";

/// Fixed app bar, drawer on the left, routed content on the right.
#[component]
pub fn NavDrawer(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    let entries = NAV_ENTRIES
        .iter()
        .map(|entry| {
            let entry = *entry;
            let selected = move || pathname.with(|path| entry.is_selected(path));
            view! {
                <li class="nav-drawer__item">
                    <a
                        href=entry.path
                        class="nav-drawer__link"
                        class:nav-drawer__link--selected=selected
                        aria-current=move || selected().then_some("page")
                    >
                        <span class="nav-drawer__icon">{entry.icon.glyph()}</span>
                        <span class="nav-drawer__label">{entry.label}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="nav-shell">
            <header class="app-bar">
                <span class="app-bar__title">{APP_TITLE}</span>
            </header>
            <nav class="nav-drawer" style=format!("width: {DRAWER_WIDTH_PX}px;")>
                <ul class="nav-drawer__list">{entries}</ul>
            </nav>
            <main class="nav-shell__content">{children()}</main>
        </div>
    }
}
