use leptos::ev;
use leptos::prelude::*;

use super::{NAV_LINKS, SITE_TITLE, navigate};
use crate::controller::NavController;
use crate::dom;

#[component]
pub fn Nav(ctrl: RwSignal<NavController>) -> impl IntoView {
    // Window scroll listener, held for the lifetime of the nav and removed
    // exactly once on teardown.
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        ctrl.update(|c| c.on_scroll(dom::scroll_offset()));
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <nav class=move || if ctrl.with(|c| c.elevated()) { "nav nav-elevated" } else { "nav" }>
            <div class="nav-inner">
                <button class="nav-brand" on:click=move |_| dom::scroll_to_top()>
                    {SITE_TITLE} " ✨"
                </button>
                <button
                    class="nav-toggle"
                    aria-label="選單"
                    on:click=move |_| ctrl.update(|c| c.toggle_menu())
                >
                    {move || if ctrl.with(|c| c.menu_open()) { "✕" } else { "☰" }}
                </button>
                <div class="nav-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(id, label)| view! {
                            <button class="nav-link" on:click=move |_| navigate(ctrl, id)>{label}</button>
                        })
                        .collect_view()}
                </div>
            </div>

            // Narrow-viewport overlay; wide viewports hide it in CSS even
            // while the state stays open.
            <Show when=move || ctrl.with(|c| c.menu_open())>
                <div class="nav-menu">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(id, label)| view! {
                            <button class="nav-menu-link" on:click=move |_| navigate(ctrl, id)>{label}</button>
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
