use leptos::prelude::*;

use super::SITE_TITLE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 " {SITE_TITLE} " | 讓每個孩子都閃閃發光 ✨"</p>
        </footer>
    }
}
