use leptos::prelude::*;

use super::{SECTION_ABOUT, SECTION_INFO, SITE_TITLE, navigate};
use crate::controller::NavController;

const HERO_PHOTO: &str = "https://images.unsplash.com/photo-1519238263530-99bdd11df2ea?w=1600&q=80";

#[component]
pub fn Hero(ctrl: RwSignal<NavController>) -> impl IntoView {
    let backdrop = format!("background-image: url({HERO_PHOTO}); opacity: 0.8;");

    view! {
        <section class="hero">
            <div class="hero-photo" style=backdrop></div>
            <div class="hero-wash"></div>
            <div class="hero-content">
                <h2 class="hero-title">{SITE_TITLE}</h2>
                <p class="hero-subtitle">"讓每個孩子都是伸展台上的小明星 ⭐"</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| navigate(ctrl, SECTION_INFO)>
                        "立即報名"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| navigate(ctrl, SECTION_ABOUT)>
                        "了解更多"
                    </button>
                </div>
                <div class="hero-arrow">"↓"</div>
            </div>
        </section>
    }
}
