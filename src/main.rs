// 幼兒快閃時裝秀 Landing Page — Leptos 0.8 Edition

mod controller;
mod dom;
mod sections;

use controller::NavController;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    dom::print_console_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let ctrl = RwSignal::new(NavController::new());

    view! {
        <Nav ctrl=ctrl />
        <main>
            <Hero ctrl=ctrl />
            <About />
            <Background />
            <Vision />
            <Overview />
            <Info />
        </main>
        <Footer />
    }
}
