// Page sections for the 幼兒快閃時裝秀 landing page

use leptos::prelude::*;

use crate::controller::NavController;
use crate::dom::{self, DomSections};

/// Site title shown in the nav brand, hero and footer (single source of truth)
pub const SITE_TITLE: &str = "幼兒快閃時裝秀";

/// Anchor identifiers of the navigable sections, in page order.
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_BACKGROUND: &str = "background";
pub const SECTION_VISION: &str = "vision";
pub const SECTION_INFO: &str = "info";

/// Nav entries in page order: anchor identifier and visible label. Rendered
/// twice, once for the desktop link row and once for the mobile overlay.
pub const NAV_LINKS: [(&str, &str); 4] = [
    (SECTION_ABOUT, "專案理念"),
    (SECTION_BACKGROUND, "專案背景"),
    (SECTION_VISION, "專案願景"),
    (SECTION_INFO, "活動資訊"),
];

/// Smooth-scroll `id` into view and close the mobile menu. An identifier
/// with no matching element falls through without touching any state.
pub(crate) fn navigate(ctrl: RwSignal<NavController>, id: &str) {
    let Some(sections) = DomSections::from_window() else {
        return;
    };
    if let Some(target) = ctrl.try_update(|c| c.navigate(&sections, id)).flatten() {
        dom::scroll_into_view_smooth(&target);
    }
}

mod about;
mod background;
mod footer;
mod hero;
mod info;
mod nav;
mod overview;
mod vision;

pub use about::About;
pub use background::Background;
pub use footer::Footer;
pub use hero::Hero;
pub use info::Info;
pub use nav::Nav;
pub use overview::Overview;
pub use vision::Vision;
