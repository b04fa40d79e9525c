//! Browser-facing glue: element lookup, smooth scrolling, console banner.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::controller::SectionRegistry;

/// Section registry backed by the live document.
pub struct DomSections {
    document: Document,
}

impl DomSections {
    /// `None` outside a browser context.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl SectionRegistry for DomSections {
    type Target = Element;

    fn resolve(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// Animate the viewport until `target` is in view.
pub fn scroll_into_view_smooth(target: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Animate the viewport back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Styled greeting for anyone peeking at the console.
pub fn print_console_banner() {
    web_sys::console::log_2(
        &JsValue::from_str("%c幼兒快閃時裝秀 ✨ 讓每個孩子都是伸展台上的小明星"),
        &JsValue::from_str("color: #d97706; font-weight: bold; font-size: 12px;"),
    );
}
