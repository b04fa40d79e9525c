//! Interactive state behind the navigation bar.
//!
//! The page has exactly two pieces of mutable UI state: whether the nav bar
//! has scrolled past its elevation threshold, and whether the mobile menu is
//! open. Both live in [`NavController`]; components observe it through a
//! signal and mutate it only through the transition methods here.

/// Scroll offset (CSS pixels) past which the nav bar renders elevated.
pub const ELEVATION_THRESHOLD: f64 = 50.0;

/// Resolves a section identifier to a scrollable target.
///
/// The production registry is backed by the live document (see
/// [`crate::dom::DomSections`]); tests substitute an in-memory one.
pub trait SectionRegistry {
    type Target;

    fn resolve(&self, id: &str) -> Option<Self::Target>;
}

/// The two flags the nav bar renders from, plus their transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavController {
    elevated: bool,
    menu_open: bool,
}

impl NavController {
    /// Fresh page load: not scrolled, menu closed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elevated(&self) -> bool {
        self.elevated
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Scroll notification. A pure projection of the current offset, so
    /// repeated delivery of the same offset is a no-op.
    pub fn on_scroll(&mut self, offset: f64) {
        self.elevated = offset > ELEVATION_THRESHOLD;
    }

    /// Menu button press. Strict negation: repeated presses alternate.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Resolve `id` and hand the target back for the caller to scroll into
    /// view. The menu closes only when resolution succeeds; an unknown
    /// identifier leaves all state untouched.
    pub fn navigate<R: SectionRegistry>(&mut self, registry: &R, id: &str) -> Option<R::Target> {
        let target = registry.resolve(id)?;
        self.menu_open = false;
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// In-memory stand-in for the DOM: knows the four real section anchors.
    struct FakeSections;

    impl SectionRegistry for FakeSections {
        type Target = &'static str;

        fn resolve(&self, id: &str) -> Option<&'static str> {
            crate::sections::NAV_LINKS
                .iter()
                .map(|(anchor, _)| *anchor)
                .find(|anchor| *anchor == id)
        }
    }

    #[test]
    fn elevated_tracks_threshold() {
        let mut ctrl = NavController::new();
        assert_eq!(ctrl.elevated(), false);

        for (offset, expected) in [
            (0.0, false),
            (50.0, false), // strict: exactly at the threshold stays flat
            (50.1, true),
            (120.0, true),
            (10.0, false),
        ] {
            ctrl.on_scroll(offset);
            assert_eq!(ctrl.elevated(), expected, "offset {offset}");
        }
    }

    #[test]
    fn repeated_scroll_notifications_converge() {
        let mut ctrl = NavController::new();
        for _ in 0..5 {
            ctrl.on_scroll(120.0);
        }
        assert_eq!(ctrl.elevated(), true);
        for _ in 0..5 {
            ctrl.on_scroll(0.0);
        }
        assert_eq!(ctrl.elevated(), false);
    }

    #[test]
    fn menu_toggle_alternates() {
        let mut ctrl = NavController::new();
        assert_eq!(ctrl.menu_open(), false);

        ctrl.toggle_menu();
        assert_eq!(ctrl.menu_open(), true);
        ctrl.toggle_menu();
        assert_eq!(ctrl.menu_open(), false);

        // odd number of presses from closed ends open
        for _ in 0..3 {
            ctrl.toggle_menu();
        }
        assert_eq!(ctrl.menu_open(), true);
    }

    #[test]
    fn navigation_closes_menu_for_every_known_section() {
        for (id, _) in crate::sections::NAV_LINKS {
            let mut ctrl = NavController::new();
            ctrl.toggle_menu();
            assert_eq!(ctrl.menu_open(), true);

            let target = ctrl.navigate(&FakeSections, id);
            assert_eq!(target, Some(id));
            assert_eq!(ctrl.menu_open(), false, "menu must close after {id}");
        }
    }

    #[test]
    fn navigation_to_unknown_section_is_a_no_op() {
        let mut ctrl = NavController::new();
        ctrl.toggle_menu();

        let target = ctrl.navigate(&FakeSections, "nonexistent");
        assert_eq!(target, None);
        assert_eq!(ctrl.menu_open(), true, "miss must not touch the menu");

        // same from the closed state
        let mut closed = NavController::new();
        assert_eq!(closed.navigate(&FakeSections, "nonexistent"), None);
        assert_eq!(closed, NavController::new());
    }

    #[test]
    fn open_menu_then_navigate_to_vision() {
        // open the overlay, then pick 專案願景 from it
        let mut ctrl = NavController::new();
        ctrl.toggle_menu();

        let target = ctrl.navigate(&FakeSections, "vision");
        assert_eq!(target, Some("vision"));
        assert_eq!(ctrl.menu_open(), false);
    }
}
