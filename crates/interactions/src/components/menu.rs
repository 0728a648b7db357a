//! Mobile navigation toggle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Viewport width below which the navigation collapses after following a
/// link.
pub const MOBILE_BREAKPOINT: u32 = 992;

/// The navigation bar element.
pub trait MenuSurface: Send + Sync {
    /// Reflect the expanded state on the navigation bar.
    fn set_expanded(&self, expanded: bool);
    /// Collapse the open menu.
    fn collapse(&self);
}

/// Reports the current viewport width.
pub trait Viewport: Send + Sync {
    fn width(&self) -> u32;
}

/// Toggleable mobile navigation menu.
pub struct MobileMenu {
    surface: Arc<dyn MenuSurface>,
    viewport: Arc<dyn Viewport>,
    expanded: AtomicBool,
}

impl MobileMenu {
    #[must_use]
    pub fn new(surface: Arc<dyn MenuSurface>, viewport: Arc<dyn Viewport>) -> Self {
        Self {
            surface,
            viewport,
            expanded: AtomicBool::new(false),
        }
    }

    /// The toggler was clicked: flip the expanded state.
    pub fn on_toggle(&self) {
        let expanded = !self.expanded.fetch_xor(true, Ordering::SeqCst);
        self.surface.set_expanded(expanded);
    }

    /// A navigation link was followed: on narrow viewports the menu closes.
    pub fn on_nav_link(&self) {
        if self.viewport.width() < MOBILE_BREAKPOINT {
            self.expanded.store(false, Ordering::SeqCst);
            self.surface.collapse();
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicU32;

    #[derive(Default)]
    struct RecordingSurface {
        events: Mutex<Vec<String>>,
    }

    impl MenuSurface for RecordingSurface {
        fn set_expanded(&self, expanded: bool) {
            self.events
                .lock()
                .expect("lock")
                .push(format!("expanded={expanded}"));
        }

        fn collapse(&self) {
            self.events.lock().expect("lock").push("collapse".to_string());
        }
    }

    struct FixedViewport(AtomicU32);

    impl Viewport for FixedViewport {
        fn width(&self) -> u32 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn menu(width: u32) -> (MobileMenu, Arc<RecordingSurface>) {
        let surface = Arc::new(RecordingSurface::default());
        let menu = MobileMenu::new(
            Arc::clone(&surface) as Arc<dyn MenuSurface>,
            Arc::new(FixedViewport(AtomicU32::new(width))),
        );
        (menu, surface)
    }

    #[test]
    fn test_toggle_flips_state() {
        let (menu, surface) = menu(500);
        menu.on_toggle();
        assert!(menu.is_expanded());
        menu.on_toggle();
        assert!(!menu.is_expanded());
        assert_eq!(
            *surface.events.lock().expect("lock"),
            vec!["expanded=true", "expanded=false"]
        );
    }

    #[test]
    fn test_nav_link_collapses_on_narrow_viewport() {
        let (menu, surface) = menu(500);
        menu.on_toggle();
        menu.on_nav_link();
        assert!(!menu.is_expanded());
        assert!(surface
            .events
            .lock()
            .expect("lock")
            .contains(&"collapse".to_string()));
    }

    #[test]
    fn test_nav_link_keeps_menu_on_wide_viewport() {
        let (menu, surface) = menu(1200);
        menu.on_toggle();
        menu.on_nav_link();
        assert!(menu.is_expanded());
        assert!(!surface
            .events
            .lock()
            .expect("lock")
            .contains(&"collapse".to_string()));
    }
}
