//! Scroll-driven effects: back-to-top, one-shot reveal animations, lazy
//! image loading, and hover zoom.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};

/// Scroll offset past which the back-to-top button appears.
pub const SCROLL_THRESHOLD: u32 = 300;

/// Scale applied to a product image while hovered.
pub const HOVER_SCALE: f32 = 1.1;

/// Resting image scale.
pub const REST_SCALE: f32 = 1.0;

/// The back-to-top button and scroll position control.
pub trait BackToTopSurface: Send + Sync {
    fn set_visible(&self, visible: bool);
    fn scroll_to_top(&self);
}

/// Back-to-top button shown past a scroll threshold.
pub struct BackToTop {
    surface: Arc<dyn BackToTopSurface>,
    threshold: u32,
    visible: AtomicBool,
}

impl BackToTop {
    #[must_use]
    pub fn new(surface: Arc<dyn BackToTopSurface>) -> Self {
        Self {
            surface,
            threshold: SCROLL_THRESHOLD,
            visible: AtomicBool::new(false),
        }
    }

    /// The page scrolled to `offset`. Visibility only changes when the
    /// threshold is crossed.
    pub fn on_scroll(&self, offset: u32) {
        let should_show = offset > self.threshold;
        if self.visible.swap(should_show, Ordering::SeqCst) != should_show {
            self.surface.set_visible(should_show);
        }
    }

    /// The button was clicked.
    pub fn on_click(&self) {
        self.surface.scroll_to_top();
    }
}

/// Marks elements animated when they first become visible.
pub trait RevealSurface: Send + Sync {
    fn reveal(&self, target: &str);
}

/// One-shot scroll reveal animations.
pub struct ScrollReveal {
    surface: Arc<dyn RevealSurface>,
    revealed: Mutex<HashSet<String>>,
}

impl ScrollReveal {
    #[must_use]
    pub fn new(surface: Arc<dyn RevealSurface>) -> Self {
        Self {
            surface,
            revealed: Mutex::new(HashSet::new()),
        }
    }

    /// An observed element became visible. Each element animates once.
    pub fn on_visible(&self, target: &str) {
        let newly_revealed = self
            .revealed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(target.to_string());
        if newly_revealed {
            self.surface.reveal(target);
        }
    }
}

/// Swaps an image's deferred source in.
pub trait ImageLoader: Send + Sync {
    fn load_deferred(&self, target: &str);
}

/// Defers image loading until first visibility.
pub struct LazyImages {
    loader: Arc<dyn ImageLoader>,
    pending: Mutex<HashSet<String>>,
}

impl LazyImages {
    #[must_use]
    pub fn new(loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            loader,
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Register an image carrying a deferred source.
    pub fn observe(&self, target: impl Into<String>) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(target.into());
    }

    /// An observed image became visible: load it and stop observing.
    pub fn on_visible(&self, target: &str) {
        let was_pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(target);
        if was_pending {
            self.loader.load_deferred(target);
        }
    }
}

/// Applies a scale transform to a product image.
pub trait ZoomSurface: Send + Sync {
    fn set_scale(&self, scale: f32);
}

/// Hover zoom on product images.
pub struct ImageZoom {
    surface: Arc<dyn ZoomSurface>,
}

impl ImageZoom {
    #[must_use]
    pub fn new(surface: Arc<dyn ZoomSurface>) -> Self {
        Self { surface }
    }

    pub fn on_pointer_enter(&self) {
        self.surface.set_scale(HOVER_SCALE);
    }

    pub fn on_pointer_leave(&self) {
        self.surface.set_scale(REST_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingBackToTop {
        events: StdMutex<Vec<String>>,
    }

    impl BackToTopSurface for RecordingBackToTop {
        fn set_visible(&self, visible: bool) {
            self.events
                .lock()
                .expect("lock")
                .push(format!("visible={visible}"));
        }

        fn scroll_to_top(&self) {
            self.events.lock().expect("lock").push("top".to_string());
        }
    }

    #[test]
    fn test_back_to_top_only_fires_on_threshold_crossings() {
        let surface = Arc::new(RecordingBackToTop::default());
        let button = BackToTop::new(Arc::clone(&surface) as Arc<dyn BackToTopSurface>);

        button.on_scroll(100);
        button.on_scroll(301);
        button.on_scroll(800);
        button.on_scroll(10);
        button.on_click();

        assert_eq!(
            *surface.events.lock().expect("lock"),
            vec!["visible=true", "visible=false", "top"]
        );
    }

    #[derive(Default)]
    struct RecordingReveals {
        revealed: StdMutex<Vec<String>>,
    }

    impl RevealSurface for RecordingReveals {
        fn reveal(&self, target: &str) {
            self.revealed.lock().expect("lock").push(target.to_string());
        }
    }

    #[test]
    fn test_scroll_reveal_is_one_shot() {
        let surface = Arc::new(RecordingReveals::default());
        let reveal = ScrollReveal::new(Arc::clone(&surface) as Arc<dyn RevealSurface>);

        reveal.on_visible("hero");
        reveal.on_visible("hero");
        reveal.on_visible("footer");

        assert_eq!(*surface.revealed.lock().expect("lock"), vec!["hero", "footer"]);
    }

    #[derive(Default)]
    struct RecordingLoader {
        loaded: StdMutex<Vec<String>>,
    }

    impl ImageLoader for RecordingLoader {
        fn load_deferred(&self, target: &str) {
            self.loaded.lock().expect("lock").push(target.to_string());
        }
    }

    #[test]
    fn test_lazy_images_load_once_and_stop_observing() {
        let loader = Arc::new(RecordingLoader::default());
        let lazy = LazyImages::new(Arc::clone(&loader) as Arc<dyn ImageLoader>);

        lazy.observe("img-1");
        lazy.on_visible("img-1");
        lazy.on_visible("img-1");
        lazy.on_visible("never-observed");

        assert_eq!(*loader.loaded.lock().expect("lock"), vec!["img-1"]);
    }
}
