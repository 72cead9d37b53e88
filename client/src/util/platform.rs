//! Browser capability seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! State containers never touch `web_sys` directly. They receive a
//! [`Platform`] so the same logic runs against the real browser
//! ([`BrowserPlatform`]) and against a deterministic double in tests.
//!
//! TRADE-OFFS
//! ==========
//! Outside a browser (SSR, native tests) `BrowserPlatform` reads as "nothing
//! stored, no ambient preference, top of page" and ignores writes, which keeps
//! server rendering deterministic.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

/// Environment signals and side effects the UI depends on.
pub trait Platform {
    /// Read a value from persistent local storage.
    fn stored_item(&self, key: &str) -> Option<String>;
    /// Write a value to persistent local storage. Best-effort.
    fn store_item(&self, key: &str, value: &str);
    /// Whether the ambient color scheme is dark.
    fn prefers_dark_scheme(&self) -> bool;
    /// Whether the user asked the platform to minimize motion.
    fn prefers_reduced_motion(&self) -> bool;
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;
    /// Add or remove `class` on the document root element.
    fn set_root_class(&self, class: &str, enabled: bool);
    /// Smooth-scroll the element with `id` into view.
    fn scroll_to_anchor(&self, id: &str);
    /// Smooth-scroll to the top of the page.
    fn scroll_to_top(&self);
}

/// [`Platform`] backed by `window`/`document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

#[cfg(feature = "hydrate")]
fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map_or(false, |mq| mq.matches())
}

impl Platform for BrowserPlatform {
    fn stored_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn store_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn prefers_dark_scheme(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            media_matches("(prefers-color-scheme: dark)")
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            media_matches("(prefers-reduced-motion: reduce)")
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn scroll_y(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let classes = root.class_list();
            let _ = if enabled { classes.add_1(class) } else { classes.remove_1(class) };
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, enabled);
        }
    }

    fn scroll_to_anchor(&self, id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(target) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            else {
                return;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    fn scroll_to_top(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// In-memory [`Platform`] for tests.
///
/// Every signal is a plain field; side effects are recorded so assertions can
/// inspect them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FakePlatform {
    pub storage: std::cell::RefCell<std::collections::HashMap<String, String>>,
    pub dark_scheme: bool,
    pub reduced_motion: bool,
    pub scroll: std::cell::Cell<f64>,
    pub root_classes: std::cell::RefCell<Vec<String>>,
    pub scrolled_to: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl FakePlatform {
    pub fn with_stored(key: &str, value: &str) -> Self {
        let platform = Self::default();
        platform.store_item(key, value);
        platform
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.borrow().iter().any(|c| c == class)
    }
}

#[cfg(test)]
impl Platform for FakePlatform {
    fn stored_item(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    fn store_item(&self, key: &str, value: &str) {
        self.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.dark_scheme
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let mut classes = self.root_classes.borrow_mut();
        classes.retain(|c| c != class);
        if enabled {
            classes.push(class.to_owned());
        }
    }

    fn scroll_to_anchor(&self, id: &str) {
        self.scrolled_to.borrow_mut().push(id.to_owned());
    }

    fn scroll_to_top(&self) {
        self.scroll.set(0.0);
    }
}
