//! Scroll-reactive navigation bar state.
//!
//! Visibility follows the delta between consecutive scroll samples: moving
//! down past [`HIDE_THRESHOLD`] hides the bar, any upward move reveals it.
//! Samples are taken on every scroll event with no debouncing.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::platform::Platform;

/// Offset (px) below which the bar never hides.
pub const HIDE_THRESHOLD: f64 = 80.0;
/// Offset (px) past which the bar gets its backdrop style.
pub const SCROLLED_THRESHOLD: f64 = 10.0;

/// Page sections reachable from the navigation bar, in display order.
pub const SECTIONS: &[(&str, &str)] = &[
    ("projects", "Projects"),
    ("about", "About"),
    ("notes", "Notes"),
    ("contact", "Contact"),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub last_y: f64,
    pub hidden: bool,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Feed one scroll sample.
    pub fn on_scroll(&mut self, y: f64) {
        let y = y.max(0.0);
        if y > self.last_y && y > HIDE_THRESHOLD && !self.menu_open {
            self.hidden = true;
        } else if y < self.last_y {
            self.hidden = false;
        }
        self.scrolled = y > SCROLLED_THRESHOLD;
        self.last_y = y;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.hidden = false;
        }
    }

    /// Called after a section jump.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Anchor id of the page top; jumps there scroll the window instead of an element.
pub const TOP_ANCHOR: &str = "top";

/// Smooth-scroll to the section named `anchor`.
pub fn scroll_to_section(platform: &impl Platform, anchor: &str) {
    if anchor == TOP_ANCHOR {
        platform.scroll_to_top();
    } else {
        platform.scroll_to_anchor(anchor);
    }
}
