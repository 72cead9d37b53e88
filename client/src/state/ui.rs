//! Cosmetic overlay state (grid overlay, cursor dot).
//!
//! DESIGN
//! ======
//! Keeps purely decorative concerns out of content state so overlays can be
//! toggled or disabled without touching fetched data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Key that toggles the grid overlay.
pub const GRID_TOGGLE_KEY: &str = "g";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub grid_visible: bool,
    /// Cursor dot position in viewport pixels; `None` until the pointer moves.
    pub cursor: Option<(f64, f64)>,
    /// Set when the platform asks for reduced motion; disables the cursor dot
    /// and the typewriter.
    pub reduced_motion: bool,
}

impl UiState {
    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    pub fn track_cursor(&mut self, x: f64, y: f64) {
        if !self.reduced_motion {
            self.cursor = Some((x, y));
        }
    }

    pub fn cursor_visible(&self) -> bool {
        !self.reduced_motion && self.cursor.is_some()
    }
}

/// Keyboard event summary used for the grid shortcut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Event target is an input, textarea, select or contenteditable.
    pub editable_target: bool,
}

/// Whether `press` should toggle the grid overlay.
pub fn is_grid_toggle(press: KeyPress<'_>) -> bool {
    press.key.eq_ignore_ascii_case(GRID_TOGGLE_KEY)
        && !press.ctrl
        && !press.meta
        && !press.alt
        && !press.editable_target
}

/// Inline style placing the cursor dot at `(x, y)`.
pub fn cursor_style(x: f64, y: f64) -> String {
    format!("transform: translate3d({x:.1}px, {y:.1}px, 0)")
}
