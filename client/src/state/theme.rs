//! Light/dark theme preference.
//!
//! The stored preference (local key `theme`) wins on startup; without one the
//! ambient `prefers-color-scheme` signal decides. Each toggle persists the new
//! value and flips the `dark` class on the document root, which the
//! stylesheet keys off.
//!
//! FORCED DARK
//! ===========
//! Earlier builds of this site forced dark mode on every load, overriding the
//! stored and ambient choice. That is opt-in here via
//! [`ThemeOptions::force_dark`], and an override that contradicts the
//! resolved preference is reported back so the caller can log it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::platform::Platform;

/// Local storage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class added to the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Build-time theme switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Force dark on mount regardless of stored/ambient preference.
    pub force_dark: bool,
}

impl ThemeOptions {
    /// Read switches from the build environment (`FOLIO_FORCE_DARK`).
    pub fn from_build_env() -> Self {
        Self { force_dark: parse_flag(option_env!("FOLIO_FORCE_DARK")) }
    }
}

pub(crate) fn parse_flag(raw: Option<&str>) -> bool {
    matches!(raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(), Some("1" | "true" | "yes" | "on"))
}

/// Result of resolving the theme at mount time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeResolution {
    pub theme: Theme,
    /// Preference that was discarded by [`ThemeOptions::force_dark`], if any.
    pub overridden: Option<Theme>,
}

/// Stored preference first, ambient color scheme otherwise.
pub fn preferred_theme(platform: &impl Platform) -> Theme {
    if let Some(stored) = platform.stored_item(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse) {
        return stored;
    }
    if platform.prefers_dark_scheme() { Theme::Dark } else { Theme::Light }
}

/// Resolve the mount-time theme and apply it to the document root.
pub fn initialize(platform: &impl Platform, options: ThemeOptions) -> ThemeResolution {
    let preferred = preferred_theme(platform);
    let resolution = if options.force_dark {
        ThemeResolution { theme: Theme::Dark, overridden: (preferred != Theme::Dark).then_some(preferred) }
    } else {
        ThemeResolution { theme: preferred, overridden: None }
    };
    apply(platform, resolution.theme);
    resolution
}

/// Reflect `theme` on the document root.
pub fn apply(platform: &impl Platform, theme: Theme) {
    platform.set_root_class(DARK_CLASS, theme.is_dark());
}

/// Flip `current`, persist and apply the result.
pub fn toggle(platform: &impl Platform, current: Theme) -> Theme {
    let next = current.toggled();
    platform.store_item(THEME_STORAGE_KEY, next.as_str());
    apply(platform, next);
    next
}
