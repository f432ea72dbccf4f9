//! The appearance [`Configuration`] value.
//!
//! A `Configuration` is a plain value: cheap to clone, compared by content,
//! and never shared mutably.  Setters return a new value (structural update)
//! instead of mutating in place, so a snapshot handed to a consumer can never
//! change under it.
//!
//! The serialized form is the JSON the settings envelope stores:
//!
//! ```json
//! {
//!   "mode": "light",
//!   "colorScheme": "default",
//!   "font": "inter",
//!   "navigation": { "position": "vertical", "layout": "expandable" },
//!   "login": { "layout": "center" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::color_scheme::ColorSchemeId;
use super::font::FontId;
use super::login::LoginLayoutId;
use super::mode::ThemeMode;
use super::navigation::{LayoutTypeId, NavPositionId};

/// Navigation sub-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NavigationSettings {
    pub position: NavPositionId,
    /// Sidebar behaviour; only meaningful when `position` is vertical.
    pub layout: LayoutTypeId,
}

/// Login screen sub-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LoginSettings {
    pub layout: LoginLayoutId,
}

/// The full set of appearance preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub mode: ThemeMode,
    pub color_scheme: ColorSchemeId,
    pub font: FontId,
    pub navigation: NavigationSettings,
    pub login: LoginSettings,
}

impl Configuration {
    /// A fresh copy of the registered defaults.
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn with_mode(self, mode: ThemeMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_color_scheme(self, color_scheme: ColorSchemeId) -> Self {
        Self {
            color_scheme,
            ..self
        }
    }

    pub fn with_font(self, font: FontId) -> Self {
        Self { font, ..self }
    }

    pub fn with_nav_position(self, position: NavPositionId) -> Self {
        Self {
            navigation: NavigationSettings {
                position,
                ..self.navigation
            },
            ..self
        }
    }

    pub fn with_layout_type(self, layout: LayoutTypeId) -> Self {
        Self {
            navigation: NavigationSettings {
                layout,
                ..self.navigation
            },
            ..self
        }
    }

    pub fn with_login_layout(self, layout: LoginLayoutId) -> Self {
        Self {
            login: LoginSettings { layout },
            ..self
        }
    }

    /// Same configuration with light and dark swapped.
    pub fn with_mode_toggled(self) -> Self {
        self.with_mode(self.mode.toggled())
    }
}
