//! Theme mode registry (light / dark).

use serde::{Deserialize, Serialize};

use super::registry::{impl_registry_text, RegistryEntry};

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Static description of a theme mode.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ModeDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Class toggled on the document root while this mode is active.
    pub root_class: Option<&'static str>,
}

static LIGHT: ModeDescriptor = ModeDescriptor {
    id: "light",
    name: "Light",
    icon: "Sun",
    description: "Light mode with bright backgrounds",
    root_class: None,
};

static DARK: ModeDescriptor = ModeDescriptor {
    id: "dark",
    name: "Dark",
    icon: "Moon",
    description: "Dark mode with dark backgrounds",
    root_class: Some("dark"),
};

/// Root class used by dark mode.
pub const DARK_CLASS: &str = "dark";

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl RegistryEntry for ThemeMode {
    type Descriptor = ModeDescriptor;
    const FIELD: &'static str = "mode";
    const ALL: &'static [Self] = &[ThemeMode::Light, ThemeMode::Dark];

    fn id(self) -> &'static str {
        self.descriptor().id
    }

    fn descriptor(self) -> &'static ModeDescriptor {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

impl_registry_text!(ThemeMode);
