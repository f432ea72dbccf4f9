//! Color scheme registry.
//!
//! Each scheme carries two token tables, one per [`ThemeMode`].  Token names
//! are camelCase (`primaryForeground`); the style layer turns them into CSS
//! custom properties (`--primary-foreground`).  Values are bare HSL triples so
//! stylesheets can compose them as `hsl(var(--primary))`.
//!
//! Because the values differ per mode, the resolved colors always depend on
//! the *pair* (scheme, mode).  Use [`color_values`] to resolve them.

use serde::{Deserialize, Serialize};

use super::mode::ThemeMode;
use super::registry::{impl_registry_text, RegistryEntry};

/// Named color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemeId {
    #[default]
    Default,
    Ocean,
    Forest,
    Sunset,
    Rose,
}

/// Ordered `(token, value)` pairs.
pub type ColorTokens = &'static [(&'static str, &'static str)];

/// Two swatches shown by the scheme picker.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PreviewColors {
    pub primary: &'static str,
    pub accent: &'static str,
}

/// Static description of a color scheme.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ColorSchemeDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: PreviewColors,
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

impl ColorSchemeDescriptor {
    /// Token table for the given mode.
    pub fn tokens(&self, mode: ThemeMode) -> ColorTokens {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

static DEFAULT: ColorSchemeDescriptor = ColorSchemeDescriptor {
    id: "default",
    name: "Default",
    description: "Neutral slate palette",
    preview: PreviewColors {
        primary: "#0f172a",
        accent: "#f1f5f9",
    },
    light: &[
        ("primary", "222.2 47.4% 11.2%"),
        ("primaryForeground", "210 40% 98%"),
        ("accent", "210 40% 96.1%"),
        ("accentForeground", "222.2 47.4% 11.2%"),
        ("ring", "222.2 84% 4.9%"),
    ],
    dark: &[
        ("primary", "210 40% 98%"),
        ("primaryForeground", "222.2 47.4% 11.2%"),
        ("accent", "217.2 32.6% 17.5%"),
        ("accentForeground", "210 40% 98%"),
        ("ring", "212.7 26.8% 83.9%"),
    ],
};

static OCEAN: ColorSchemeDescriptor = ColorSchemeDescriptor {
    id: "ocean",
    name: "Ocean",
    description: "Calm blues and cyans",
    preview: PreviewColors {
        primary: "#2563eb",
        accent: "#0ea5e9",
    },
    light: &[
        ("primary", "221.2 83.2% 53.3%"),
        ("primaryForeground", "210 40% 98%"),
        ("accent", "199 89% 94%"),
        ("accentForeground", "201 90% 27%"),
        ("ring", "221.2 83.2% 53.3%"),
    ],
    dark: &[
        ("primary", "217.2 91.2% 59.8%"),
        ("primaryForeground", "222.2 47.4% 11.2%"),
        ("accent", "201 60% 20%"),
        ("accentForeground", "199 89% 90%"),
        ("ring", "224.3 76.3% 48%"),
    ],
};

static FOREST: ColorSchemeDescriptor = ColorSchemeDescriptor {
    id: "forest",
    name: "Forest",
    description: "Natural greens",
    preview: PreviewColors {
        primary: "#16a34a",
        accent: "#84cc16",
    },
    light: &[
        ("primary", "142.1 76.2% 36.3%"),
        ("primaryForeground", "355.7 100% 97.3%"),
        ("accent", "138 76% 94%"),
        ("accentForeground", "142 72% 20%"),
        ("ring", "142.1 76.2% 36.3%"),
    ],
    dark: &[
        ("primary", "142.1 70.6% 45.3%"),
        ("primaryForeground", "144.9 80.4% 10%"),
        ("accent", "143 50% 16%"),
        ("accentForeground", "138 76% 90%"),
        ("ring", "142.4 71.8% 29.2%"),
    ],
};

static SUNSET: ColorSchemeDescriptor = ColorSchemeDescriptor {
    id: "sunset",
    name: "Sunset",
    description: "Warm oranges and ambers",
    preview: PreviewColors {
        primary: "#f97316",
        accent: "#facc15",
    },
    light: &[
        ("primary", "24.6 95% 53.1%"),
        ("primaryForeground", "60 9.1% 97.8%"),
        ("accent", "33 100% 94%"),
        ("accentForeground", "20 80% 30%"),
        ("ring", "24.6 95% 53.1%"),
    ],
    dark: &[
        ("primary", "20.5 90.2% 48.2%"),
        ("primaryForeground", "60 9.1% 97.8%"),
        ("accent", "20 50% 18%"),
        ("accentForeground", "33 100% 90%"),
        ("ring", "20.5 90.2% 48.2%"),
    ],
};

static ROSE: ColorSchemeDescriptor = ColorSchemeDescriptor {
    id: "rose",
    name: "Rose",
    description: "Soft pinks and reds",
    preview: PreviewColors {
        primary: "#e11d48",
        accent: "#fb7185",
    },
    light: &[
        ("primary", "346.8 77.2% 49.8%"),
        ("primaryForeground", "355.7 100% 97.3%"),
        ("accent", "356 100% 95%"),
        ("accentForeground", "345 80% 30%"),
        ("ring", "346.8 77.2% 49.8%"),
    ],
    dark: &[
        ("primary", "346.8 77.2% 49.8%"),
        ("primaryForeground", "355.7 100% 97.3%"),
        ("accent", "345 40% 18%"),
        ("accentForeground", "356 100% 92%"),
        ("ring", "346.8 77.2% 49.8%"),
    ],
};

impl RegistryEntry for ColorSchemeId {
    type Descriptor = ColorSchemeDescriptor;
    const FIELD: &'static str = "colorScheme";
    const ALL: &'static [Self] = &[
        ColorSchemeId::Default,
        ColorSchemeId::Ocean,
        ColorSchemeId::Forest,
        ColorSchemeId::Sunset,
        ColorSchemeId::Rose,
    ];

    fn id(self) -> &'static str {
        self.descriptor().id
    }

    fn descriptor(self) -> &'static ColorSchemeDescriptor {
        match self {
            ColorSchemeId::Default => &DEFAULT,
            ColorSchemeId::Ocean => &OCEAN,
            ColorSchemeId::Forest => &FOREST,
            ColorSchemeId::Sunset => &SUNSET,
            ColorSchemeId::Rose => &ROSE,
        }
    }
}

impl_registry_text!(ColorSchemeId);

/// Resolves the color tokens for a scheme in a given mode.
pub fn color_values(scheme: ColorSchemeId, mode: ThemeMode) -> ColorTokens {
    scheme.descriptor().tokens(mode)
}
