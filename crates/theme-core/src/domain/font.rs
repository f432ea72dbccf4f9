//! Font registry and typography tables.

use serde::{Deserialize, Serialize};

use super::registry::{impl_registry_text, RegistryEntry};

/// Selectable UI font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontId {
    #[default]
    Inter,
    Roboto,
    Poppins,
    System,
}

/// Static description of a font.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FontDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// CSS `font-family` value.
    pub font_family: &'static str,
    /// Remote stylesheet that must be loaded before the font can be shown.
    /// `None` for fonts that ship with the platform.
    pub stylesheet_url: Option<&'static str>,
    /// `(name, weight)` pairs the stylesheet provides.
    pub weights: &'static [(&'static str, u16)],
}

impl FontDescriptor {
    /// `true` when selecting this font requires fetching a stylesheet first.
    pub fn needs_fetch(&self) -> bool {
        self.stylesheet_url.is_some()
    }
}

static INTER: FontDescriptor = FontDescriptor {
    id: "inter",
    name: "Inter",
    description: "Modern, clean UI font",
    font_family: "\"Inter\", sans-serif",
    stylesheet_url: Some(
        "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap",
    ),
    weights: &[
        ("light", 300),
        ("normal", 400),
        ("medium", 500),
        ("semibold", 600),
        ("bold", 700),
    ],
};

static ROBOTO: FontDescriptor = FontDescriptor {
    id: "roboto",
    name: "Roboto",
    description: "Material Design style",
    font_family: "\"Roboto\", sans-serif",
    stylesheet_url: Some(
        "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap",
    ),
    weights: &[("light", 300), ("normal", 400), ("medium", 500), ("bold", 700)],
};

static POPPINS: FontDescriptor = FontDescriptor {
    id: "poppins",
    name: "Poppins",
    description: "Friendly, rounded style",
    font_family: "\"Poppins\", sans-serif",
    stylesheet_url: Some(
        "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&display=swap",
    ),
    weights: &[
        ("light", 300),
        ("normal", 400),
        ("medium", 500),
        ("semibold", 600),
        ("bold", 700),
    ],
};

static SYSTEM: FontDescriptor = FontDescriptor {
    id: "system",
    name: "System",
    description: "Native system font",
    font_family: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif",
    stylesheet_url: None,
    weights: &[
        ("light", 300),
        ("normal", 400),
        ("medium", 500),
        ("semibold", 600),
        ("bold", 700),
    ],
};

impl RegistryEntry for FontId {
    type Descriptor = FontDescriptor;
    const FIELD: &'static str = "font";
    const ALL: &'static [Self] = &[FontId::Inter, FontId::Roboto, FontId::Poppins, FontId::System];

    fn id(self) -> &'static str {
        self.descriptor().id
    }

    fn descriptor(self) -> &'static FontDescriptor {
        match self {
            FontId::Inter => &INTER,
            FontId::Roboto => &ROBOTO,
            FontId::Poppins => &POPPINS,
            FontId::System => &SYSTEM,
        }
    }
}

impl_registry_text!(FontId);

// ── Typography ────────────────────────────────────────────────────────────────

/// Font-size scale shared by every font (rem values, 16px base).
pub const TYPOGRAPHY_SCALE: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
];

/// Unitless line heights.
pub const LINE_HEIGHTS: &[(&str, f32)] = &[
    ("none", 1.0),
    ("tight", 1.25),
    ("snug", 1.375),
    ("normal", 1.5),
    ("relaxed", 1.625),
    ("loose", 2.0),
];
