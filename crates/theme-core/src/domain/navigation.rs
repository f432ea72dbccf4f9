//! Navigation position and layout type registries.
//!
//! `NavPositionId` decides where the navigation lives (left sidebar or top
//! bar).  `LayoutTypeId` decides how a *vertical* sidebar behaves; it is
//! stored regardless of position but only meaningful when the position is
//! [`NavPositionId::Vertical`].

use serde::{Deserialize, Serialize};

use super::registry::{impl_registry_text, RegistryEntry};

/// Ordered `(parameter, css value)` pairs.
pub type CssParams = &'static [(&'static str, &'static str)];

// ── Navigation position ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPositionId {
    #[default]
    Vertical,
    Horizontal,
}

/// How page regions flow around the navigation.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NavFlow {
    pub direction: &'static str,
    pub main_axis: &'static str,
    pub content_flow: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NavPositionDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub flow: NavFlow,
    pub css: CssParams,
}

static VERTICAL: NavPositionDescriptor = NavPositionDescriptor {
    id: "vertical",
    name: "Vertical",
    description: "Sidebar navigation on the left",
    icon: "PanelLeft",
    flow: NavFlow {
        direction: "column",
        main_axis: "left",
        content_flow: "horizontal",
    },
    css: &[
        ("navWidth", "280px"),
        ("navCollapsedWidth", "70px"),
        ("headerHeight", "64px"),
    ],
};

static HORIZONTAL: NavPositionDescriptor = NavPositionDescriptor {
    id: "horizontal",
    name: "Horizontal",
    description: "Top navigation bar",
    icon: "PanelTop",
    flow: NavFlow {
        direction: "row",
        main_axis: "top",
        content_flow: "vertical",
    },
    css: &[("navHeight", "64px"), ("subNavHeight", "48px")],
};

impl RegistryEntry for NavPositionId {
    type Descriptor = NavPositionDescriptor;
    const FIELD: &'static str = "navigation.position";
    const ALL: &'static [Self] = &[NavPositionId::Vertical, NavPositionId::Horizontal];

    fn id(self) -> &'static str {
        self.descriptor().id
    }

    fn descriptor(self) -> &'static NavPositionDescriptor {
        match self {
            NavPositionId::Vertical => &VERTICAL,
            NavPositionId::Horizontal => &HORIZONTAL,
        }
    }
}

impl_registry_text!(NavPositionId);

// ── Layout type ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutTypeId {
    #[default]
    Expandable,
    Sticky,
}

/// Behaviour switches for a sidebar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutFeatures {
    pub collapsible: bool,
    pub show_labels: bool,
    pub show_submenus: bool,
    pub persist_state: bool,
    pub tooltips: bool,
    pub submenu_bar: bool,
}

impl LayoutFeatures {
    /// Looks a feature up by its camelCase name; unknown names are unsupported.
    pub fn supports(&self, feature: &str) -> bool {
        match feature {
            "collapsible" => self.collapsible,
            "showLabels" => self.show_labels,
            "showSubmenus" => self.show_submenus,
            "persistState" => self.persist_state,
            "tooltips" => self.tooltips,
            "submenuBar" => self.submenu_bar,
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LayoutTypeDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: LayoutFeatures,
    pub css: CssParams,
}

impl LayoutTypeDescriptor {
    pub fn supports_feature(&self, feature: &str) -> bool {
        self.features.supports(feature)
    }
}

static EXPANDABLE: LayoutTypeDescriptor = LayoutTypeDescriptor {
    id: "expandable",
    name: "Expandable Sidebar",
    description: "Full sidebar that can collapse to icons only",
    icon: "PanelLeftClose",
    features: LayoutFeatures {
        collapsible: true,
        show_labels: true,
        show_submenus: true,
        persist_state: true,
        tooltips: false,
        submenu_bar: false,
    },
    css: &[
        ("expandedWidth", "280px"),
        ("collapsedWidth", "70px"),
        ("transitionDuration", "300ms"),
        ("transitionTiming", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ],
};

static STICKY: LayoutTypeDescriptor = LayoutTypeDescriptor {
    id: "sticky",
    name: "Sticky Menu",
    description: "Compact icon menu with tooltips and submenu bar",
    icon: "LayoutList",
    features: LayoutFeatures {
        collapsible: false,
        show_labels: false,
        show_submenus: true,
        persist_state: false,
        tooltips: true,
        submenu_bar: true,
    },
    css: &[
        ("iconMenuWidth", "70px"),
        ("submenuBarWidth", "220px"),
        ("tooltipDelay", "200ms"),
        ("transitionDuration", "200ms"),
        ("transitionTiming", "ease-out"),
    ],
};

impl RegistryEntry for LayoutTypeId {
    type Descriptor = LayoutTypeDescriptor;
    const FIELD: &'static str = "navigation.layout";
    const ALL: &'static [Self] = &[LayoutTypeId::Expandable, LayoutTypeId::Sticky];

    fn id(self) -> &'static str {
        self.descriptor().id
    }

    fn descriptor(self) -> &'static LayoutTypeDescriptor {
        match self {
            LayoutTypeId::Expandable => &EXPANDABLE,
            LayoutTypeId::Sticky => &STICKY,
        }
    }
}

impl_registry_text!(LayoutTypeId);
