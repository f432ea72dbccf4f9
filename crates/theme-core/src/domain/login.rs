//! Login screen layout registry.

use serde::{Deserialize, Serialize};

use super::registry::{impl_registry_text, RegistryEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginLayoutId {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LoginLayoutDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub card_position: &'static str,
    /// Side occupied by the marketing panel, `None` when it is hidden.
    pub content_position: Option<&'static str>,
    pub show_content: bool,
}

static LEFT: LoginLayoutDescriptor = LoginLayoutDescriptor {
    id: "left",
    name: "Left",
    description: "Login card on the left, content on the right",
    icon: "PanelLeft",
    card_position: "left",
    content_position: Some("right"),
    show_content: true,
};

static CENTER: LoginLayoutDescriptor = LoginLayoutDescriptor {
    id: "center",
    name: "Center",
    description: "Login card centered, no side content",
    icon: "Square",
    card_position: "center",
    content_position: None,
    show_content: false,
};

static RIGHT: LoginLayoutDescriptor = LoginLayoutDescriptor {
    id: "right",
    name: "Right",
    description: "Login card on the right, content on the left",
    icon: "PanelRight",
    card_position: "right",
    content_position: Some("left"),
    show_content: true,
};

impl RegistryEntry for LoginLayoutId {
    type Descriptor = LoginLayoutDescriptor;
    const FIELD: &'static str = "login.layout";
    const ALL: &'static [Self] = &[
        LoginLayoutId::Left,
        LoginLayoutId::Center,
        LoginLayoutId::Right,
    ];

    fn id(self) -> &'static str {
        self.descriptor().id
    }

    fn descriptor(self) -> &'static LoginLayoutDescriptor {
        match self {
            LoginLayoutId::Left => &LEFT,
            LoginLayoutId::Center => &CENTER,
            LoginLayoutId::Right => &RIGHT,
        }
    }
}

impl_registry_text!(LoginLayoutId);
