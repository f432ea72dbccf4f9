//! Read-only projections of a configuration snapshot.
//!
//! Each function takes a `&Configuration` and returns a small view struct
//! holding copies of the relevant ids and `&'static` registry descriptors.
//! Nothing is cached: views are recomputed on every call, which is cheap
//! because every lookup is a match over a static table.
//!
//! ```
//! use theme_core::{Configuration, NavPositionId};
//! use theme_settings::application::views::nav_position_view;
//!
//! let cfg = Configuration::defaults().with_nav_position(NavPositionId::Horizontal);
//! assert!(nav_position_view(&cfg).is_horizontal);
//! ```

use serde::Serialize;
use theme_core::domain::color_scheme::{ColorSchemeDescriptor, ColorTokens, PreviewColors};
use theme_core::domain::font::{FontDescriptor, LINE_HEIGHTS, TYPOGRAPHY_SCALE};
use theme_core::domain::login::LoginLayoutDescriptor;
use theme_core::domain::mode::ModeDescriptor;
use theme_core::domain::navigation::{
    CssParams, LayoutFeatures, LayoutTypeDescriptor, NavFlow, NavPositionDescriptor,
};
use theme_core::{
    ColorSchemeId, Configuration, FontId, LayoutTypeId, LoginLayoutId, NavPositionId,
    RegistryEntry, ThemeMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeModeView {
    pub mode: ThemeMode,
    pub current: &'static ModeDescriptor,
    pub is_dark: bool,
    pub is_light: bool,
}

pub fn theme_mode_view(config: &Configuration) -> ThemeModeView {
    ThemeModeView {
        mode: config.mode,
        current: config.mode.descriptor(),
        is_dark: config.mode == ThemeMode::Dark,
        is_light: config.mode == ThemeMode::Light,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemeView {
    pub color_scheme: ColorSchemeId,
    pub current: &'static ColorSchemeDescriptor,
    pub scheme_name: &'static str,
    pub preview: &'static PreviewColors,
    /// Tokens for the active mode.
    pub tokens: ColorTokens,
    pub mode: ThemeMode,
}

pub fn color_scheme_view(config: &Configuration) -> ColorSchemeView {
    let current = config.color_scheme.descriptor();
    ColorSchemeView {
        color_scheme: config.color_scheme,
        current,
        scheme_name: current.name,
        preview: &current.preview,
        tokens: current.tokens(config.mode),
        mode: config.mode,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontView {
    pub font: FontId,
    pub current: &'static FontDescriptor,
    pub font_name: &'static str,
    pub font_family: &'static str,
    pub description: &'static str,
    pub typography_scale: &'static [(&'static str, &'static str)],
    pub line_heights: &'static [(&'static str, f32)],
}

impl FontView {
    pub fn is_selected(&self, font: FontId) -> bool {
        self.font == font
    }
}

pub fn font_view(config: &Configuration) -> FontView {
    let current = config.font.descriptor();
    FontView {
        font: config.font,
        current,
        font_name: current.name,
        font_family: current.font_family,
        description: current.description,
        typography_scale: TYPOGRAPHY_SCALE,
        line_heights: LINE_HEIGHTS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavPositionView {
    pub nav_position: NavPositionId,
    pub current: &'static NavPositionDescriptor,
    pub position_name: &'static str,
    pub is_vertical: bool,
    pub is_horizontal: bool,
    pub css: CssParams,
    pub flow: &'static NavFlow,
}

pub fn nav_position_view(config: &Configuration) -> NavPositionView {
    let position = config.navigation.position;
    let current = position.descriptor();
    NavPositionView {
        nav_position: position,
        current,
        position_name: current.name,
        is_vertical: position == NavPositionId::Vertical,
        is_horizontal: position == NavPositionId::Horizontal,
        css: current.css,
        flow: &current.flow,
    }
}

/// Sidebar layout plus the separately stored collapsed flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutView {
    pub layout_type: LayoutTypeId,
    pub current: &'static LayoutTypeDescriptor,
    pub layout_name: &'static str,
    pub is_expandable: bool,
    pub is_sticky: bool,
    pub sidebar_collapsed: bool,
    pub sidebar_expanded: bool,
    pub css: CssParams,
    pub features: LayoutFeatures,
}

impl LayoutView {
    /// Looks a feature up by its camelCase name (`"showLabels"`).
    pub fn supports_feature(&self, feature: &str) -> bool {
        self.features.supports(feature)
    }
}

pub fn layout_view(config: &Configuration, sidebar_collapsed: bool) -> LayoutView {
    let layout = config.navigation.layout;
    let current = layout.descriptor();
    LayoutView {
        layout_type: layout,
        current,
        layout_name: current.name,
        is_expandable: layout == LayoutTypeId::Expandable,
        is_sticky: layout == LayoutTypeId::Sticky,
        sidebar_collapsed,
        sidebar_expanded: !sidebar_collapsed,
        css: current.css,
        features: current.features,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginLayoutView {
    pub login_layout: LoginLayoutId,
    pub current: &'static LoginLayoutDescriptor,
    pub layout_name: &'static str,
    pub is_left: bool,
    pub is_center: bool,
    pub is_right: bool,
    pub card_position: &'static str,
    pub content_position: Option<&'static str>,
    pub show_content: bool,
}

pub fn login_layout_view(config: &Configuration) -> LoginLayoutView {
    let layout = config.login.layout;
    let current = layout.descriptor();
    LoginLayoutView {
        login_layout: layout,
        current,
        layout_name: current.name,
        is_left: layout == LoginLayoutId::Left,
        is_center: layout == LoginLayoutId::Center,
        is_right: layout == LoginLayoutId::Right,
        card_position: current.card_position,
        content_position: current.content_position,
        show_content: current.show_content,
    }
}

// ── Picker lists ──────────────────────────────────────────────────────────────

pub fn available_modes() -> Vec<&'static ModeDescriptor> {
    ThemeMode::descriptors()
}

pub fn available_color_schemes() -> Vec<&'static ColorSchemeDescriptor> {
    ColorSchemeId::descriptors()
}

pub fn available_fonts() -> Vec<&'static FontDescriptor> {
    FontId::descriptors()
}

pub fn available_nav_positions() -> Vec<&'static NavPositionDescriptor> {
    NavPositionId::descriptors()
}

pub fn available_layout_types() -> Vec<&'static LayoutTypeDescriptor> {
    LayoutTypeId::descriptors()
}

pub fn available_login_layouts() -> Vec<&'static LoginLayoutDescriptor> {
    LoginLayoutId::descriptors()
}
