//! Command bridge: exposes the settings store to UI front-ends.
//!
//! Front-ends speak in string ids (`"ocean"`, `"horizontal"`) and JSON.  Each
//! command here parses its arguments into registry enums, delegates to the
//! shared [`AppState`], and answers with a [`CommandResult`].  Nothing in the
//! application layer imports this module.
//!
//! # `CommandResult<T>` wrapper
//!
//! Every command returns the same shape:
//! `{ success: bool, data: T | null, error: string | null }`.
//! An unknown id produces `success: false` with a message naming the field,
//! and the configuration is left unchanged.
//!
//! # Data Transfer Objects (DTOs)
//!
//! DTOs hold owned, JSON-friendly fields.  Configuration values are passed
//! through as [`Configuration`], whose serialized form is already the stored
//! camelCase shape.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use theme_core::{
    ColorSchemeId, Configuration, FontId, LayoutTypeId, LoginLayoutId, NavPositionId,
    RegistryEntry, ThemeMode,
};
use tracing::warn;

use crate::application::ports::{FontLoader, SettingsRepository, ThemeApplier};
use crate::application::settings_store::{SettingsStore, StoreServices};
use crate::infrastructure::fonts::StylesheetFontLoader;
use crate::infrastructure::storage::backend::KeyValueStorage;
use crate::infrastructure::storage::persistence::SettingsPersistence;
use crate::infrastructure::style::{StyleApplicator, Stylesheet};

// ── Shared application state ──────────────────────────────────────────────────

/// Everything a front-end needs, wired over one storage backend.
pub struct AppState {
    pub store: SettingsStore,
    /// Style target the store applies to; render it for the current CSS.
    pub stylesheet: Arc<Stylesheet>,
    /// Applicator writing into `stylesheet`.
    pub styles: Arc<StyleApplicator>,
    pub persistence: SettingsPersistence,
}

impl AppState {
    /// Wires persistence, styles and font loading over `storage` and creates
    /// the store.  `initial` is used only when nothing is persisted yet.
    pub fn new(storage: Arc<dyn KeyValueStorage>, initial: Option<&Value>) -> Arc<Self> {
        let stylesheet = Arc::new(Stylesheet::new());
        let styles = Arc::new(StyleApplicator::new(stylesheet.clone()));
        let persistence = SettingsPersistence::new(storage);

        let services = StoreServices {
            repository: Arc::new(persistence.clone()) as Arc<dyn SettingsRepository>,
            styles: styles.clone() as Arc<dyn ThemeApplier>,
            fonts: Arc::new(StylesheetFontLoader::new(stylesheet.clone())) as Arc<dyn FontLoader>,
        };

        Arc::new(Self {
            store: SettingsStore::create(services, initial),
            stylesheet,
            styles,
            persistence,
        })
    }
}

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// Current settings plus the store flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
    pub settings: Configuration,
    pub sidebar_collapsed: bool,
    pub is_loading: bool,
}

impl SettingsDto {
    fn from_state(state: &AppState) -> Self {
        Self {
            settings: state.store.snapshot(),
            sidebar_collapsed: state.store.sidebar_collapsed(),
            is_loading: state.store.is_loading(),
        }
    }
}

/// One entry of a picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDto {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Every picker's entries, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceOptionsDto {
    pub modes: Vec<OptionDto>,
    pub color_schemes: Vec<OptionDto>,
    pub fonts: Vec<OptionDto>,
    pub nav_positions: Vec<OptionDto>,
    pub layout_types: Vec<OptionDto>,
    pub login_layouts: Vec<OptionDto>,
}

fn options<T: RegistryEntry>(
    describe: impl Fn(&'static T::Descriptor) -> (&'static str, &'static str),
) -> Vec<OptionDto> {
    T::ALL
        .iter()
        .map(|entry| {
            let (name, description) = describe(entry.descriptor());
            OptionDto {
                id: entry.id().to_string(),
                name: name.to_string(),
                description: description.to_string(),
            }
        })
        .collect()
}

/// Unified response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Parses `id` for registry `T`, or builds the error result.
fn parse_id<T: RegistryEntry, R: Serialize>(id: &str) -> Result<T, CommandResult<R>> {
    T::parse_id(id).map_err(|e| {
        warn!("rejected command argument: {e}");
        CommandResult::err(e.to_string())
    })
}

// ── Commands ──────────────────────────────────────────────────────────────────

pub async fn get_settings(state: Arc<AppState>) -> CommandResult<SettingsDto> {
    CommandResult::ok(SettingsDto::from_state(&state))
}

pub async fn get_appearance_options(_state: Arc<AppState>) -> CommandResult<AppearanceOptionsDto> {
    CommandResult::ok(AppearanceOptionsDto {
        modes: options::<ThemeMode>(|d| (d.name, d.description)),
        color_schemes: options::<ColorSchemeId>(|d| (d.name, d.description)),
        fonts: options::<FontId>(|d| (d.name, d.description)),
        nav_positions: options::<NavPositionId>(|d| (d.name, d.description)),
        layout_types: options::<LayoutTypeId>(|d| (d.name, d.description)),
        login_layouts: options::<LoginLayoutId>(|d| (d.name, d.description)),
    })
}

/// Returns the CSS currently applied, including linked font stylesheets.
pub async fn get_css(state: Arc<AppState>) -> CommandResult<String> {
    CommandResult::ok(state.stylesheet.render_css())
}

/// Sanitizes and adopts a whole settings object.
///
/// # Example (frontend)
/// ```ts
/// await invoke<SettingsDto>('update_settings', { settings: { mode: 'dark' } });
/// ```
pub async fn update_settings(state: Arc<AppState>, settings: Value) -> CommandResult<SettingsDto> {
    state.store.set_all(&settings);
    CommandResult::ok(SettingsDto::from_state(&state))
}

pub async fn set_mode(state: Arc<AppState>, mode: String) -> CommandResult<Configuration> {
    match parse_id::<ThemeMode, _>(&mode) {
        Ok(mode) => CommandResult::ok(state.store.set_mode(mode)),
        Err(result) => result,
    }
}

pub async fn toggle_mode(state: Arc<AppState>) -> CommandResult<Configuration> {
    CommandResult::ok(state.store.toggle_mode())
}

pub async fn set_color_scheme(
    state: Arc<AppState>,
    scheme: String,
) -> CommandResult<Configuration> {
    match parse_id::<ColorSchemeId, _>(&scheme) {
        Ok(scheme) => CommandResult::ok(state.store.set_color_scheme(scheme)),
        Err(result) => result,
    }
}

/// Waits for the font stylesheet before answering.
pub async fn set_font(state: Arc<AppState>, font: String) -> CommandResult<Configuration> {
    match parse_id::<FontId, _>(&font) {
        Ok(font) => CommandResult::ok(state.store.set_font(font).await),
        Err(result) => result,
    }
}

pub async fn set_nav_position(
    state: Arc<AppState>,
    position: String,
) -> CommandResult<Configuration> {
    match parse_id::<NavPositionId, _>(&position) {
        Ok(position) => CommandResult::ok(state.store.set_nav_position(position)),
        Err(result) => result,
    }
}

pub async fn set_layout_type(state: Arc<AppState>, layout: String) -> CommandResult<Configuration> {
    match parse_id::<LayoutTypeId, _>(&layout) {
        Ok(layout) => CommandResult::ok(state.store.set_layout_type(layout)),
        Err(result) => result,
    }
}

pub async fn set_login_layout(
    state: Arc<AppState>,
    layout: String,
) -> CommandResult<Configuration> {
    match parse_id::<LoginLayoutId, _>(&layout) {
        Ok(layout) => CommandResult::ok(state.store.set_login_layout(layout)),
        Err(result) => result,
    }
}

/// Flips the sidebar flag and returns the new value.
pub async fn toggle_sidebar(state: Arc<AppState>) -> CommandResult<bool> {
    CommandResult::ok(state.store.toggle_sidebar())
}

pub async fn reset_settings(state: Arc<AppState>) -> CommandResult<Configuration> {
    CommandResult::ok(state.store.reset_all())
}

/// Removes every stored settings key and strips the applied styles.
///
/// The in-memory configuration is left alone; the next store created over
/// the same storage starts from defaults.
pub async fn clear_settings(state: Arc<AppState>) -> CommandResult<()> {
    state.styles.reset();
    if state.persistence.clear() {
        CommandResult::ok(())
    } else {
        CommandResult::err("some settings keys could not be removed")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
