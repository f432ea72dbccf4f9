//! Style application.
//!
//! [`StyleSink`] is the primitive a presentation target exposes: root custom
//! properties and root classes.  [`StyleApplicator`] translates a
//! [`Configuration`] into sink calls:
//!
//! | Field                  | Sink calls                                       |
//! |------------------------|--------------------------------------------------|
//! | `mode`                 | `dark` class on/off, `color-scheme` property     |
//! | `colorScheme` + `mode` | `--primary`, `--primary-foreground`, ...         |
//! | `font`                 | `--font-family`                                  |
//! | `navigation.layout`    | `--layout-expanded-width`, ...                   |
//! | `navigation.position`  | `--nav-nav-width`, `--nav-nav-height`, ...       |
//!
//! `login.layout` has no style footprint; login screens read it from the
//! views instead.

pub mod stylesheet;

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};

use theme_core::domain::color_scheme::color_values;
use theme_core::domain::mode::DARK_CLASS;
use theme_core::{
    ColorSchemeId, Configuration, FontId, LayoutTypeId, NavPositionId, RegistryEntry, ThemeMode,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::ports::ThemeApplier;

pub use stylesheet::Stylesheet;

/// Error type for style sink operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StyleError {
    /// The property name cannot be expressed by the sink.
    #[error("invalid style property name {0:?}")]
    InvalidProperty(String),

    /// The value would break out of its declaration.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// Root-level style target.
pub trait StyleSink: Send + Sync {
    /// Sets a property on the root, replacing any previous value.
    fn set_property(&self, name: &str, value: &str) -> Result<(), StyleError>;

    /// Removes a root property; removing an unset property is not an error.
    fn remove_property(&self, name: &str) -> Result<(), StyleError>;

    /// Adds (`enabled = true`) or removes a root class.
    fn set_class(&self, name: &str, enabled: bool) -> Result<(), StyleError>;
}

/// Converts a camelCase token name to kebab-case (`primaryForeground` →
/// `primary-foreground`).  A hyphen is inserted only after a lowercase letter
/// or digit, so runs of capitals stay together.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    out
}

/// Maps configurations onto a [`StyleSink`].
///
/// Sink failures are logged and skipped; the remaining calls still run.
pub struct StyleApplicator {
    sink: Arc<dyn StyleSink>,
    /// Every property name this applicator has set, for [`Self::reset`].
    applied: Mutex<BTreeSet<String>>,
}

impl StyleApplicator {
    pub fn new(sink: Arc<dyn StyleSink>) -> Self {
        Self {
            sink,
            applied: Mutex::new(BTreeSet::new()),
        }
    }

    /// Toggles the dark class and sets the native `color-scheme` property.
    pub fn apply_mode(&self, mode: ThemeMode) {
        let class = mode.descriptor().root_class.unwrap_or(DARK_CLASS);
        if let Err(e) = self.sink.set_class(class, mode.is_dark()) {
            warn!("failed to toggle class {class}: {e}");
        }
        self.set("color-scheme", mode.id());
    }

    /// Sets the color tokens of `scheme` for `mode`.
    pub fn apply_color_scheme(&self, scheme: ColorSchemeId, mode: ThemeMode) {
        for (token, value) in color_values(scheme, mode) {
            self.set(&format!("--{}", to_kebab_case(token)), value);
        }
    }

    pub fn apply_font(&self, font: FontId) {
        self.set("--font-family", font.descriptor().font_family);
    }

    pub fn apply_layout_type(&self, layout: LayoutTypeId) {
        for (param, value) in layout.descriptor().css {
            self.set(&format!("--layout-{}", to_kebab_case(param)), value);
        }
    }

    pub fn apply_nav_position(&self, position: NavPositionId) {
        for (param, value) in position.descriptor().css {
            self.set(&format!("--nav-{}", to_kebab_case(param)), value);
        }
    }

    /// Applies every field.  Color tokens are resolved for the configuration's
    /// own `(colorScheme, mode)` pair.
    pub fn apply_all(&self, config: &Configuration) {
        debug!(
            "applying styles: mode={} scheme={} font={} nav={}/{}",
            config.mode,
            config.color_scheme,
            config.font,
            config.navigation.position,
            config.navigation.layout
        );
        self.apply_mode(config.mode);
        self.apply_color_scheme(config.color_scheme, config.mode);
        self.apply_font(config.font);
        self.apply_layout_type(config.navigation.layout);
        self.apply_nav_position(config.navigation.position);
    }

    /// Removes every property this applicator has set and drops the dark class.
    pub fn reset(&self) {
        let names = {
            let mut applied = self.applied.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *applied)
        };
        for name in &names {
            if let Err(e) = self.sink.remove_property(name) {
                warn!("failed to remove style property {name}: {e}");
            }
        }
        if let Err(e) = self.sink.set_class(DARK_CLASS, false) {
            warn!("failed to remove class {DARK_CLASS}: {e}");
        }
    }

    fn set(&self, name: &str, value: &str) {
        match self.sink.set_property(name, value) {
            Ok(()) => {
                self.applied
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(name.to_string());
            }
            Err(e) => warn!("failed to set style property {name}: {e}"),
        }
    }
}

impl ThemeApplier for StyleApplicator {
    fn apply_all(&self, config: &Configuration) {
        StyleApplicator::apply_all(self, config);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
