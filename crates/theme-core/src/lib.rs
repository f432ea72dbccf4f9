//! # theme-core
//!
//! Shared library for the appearance settings system containing the static
//! registries (modes, color schemes, fonts, navigation, login layouts), the
//! [`Configuration`] value, the validator/sanitizer, and the versioned storage
//! envelope.
//!
//! This crate has zero dependencies on storage backends, style engines, or
//! async runtimes.  Everything here is a pure function over static tables.
//!
//! # Architecture overview
//!
//! - **`domain`** – The registries and the configuration tree.  Every field of
//!   a [`Configuration`] is an enum whose variants map one-to-one onto a
//!   `&'static` descriptor record, so an invalid value cannot be represented.
//!
//! - **`schema`** – Turns arbitrary, possibly malformed JSON into a valid
//!   [`Configuration`], field by field, falling back to defaults.
//!
//! - **`envelope`** – How a configuration is laid out in durable storage:
//!   `{ version, settings, timestamp }` plus the storage key names.

pub mod domain;
pub mod envelope;
pub mod schema;

// Re-export the most-used types at the crate root so callers can write
// `theme_core::Configuration` instead of `theme_core::domain::config::Configuration`.
pub use domain::color_scheme::ColorSchemeId;
pub use domain::config::{Configuration, LoginSettings, NavigationSettings};
pub use domain::font::FontId;
pub use domain::login::LoginLayoutId;
pub use domain::mode::ThemeMode;
pub use domain::navigation::{LayoutTypeId, NavPositionId};
pub use domain::registry::{RegistryEntry, UnknownId};
pub use envelope::{SettingsEnvelope, STORAGE_VERSION};
pub use schema::{sanitize, validate, ValidationReport};
