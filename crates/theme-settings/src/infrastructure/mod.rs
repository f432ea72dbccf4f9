//! Infrastructure layer for the settings store.
//!
//! Contains the side-effect adapters: key/value storage and the settings
//! envelope, the style applicator and its sinks, font stylesheet loading, and
//! the UI command bridge.
//!
//! **Dependency rule**: this layer may depend on `application` and `theme_core`,
//! but MUST NOT be imported by the `application` layer.  The store only sees
//! the port traits in [`crate::application::ports`].

pub mod fonts;
pub mod storage;
pub mod style;
pub mod ui_bridge;
