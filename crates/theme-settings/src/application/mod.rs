//! Application layer: the settings store and its read-only views.
//!
//! - **`ports`** – The traits the store depends on (persistence, style
//!   application, font loading).  Infrastructure implements them.
//!
//! - **`settings_store`** – Owns the single current [`theme_core::Configuration`],
//!   serializes every change through one lock, and fans each committed value
//!   out to the style applier, the repository and subscribers.
//!
//! - **`views`** – Pure projections of a configuration snapshot for UI
//!   consumers ("is navigation vertical", "current font family", picker
//!   lists).
//!
//! Nothing in this layer performs I/O directly.

pub mod ports;
pub mod settings_store;
pub mod views;
