//! Storage infrastructure: settings persistence and application config.
//!
//! - `backend` defines the [`backend::KeyValueStorage`] primitive (the
//!   equivalent of a browser's local storage) with an in-memory and a
//!   file-backed implementation.
//! - `persistence` is the settings adapter on top of it: versioned envelope,
//!   sidebar flag, best-effort semantics.
//! - `config` reads and writes the TOML file that configures the binary
//!   itself (storage directory, log level).
//!
//! Keeping storage concerns here means the store can be pointed at a
//! different backend without touching any other part of the codebase.

pub mod backend;
pub mod config;
pub mod persistence;
