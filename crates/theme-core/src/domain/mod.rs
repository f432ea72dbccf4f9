//! Domain entities for the appearance settings system.
//!
//! This module contains pure lookup tables and value types with no
//! infrastructure dependencies.
//!
//! # Registries
//!
//! A *registry* is a fixed table mapping an enum id (e.g. `ColorSchemeId::Ocean`)
//! to an immutable descriptor record (display name, description, presentation
//! parameters).  Registries are built at compile time as `static` items and
//! are never created or destroyed at runtime.  Callers only ever receive
//! `&'static` references to descriptors, so nothing outside this module can
//! mutate them.
//!
//! Every registry enum implements [`registry::RegistryEntry`], which is what
//! lets the schema validator treat all six configuration fields uniformly.

pub mod color_scheme;
pub mod config;
pub mod font;
pub mod login;
pub mod mode;
pub mod navigation;
pub mod registry;
