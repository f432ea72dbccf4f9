//! Versioned storage envelope for persisted settings.
//!
//! Settings are never written bare.  They are wrapped with the schema version
//! that produced them and the time of the write:
//!
//! ```json
//! { "version": "1.0.0", "settings": { ... }, "timestamp": 1718000000000 }
//! ```
//!
//! `settings` is decoded as raw JSON rather than as a [`Configuration`]: a
//! stored blob may contain ids this build does not know, and the caller is
//! expected to run it through [`crate::schema::sanitize`] so that one bad
//! field does not discard the rest.
//!
//! The metadata is read leniently as well.  Only `settings` is required: a
//! missing or non-string `version` counts as a version mismatch, and a
//! missing, `null` or non-numeric `timestamp` reads as zero.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::config::Configuration;

/// Schema version written into every envelope.
pub const STORAGE_VERSION: &str = "1.0.0";

/// Storage key names.
pub mod keys {
    /// The settings envelope.
    pub const SETTINGS: &str = "app-settings";
    /// Sidebar collapsed flag, stored apart from the configuration.
    pub const SIDEBAR_COLLAPSED: &str = "app-sidebar-collapsed";

    // Per-field keys written by earlier builds.  Nothing reads them any more,
    // but `clear` still removes them.
    pub const THEME_MODE: &str = "app-theme-mode";
    pub const COLOR_SCHEME: &str = "app-color-scheme";
    pub const FONT: &str = "app-font";
    pub const NAV_POSITION: &str = "app-nav-position";
    pub const NAV_LAYOUT: &str = "app-nav-layout";

    /// Every key owned by the settings system.
    pub const ALL: &[&str] = &[
        SETTINGS,
        THEME_MODE,
        COLOR_SCHEME,
        FONT,
        NAV_POSITION,
        NAV_LAYOUT,
        SIDEBAR_COLLAPSED,
    ];
}

/// Error type for envelope encoding and decoding.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The stored text is not a JSON envelope.
    #[error("malformed settings envelope: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persisted wrapper around a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsEnvelope {
    /// Written as a string; whatever was stored is kept as-is.
    #[serde(default)]
    pub version: Value,
    pub settings: Value,
    /// Milliseconds since the Unix epoch at write time.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: u64,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| {
            v.as_u64()
                .or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
        })
        .unwrap_or(0))
}

impl SettingsEnvelope {
    /// Wraps `config` with the current schema version.
    pub fn new(config: &Configuration, timestamp: u64) -> Result<Self, EnvelopeError> {
        Ok(Self {
            version: Value::from(STORAGE_VERSION),
            settings: serde_json::to_value(config)?,
            timestamp,
        })
    }

    /// `true` when the envelope was written by this schema version.
    pub fn is_current_version(&self) -> bool {
        self.version.as_str() == Some(STORAGE_VERSION)
    }

    /// Milliseconds elapsed between the write and `now`; zero if the clock went backwards.
    pub fn age_millis(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }
}

/// Serializes an envelope to its stored text form.
pub fn encode_envelope(envelope: &SettingsEnvelope) -> Result<String, EnvelopeError> {
    Ok(serde_json::to_string(envelope)?)
}

/// Parses stored text back into an envelope.
///
/// # Errors
///
/// Returns [`EnvelopeError::Malformed`] when the text is not a JSON object
/// with a `settings` member.
pub fn decode_envelope(text: &str) -> Result<SettingsEnvelope, EnvelopeError> {
    Ok(serde_json::from_str(text)?)
}
