//! Settings persistence over a [`KeyValueStorage`] backend.
//!
//! The configuration is written under [`keys::SETTINGS`] wrapped in a
//! [`SettingsEnvelope`].  Individual values such as the sidebar flag live under
//! their own keys as plain JSON.
//!
//! Every operation is best-effort: backend and codec errors are logged with
//! `tracing::error!` and reported as `false` / `None`.  Callers never see a
//! `StorageError`.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use theme_core::envelope::{decode_envelope, encode_envelope, keys};
use theme_core::{Configuration, SettingsEnvelope, STORAGE_VERSION};
use tracing::{error, warn};

use super::backend::KeyValueStorage;
use crate::application::ports::SettingsRepository;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Settings adapter.  Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct SettingsPersistence {
    storage: Arc<dyn KeyValueStorage>,
}

impl SettingsPersistence {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Writes `config` in a fresh envelope stamped with the current time.
    pub fn save(&self, config: &Configuration) -> bool {
        let text =
            SettingsEnvelope::new(config, now_millis()).and_then(|env| encode_envelope(&env));
        let text = match text {
            Ok(text) => text,
            Err(e) => {
                error!("failed to encode settings: {e}");
                return false;
            }
        };

        match self.storage.set_item(keys::SETTINGS, &text) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to save settings: {e}");
                false
            }
        }
    }

    /// Returns the stored settings object, unsanitized.
    ///
    /// `None` when nothing is stored, the backend fails, or the stored text
    /// has no `settings` object to return.  An envelope whose version is
    /// different, missing or not a string is returned anyway after a warning;
    /// the caller sanitizes it.
    pub fn load(&self) -> Option<Value> {
        let text = self.read(keys::SETTINGS)?;
        let envelope = match decode_envelope(&text) {
            Ok(envelope) => envelope,
            Err(e) => {
                error!("failed to load settings: {e}");
                return None;
            }
        };

        if !envelope.is_current_version() {
            warn!(
                "settings version mismatch: stored {}, expected {:?}",
                envelope.version, STORAGE_VERSION
            );
        }
        Some(envelope.settings)
    }

    /// Removes every key owned by the settings system, including the
    /// per-field keys of earlier builds.
    ///
    /// Keeps going after a failure; returns `false` if any removal failed.
    pub fn clear(&self) -> bool {
        let mut ok = true;
        for key in keys::ALL {
            if let Err(e) = self.storage.remove_item(key) {
                error!("failed to clear setting {key}: {e}");
                ok = false;
            }
        }
        ok
    }

    /// Stores `value` as JSON under `key`.
    pub fn save_setting<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(e) => {
                error!("failed to encode setting {key}: {e}");
                return false;
            }
        };
        match self.storage.set_item(key, &text) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to save setting {key}: {e}");
                false
            }
        }
    }

    /// Reads a JSON value stored under `key`.
    pub fn load_setting<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.read(key)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("failed to load setting {key}: {e}");
                None
            }
        }
    }

    /// `true` when an envelope is present, whether or not it parses.
    pub fn has_stored_settings(&self) -> bool {
        matches!(self.storage.get_item(keys::SETTINGS), Ok(Some(_)))
    }

    /// Time since the stored envelope was written.
    ///
    /// An envelope without a timestamp counts as written at the epoch.
    pub fn settings_age(&self) -> Option<Duration> {
        let text = self.read(keys::SETTINGS)?;
        let envelope = decode_envelope(&text).ok()?;
        Some(Duration::from_millis(envelope.age_millis(now_millis())))
    }

    /// Raw read; empty values count as absent.
    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(Some(text)) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                error!("failed to read {key}: {e}");
                None
            }
        }
    }
}

impl SettingsRepository for SettingsPersistence {
    fn save(&self, config: &Configuration) -> bool {
        SettingsPersistence::save(self, config)
    }

    fn load(&self) -> Option<Value> {
        SettingsPersistence::load(self)
    }

    fn clear(&self) -> bool {
        SettingsPersistence::clear(self)
    }

    fn save_sidebar_collapsed(&self, collapsed: bool) -> bool {
        self.save_setting(keys::SIDEBAR_COLLAPSED, &collapsed)
    }

    fn load_sidebar_collapsed(&self) -> Option<bool> {
        self.load_setting(keys::SIDEBAR_COLLAPSED)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
