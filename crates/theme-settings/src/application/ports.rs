//! Side-effect boundaries of the settings store.
//!
//! The store never touches storage, styles or the network directly.  It is
//! handed implementations of these traits at construction time; production
//! wiring lives in `infrastructure`, tests substitute recording doubles.

use async_trait::async_trait;
use serde_json::Value;
use theme_core::Configuration;
use thiserror::Error;

/// Error type for font stylesheet loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FontLoadError {
    /// The stylesheet could not be fetched.
    #[error("failed to load font stylesheet {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Best-effort settings persistence.
///
/// Every method swallows its own failures: a `false` or `None` return is the
/// only signal, and the implementation is responsible for logging.
pub trait SettingsRepository: Send + Sync {
    /// Writes `config` as the persisted settings.
    fn save(&self, config: &Configuration) -> bool;

    /// Returns the persisted settings as raw JSON, without sanitizing them.
    fn load(&self) -> Option<Value>;

    /// Removes everything the repository owns.
    fn clear(&self) -> bool;

    fn save_sidebar_collapsed(&self, collapsed: bool) -> bool;

    fn load_sidebar_collapsed(&self) -> Option<bool>;
}

/// Pushes a configuration onto the presentation layer.
pub trait ThemeApplier: Send + Sync {
    /// Applies every presentational aspect of `config`.  Never fails; partial
    /// failures are logged by the implementation.
    fn apply_all(&self, config: &Configuration);
}

/// Loads a remote font stylesheet.
#[async_trait]
pub trait FontLoader: Send + Sync {
    /// Resolves once the stylesheet at `url` is available.
    async fn load_stylesheet(&self, url: &str) -> Result<(), FontLoadError>;
}
