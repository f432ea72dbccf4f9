//! SettingsStore: the single owner of the current appearance configuration.
//!
//! # Lifecycle
//!
//! [`SettingsStore::create`] resolves a starting configuration synchronously:
//! persisted settings if any, else the caller's initial candidate, else the
//! defaults.  Whatever is chosen is sanitized, applied and saved once before
//! `create` returns.  [`SettingsStore::activate`] then loads the active font's
//! stylesheet; until it settles [`SettingsStore::is_loading`] reports `true`.
//! [`SettingsStore::dispose`] ends the lifecycle and hands back the final
//! snapshot.
//!
//! # Commits
//!
//! Every write builds a new [`Configuration`] from the current one and commits
//! it while holding the state's write lock.  A commit:
//!
//! 1. applies the full configuration through the [`ThemeApplier`] (so color
//!    tokens are always resolved for the new `(colorScheme, mode)` pair),
//! 2. saves it through the [`SettingsRepository`],
//! 3. publishes it on the `watch` channel returned by [`SettingsStore::subscribe`].
//!
//! Because all three happen under the lock, the applied, persisted and
//! observed values always agree, and the last commit wins.
//!
//! # Fonts
//!
//! [`SettingsStore::set_font`] is the only `async` write.  It waits for the
//! font stylesheet without holding any lock, then commits `font` onto whatever
//! the configuration is *at that moment*, so sibling changes made while the
//! fetch was pending survive.  A failed fetch is logged and the font id is
//! committed anyway.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde_json::Value;
use theme_core::{
    validate, ColorSchemeId, Configuration, FontId, LayoutTypeId, LoginLayoutId, NavPositionId,
    RegistryEntry, ThemeMode,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::ports::{FontLoader, SettingsRepository, ThemeApplier};

/// Side-effect implementations handed to the store at construction.
#[derive(Clone)]
pub struct StoreServices {
    pub repository: Arc<dyn SettingsRepository>,
    pub styles: Arc<dyn ThemeApplier>,
    pub fonts: Arc<dyn FontLoader>,
}

/// Counts an in-flight operation for [`SettingsStore::is_loading`].
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Shared appearance settings state.  Share it via `Arc`.
pub struct SettingsStore {
    services: StoreServices,
    state: RwLock<Configuration>,
    sidebar_collapsed: Mutex<bool>,
    changes: watch::Sender<Configuration>,
    /// Set until [`Self::activate`] has settled.
    activating: AtomicBool,
    in_flight: AtomicUsize,
}

impl SettingsStore {
    /// Builds the store and commits its starting configuration.
    pub fn create(services: StoreServices, initial: Option<&Value>) -> Self {
        let config = resolve_initial(services.repository.as_ref(), initial);
        let sidebar_collapsed = services
            .repository
            .load_sidebar_collapsed()
            .unwrap_or(false);

        services.styles.apply_all(&config);
        if !services.repository.save(&config) {
            warn!("initial settings were not persisted");
        }

        info!(
            "settings store ready: mode={} scheme={} font={}",
            config.mode, config.color_scheme, config.font
        );

        let (changes, _) = watch::channel(config);
        Self {
            services,
            state: RwLock::new(config),
            sidebar_collapsed: Mutex::new(sidebar_collapsed),
            changes,
            activating: AtomicBool::new(true),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Loads the active font's stylesheet and reapplies styles.
    ///
    /// Calling it again after it has settled only reloads and reapplies.
    pub async fn activate(&self) {
        let font = self.snapshot().font;
        self.load_font(font).await;

        {
            let current = self.state.write().unwrap_or_else(PoisonError::into_inner);
            self.services.styles.apply_all(&current);
        }

        if self.activating.swap(false, Ordering::SeqCst) {
            debug!("settings store activated");
        }
    }

    /// Ends the store's lifecycle, returning the final configuration.
    pub fn dispose(self) -> Configuration {
        let last = self.snapshot();
        info!("settings store disposed");
        last
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Configuration {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// `true` until activation settles and while any write is in progress.
    /// Reads are never blocked by it.
    pub fn is_loading(&self) -> bool {
        self.activating.load(Ordering::SeqCst) || self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn sidebar_collapsed(&self) -> bool {
        *self
            .sidebar_collapsed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Receiver that observes every committed configuration.
    pub fn subscribe(&self) -> watch::Receiver<Configuration> {
        self.changes.subscribe()
    }

    // ── Writes ────────────────────────────────────────────────────────────────

    /// Sanitizes `candidate` and adopts it.
    pub fn set_all(&self, candidate: &Value) -> Configuration {
        let report = validate(candidate);
        for error in &report.errors {
            debug!("settings candidate corrected: {error}");
        }
        self.commit_with(|_| report.sanitized)
    }

    /// Adopts the result of `updater` applied to the current configuration.
    pub fn update_all<F>(&self, updater: F) -> Configuration
    where
        F: FnOnce(&Configuration) -> Configuration,
    {
        self.commit_with(updater)
    }

    pub fn set_mode(&self, mode: ThemeMode) -> Configuration {
        self.commit_with(|c| c.with_mode(mode))
    }

    pub fn toggle_mode(&self) -> Configuration {
        self.commit_with(|c| c.with_mode_toggled())
    }

    pub fn set_color_scheme(&self, scheme: ColorSchemeId) -> Configuration {
        self.commit_with(|c| c.with_color_scheme(scheme))
    }

    /// Loads the font's stylesheet, then commits the font onto the latest
    /// configuration.
    pub async fn set_font(&self, font: FontId) -> Configuration {
        let _loading = LoadingGuard::enter(&self.in_flight);
        self.load_font(font).await;
        self.commit_with(|c| c.with_font(font))
    }

    pub fn set_nav_position(&self, position: NavPositionId) -> Configuration {
        self.commit_with(|c| c.with_nav_position(position))
    }

    pub fn set_layout_type(&self, layout: LayoutTypeId) -> Configuration {
        self.commit_with(|c| c.with_layout_type(layout))
    }

    pub fn set_login_layout(&self, layout: LoginLayoutId) -> Configuration {
        self.commit_with(|c| c.with_login_layout(layout))
    }

    /// Replaces the configuration with the defaults.
    pub fn reset_all(&self) -> Configuration {
        info!("resetting appearance settings to defaults");
        self.commit_with(|_| Configuration::defaults())
    }

    /// Stores the sidebar flag.  Does not touch styles or the configuration.
    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        let mut current = self
            .sidebar_collapsed
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *current = collapsed;
        self.services.repository.save_sidebar_collapsed(collapsed);
    }

    /// Flips the sidebar flag and returns the new value.
    pub fn toggle_sidebar(&self) -> bool {
        let mut current = self
            .sidebar_collapsed
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *current = !*current;
        self.services.repository.save_sidebar_collapsed(*current);
        *current
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn commit_with<F>(&self, build: F) -> Configuration
    where
        F: FnOnce(&Configuration) -> Configuration,
    {
        let _loading = LoadingGuard::enter(&self.in_flight);
        let mut current = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let next = build(&current);
        *current = next;

        self.services.styles.apply_all(&next);
        if !self.services.repository.save(&next) {
            debug!("settings change kept in memory only");
        }
        self.changes.send_replace(next);
        next
    }

    async fn load_font(&self, font: FontId) {
        let Some(url) = font.descriptor().stylesheet_url else {
            return;
        };
        match self.services.fonts.load_stylesheet(url).await {
            Ok(()) => debug!("font {font} ready"),
            Err(e) => warn!("font {font} failed to load, keeping selection: {e}"),
        }
    }
}

/// Persisted settings, else `initial`, else defaults; always sanitized.
fn resolve_initial(repository: &dyn SettingsRepository, initial: Option<&Value>) -> Configuration {
    let (source, candidate) = match (repository.load(), initial) {
        (Some(stored), _) => ("storage", stored),
        (None, Some(initial)) => ("initial", initial.clone()),
        (None, None) => return Configuration::defaults(),
    };

    let report = validate(&candidate);
    for error in &report.errors {
        debug!("{source} settings corrected: {error}");
    }
    report.sanitized
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FontLoadError;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::{oneshot, Notify};

    // ── Test doubles ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingRepository {
        stored: Mutex<Option<Value>>,
        saved: Mutex<Vec<Configuration>>,
        sidebar: Mutex<Option<bool>>,
        sidebar_saves: Mutex<Vec<bool>>,
    }

    impl RecordingRepository {
        fn with_stored(value: Value) -> Self {
            Self {
                stored: Mutex::new(Some(value)),
                ..Self::default()
            }
        }

        fn saved(&self) -> Vec<Configuration> {
            self.saved.lock().unwrap().clone()
        }
    }

    impl SettingsRepository for RecordingRepository {
        fn save(&self, config: &Configuration) -> bool {
            self.saved.lock().unwrap().push(*config);
            *self.stored.lock().unwrap() = Some(serde_json::to_value(config).unwrap());
            true
        }
        fn load(&self) -> Option<Value> {
            self.stored.lock().unwrap().clone()
        }
        fn clear(&self) -> bool {
            *self.stored.lock().unwrap() = None;
            true
        }
        fn save_sidebar_collapsed(&self, collapsed: bool) -> bool {
            self.sidebar_saves.lock().unwrap().push(collapsed);
            *self.sidebar.lock().unwrap() = Some(collapsed);
            true
        }
        fn load_sidebar_collapsed(&self) -> Option<bool> {
            *self.sidebar.lock().unwrap()
        }
    }

    #[derive(Default)]
    struct RecordingApplier {
        applied: Mutex<Vec<Configuration>>,
    }

    impl RecordingApplier {
        fn applied(&self) -> Vec<Configuration> {
            self.applied.lock().unwrap().clone()
        }
    }

    impl ThemeApplier for RecordingApplier {
        fn apply_all(&self, config: &Configuration) {
            self.applied.lock().unwrap().push(*config);
        }
    }

    #[derive(Default)]
    struct RecordingFontLoader {
        requested: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl FontLoader for RecordingFontLoader {
        async fn load_stylesheet(&self, url: &str) -> Result<(), FontLoadError> {
            self.requested.lock().unwrap().push(url.to_string());
            if self.fail {
                return Err(FontLoadError::Fetch {
                    url: url.to_string(),
                    reason: "network down".to_string(),
                });
            }
            Ok(())
        }
    }

    /// Loader whose first call blocks until the test releases it.
    struct GatedFontLoader {
        entered: Notify,
        gate: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl FontLoader for GatedFontLoader {
        async fn load_stylesheet(&self, _url: &str) -> Result<(), FontLoadError> {
            let gate = self.gate.lock().unwrap().take();
            if let Some(gate) = gate {
                self.entered.notify_one();
                let _ = gate.await;
            }
            Ok(())
        }
    }

    struct Harness {
        repository: Arc<RecordingRepository>,
        applier: Arc<RecordingApplier>,
        fonts: Arc<RecordingFontLoader>,
        store: SettingsStore,
    }

    fn harness_with(
        repository: RecordingRepository,
        initial: Option<&Value>,
        fail_fonts: bool,
    ) -> Harness {
        let repository = Arc::new(repository);
        let applier = Arc::new(RecordingApplier::default());
        let fonts = Arc::new(RecordingFontLoader {
            fail: fail_fonts,
            ..RecordingFontLoader::default()
        });
        let store = SettingsStore::create(
            StoreServices {
                repository: Arc::clone(&repository) as Arc<dyn SettingsRepository>,
                styles: Arc::clone(&applier) as Arc<dyn ThemeApplier>,
                fonts: Arc::clone(&fonts) as Arc<dyn FontLoader>,
            },
            initial,
        );
        Harness {
            repository,
            applier,
            fonts,
            store,
        }
    }

    fn harness() -> Harness {
        harness_with(RecordingRepository::default(), None, false)
    }

    // ── create ────────────────────────────────────────────────────────────────

    #[test]
    fn test_create_without_persisted_data_saves_defaults_once() {
        // Arrange / Act
        let h = harness();

        // Assert
        assert_eq!(h.store.snapshot(), Configuration::defaults());
        assert_eq!(h.repository.saved(), vec![Configuration::defaults()]);
        assert_eq!(h.applier.applied(), vec![Configuration::defaults()]);
    }

    #[test]
    fn test_create_prefers_persisted_over_initial() {
        let repo = RecordingRepository::with_stored(json!({ "mode": "dark" }));
        let initial = json!({ "font": "roboto" });

        let h = harness_with(repo, Some(&initial), false);

        assert_eq!(h.store.snapshot().mode, ThemeMode::Dark);
        assert_eq!(h.store.snapshot().font, FontId::Inter);
    }

    #[test]
    fn test_create_sanitizes_initial_when_nothing_persisted() {
        let initial = json!({ "font": "roboto", "colorScheme": "bogus" });

        let h = harness_with(RecordingRepository::default(), Some(&initial), false);

        assert_eq!(h.store.snapshot().font, FontId::Roboto);
        assert_eq!(h.store.snapshot().color_scheme, ColorSchemeId::Default);
    }

    #[test]
    fn test_create_substitutes_bogus_persisted_scheme_and_keeps_siblings() {
        // Arrange
        let repo = RecordingRepository::with_stored(json!({
            "mode": "dark",
            "colorScheme": "bogus",
            "navigation": { "position": "horizontal", "layout": "sticky" },
            "font": "poppins",
            "login": { "layout": "right" }
        }));

        // Act
        let h = harness_with(repo, None, false);

        // Assert
        let cfg = h.store.snapshot();
        assert_eq!(cfg.mode, ThemeMode::Dark);
        assert_eq!(cfg.color_scheme, ColorSchemeId::Default);
        assert_eq!(cfg.navigation.position, NavPositionId::Horizontal);
        assert_eq!(cfg.navigation.layout, LayoutTypeId::Sticky);
        assert_eq!(cfg.font, FontId::Poppins);
        assert_eq!(cfg.login.layout, LoginLayoutId::Right);
    }

    #[test]
    fn test_create_loads_sidebar_flag() {
        let repo = RecordingRepository::default();
        *repo.sidebar.lock().unwrap() = Some(true);

        let h = harness_with(repo, None, false);

        assert!(h.store.sidebar_collapsed());
    }

    // ── activate / is_loading ─────────────────────────────────────────────────

    #[tokio::test]
    async fn test_store_is_loading_until_activated() {
        let h = harness();
        assert!(h.store.is_loading());

        h.store.activate().await;

        assert!(!h.store.is_loading());
        assert_eq!(
            *h.fonts.requested.lock().unwrap(),
            vec![FontId::Inter.descriptor().stylesheet_url.unwrap().to_string()]
        );
        assert_eq!(h.applier.applied().len(), 2);
    }

    #[tokio::test]
    async fn test_activate_with_failing_font_loader_still_settles() {
        let h = harness_with(RecordingRepository::default(), None, true);

        h.store.activate().await;

        assert!(!h.store.is_loading());
    }

    // ── writes ────────────────────────────────────────────────────────────────

    #[test]
    fn test_set_mode_changes_only_mode() {
        let h = harness();

        let cfg = h.store.set_mode(ThemeMode::Dark);

        assert_eq!(cfg, Configuration::defaults().with_mode(ThemeMode::Dark));
        assert_eq!(h.store.snapshot(), cfg);
    }

    #[test]
    fn test_toggle_mode_twice_restores_configuration() {
        let h = harness();
        let before = h.store.set_color_scheme(ColorSchemeId::Rose);

        h.store.toggle_mode();
        let after = h.store.toggle_mode();

        assert_eq!(after, before);
    }

    #[test]
    fn test_set_color_scheme_in_dark_mode_applies_dark_pair() {
        // Arrange
        let h = harness();
        h.store.set_mode(ThemeMode::Dark);

        // Act
        h.store.set_color_scheme(ColorSchemeId::Ocean);

        // Assert: the last applied value pairs ocean with dark
        let last = *h.applier.applied().last().unwrap();
        assert_eq!(last.color_scheme, ColorSchemeId::Ocean);
        assert_eq!(last.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_every_commit_is_applied_and_persisted() {
        let h = harness();

        h.store.set_nav_position(NavPositionId::Horizontal);
        h.store.set_layout_type(LayoutTypeId::Sticky);
        let last = h.store.set_login_layout(LoginLayoutId::Left);

        assert_eq!(h.repository.saved().len(), 4);
        assert_eq!(h.applier.applied().len(), 4);
        assert_eq!(*h.repository.saved().last().unwrap(), last);
    }

    #[test]
    fn test_set_all_sanitizes_candidate() {
        let h = harness();

        let cfg = h.store.set_all(&json!({ "mode": "dark", "font": 42 }));

        assert_eq!(cfg.mode, ThemeMode::Dark);
        assert_eq!(cfg.font, FontId::Inter);
    }

    #[test]
    fn test_update_all_applies_updater_to_current_value() {
        let h = harness();
        h.store.set_mode(ThemeMode::Dark);

        let cfg = h
            .store
            .update_all(|c| c.with_color_scheme(ColorSchemeId::Forest));

        assert_eq!(cfg.mode, ThemeMode::Dark);
        assert_eq!(cfg.color_scheme, ColorSchemeId::Forest);
    }

    #[test]
    fn test_reset_all_is_deterministic() {
        let h = harness();
        h.store.set_mode(ThemeMode::Dark);
        h.store.set_color_scheme(ColorSchemeId::Sunset);

        let first = h.store.reset_all();
        tokio_test::block_on(h.store.set_font(FontId::System));
        let second = h.store.reset_all();

        assert_eq!(first, Configuration::defaults());
        assert_eq!(second, Configuration::defaults());
    }

    #[test]
    fn test_subscribers_observe_commits() {
        let h = harness();
        let mut rx = h.store.subscribe();

        h.store.set_mode(ThemeMode::Dark);

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().mode, ThemeMode::Dark);
    }

    #[test]
    fn test_dispose_returns_final_snapshot() {
        let h = harness();
        h.store.set_mode(ThemeMode::Dark);

        let last = h.store.dispose();

        assert_eq!(last.mode, ThemeMode::Dark);
    }

    // ── set_font ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_set_font_fetches_stylesheet_then_commits() {
        let h = harness();

        let cfg = h.store.set_font(FontId::Roboto).await;

        assert_eq!(cfg.font, FontId::Roboto);
        assert_eq!(h.fonts.requested.lock().unwrap().len(), 1);
        assert_eq!(h.repository.saved().last().unwrap().font, FontId::Roboto);
    }

    #[tokio::test]
    async fn test_set_font_commits_even_when_fetch_fails() {
        let h = harness_with(RecordingRepository::default(), None, true);

        let cfg = h.store.set_font(FontId::Roboto).await;

        assert_eq!(cfg.font, FontId::Roboto);
        assert_eq!(h.store.snapshot().font, FontId::Roboto);
    }

    #[tokio::test]
    async fn test_set_font_system_skips_fetch() {
        let h = harness();

        h.store.set_font(FontId::System).await;

        assert!(h.fonts.requested.lock().unwrap().is_empty());
        assert_eq!(h.store.snapshot().font, FontId::System);
    }

    #[tokio::test]
    async fn test_changes_during_pending_font_load_survive() {
        // Arrange
        let (release, gate) = oneshot::channel();
        let fonts = Arc::new(GatedFontLoader {
            entered: Notify::new(),
            gate: Mutex::new(Some(gate)),
        });
        let store = Arc::new(SettingsStore::create(
            StoreServices {
                repository: Arc::new(RecordingRepository::default()),
                styles: Arc::new(RecordingApplier::default()),
                fonts: Arc::clone(&fonts) as Arc<dyn FontLoader>,
            },
            None,
        ));
        let pending = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.set_font(FontId::Roboto).await }
        });
        fonts.entered.notified().await;

        // Act: other writes proceed while the font is loading
        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.snapshot().font, FontId::Inter);
        assert!(store.is_loading());
        release.send(()).unwrap();
        let committed = pending.await.unwrap();

        // Assert
        assert_eq!(committed.font, FontId::Roboto);
        assert_eq!(committed.mode, ThemeMode::Dark);
        assert_eq!(store.snapshot(), committed);
    }

    #[tokio::test]
    async fn test_slow_font_load_wins_when_it_commits_last() {
        // Arrange
        let (release, gate) = oneshot::channel();
        let fonts = Arc::new(GatedFontLoader {
            entered: Notify::new(),
            gate: Mutex::new(Some(gate)),
        });
        let store = Arc::new(SettingsStore::create(
            StoreServices {
                repository: Arc::new(RecordingRepository::default()),
                styles: Arc::new(RecordingApplier::default()),
                fonts: Arc::clone(&fonts) as Arc<dyn FontLoader>,
            },
            None,
        ));
        let slow = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.set_font(FontId::Roboto).await }
        });
        fonts.entered.notified().await;

        // Act
        store.set_font(FontId::Poppins).await;
        assert_eq!(store.snapshot().font, FontId::Poppins);
        release.send(()).unwrap();
        slow.await.unwrap();

        // Assert
        assert_eq!(store.snapshot().font, FontId::Roboto);
    }

    // ── sidebar ───────────────────────────────────────────────────────────────

    #[test]
    fn test_toggle_sidebar_persists_without_reapplying_styles() {
        let h = harness();
        let applied_before = h.applier.applied().len();

        assert!(h.store.toggle_sidebar());
        assert!(!h.store.toggle_sidebar());
        h.store.set_sidebar_collapsed(true);

        assert!(h.store.sidebar_collapsed());
        assert_eq!(*h.repository.sidebar_saves.lock().unwrap(), vec![true, false, true]);
        assert_eq!(h.applier.applied().len(), applied_before);
        assert_eq!(h.repository.saved().len(), 1);
    }
}
