//! Light/dark theme preference.

use derive_getters::Getters;
use marquee_core::StateCell;
use marquee_storage::{load_json, save_json, LocalStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Storage key of the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Color theme of the presentation layer.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Light backgrounds
    #[default]
    Light,
    /// Dark backgrounds
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Snapshot of the theme preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ThemeState {
    /// Active theme
    theme: Theme,
    /// Message describing the last storage failure
    #[setters(into)]
    error: Option<String>,
}

/// Owns the theme preference and mirrors it to storage.
pub struct ThemeStore {
    store: Arc<dyn LocalStore>,
    state: StateCell<ThemeState>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("store", &self.store.backend_name())
            .field("state", &self.state)
            .finish()
    }
}

impl ThemeStore {
    /// Load the persisted theme. Missing or unreadable data means [`Theme::Light`].
    #[tracing::instrument(skip(store), fields(backend = store.backend_name()))]
    pub async fn open(store: Arc<dyn LocalStore>) -> Self {
        let state = match load_json::<_, Theme>(store.as_ref(), THEME_KEY).await {
            Ok(theme) => ThemeState::default().with_theme(theme.unwrap_or_default()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read theme, using default");
                ThemeState::default().with_error(format!("Failed to load theme: {}", e))
            }
        };
        tracing::debug!(theme = %state.theme(), "Theme loaded");
        Self {
            store,
            state: StateCell::new(state),
            write_lock: Mutex::new(()),
        }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        *self.state.snapshot().theme()
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<ThemeState> {
        self.state.snapshot()
    }

    /// Receiver notified on every theme change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ThemeState>> {
        self.state.subscribe()
    }

    /// Switch to the other theme and persist. Returns the new theme.
    pub async fn toggle(&self) -> Theme {
        let state = self
            .state
            .update(|state| state.clone().with_theme(state.theme().toggled()));
        self.persist().await;
        *state.theme()
    }

    /// Switch to `theme` and persist.
    pub async fn set(&self, theme: Theme) {
        self.state.update(|state| state.clone().with_theme(theme));
        self.persist().await;
    }

    /// Write the current theme. Writes never overlap.
    async fn persist(&self) {
        let _writing = self.write_lock.lock().await;
        let theme = self.current();
        if let Err(e) = save_json(self.store.as_ref(), THEME_KEY, &theme).await {
            tracing::error!(error = %e, theme = %theme, "Failed to persist theme");
            self.state.update(|state| {
                state
                    .clone()
                    .with_error(format!("Failed to save theme: {}", e))
            });
        }
    }
}
