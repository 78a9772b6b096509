//! Settings manager: the preferences counterpart of `ListMutators`.

use crate::model::{Settings, Theme};
use crate::store::Store;

#[derive(Clone)]
pub struct SettingsManager {
    store: Store<Settings>,
}

impl SettingsManager {
    pub fn new(store: Store<Settings>) -> Self {
        Self { store }
    }

    pub fn settings(&self) -> Settings {
        self.store.get()
    }

    pub fn theme(&self) -> Theme {
        self.store.get().theme
    }

    /// Persist a new theme. Subscribers re-apply it.
    pub fn set_theme(&self, theme: Theme) {
        let mut settings = self.store.get();
        settings.theme = theme;
        tracing::info!(theme = %theme, "Theme changed");
        self.store.update(settings);
    }

    /// Register a callback invoked with the settings after every save.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Settings) + Send + Sync + 'static,
    {
        self.store.subscribe(listener);
    }
}
