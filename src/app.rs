//! Checklist Application Context
//!
//! Composes the preference store, application state, diagnostics,
//! category templates and the checklist manager. UI layers hold one
//! `ChecklistApp` and re-render from what its methods return.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{CategoryTemplate, DisplayMode, DomainResult, Outcome, Palette, Rejection, Structure};
use crate::logging::Diagnostics;
use crate::manager::ChecklistManager;
use crate::repository::{CategorySource, PreferenceStore, Storage};
use crate::state::AppState;

pub struct ChecklistApp {
    config: AppConfig,
    store: PreferenceStore,
    state: AppState,
    diagnostics: Diagnostics,
    manager: ChecklistManager,
    structure: Structure,
}

impl ChecklistApp {
    /// Start a session: settings first, then the one-time category load
    pub async fn init(
        storage: Arc<dyn Storage>,
        categories: &dyn CategorySource,
        config: AppConfig,
    ) -> DomainResult<Self> {
        config.validate()?;

        let store = PreferenceStore::new(storage, config.keys.clone());
        let state = AppState::init(&store).await?;
        let diagnostics = Diagnostics::new(state.debug);

        let structure = categories.load().await?;
        diagnostics.show("app.init", (state.display_mode, &structure));
        log::info!("{} started with {} categories", config.app_name, structure.categories.len());

        let manager = ChecklistManager::new(store.clone(), diagnostics.clone());
        Ok(Self {
            config,
            store,
            state,
            diagnostics,
            manager,
            structure,
        })
    }

    /// Desktop session: rolling log files, SQLite database and JSON
    /// category file, all located by `config`
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn open_desktop(config: AppConfig) -> DomainResult<Self> {
        crate::logging::init(&config)?;
        let storage = crate::repository::SqliteStorage::open(&config.database_path)?;
        let categories = crate::repository::JsonFileSource::new(config.categories_path.clone());
        Self::init(Arc::new(storage), &categories, config).await
    }

    /// Browser session over `window.localStorage`
    #[cfg(target_arch = "wasm32")]
    pub async fn open_browser(structure: Structure, config: AppConfig) -> DomainResult<Self> {
        let categories = crate::repository::StaticSource::new(structure);
        Self::init(Arc::new(crate::repository::LocalStorage), &categories, config).await
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn manager(&self) -> &ChecklistManager {
        &self.manager
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn categories(&self) -> &[CategoryTemplate] {
        &self.structure.categories
    }

    /// Category preselected for a new checklist
    pub fn default_category(&self) -> Option<&CategoryTemplate> {
        self.structure.first()
    }

    /// Create `name` from the category titled `category_title`
    pub async fn create_from_category(&self, name: &str, category_title: &str) -> DomainResult<Outcome> {
        match self.structure.find(category_title) {
            Some(category) => self.manager.create(name, category).await,
            None => Ok(Rejection::UnknownCategory(category_title.to_string()).into()),
        }
    }

    pub async fn toggle_debug(&mut self) -> DomainResult<bool> {
        let debug = self.state.toggle_debug(&self.store).await?;
        self.diagnostics.set_enabled(debug);
        Ok(debug)
    }

    pub async fn toggle_custom_mode(&mut self) -> DomainResult<DisplayMode> {
        let mode = self.state.toggle_custom_mode(&self.store).await?;
        self.diagnostics.show("settings.toggle_custom_mode", (mode, &self.state.colors));
        Ok(mode)
    }

    pub async fn set_custom_colors(&mut self, colors: Palette) -> DomainResult<Outcome> {
        let outcome = self.state.set_custom_colors(&self.store, colors).await?;
        self.diagnostics.show("settings.set_custom_colors", (&outcome, &self.state.colors));
        Ok(outcome)
    }
}
