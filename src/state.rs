//! Application State
//!
//! In-memory `debug`, display mode and palette, derived from the
//! persisted settings record. Mutations persist first and only then
//! update memory, so a failed write leaves both sides unchanged.

use crate::domain::color::{calculate_logo_color, rgb_to_hex, LIGHT_ENDPOINT};
use crate::domain::{resolve_palette, DisplayMode, DomainResult, Outcome, Palette, Rejection, Settings};
use crate::repository::PreferenceStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub debug: bool,
    pub display_mode: DisplayMode,
    pub colors: Palette,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            debug: false,
            display_mode: DisplayMode::Default,
            colors: Palette::builtin(),
        }
    }
}

impl AppState {
    /// Read settings, seeding the defaults on first run
    pub async fn init(store: &PreferenceStore) -> DomainResult<Self> {
        let settings = match store.get_settings().await? {
            Some(settings) => settings,
            None => {
                let seed = Settings::default();
                store.set_settings(&seed).await?;
                seed
            }
        };

        let state = Self::from_settings(&settings);
        log::info!(
            "state.init debug={} displayMode={:?} colors={:?}",
            state.debug,
            state.display_mode,
            state.colors
        );
        Ok(state)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            debug: settings.debug,
            display_mode: settings.display_mode,
            colors: resolve_palette(settings.display_mode, settings.colors.as_ref()),
        }
    }

    /// Record that represents this state on disk
    pub fn to_settings(&self) -> Settings {
        Settings::from_state(self.debug, self.display_mode, &self.colors)
    }

    async fn commit(&mut self, store: &PreferenceStore, next: AppState) -> DomainResult<()> {
        store.set_settings(&next.to_settings()).await?;
        *self = next;
        Ok(())
    }

    /// Flip `debug`; returns the new value
    pub async fn toggle_debug(&mut self, store: &PreferenceStore) -> DomainResult<bool> {
        let next = AppState {
            debug: !self.debug,
            ..self.clone()
        };
        self.commit(store, next).await?;
        Ok(self.debug)
    }

    /// Switch between the built-in palette and custom mode
    ///
    /// Entering custom mode always starts from `Palette::custom_start`.
    pub async fn toggle_custom_mode(&mut self, store: &PreferenceStore) -> DomainResult<DisplayMode> {
        let display_mode = self.display_mode.toggled();
        let colors = match display_mode {
            DisplayMode::Custom => Palette::custom_start(),
            DisplayMode::Default => Palette::builtin(),
        };
        let next = AppState {
            debug: self.debug,
            display_mode,
            colors,
        };
        self.commit(store, next).await?;
        Ok(self.display_mode)
    }

    /// Replace the custom palette
    pub async fn set_custom_colors(&mut self, store: &PreferenceStore, colors: Palette) -> DomainResult<Outcome> {
        if !self.display_mode.is_custom() {
            return Ok(Rejection::NotCustomMode.into());
        }
        let Some(colors) = colors.normalized() else {
            return Ok(Rejection::InvalidColor.into());
        };
        let next = AppState {
            colors,
            ..self.clone()
        };
        self.commit(store, next).await?;
        Ok(Outcome::Applied)
    }

    /// Title accent for the current background
    pub fn logo_color(&self) -> String {
        calculate_logo_color(&self.colors.background_color).unwrap_or_else(|| rgb_to_hex(LIGHT_ENDPOINT))
    }

    /// CSS custom properties for the page body; empty outside custom mode
    pub fn theme_variables(&self) -> Vec<(&'static str, String)> {
        if !self.display_mode.is_custom() {
            return Vec::new();
        }
        vec![
            ("--background-color", self.colors.background_color.clone()),
            ("--alt-background-color", self.colors.alt_background_color.clone()),
            ("--foreground-color", self.colors.foreground_color.clone()),
            ("--title-color", self.logo_color()),
        ]
    }

    /// `theme_variables` as an inline style attribute
    pub fn theme_style(&self) -> String {
        self.theme_variables()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
