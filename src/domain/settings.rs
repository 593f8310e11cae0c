//! Settings Entity
//!
//! The persisted `{debug, displayMode, colors?}` record and the palettes
//! it resolves to.

use serde::{Deserialize, Serialize};
use super::color::{hex_to_rgb, rgb_to_hex};

/// Selects where the palette comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayMode {
    /// Built-in light palette
    #[default]
    #[serde(rename = "")]
    Default,
    /// User-editable palette (starts dark)
    #[serde(rename = "customMode")]
    Custom,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Default => "",
            DisplayMode::Custom => "customMode",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Default => DisplayMode::Custom,
            DisplayMode::Custom => DisplayMode::Default,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, DisplayMode::Custom)
    }
}

/// Three-color palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background_color: String,
    pub foreground_color: String,
    pub alt_background_color: String,
}

impl Palette {
    pub fn new(background: &str, foreground: &str, alt_background: &str) -> Self {
        Self {
            background_color: background.to_string(),
            foreground_color: foreground.to_string(),
            alt_background_color: alt_background.to_string(),
        }
    }

    /// Palette of `DisplayMode::Default`
    pub fn builtin() -> Self {
        Self::new("#ffffff", "#000000", "#fafad2")
    }

    /// First palette shown after switching to custom mode
    pub fn custom_start() -> Self {
        Self::new("#111111", "#eeeeee", "#2f4f4f")
    }

    /// Same palette as lowercase `#rrggbb`, or `None` if any color is not
    /// a 6-digit hex
    pub fn normalized(&self) -> Option<Self> {
        let normalize = |c: &str| hex_to_rgb(c).map(rgb_to_hex);
        Some(Self {
            background_color: normalize(&self.background_color)?,
            foreground_color: normalize(&self.foreground_color)?,
            alt_background_color: normalize(&self.alt_background_color)?,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Global settings record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub display_mode: DisplayMode,
    /// Only written in custom mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Palette>,
}

impl Settings {
    /// Record to persist for an in-memory state
    pub fn from_state(debug: bool, display_mode: DisplayMode, colors: &Palette) -> Self {
        Self {
            debug,
            display_mode,
            colors: display_mode.is_custom().then(|| colors.clone()),
        }
    }
}

/// The one place palette defaults are applied
pub fn resolve_palette(mode: DisplayMode, stored: Option<&Palette>) -> Palette {
    match (mode, stored) {
        (DisplayMode::Custom, Some(colors)) => colors.clone(),
        _ => Palette::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_json() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "debug": false, "displayMode": "" }));
    }

    #[test]
    fn test_custom_settings_json() {
        let settings = Settings::from_state(true, DisplayMode::Custom, &Palette::custom_start());
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json, serde_json::json!({
            "debug": true,
            "displayMode": "customMode",
            "colors": {
                "backgroundColor": "#111111",
                "foregroundColor": "#eeeeee",
                "altBackgroundColor": "#2f4f4f"
            }
        }));
    }

    #[test]
    fn test_from_state_drops_colors_in_default_mode() {
        let settings = Settings::from_state(false, DisplayMode::Default, &Palette::custom_start());
        assert_eq!(settings.colors, None);
    }

    #[test]
    fn test_missing_display_mode_decodes_to_default() {
        let settings: Settings = serde_json::from_str(r#"{"debug":true}"#).unwrap();
        assert_eq!(settings.display_mode, DisplayMode::Default);
        assert!(settings.debug);
    }

    #[test]
    fn test_unknown_display_mode_is_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"debug":false,"displayMode":"neon"}"#).is_err());
    }

    #[test]
    fn test_resolve_palette() {
        let custom = Palette::new("#123456", "#abcdef", "#000000");
        assert_eq!(resolve_palette(DisplayMode::Default, Some(&custom)), Palette::builtin());
        assert_eq!(resolve_palette(DisplayMode::Custom, Some(&custom)), custom);
        assert_eq!(resolve_palette(DisplayMode::Custom, None), Palette::builtin());
    }

    #[test]
    fn test_display_mode_toggle() {
        assert_eq!(DisplayMode::Default.toggled(), DisplayMode::Custom);
        assert_eq!(DisplayMode::Custom.toggled().as_str(), "");
    }

    #[test]
    fn test_palette_normalization() {
        assert_eq!(Palette::builtin().normalized(), Some(Palette::builtin()));
        assert_eq!(
            Palette::new("202020", "#F0F0F0", "#2f4F4f").normalized(),
            Some(Palette::new("#202020", "#f0f0f0", "#2f4f4f"))
        );
        assert_eq!(Palette::new("#fff", "#000000", "#000000").normalized(), None);
    }
}
