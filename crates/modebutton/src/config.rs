//! TOML configuration for the mode button.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! spacing = 6.0
//! border_width = 6.0
//! padding = 6.0
//! inner_border = 1
//! theme = "dark"
//! ```

use std::path::Path;

use modebutton_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::style::{ColorPalette, PaletteStyle};

/// Built-in color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// Layout and style settings for a [`ModeButton`](crate::widget::widgets::ModeButton).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeButtonConfig {
    /// Gap between adjacent segment slots.
    pub spacing: f32,
    /// Inset between the control edge and the segment slots.
    pub border_width: f32,
    /// Horizontal padding inside each segment slot.
    pub padding: f32,
    /// Inset applied to separators, in whole pixels.
    pub inner_border: i32,
    /// Color theme.
    pub theme: ThemeMode,
}

impl Default for ModeButtonConfig {
    fn default() -> Self {
        Self {
            spacing: 6.0,
            border_width: 6.0,
            padding: 6.0,
            inner_border: 1,
            theme: ThemeMode::default(),
        }
    }
}

impl ModeButtonConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> ConfigResult<()> {
        check_length("spacing", self.spacing)?;
        check_length("border_width", self.border_width)?;
        check_length("padding", self.padding)?;
        if self.inner_border < 0 {
            return Err(ConfigError::invalid_value(
                "inner_border",
                format!("must not be negative, got {}", self.inner_border),
            ));
        }
        Ok(())
    }

    /// The style matching this configuration's theme and inner border.
    pub fn style(&self) -> PaletteStyle {
        PaletteStyle::new(ColorPalette::for_theme(self.theme)).with_inner_border(self.inner_border)
    }
}

fn check_length(field: &'static str, value: f32) -> ConfigResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid_value(
            field,
            format!("must be a finite non-negative number, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProvider;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ModeButtonConfig::from_toml_str("").unwrap();
        assert_eq!(config, ModeButtonConfig::default());
        assert_eq!(config.spacing, 6.0);
        assert_eq!(config.border_width, 6.0);
        assert_eq!(config.inner_border, 1);
    }

    #[test]
    fn test_partial_document() {
        let config = ModeButtonConfig::from_toml_str("theme = \"high-contrast\"\nspacing = 2.0").unwrap();
        assert_eq!(config.theme, ThemeMode::HighContrast);
        assert_eq!(config.spacing, 2.0);
        assert_eq!(config.padding, 6.0);
    }

    #[test]
    fn test_negative_values_rejected() {
        let err = ModeButtonConfig::from_toml_str("inner_border = -1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "inner_border", .. }));

        let err = ModeButtonConfig::from_toml_str("spacing = -3.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "spacing", .. }));
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let err = ModeButtonConfig::from_toml_str("theme = \"sepia\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_style_follows_config() {
        let config = ModeButtonConfig {
            inner_border: 2,
            theme: ThemeMode::Dark,
            ..Default::default()
        };
        let style = config.style();
        assert_eq!(style.metrics().inner_border, 2);
        assert_eq!(*style.palette(), ColorPalette::dark());
    }
}
