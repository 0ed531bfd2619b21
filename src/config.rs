//! Runtime configuration for both renderers.

use crate::error::SeloError;
use selo_types::Color;
use serde::Deserialize;
use std::path::PathBuf;

/// The logo shipped with the application, used when a seal carries no organization logo.
const BUNDLED_LOGO_SVG: &str = include_str!("../assets/default-logo.svg");

/// Brand colors used by the vector renderer and the print stylesheet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    /// Header band and section banners.
    pub primary: Color,
    /// Text drawn on top of `primary`.
    pub on_primary: Color,
    /// Background of the shaded campaign and observation blocks.
    pub shade: Color,
    pub text: Color,
    /// Fragile glyph.
    pub danger: Color,
    /// Attention glyph.
    pub warning: Color,
    /// Borders and the footer rule.
    pub rule: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x1F, 0x3A, 0x5F),
            on_primary: Color::WHITE,
            shade: Color::gray(235),
            text: Color::rgb(0x21, 0x21, 0x21),
            danger: Color::rgb(0xC6, 0x28, 0x28),
            warning: Color::rgb(0xF9, 0xA8, 0x25),
            rule: Color::gray(150),
        }
    }
}

/// Geometry of the vector label page, in points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VectorLayout {
    pub margin: f32,
    /// Multiplier applied to the font size to get the distance between wrapped lines.
    pub line_height_factor: f32,
    pub header_height: f32,
    pub banner_height: f32,
    /// Horizontal distance between instruction icons.
    pub icon_pitch: f32,
}

impl Default for VectorLayout {
    fn default() -> Self {
        Self {
            margin: 40.0,
            line_height_factor: 1.15,
            header_height: 60.0,
            banner_height: 22.0,
            icon_pitch: 90.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeloConfig {
    /// Image source embedded in the markup when the seal has no organization logo.
    pub default_logo: String,
    /// Delay between the print view finishing its load and the print dialog opening.
    pub print_delay_ms: u32,
    /// Where downloads are written by the directory sink.
    pub output_dir: PathBuf,
    pub palette: Palette,
    pub layout: VectorLayout,
}

impl Default for SeloConfig {
    fn default() -> Self {
        Self {
            default_logo: bundled_logo_data_uri(),
            print_delay_ms: 500,
            output_dir: PathBuf::from("."),
            palette: Palette::default(),
            layout: VectorLayout::default(),
        }
    }
}

impl SeloConfig {
    /// Parses a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SeloError> {
        let config: SeloConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_default_logo(mut self, logo: impl Into<String>) -> Self {
        self.default_logo = logo.into();
        self
    }

    pub fn with_print_delay_ms(mut self, delay: u32) -> Self {
        self.print_delay_ms = delay;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn validate(&self) -> Result<(), SeloError> {
        if self.print_delay_ms == 0 {
            return Err(SeloError::Config("printDelayMs must be greater than zero".into()));
        }
        let layout = &self.layout;
        if !(layout.line_height_factor.is_finite() && layout.line_height_factor > 0.0) {
            return Err(SeloError::Config(format!(
                "lineHeightFactor must be a positive number, got {}",
                layout.line_height_factor
            )));
        }
        if !(layout.margin >= 0.0 && layout.icon_pitch > 0.0) {
            return Err(SeloError::Config("margin and iconPitch must be positive".into()));
        }
        Ok(())
    }
}

/// The bundled logo as an inline `data:` URI.
pub fn bundled_logo_data_uri() -> String {
    format!("data:image/svg+xml;utf8,{}", BUNDLED_LOGO_SVG.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SeloConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.default_logo.starts_with("data:image/svg+xml"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SeloConfig::from_json(r##"{ "printDelayMs": 250, "palette": { "primary": "#000" } }"##).unwrap();
        assert_eq!(config.print_delay_ms, 250);
        assert_eq!(config.palette.primary, Color::BLACK);
        assert_eq!(config.palette.on_primary, Color::WHITE);
        assert_eq!(config.layout, VectorLayout::default());
    }

    #[test]
    fn zero_print_delay_is_rejected() {
        let err = SeloConfig::from_json(r#"{ "printDelayMs": 0 }"#).unwrap_err();
        assert!(matches!(err, SeloError::Config(_)));
    }

    #[test]
    fn non_ascii_color_is_an_error() {
        let err = SeloConfig::from_json(r##"{ "palette": { "primary": "#é1" } }"##).unwrap_err();
        assert!(matches!(err, SeloError::Json(_)));
    }

    #[test]
    fn invalid_line_height_is_rejected() {
        let config = SeloConfig {
            layout: VectorLayout { line_height_factor: 0.0, ..Default::default() },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
