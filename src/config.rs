//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FOLIO_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use folio_field::FieldConfig;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Constellation field configuration
    #[serde(default)]
    pub field: FieldSettings,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Site configuration
    #[serde(default)]
    pub site: SiteConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FOLIO_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // FOLIO_FIELD__PARTICLE_COUNT=80 -> field.particle_count = 80
        figment = figment.merge(Env::prefixed("FOLIO_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.field.to_field_config().validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Base window title; the current page title is appended
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dan Mercede".to_string(),
            width: 1280,
            height: 800,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Constellation field settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub particle_count: usize,
    /// Pairs closer than this (logical pixels) are connected
    pub connection_distance: f32,
    /// Maximum velocity per axis in pixels per frame
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub dim_factor: f32,
    pub particle_opacity: f32,
    /// Fixed RNG seed; random layout when absent
    pub seed: Option<u64>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        let field = FieldConfig::default();
        Self {
            particle_count: field.particle_count,
            connection_distance: field.connection_distance,
            max_speed: field.max_speed,
            radius_min: field.radius_min,
            radius_max: field.radius_max,
            dim_factor: field.dim_factor,
            particle_opacity: field.particle_opacity,
            seed: field.seed,
        }
    }
}

impl FieldSettings {
    /// Convert to the field crate's configuration
    pub fn to_field_config(&self) -> FieldConfig {
        FieldConfig {
            particle_count: self.particle_count,
            connection_distance: self.connection_distance,
            max_speed: self.max_speed,
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            dim_factor: self.dim_factor,
            particle_opacity: self.particle_opacity,
            seed: self.seed,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Opacity of the whole background layer
    pub layer_opacity: f32,
    /// Background color [r, g, b, a] in sRGB
    pub background_color: [f32; 4],
    /// Connection line color [r, g, b] in sRGB
    pub line_color: [f32; 3],
    /// Particle color [r, g, b] in sRGB
    pub particle_color: [f32; 3],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let palette = folio_render::Palette::CONSTELLATION;
        Self {
            layer_opacity: folio_render::DEFAULT_LAYER_OPACITY,
            background_color: palette.background,
            line_color: palette.line,
            particle_color: palette.particle,
        }
    }
}

impl RenderingConfig {
    pub fn palette(&self) -> folio_render::Palette {
        folio_render::Palette {
            line: self.line_color,
            particle: self.particle_color,
            background: self.background_color,
        }
    }
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page shown at startup
    pub start_route: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            start_route: "/".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level used when `RUST_LOG` is unset (error, warn, info, debug, trace)
    pub log_level: String,
    /// Print each rendered page as text to the log
    pub log_pages: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_pages: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<folio_field::FieldConfigError> for ConfigError {
    fn from(e: folio_field::FieldConfigError) -> Self {
        ConfigError {
            message: format!("field: {}", e),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.field.particle_count, 40);
        assert_eq!(config.field.connection_distance, 150.0);
        assert_eq!(config.site.start_route, "/");
    }

    #[test]
    fn test_field_settings_match_field_defaults() {
        let settings = FieldSettings::default();
        assert_eq!(settings.to_field_config(), FieldConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("connection_distance"));
        assert!(toml.contains("layer_opacity"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[field]\nparticle_count = 12\n").unwrap();
        assert_eq!(config.field.particle_count, 12);
        assert_eq!(config.field.dim_factor, 0.3);
        assert_eq!(config.window.height, 800);
    }

    #[test]
    fn test_palette_from_rendering_config() {
        let rendering = RenderingConfig::default();
        assert_eq!(rendering.palette(), folio_render::Palette::CONSTELLATION);
    }
}
