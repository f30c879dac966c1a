// ===== CONFIG TYPES =====

use serde::{Deserialize, Serialize};

/// Defaults shipped with the frontend; parsed once at startup.
pub const BUNDLED_CONFIG: &str = include_str!("../kumifont.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported configuration version '{0}'")]
    UnsupportedVersion(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub fonts: FontServiceSection,
    pub toast: ToastSection,
    pub analytics: AnalyticsSection,
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        if !config.app.is_supported_version() {
            return Err(ConfigError::UnsupportedVersion(config.app.version));
        }
        Ok(config)
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUNDLED_CONFIG)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

/// Remote font catalog service queried for every catalog family.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FontServiceSection {
    pub stylesheet_url: String,
    /// DOM id of the `<link>` element, so repeated loads reuse it.
    pub link_id: String,
    pub weights: Vec<u16>,
    /// CSS `font-display` strategy.
    pub display: String,
}

impl Default for FontServiceSection {
    fn default() -> Self {
        Self {
            stylesheet_url: "https://fonts.googleapis.com/css2".to_string(),
            link_id: "google-fonts-link".to_string(),
            weights: vec![300, 400, 500, 700, 900],
            display: "swap".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ToastSection {
    pub duration_ms: u32,
}

impl Default for ToastSection {
    fn default() -> Self {
        Self { duration_ms: 2000 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnalyticsSection {
    pub enabled: bool,
}

impl Default for AnalyticsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        let config = AppConfig::bundled().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.toast.duration_ms, 2000);
        assert_eq!(config.fonts.display, "swap");
    }

    #[test]
    fn partial_config_fills_missing_sections() {
        let config = AppConfig::from_toml_str("[analytics]\nenabled = false\n").unwrap();
        assert!(!config.analytics.enabled);
        assert_eq!(config.fonts, FontServiceSection::default());
        assert_eq!(config.app.version, AppSection::CURRENT_VERSION);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let error = AppConfig::from_toml_str("[toast]\nduration_ms = \"soon\"\n").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let error = AppConfig::from_toml_str("[app]\nversion = \"0.1.0\"\n").unwrap_err();
        assert!(matches!(error, ConfigError::UnsupportedVersion(version) if version == "0.1.0"));
    }
}
