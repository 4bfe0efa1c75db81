//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! reproduce the shipped purple theme, so the file is optional and sparse:
//! override just the values you want.
//!
//! ## Config File Location
//!
//! `config.toml` lives in the source directory (`--source`, default `.`),
//! next to an optional `assets/` directory that is copied verbatim to the
//! output root.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"             # Copied to the output root when present
//!
//! [theme]
//! primary_color = "#7e22ce"
//! secondary_color = "#f5f3ff"
//! accent_color = "#a855f7"
//! font_family = "Plus Jakarta Sans"
//!
//! [chart]
//! width = 640                       # SVG viewBox width
//! height = 360                      # SVG viewBox height
//!
//! [export]
//! enabled = true                    # Write the Google Sites kit during build
//! ```
//!
//! Theme values are deliberately not validated: whatever strings are given
//! flow into the CSS and the exported theme descriptor unchanged.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the source dir) copied to the output root.
    pub assets_dir: String,
    /// Brand colors and typography.
    pub theme: ThemeConfig,
    /// Growth chart dimensions.
    pub chart: ChartConfig,
    /// Google Sites export kit settings.
    pub export: ExportConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            theme: ThemeConfig::default(),
            chart: ChartConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(ConfigError::Validation(
                "chart.width and chart.height must be non-zero".into(),
            ));
        }
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Brand styling shared by the rendered page and the exported theme file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#7e22ce".to_string(),
            secondary_color: "#f5f3ff".to_string(),
            accent_color: "#a855f7".to_string(),
            font_family: "Plus Jakarta Sans".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// When false, `build` renders only `index.html`.
    pub enabled: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# kazi-folio Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory next to this file whose contents are copied to the output root
# (favicon, social images, fonts).
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
# Used for the page's CSS custom properties and written verbatim into the
# Google Sites theme file. Values are not checked: any string is accepted.
[theme]
primary_color = "#7e22ce"
secondary_color = "#f5f3ff"
accent_color = "#a855f7"
font_family = "Plus Jakarta Sans"

# ---------------------------------------------------------------------------
# Growth chart
# ---------------------------------------------------------------------------
[chart]
# SVG viewBox size. The chart scales to its container; these set the
# aspect ratio and stroke proportions.
width = 640
height = 360

# ---------------------------------------------------------------------------
# Google Sites export kit
# ---------------------------------------------------------------------------
[export]
# Write google-sites/index.html, google-sites/embed.html and the theme
# JSON alongside index.html during `build`.
enabled = true
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-accent: {accent};
    --font-family: '{font}', sans-serif;
}}"#,
        primary = theme.primary_color,
        secondary = theme.secondary_color,
        accent = theme.accent_color,
        font = theme.font_family,
    )
}
