use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Slides shown when no slide files are given on the command line
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to slide transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value once the transition finishes
    None,
    Linear,
    /// Quadratic ease-in-out: 2t² for the first half, mirrored for the second
    #[default]
    EaseInOutQuad,
    /// Cubic ease-out: 1 - (1-t)³
    Cubic,
    /// Quintic ease-out: 1 - (1-t)⁵
    Quintic,
    /// Exponential ease-out: 1 - 2^(-10t)
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Duration of one slide transition in milliseconds
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    /// Easing curve for transitions
    #[serde(default)]
    pub easing: EasingType,
    /// Autoplay advance period in milliseconds
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Start autoplay as soon as the slider is shown
    #[serde(default = "default_true")]
    pub autoplay_on_start: bool,
    /// Animation frame rate (frames per second)
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: default_transition_duration(),
            easing: EasingType::default(),
            autoplay_interval_ms: default_autoplay_interval(),
            autoplay_on_start: default_true(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl SliderConfig {
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll / redraw rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the slide indicator dots
    #[serde(default = "default_true")]
    pub show_indicators: bool,
    /// Show the navigation button bar
    #[serde(default = "default_true")]
    pub show_controls: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_indicators: default_true(),
            show_controls: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord", "dracula")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either `theme = "nord"` or `[ui.theme] name = ... colors = ...`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Slide card background
    pub bg1: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Accent color (active indicator, focused button)
    pub accent: Option<String>,
    /// Disabled control color
    pub disabled: Option<String>,
    /// Error color
    pub error: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "G" (Shift+g), "<Space>", "<Home>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance to the next slide (wraps around)
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Go back to the previous slide (wraps around)
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Jump to the first slide
    #[serde(default = "default_key_first")]
    pub first: String,
    /// Jump to the last slide
    #[serde(default = "default_key_last")]
    pub last: String,
    /// Start or pause autoplay
    #[serde(default = "default_key_toggle_autoplay")]
    pub toggle_autoplay: String,
    /// Enter or leave fullscreen
    #[serde(default = "default_key_toggle_fullscreen")]
    pub toggle_fullscreen: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            first: default_key_first(),
            last: default_key_last(),
            toggle_autoplay: default_key_toggle_autoplay(),
            toggle_fullscreen: default_key_toggle_fullscreen(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_prev() -> String { "h".to_string() }
fn default_key_first() -> String { "<Home>".to_string() }
fn default_key_last() -> String { "<End>".to_string() }
fn default_key_toggle_autoplay() -> String { "<Space>".to_string() }
fn default_key_toggle_fullscreen() -> String { "f".to_string() }

/// A slide defined inline in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glissade")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_transition_duration() -> u64 {
    520
}

fn default_autoplay_interval() -> u64 {
    3000
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    50
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when absent
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default config file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glissade/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glissade")
            .join("config.toml")
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("glissade.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slider_config() {
        let config = SliderConfig::default();
        assert_eq!(config.transition_duration_ms, 520);
        assert_eq!(config.autoplay_interval_ms, 3000);
        assert_eq!(config.easing, EasingType::EaseInOutQuad);
        assert!(config.autoplay_on_start);
        assert_eq!(config.animation_fps, 60);
        assert_eq!(config.autoplay_interval(), Duration::from_secs(3));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.slider.transition_duration_ms, 520);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.keymap.next, "l");
        assert!(config.slides.is_empty());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
            [slider]
            easing = "linear"
            autoplay_interval_ms = 1000

            [ui]
            theme = "nord"

            [[slides]]
            title = "Hello"
            body = "World"

            [[slides]]
            title = "Bare"
            "#,
        )
        .unwrap();

        assert_eq!(config.slider.easing, EasingType::Linear);
        assert_eq!(config.slider.autoplay_interval_ms, 1000);
        assert_eq!(config.slider.transition_duration_ms, 520);
        assert_eq!(config.ui.theme.name, "nord");
        assert_eq!(config.slides.len(), 2);
        assert_eq!(config.slides[1].body, "");
    }

    #[test]
    fn test_theme_as_table() {
        let config = AppConfig::from_toml(
            r##"
            [ui.theme]
            name = "dracula"
            [ui.theme.colors]
            accent = "#ff0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[slider\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.slider.easing, config.slider.easing);
        assert_eq!(parsed.keymap.toggle_fullscreen, "f");
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = std::env::temp_dir().join(format!("glissade-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.slider.autoplay_interval_ms = 1234;
        config.slides.push(SlideConfig {
            title: "Hello".to_string(),
            body: "World".to_string(),
        });
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.slider.autoplay_interval_ms, 1234);
        assert_eq!(loaded.slides.len(), 1);
        assert_eq!(loaded.slides[0].title, "Hello");

        let missing = AppConfig::load_from(&dir.join("absent.toml")).unwrap();
        assert_eq!(missing.slider.autoplay_interval_ms, 3000);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
