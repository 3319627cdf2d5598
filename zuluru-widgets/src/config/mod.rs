//! Configuration management for zuluru-widgets
//!
//! Widget presentation settings (button styling, icons, label templates) are
//! loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ZULURU_` prefix)
//! 2. `./config.toml` (development)
//! 3. `~/.config/zuluru-widgets/{service}/config.toml` (user config, XDG)
//! 4. `/etc/zuluru-widgets/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Label templates are the translation hook: `{0}` is replaced with the
//! caller-supplied text, so a French site can set `show = "Afficher {0}"`.
//!
//! # Example Configuration
//!
//! ```toml
//! [classes]
//! ajax_button_style = "btn-primary"
//!
//! [labels]
//! more = "Plus"
//! show = "Afficher {0}"
//! hide = "Masquer {0}"
//!
//! [icons]
//! dropdown = "/static/img/dropdown.png"
//! ```

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Extra classes applied alongside the fixed marker classes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClassSettings {
    /// Styling class added to AJAX buttons
    pub ajax_button_style: String,

    /// Class on the inner link of in-place widgets
    pub icon_link: String,
}

impl Default for ClassSettings {
    fn default() -> Self {
        Self {
            ajax_button_style: "btn-success".to_string(),
            icon_link: "icon".to_string(),
        }
    }
}

/// Label templates; `{0}` is replaced with the caller's text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelSettings {
    /// Default text of the "more" actions widget
    pub more: String,
    /// Select-all link without a noun
    pub select_all: String,
    /// Select-all link with a noun
    pub select_all_named: String,
    /// Unselect-all link without a noun
    pub unselect_all: String,
    /// Unselect-all link with a noun
    pub unselect_all_named: String,
    /// Toggle link text while the target is hidden
    pub show: String,
    /// Toggle link text while the target is shown
    pub hide: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            more: "More".to_string(),
            select_all: "Select all".to_string(),
            select_all_named: "Select all {0}".to_string(),
            unselect_all: "Unselect all".to_string(),
            unselect_all_named: "Unselect all {0}".to_string(),
            show: "Show {0}".to_string(),
            hide: "Hide {0}".to_string(),
        }
    }
}

impl LabelSettings {
    /// Substitute `{0}` in a label template
    #[must_use]
    pub fn format(template: &str, arg: &str) -> String {
        template.replace("{0}", arg)
    }
}

/// Icon images used by the widgets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IconSettings {
    /// Drop-down indicator appended to in-place widgets
    pub dropdown: String,
    /// Alt text for the drop-down indicator
    pub dropdown_alt: String,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            dropdown: "/img/dropdown.png".to_string(),
            dropdown_alt: "dropdown".to_string(),
        }
    }
}

/// Autocomplete input settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AutocompleteSettings {
    /// Visible width of the text input
    pub size: u32,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self { size: 50 }
    }
}

/// Complete widget configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Extra classes
    #[serde(default)]
    pub classes: ClassSettings,

    /// Label templates
    #[serde(default)]
    pub labels: LabelSettings,

    /// Icons
    #[serde(default)]
    pub icons: IconSettings,

    /// Autocomplete inputs
    #[serde(default)]
    pub autocomplete: AutocompleteSettings,
}

impl WidgetConfig {
    /// Load configuration for a specific service
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be parsed
    /// - Configuration values fail type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use zuluru_widgets::config::WidgetConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = WidgetConfig::load_for_service("zuluru")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config
        let system_config = PathBuf::from("/etc/zuluru-widgets")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables, double underscore for nesting
        figment = figment.merge(Env::prefixed("ZULURU_").split("__").lowercase(true));

        let config = figment.extract()?;
        tracing::debug!(service = service_name, "loaded widget configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values of the
    /// wrong type.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ZULURU_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("zuluru-widgets")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.classes.ajax_button_style, "btn-success");
        assert_eq!(config.classes.icon_link, "icon");
        assert_eq!(config.labels.more, "More");
        assert_eq!(config.icons.dropdown, "/img/dropdown.png");
        assert_eq!(config.autocomplete.size, 50);
    }

    #[test]
    fn test_label_format() {
        let labels = LabelSettings::default();
        assert_eq!(LabelSettings::format(&labels.show, "details"), "Show details");
        assert_eq!(LabelSettings::format(&labels.select_all, "ignored"), "Select all");
    }

    #[test]
    fn test_recommended_path() {
        let path = WidgetConfig::recommended_path("zuluru");
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let config = WidgetConfig::load_from("/nonexistent/path/config.toml").unwrap();
        assert_eq!(config.labels.more, "More");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[classes]
ajax_button_style = "btn-primary"

[labels]
show = "Afficher {0}"

[autocomplete]
size = 30
"#,
        )
        .unwrap();

        let config = WidgetConfig::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.classes.ajax_button_style, "btn-primary");
        assert_eq!(config.classes.icon_link, "icon");
        assert_eq!(config.labels.show, "Afficher {0}");
        assert_eq!(config.labels.hide, "Hide {0}");
        assert_eq!(config.autocomplete.size, 30);
    }

    #[test]
    fn test_load_for_service_with_defaults() {
        let config = WidgetConfig::load_for_service("nonexistent-service-123").unwrap();
        assert_eq!(config.icons.dropdown_alt, "dropdown");
    }
}
