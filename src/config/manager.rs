use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::letter::{DEFAULT_MODEL, Language};
use crate::paths;

/// Default settings in the `[barua]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaruaConfig {
    /// Default interface language (`en` or `sw`).
    pub ui_language: Option<Language>,
    /// Model identifier override.
    pub model: Option<String>,
}

/// Connection settings for the generation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ServiceConfig {
    /// Gets the API key, preferring the environment variable over the file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this service is configured to use an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/barua/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub barua: BaruaConfig,
    /// Generation service connection.
    #[serde(default)]
    pub service: Option<ServiceConfig>,
}

/// Resolved service connection after the API key check.
#[derive(Debug, Clone)]
pub struct ResolvedService {
    pub endpoint: String,
    pub api_key: Option<String>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The interface language.
    pub ui_language: Language,
    /// The model to request.
    pub model: String,
    /// Service connection, when one is configured.
    pub service: Option<ResolvedService>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub lang: Option<Language>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

/// Merges CLI options with config file settings.
///
/// CLI options win. The interface language falls back to English and the
/// model to the pinned default. The service connection stays optional here so
/// offline paths (dry runs, listings) work without any configuration.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let ui_language = options
        .lang
        .or(config_file.barua.ui_language)
        .unwrap_or(Language::En);

    let model = options
        .model
        .clone()
        .or_else(|| config_file.barua.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let service = match (&options.endpoint, &config_file.service) {
        (Some(endpoint), file_service) => Some(ResolvedService {
            endpoint: endpoint.clone(),
            api_key: file_service.as_ref().and_then(ServiceConfig::get_api_key),
        }),
        (None, Some(file_service)) => {
            let api_key = file_service.get_api_key();
            if file_service.requires_api_key() && api_key.is_none() {
                let env_var = file_service.api_key_env.as_deref().unwrap_or("API_KEY");
                bail!(
                    "The generation service requires an API key\n\n\
                     Set the {env_var} environment variable:\n  \
                     export {env_var}=\"your-api-key\"\n\n\
                     Or set api_key in ~/.config/barua/config.toml"
                );
            }
            Some(ResolvedService {
                endpoint: file_service.endpoint.clone(),
                api_key,
            })
        }
        (None, None) => None,
    };

    Ok(ResolvedConfig {
        ui_language,
        model,
        service,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/barua/config.toml`
    /// or `~/.config/barua/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            barua: BaruaConfig {
                ui_language: Some(Language::Sw),
                model: Some("gemma3:12b".to_string()),
            },
            service: Some(ServiceConfig {
                endpoint: "http://localhost:11434".to_string(),
                api_key: None,
                api_key_env: None,
            }),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.save(&create_test_config()).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.barua.ui_language, Some(Language::Sw));
        assert_eq!(loaded.barua.model, Some("gemma3:12b".to_string()));
        assert_eq!(loaded.service.unwrap().endpoint, "http://localhost:11434");
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
    }

    #[test]
    fn test_service_get_api_key_from_env() {
        // SAFETY: This test runs in isolation and only modifies a test-specific env var
        unsafe {
            std::env::set_var("BARUA_TEST_API_KEY", "test-key-value");
        }

        let service = ServiceConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("BARUA_TEST_API_KEY".to_string()),
        };

        // Environment variable takes priority
        assert_eq!(service.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("BARUA_TEST_API_KEY");
        }
    }

    #[test]
    fn test_service_get_api_key_fallback() {
        let service = ServiceConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("BARUA_TEST_NONEXISTENT_KEY".to_string()),
        };

        assert_eq!(service.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_resolve_defaults_without_config() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.ui_language, Language::En);
        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert!(resolved.service.is_none());
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let options = ResolveOptions {
            lang: Some(Language::En),
            endpoint: Some("http://override:8080".to_string()),
            model: Some("other-model".to_string()),
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.ui_language, Language::En);
        assert_eq!(resolved.model, "other-model");
        assert_eq!(resolved.service.unwrap().endpoint, "http://override:8080");
    }

    #[test]
    fn test_resolve_falls_back_to_file() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.ui_language, Language::Sw);
        assert_eq!(resolved.model, "gemma3:12b");
        assert_eq!(
            resolved.service.unwrap().endpoint,
            "http://localhost:11434"
        );
    }

    #[test]
    fn test_resolve_api_key_required_but_missing() {
        let mut config = create_test_config();
        config.service = Some(ServiceConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: None,
            api_key_env: Some("BARUA_TEST_UNSET_KEY".to_string()),
        });

        let result = resolve_config(&ResolveOptions::default(), &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }
}
