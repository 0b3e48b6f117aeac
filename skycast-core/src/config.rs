use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Credentials for the weather provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Settings for the optional page-translation feature.
///
/// Example TOML:
/// [translate]
/// endpoint = "https://libretranslate.example"
/// target = "lt"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Base URL of a LibreTranslate-compatible service.
    pub endpoint: String,
    /// Target language code; the page is always translated from English.
    pub target: String,
    pub api_key: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub openweather: Option<ProviderConfig>,
    pub translate: Option<TranslateConfig>,
}

impl Config {
    /// Returns the weather API key, if configured.
    pub fn api_key(&self) -> Option<&str> {
        self.openweather.as_ref().map(|cfg| cfg.api_key.as_str())
    }

    /// Set/replace the weather API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather = Some(ProviderConfig { api_key });
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Load config from disk and layer environment overrides on top.
    pub fn load_with_env() -> Result<Self> {
        let mut cfg = Self::load()?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// Environment variables win over the config file:
    /// `SKYCAST_API_KEY`, `SKYCAST_TRANSLATE_URL`, `SKYCAST_TRANSLATE_TARGET`,
    /// `SKYCAST_TRANSLATE_API_KEY`.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("SKYCAST_API_KEY") {
            if !key.is_empty() {
                self.set_api_key(key);
            }
        }

        if let Ok(endpoint) = std::env::var("SKYCAST_TRANSLATE_URL") {
            if !endpoint.is_empty() {
                let target = std::env::var("SKYCAST_TRANSLATE_TARGET")
                    .ok()
                    .filter(|t| !t.is_empty())
                    .or_else(|| self.translate.as_ref().map(|t| t.target.clone()))
                    .unwrap_or_else(|| "lt".to_string());
                let api_key = std::env::var("SKYCAST_TRANSLATE_API_KEY")
                    .ok()
                    .filter(|k| !k.is_empty())
                    .or_else(|| self.translate.as_ref().and_then(|t| t.api_key.clone()));

                self.translate = Some(TranslateConfig { endpoint, target, api_key });
            }
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
