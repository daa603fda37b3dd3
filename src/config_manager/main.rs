use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config_manager::stateless_llm::TranslatorConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::utils::read_config_text;

/// Main configuration for the application using JSON-LD format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,

    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "translator_config")]
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

impl Config {
    /// Load configuration from a JSON-LD, JSON or YAML file
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_env(path, |name| std::env::var(name).ok())
    }

    pub fn load_with_env<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content = read_config_text(path, lookup)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let config: Config = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config {}", path.display()))?,
            // JSON-LD is plain JSON as far as we are concerned; @context is kept as-is
            _ => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON-LD config {}", path.display()))?,
        };
        Ok(config)
    }

    /// Candidate config locations, most specific first
    pub fn candidate_paths() -> Vec<PathBuf> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        [
            std::env::var("CONFIG_PATH").ok().map(PathBuf::from),
            Some(PathBuf::from("conf.jsonld")),
            Some(PathBuf::from("conf.yaml")),
            exe_dir.map(|dir| dir.join("conf.jsonld")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first config file that exists.
    ///
    /// A file that exists but fails to parse is an error; only when no file is
    /// found at all do we fall back to the built-in defaults.
    pub fn discover(paths: &[PathBuf]) -> Result<(Self, Option<PathBuf>)> {
        for path in paths {
            if !path.exists() {
                debug!("No config at {}", path.display());
                continue;
            }
            let config = Self::load(path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok((config, Some(path.clone())));
        }

        warn!("No config file found (tried {:?}), using defaults", paths);
        Ok((Self::default(), None))
    }
}
