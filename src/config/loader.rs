use crate::config::Config;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Load configuration with priority: Env vars > Config files > Defaults.
/// CLI flags are layered on top by the caller.
pub async fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = if let Some(path) = config_path {
        load_config_file(&path).await?
    } else {
        load_config_from_default_locations().await
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Load configuration from default locations
async fn load_config_from_default_locations() -> Config {
    for path in get_config_search_paths() {
        if path.exists() {
            match load_config_file(&path).await {
                Ok(config) => {
                    debug!(target: "config", "loaded {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("failed to load config from {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Config::default()
}

/// Get list of paths to search for configuration files
fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".powerline-prompt.json")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("powerline-prompt").join("config.json"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("powerline-prompt").join("config.json"));
    }

    paths.dedup();
    paths
}

/// Load configuration from a specific file
pub async fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Apply environment variable overrides to configuration
fn apply_env_overrides(config: &mut Config) {
    if let Ok(theme) = env::var("POWERLINE_PROMPT_THEME") {
        config.theme = theme;
    }

    if let Ok(mode) = env::var("POWERLINE_PROMPT_MODE") {
        config.mode = mode;
    }

    if let Ok(shell) = env::var("POWERLINE_PROMPT_SHELL") {
        config.shell = Some(shell);
    }

    if let Ok(modules) = env::var("POWERLINE_PROMPT_MODULES") {
        config.modules = split_list(&modules);
    }
}

/// Split a comma-separated module list, dropping blanks
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
