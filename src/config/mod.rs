pub mod defaults;
pub mod loader;

pub use defaults::*;
pub use loader::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    /// Symbol mode: compatible, patched or flat
    pub mode: String,
    pub shell: Option<String>,
    /// Source order
    pub modules: Vec<String>,
    /// Truncation ranking, highest first
    pub priority: Vec<String>,
    #[serde(rename = "maxWidth")]
    pub max_width: Option<usize>,
    pub segments: SegmentConfig,
    pub colors: Option<HashMap<String, ThemeColors>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentConfig {
    pub git: Option<GitConfig>,
    pub arc: Option<ArcConfig>,
    pub termtitle: Option<TermTitleConfig>,
    pub user: Option<UserConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub enabled: bool,
    #[serde(rename = "showAheadBehind")]
    pub show_ahead_behind: Option<bool>,
    #[serde(rename = "timeoutMs")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcConfig {
    pub enabled: bool,
    /// "status" (single call) or "info" (info + status, no ahead/behind)
    pub source: Option<String>,
    #[serde(rename = "showAheadBehind")]
    pub show_ahead_behind: Option<bool>,
    #[serde(rename = "timeoutMs")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TermTitleConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThemeColors {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
}

impl Config {
    /// Whether a module listed in `modules` is switched on in `segments`
    pub fn is_enabled(&self, module: &str) -> bool {
        match module {
            "git" => self.segments.git.as_ref().map_or(true, |c| c.enabled),
            "arc" => self.segments.arc.as_ref().map_or(true, |c| c.enabled),
            "termtitle" => self.segments.termtitle.as_ref().map_or(true, |c| c.enabled),
            "user" => self.segments.user.as_ref().map_or(true, |c| c.enabled),
            _ => false,
        }
    }
}
