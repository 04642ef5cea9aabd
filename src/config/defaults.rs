use crate::config::*;

pub const DEFAULT_MODULES: [&str; 4] = ["termtitle", "user", "git", "arc"];

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            mode: "compatible".to_string(),
            shell: None,
            modules: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            priority: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            max_width: None,
            segments: SegmentConfig::default(),
            colors: None,
        }
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            git: Some(GitConfig::default()),
            arc: Some(ArcConfig::default()),
            termtitle: Some(TermTitleConfig::default()),
            user: Some(UserConfig::default()),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_ahead_behind: Some(true),
            timeout_ms: Some(1500),
        }
    }
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source: Some("status".to_string()),
            show_ahead_behind: Some(true),
            timeout_ms: Some(1500),
        }
    }
}

impl Default for TermTitleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
