pub mod symbols;

pub use symbols::*;

use crate::config::ThemeColors;
use log::warn;
use std::collections::HashMap;

/// 256-color palette indices for every colored segment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub repo_clean_fg: u8,
    pub repo_clean_bg: u8,
    pub repo_dirty_bg: u8,
    pub ahead_fg: u8,
    pub ahead_bg: u8,
    pub behind_fg: u8,
    pub behind_bg: u8,
    pub untracked_fg: u8,
    pub untracked_bg: u8,
    pub changed_fg: u8,
    pub changed_bg: u8,
    pub staged_fg: u8,
    pub staged_bg: u8,
    pub username_fg: u8,
    pub username_root_bg: u8,
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

impl Theme {
    /// Apply per-key overrides from the config file. Unknown keys are
    /// reported and skipped.
    pub fn with_overrides(mut self, overrides: &HashMap<String, ThemeColors>) -> Self {
        for (key, colors) in overrides {
            let slots = match key.as_str() {
                "repo-clean" => (Some(&mut self.repo_clean_fg), Some(&mut self.repo_clean_bg)),
                "repo-dirty" => (None, Some(&mut self.repo_dirty_bg)),
                "ahead" => (Some(&mut self.ahead_fg), Some(&mut self.ahead_bg)),
                "behind" => (Some(&mut self.behind_fg), Some(&mut self.behind_bg)),
                "untracked" => (Some(&mut self.untracked_fg), Some(&mut self.untracked_bg)),
                "changed" => (Some(&mut self.changed_fg), Some(&mut self.changed_bg)),
                "staged" => (Some(&mut self.staged_fg), Some(&mut self.staged_bg)),
                "username" => (Some(&mut self.username_fg), None),
                "username-root" => (None, Some(&mut self.username_root_bg)),
                _ => {
                    warn!("unknown theme color key: {}", key);
                    continue;
                }
            };

            if let (Some(slot), Some(fg)) = (slots.0, colors.fg) {
                *slot = fg;
            }
            if let (Some(slot), Some(bg)) = (slots.1, colors.bg) {
                *slot = bg;
            }
        }
        self
    }
}

pub fn get_theme(name: &str) -> Theme {
    match name {
        "default" => default_theme(),
        "solarized-dark" => solarized_dark_theme(),
        "gruvbox" => gruvbox_theme(),
        "low-contrast" => low_contrast_theme(),
        _ => default_theme(), // fallback
    }
}

fn default_theme() -> Theme {
    Theme {
        repo_clean_fg: 0,
        repo_clean_bg: 148,
        repo_dirty_bg: 161,
        ahead_fg: 250,
        ahead_bg: 240,
        behind_fg: 250,
        behind_bg: 240,
        untracked_fg: 15,
        untracked_bg: 52,
        changed_fg: 15,
        changed_bg: 130,
        staged_fg: 15,
        staged_bg: 22,
        username_fg: 250,
        username_root_bg: 124,
    }
}

fn solarized_dark_theme() -> Theme {
    Theme {
        repo_clean_fg: 230,
        repo_clean_bg: 64,
        repo_dirty_bg: 160,
        ahead_fg: 230,
        ahead_bg: 61,
        behind_fg: 230,
        behind_bg: 61,
        untracked_fg: 230,
        untracked_bg: 125,
        changed_fg: 230,
        changed_bg: 136,
        staged_fg: 230,
        staged_bg: 37,
        username_fg: 230,
        username_root_bg: 160,
    }
}

fn gruvbox_theme() -> Theme {
    Theme {
        repo_clean_fg: 235,
        repo_clean_bg: 142,
        repo_dirty_bg: 208,
        ahead_fg: 223,
        ahead_bg: 239,
        behind_fg: 223,
        behind_bg: 239,
        untracked_fg: 235,
        untracked_bg: 175,
        changed_fg: 235,
        changed_bg: 214,
        staged_fg: 235,
        staged_bg: 108,
        username_fg: 223,
        username_root_bg: 167,
    }
}

fn low_contrast_theme() -> Theme {
    Theme {
        repo_clean_fg: 0,
        repo_clean_bg: 7,
        repo_dirty_bg: 8,
        ahead_fg: 7,
        ahead_bg: 240,
        behind_fg: 7,
        behind_bg: 240,
        untracked_fg: 15,
        untracked_bg: 242,
        changed_fg: 15,
        changed_bg: 244,
        staged_fg: 15,
        staged_bg: 246,
        username_fg: 7,
        username_root_bg: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(get_theme("does-not-exist"), get_theme("default"));
        assert_ne!(get_theme("gruvbox"), get_theme("default"));
    }

    #[test]
    fn test_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert("repo-dirty".to_string(), ThemeColors { fg: None, bg: Some(1) });
        overrides.insert("username-root".to_string(), ThemeColors { fg: Some(3), bg: Some(9) });
        overrides.insert("bogus".to_string(), ThemeColors { fg: Some(3), bg: Some(3) });

        let theme = get_theme("default").with_overrides(&overrides);
        assert_eq!(theme.repo_dirty_bg, 1);
        assert_eq!(theme.username_root_bg, 9);
        assert_eq!(theme.username_fg, 250);
    }

    #[test]
    fn test_overrides_only_touch_rendered_slots() {
        // A dirty branch keeps the clean foreground, and the badge only
        // exists on the root background
        let mut overrides = HashMap::new();
        overrides.insert("repo-dirty".to_string(), ThemeColors { fg: Some(3), bg: None });
        overrides.insert("username".to_string(), ThemeColors { fg: Some(5), bg: Some(4) });

        let theme = get_theme("default").with_overrides(&overrides);
        let expected = Theme {
            username_fg: 5,
            ..get_theme("default")
        };
        assert_eq!(theme, expected);
    }
}
