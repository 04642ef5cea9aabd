use crate::themes::{SymbolSet, Theme};
use std::fmt;

/// Shell flavor the prompt is rendered for.
///
/// Anything that is not bash or zsh renders as `Other`, which only ever uses
/// literal, statically resolved text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shell {
    Bash,
    Zsh,
    #[default]
    Other,
}

impl Shell {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bash" => Shell::Bash,
            "zsh" => Shell::Zsh,
            _ => Shell::Other,
        }
    }

    /// Escape literal text so the shell's own prompt expansion leaves it alone.
    ///
    /// Bash decodes `\$` to `#` for root, so a `$` in the text renders as `#`
    /// in a root prompt. It is still never expanded.
    pub fn escape_literal(&self, text: &str) -> String {
        match self {
            Shell::Bash => backslash_expansions(text),
            // prompt_subst expansions first, then `%` sequences
            Shell::Zsh => backslash_expansions(text).replace('%', "%%"),
            Shell::Other => text.to_string(),
        }
    }
}

fn backslash_expansions(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Other => "other",
        };
        f.write_str(name)
    }
}

/// Read-only environment handed to every segment factory.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub theme: Theme,
    pub symbols: SymbolSet,
    pub shell: Shell,
    pub username: String,
    pub hostname: String,
    pub cwd: String,
    pub is_admin: bool,
    /// Value of `TERM`
    pub term: String,
}

impl RenderContext {
    pub fn new(theme: Theme, symbols: SymbolSet, shell: Shell) -> Self {
        Self {
            theme,
            symbols,
            shell,
            username: String::new(),
            hostname: String::new(),
            cwd: String::new(),
            is_admin: false,
            term: String::new(),
        }
    }
}
