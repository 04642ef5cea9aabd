/// Glyphs used for repository state and segment separators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    pub branch: &'static str,
    pub detached: &'static str,
    pub ahead: &'static str,
    pub behind: &'static str,
    pub untracked: &'static str,
    pub changed: &'static str,
    pub staged: &'static str,
    pub separator: &'static str,
    pub separator_thin: &'static str,
}

impl Default for SymbolSet {
    fn default() -> Self {
        compatible_symbols()
    }
}

/// Pick the glyph table for a symbol mode: `compatible`, `patched` or `flat`.
pub fn get_symbols(mode: &str) -> SymbolSet {
    match mode {
        "patched" => patched_symbols(),
        "flat" => flat_symbols(),
        _ => compatible_symbols(),
    }
}

fn compatible_symbols() -> SymbolSet {
    SymbolSet {
        branch: "⎇",
        detached: "⚓",
        ahead: "↑",
        behind: "↓",
        untracked: "?",
        changed: "✎",
        staged: "●",
        separator: "▶",
        separator_thin: "❯",
    }
}

// Needs a powerline-patched font
fn patched_symbols() -> SymbolSet {
    SymbolSet {
        branch: "\u{e0a0}",
        detached: "\u{2693}",
        ahead: "\u{2b06}",
        behind: "\u{2b07}",
        untracked: "+",
        changed: "\u{270e}",
        staged: "\u{2714}",
        separator: "\u{e0b0}",
        separator_thin: "\u{e0b1}",
    }
}

fn flat_symbols() -> SymbolSet {
    SymbolSet {
        separator: "",
        separator_thin: "",
        ..compatible_symbols()
    }
}
