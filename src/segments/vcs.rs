use crate::providers::{Head, Status, StatusSnapshot, DETACHED_ID_LEN};
use crate::segments::{RenderContext, Segment, SegmentSource};
use crate::themes::{SymbolSet, Theme};

/// Dirty-state categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyCategory {
    Ahead,
    Behind,
    Untracked,
    Changed,
    Staged,
}

impl DirtyCategory {
    pub const ALL: [DirtyCategory; 5] = [
        DirtyCategory::Ahead,
        DirtyCategory::Behind,
        DirtyCategory::Untracked,
        DirtyCategory::Changed,
        DirtyCategory::Staged,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DirtyCategory::Ahead => "ahead",
            DirtyCategory::Behind => "behind",
            DirtyCategory::Untracked => "untracked",
            DirtyCategory::Changed => "changed",
            DirtyCategory::Staged => "staged",
        }
    }

    pub fn count(&self, snapshot: &StatusSnapshot) -> u32 {
        match self {
            DirtyCategory::Ahead => snapshot.ahead,
            DirtyCategory::Behind => snapshot.behind,
            DirtyCategory::Untracked => snapshot.untracked,
            DirtyCategory::Changed => snapshot.changed,
            DirtyCategory::Staged => snapshot.staged,
        }
    }

    pub fn glyph<'a>(&self, symbols: &'a SymbolSet) -> &'a str {
        match self {
            DirtyCategory::Ahead => symbols.ahead,
            DirtyCategory::Behind => symbols.behind,
            DirtyCategory::Untracked => symbols.untracked,
            DirtyCategory::Changed => symbols.changed,
            DirtyCategory::Staged => symbols.staged,
        }
    }

    /// (fg, bg)
    pub fn colors(&self, theme: &Theme) -> (u8, u8) {
        match self {
            DirtyCategory::Ahead => (theme.ahead_fg, theme.ahead_bg),
            DirtyCategory::Behind => (theme.behind_fg, theme.behind_bg),
            DirtyCategory::Untracked => (theme.untracked_fg, theme.untracked_bg),
            DirtyCategory::Changed => (theme.changed_fg, theme.changed_bg),
            DirtyCategory::Staged => (theme.staged_fg, theme.staged_bg),
        }
    }
}

/// Build the segment group for one VCS backend.
///
/// The branch segment always leads. One segment follows for every category
/// with a nonzero count, in [`DirtyCategory::ALL`] order. When any follows,
/// the branch segment's background bleeds to the theme's dirty color.
pub fn build_vcs_segments(backend: &str, status: &Status, ctx: &RenderContext) -> Vec<Segment> {
    let snapshot = match status {
        Status::Snapshot(snapshot) => snapshot,
        Status::Absent => return Vec::new(),
    };

    let theme = &ctx.theme;
    let symbols = &ctx.symbols;

    let head = match &snapshot.head {
        Head::Branch(name) => format!("{} {}", symbols.branch, ctx.shell.escape_literal(name)),
        Head::Detached { commit_id } => {
            let short: String = commit_id.chars().take(DETACHED_ID_LEN).collect();
            format!("{} {}", symbols.detached, short)
        }
    };

    let mut segments = vec![Segment::new(
        format!("{}-branch", backend),
        head,
        theme.repo_clean_fg,
        theme.repo_clean_bg,
    )];

    for category in DirtyCategory::ALL {
        let count = category.count(snapshot);
        if count == 0 {
            continue;
        }
        let (fg, bg) = category.colors(theme);
        segments.push(Segment::new(
            format!("{}-{}", backend, category.label()),
            format!("{}{}", count, category.glyph(symbols)),
            fg,
            bg,
        ));
    }

    if segments.len() > 1 {
        segments[0].background = theme.repo_dirty_bg;
    }

    segments
}

/// A VCS backend's resolved status, ready to turn into segments
#[derive(Debug, Clone)]
pub struct VcsSegment {
    pub backend: &'static str,
    pub status: Status,
}

impl VcsSegment {
    pub fn new(backend: &'static str, status: Status) -> Self {
        Self { backend, status }
    }
}

impl SegmentSource for VcsSegment {
    fn name(&self) -> &str {
        self.backend
    }

    fn build(&self, ctx: &RenderContext) -> Vec<Segment> {
        build_vcs_segments(self.backend, &self.status, ctx)
    }
}
