use crate::segments::{RenderContext, Segment, SegmentSource, Shell, PRIORITY_MAX};

pub const BASH_TITLE: &str = "\\[\\e]0;\\w\\a\\]";
pub const ZSH_TITLE: &str = "%{\x1b]0;%~\x07%}";

/// Sets the terminal window title to the working directory.
#[derive(Debug, Clone, Default)]
pub struct TermTitleSegment;

pub fn supports_title(term: &str) -> bool {
    term.contains("xterm") || term.contains("rxvt")
}

pub fn build_term_title(ctx: &RenderContext) -> Option<Segment> {
    if !supports_title(&ctx.term) {
        return None;
    }

    let title = match ctx.shell {
        Shell::Bash => BASH_TITLE.to_string(),
        Shell::Zsh => ZSH_TITLE.to_string(),
        Shell::Other => format!("\x1b]0;{}@{}: {}\x07", ctx.username, ctx.hostname, ctx.cwd),
    };

    Some(Segment {
        priority: PRIORITY_MAX,
        hide_separators: true,
        ..Segment::new("termtitle", title, 0, 0)
    })
}

impl SegmentSource for TermTitleSegment {
    fn name(&self) -> &str {
        "termtitle"
    }

    fn build(&self, ctx: &RenderContext) -> Vec<Segment> {
        build_term_title(ctx).into_iter().collect()
    }
}
