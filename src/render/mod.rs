//! Turns an assembled segment sequence into prompt text.
//!
//! Width truncation runs first and only ever drops segments; painting then
//! emits 256-color SGR codes wrapped in the shell's non-printing markers so
//! line editing keeps an accurate cursor column.

use crate::segments::{Segment, Shell, PRIORITY_MAX};
use crate::themes::SymbolSet;
use log::debug;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub struct Renderer {
    pub shell: Shell,
    pub symbols: SymbolSet,
    pub max_width: Option<usize>,
}

impl Renderer {
    pub fn new(shell: Shell, symbols: SymbolSet) -> Self {
        Self {
            shell,
            symbols,
            max_width: None,
        }
    }

    pub fn with_max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width.filter(|w| *w > 0);
        self
    }

    /// Columns a segment occupies once painted, separator included
    pub fn segment_width(&self, segment: &Segment) -> usize {
        if !segment.is_visible() {
            return 0;
        }
        segment.content.width() + 2 + self.symbols.separator.width()
    }

    pub fn total_width(&self, segments: &[Segment]) -> usize {
        segments.iter().map(|s| self.segment_width(s)).sum()
    }

    /// Drop lowest-priority segments until the prompt fits. Ties go to the
    /// segment furthest right. Segments at [`PRIORITY_MAX`] are never dropped.
    pub fn truncate(&self, mut segments: Vec<Segment>) -> Vec<Segment> {
        let Some(max_width) = self.max_width else {
            return segments;
        };

        while self.total_width(&segments) > max_width {
            let victim = segments
                .iter()
                .enumerate()
                .filter(|(_, s)| s.priority != PRIORITY_MAX && s.is_visible())
                .min_by(|(ia, a), (ib, b)| a.priority.cmp(&b.priority).then(ib.cmp(ia)))
                .map(|(index, _)| index);

            match victim {
                Some(index) => {
                    let dropped = segments.remove(index);
                    debug!(target: "render", "dropped {} (priority {})", dropped.name, dropped.priority);
                }
                None => break,
            }
        }

        segments
    }

    /// Wrap non-printing bytes so the shell does not count them as columns
    fn invisible(&self, code: &str) -> String {
        match self.shell {
            Shell::Bash => format!("\\[{}\\]", code),
            Shell::Zsh => format!("%{{{}%}}", code),
            Shell::Other => code.to_string(),
        }
    }

    fn colors(&self, fg: Option<u8>, bg: Option<u8>) -> String {
        let mut code = String::new();
        match fg {
            Some(fg) => {
                let _ = write!(code, "\x1b[38;5;{}m", fg);
            }
            None => code.push_str("\x1b[39m"),
        }
        match bg {
            Some(bg) => {
                let _ = write!(code, "\x1b[48;5;{}m", bg);
            }
            None => code.push_str("\x1b[49m"),
        }
        self.invisible(&code)
    }

    fn reset(&self) -> String {
        self.invisible("\x1b[0m")
    }

    pub fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();

        for (index, segment) in segments.iter().enumerate() {
            // Control directives ride along raw, outside the separator chain
            if !segment.is_visible() {
                out.push_str(&segment.content);
                continue;
            }

            out.push_str(&self.colors(Some(segment.foreground), Some(segment.background)));
            out.push(' ');
            out.push_str(&segment.content);
            out.push(' ');

            let next_bg = segments[index + 1..]
                .iter()
                .find(|next| next.is_visible())
                .map(|next| next.background);
            if next_bg == Some(segment.background) {
                out.push_str(&self.colors(Some(segment.foreground), next_bg));
                out.push_str(self.symbols.separator_thin);
            } else {
                out.push_str(&self.colors(Some(segment.background), next_bg));
                out.push_str(self.symbols.separator);
            }
        }

        out.push_str(&self.reset());
        out.push(' ');
        out
    }
}
