pub mod aggregate;
pub mod context;
pub mod termtitle;
pub mod user;
pub mod vcs;

pub use aggregate::*;
pub use context::*;
pub use termtitle::*;
pub use user::*;
pub use vcs::*;

/// Priority carried by segments that must survive every truncation pass.
pub const PRIORITY_MAX: u32 = u32::MAX;

/// A single colored unit of prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Stable identifier used for debugging and ordering, not lookup
    pub name: String,
    /// Literal text, possibly carrying a shell-specific control template
    pub content: String,
    /// 256-color palette index
    pub foreground: u8,
    /// 256-color palette index
    pub background: u8,
    pub priority: u32,
    /// Control directives (terminal title) render without visible borders
    pub hide_separators: bool,
}

impl Segment {
    pub fn new(name: impl Into<String>, content: impl Into<String>, foreground: u8, background: u8) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            foreground,
            background,
            priority: 0,
            hide_separators: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hide_separators
    }
}

/// Trait for every independent source of prompt segments
pub trait SegmentSource {
    /// Get source name for ordering and debugging
    fn name(&self) -> &str;

    /// Build this source's segments. Never fails: a source that has nothing
    /// to say returns an empty vector.
    fn build(&self, ctx: &RenderContext) -> Vec<Segment>;
}
