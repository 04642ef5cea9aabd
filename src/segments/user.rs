use crate::segments::{RenderContext, Segment, SegmentSource, Shell};

/// Badge shown only when the prompt runs with elevated privileges.
#[derive(Debug, Clone, Default)]
pub struct UserSegment;

pub fn build_user_badge(ctx: &RenderContext) -> Option<Segment> {
    if !ctx.is_admin {
        return None;
    }

    let content = match ctx.shell {
        Shell::Bash => "\\u".to_string(),
        Shell::Zsh => "%n".to_string(),
        Shell::Other => ctx.username.clone(),
    };

    Some(Segment::new(
        "user",
        content,
        ctx.theme.username_fg,
        ctx.theme.username_root_bg,
    ))
}

impl SegmentSource for UserSegment {
    fn name(&self) -> &str {
        "user"
    }

    fn build(&self, ctx: &RenderContext) -> Vec<Segment> {
        build_user_badge(ctx).into_iter().collect()
    }
}
