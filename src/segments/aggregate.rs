use crate::segments::{RenderContext, Segment, SegmentSource};
use log::debug;
use std::collections::HashMap;

/// Segments produced by one source, in the source's own order
#[derive(Debug, Clone)]
pub struct SourceOutput {
    pub source: String,
    pub segments: Vec<Segment>,
}

/// Per-source truncation ranks
#[derive(Debug, Clone, Default)]
pub struct Priorities {
    ranks: HashMap<String, u32>,
}

impl Priorities {
    /// Earlier entries rank higher. Unlisted sources rank 0.
    pub fn from_order<S: AsRef<str>>(order: &[S]) -> Self {
        let len = order.len() as u32;
        let mut ranks = HashMap::new();
        for (index, name) in order.iter().enumerate() {
            ranks.entry(name.as_ref().to_string()).or_insert(len - index as u32);
        }
        Self { ranks }
    }

    pub fn rank(&self, source: &str) -> u32 {
        self.ranks.get(source).copied().unwrap_or(0)
    }
}

/// Run each source's factory in order.
pub fn collect(sources: &[Box<dyn SegmentSource>], ctx: &RenderContext) -> Vec<SourceOutput> {
    sources
        .iter()
        .map(|source| {
            let segments = source.build(ctx);
            debug!(target: "segments", "{}: {} segment(s)", source.name(), segments.len());
            SourceOutput {
                source: source.name().to_string(),
                segments,
            }
        })
        .collect()
}

/// Concatenate source outputs in the given order, raising every segment by its
/// source's configured rank. Order within a source is kept verbatim.
pub fn assemble(outputs: Vec<SourceOutput>, priorities: &Priorities) -> Vec<Segment> {
    let mut assembled = Vec::with_capacity(outputs.iter().map(|o| o.segments.len()).sum());
    for output in outputs {
        let rank = priorities.rank(&output.source);
        assembled.extend(output.segments.into_iter().map(|mut segment| {
            segment.priority = segment.priority.saturating_add(rank);
            segment
        }));
    }
    assembled
}
