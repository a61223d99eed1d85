//! In-order collection and recency ordering.

use std::iter::FusedIterator;

use crate::node::ChatNode;
use crate::util::{first, next};

/// In-order (ascending key) iterator over a [`SessionTree`](crate::SessionTree).
///
/// Walks leftmost-then-successor through parent links, so it needs no
/// stack and never recurses.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    arena: &'a [ChatNode],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(arena: &'a [ChatNode], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: first(arena, root),
            remaining: arena.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ChatNode;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = next(self.arena, idx);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&self.arena[idx as usize])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Result of a bounded in-order collection.
#[derive(Clone, Debug)]
pub struct Collected<'a> {
    pub nodes: Vec<&'a ChatNode>,
    /// Set when the tree held more nodes than the limit allowed.
    pub truncated: bool,
}

/// Stable sort, newest first. Equal timestamps keep their incoming
/// (ascending key) order.
pub fn sort_by_recency(nodes: &mut [&ChatNode]) {
    nodes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
