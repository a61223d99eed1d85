//! Link accessors, BST search, traversal and arena bookkeeping shared by the
//! splay routines and [`SessionTree`](crate::SessionTree).
//!
//! Key-based helpers take a `key_of` accessor so they stay independent of
//! the node layout.

use std::cmp::Ordering;

use crate::types::{Node, Side};

/// Arena index of the slot at position `pos`.
///
/// Links are `u32`, so an arena holds at most `u32::MAX + 1` nodes; past that
/// the cast would wrap and alias an existing node.
#[inline]
pub(crate) fn slot_index(pos: usize) -> u32 {
    debug_assert!(pos <= u32::MAX as usize, "arena position {pos} exceeds the u32 index space");
    pos as u32
}

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Point the slot of `p` that held `old` at `new`.
///
/// With no parent, `new` becomes the root and is returned.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    p: Option<u32>,
    old: u32,
    new: u32,
) -> Option<u32> {
    let Some(p) = p else {
        return Some(new);
    };
    if get_l(arena, p) == Some(old) {
        set_l(arena, p, Some(new));
    } else {
        set_r(arena, p, Some(new));
    }
    root
}

/// Leftmost node.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor, found through right subtrees and parent links.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Outcome of a BST descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// A node with the key exists.
    Found(u32),
    /// The key is absent; a new node belongs under `parent` on `side`
    /// (`parent` is `None` for an empty tree).
    Vacant { parent: Option<u32>, side: Side },
}

/// Descend from `root` looking for `key`, tracking the last visited node.
pub fn search<N, K, F>(arena: &[N], root: Option<u32>, key: &K, key_of: F) -> Search
where
    N: Node,
    K: Ord + ?Sized,
    F: Fn(&N) -> &K,
{
    let mut parent = None;
    let mut side = Side::Left;
    let mut curr = root;
    while let Some(i) = curr {
        parent = Some(i);
        match key.cmp(key_of(&arena[i as usize])) {
            Ordering::Equal => return Search::Found(i),
            Ordering::Less => {
                side = Side::Left;
                curr = get_l(arena, i);
            }
            Ordering::Greater => {
                side = Side::Right;
                curr = get_r(arena, i);
            }
        }
    }
    Search::Vacant { parent, side }
}

/// Finds a node by key without restructuring.
pub fn find<N, K, F>(arena: &[N], root: Option<u32>, key: &K, key_of: F) -> Option<u32>
where
    N: Node,
    K: Ord + ?Sized,
    F: Fn(&N) -> &K,
{
    match search(arena, root, key, key_of) {
        Search::Found(i) => Some(i),
        Search::Vacant { .. } => None,
    }
}

/// Hang the detached `node` under `parent` in the empty slot `side`.
pub fn attach<N: Node>(arena: &mut [N], parent: u32, node: u32, side: Side) {
    match side {
        Side::Left => set_l(arena, parent, Some(node)),
        Side::Right => set_r(arena, parent, Some(node)),
    }
    set_p(arena, node, Some(parent));
}

/// Take a fully unlinked node out of the arena.
///
/// The last arena node is moved into the vacated slot and its neighbours
/// are re-pointed at its new index, so the arena stays dense. Returns the
/// removed node and the (possibly renumbered) root.
pub fn swap_remove<N: Node>(arena: &mut Vec<N>, mut root: Option<u32>, idx: u32) -> (N, Option<u32>) {
    let moved = slot_index(arena.len() - 1);
    let removed = arena.swap_remove(idx as usize);
    if moved != idx {
        match get_p(arena, idx) {
            Some(p) => {
                if get_l(arena, p) == Some(moved) {
                    set_l(arena, p, Some(idx));
                } else {
                    set_r(arena, p, Some(idx));
                }
            }
            None => {
                if root == Some(moved) {
                    root = Some(idx);
                }
            }
        }
        if let Some(l) = get_l(arena, idx) {
            set_p(arena, l, Some(idx));
        }
        if let Some(r) = get_r(arena, idx) {
            set_p(arena, r, Some(idx));
        }
    }
    (removed, root)
}
