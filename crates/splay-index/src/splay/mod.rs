//! Rotations and the bottom-up splay.
//!
//! All functions take the arena and node indices, and return the root of
//! the tree after the operation. The root passed in is the root of the tree
//! the node currently hangs from; it may be a detached subtree (its root has
//! no parent), which is how deletion splays inside the left subtree.

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

// ── single rotations ──────────────────────────────────────────────────────

/// Rotate `x` down to the right, promoting its left child `y`.
///
/// ```text
///       x           y
///      / \         / \
///     y   c  →    a   x
///    / \             / \
///   a   b           b   c
/// ```
///
/// No-op when `x` has no left child.
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_l(arena, x) else {
        return root;
    };
    let b = get_r(arena, y);
    set_l(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }
    let p = get_p(arena, x);
    set_p(arena, y, p);
    let root = replace_child(arena, root, p, x, y);
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Rotate `x` down to the left, promoting its right child `y`.
///
/// Mirror image of [`rotate_right`]. No-op when `x` has no right child.
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_r(arena, x) else {
        return root;
    };
    let b = get_l(arena, y);
    set_r(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }
    let p = get_p(arena, x);
    set_p(arena, y, p);
    let root = replace_child(arena, root, p, x, y);
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

// ── splay ─────────────────────────────────────────────────────────────────

/// Lift `x` to the root with zig / zig-zig / zig-zag steps.
///
/// Returns the new root, which is always `Some(x)`.
pub fn splay<N: Node>(arena: &mut [N], mut root: Option<u32>, x: u32) -> Option<u32> {
    while let Some(p) = get_p(arena, x) {
        let x_left = get_l(arena, p) == Some(x);
        root = match get_p(arena, p) {
            // zig
            None if x_left => rotate_right(arena, root, p),
            None => rotate_left(arena, root, p),
            Some(g) => {
                let p_left = get_l(arena, g) == Some(p);
                match (p_left, x_left) {
                    // zig-zig
                    (true, true) => {
                        let root = rotate_right(arena, root, g);
                        rotate_right(arena, root, p)
                    }
                    (false, false) => {
                        let root = rotate_left(arena, root, g);
                        rotate_left(arena, root, p)
                    }
                    // zig-zag
                    (true, false) => {
                        let root = rotate_left(arena, root, p);
                        rotate_right(arena, root, g)
                    }
                    (false, true) => {
                        let root = rotate_right(arena, root, p);
                        rotate_left(arena, root, g)
                    }
                }
            }
        };
    }
    root
}
