//! Self-adjusting index of chat-session metadata.
//!
//! A splay tree keyed by session id: every insert, access and delete lifts
//! the touched session to the root, so a workload that keeps coming back to
//! the same few sessions finds them near the top. Operations are amortised
//! O(log n).
//!
//! Nodes are stored in a `Vec` arena owned by [`SessionTree`]; the parent,
//! left and right links are `Option<u32>` indices into it. The tree is the
//! only owner of its nodes and the parent link is only read to re-link
//! during rotations and deletion.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`Side`] |
//! [`splay`] | `rotate_left`, `rotate_right`, `splay` |
//! [`util`] | search, attach, first / last / next, arena `swap_remove` |
//! [`tree`] | [`SessionTree`] container |
//! [`collect`] | in-order [`Iter`], recency sort |
//!
//! # Example
//!
//! ```
//! use splay_index::SessionTree;
//!
//! let mut tree = SessionTree::new();
//! tree.insert("s1", "Trip Planning", 100);
//! tree.insert("s2", "Recipe Ideas", 200);
//! tree.insert("s3", "Code Review", 150);
//!
//! let recent: Vec<&str> = tree.by_recency().iter().map(|n| n.key()).collect();
//! assert_eq!(recent, ["s2", "s3", "s1"]);
//!
//! tree.access("s1");
//! assert_eq!(tree.root().map(|n| n.key()), Some("s1"));
//! ```

pub mod collect;
pub mod error;
pub mod node;
pub mod print;
pub mod splay;
pub mod tree;
pub mod types;
pub mod util;

pub use collect::{sort_by_recency, Collected, Iter};
pub use error::InvariantError;
pub use node::ChatNode;
pub use splay::{rotate_left, rotate_right, splay};
pub use tree::SessionTree;
pub use types::{Node, Side};
