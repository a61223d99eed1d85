use std::fmt;

use crate::collect::{sort_by_recency, Collected, Iter};
use crate::error::InvariantError;
use crate::node::{key_of, ChatNode};
use crate::print::print_tree;
use crate::splay::splay;
use crate::types::Side;
use crate::util::{attach, find, first, get_l, get_p, get_r, last, search, set_p, slot_index, swap_remove, Search};

/// Self-adjusting index of chat sessions keyed by session id.
///
/// Every insert, access and delete splays the touched node to the root, so
/// recently used sessions stay cheap to reach. Nodes live in a dense arena
/// owned by the tree; the number of live nodes is the arena length.
/// Links are `u32` arena indices, which caps a tree at `u32::MAX + 1`
/// sessions.
#[derive(Clone, Debug, Default)]
pub struct SessionTree {
    root: Option<u32>,
    arena: Vec<ChatNode>,
}

impl SessionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            arena: Vec::with_capacity(capacity),
        }
    }

    /// Number of sessions in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn root(&self) -> Option<&ChatNode> {
        self.root.map(|i| &self.arena[i as usize])
    }

    /// Looks a session up without changing the tree's shape.
    pub fn find(&self, key: &str) -> Option<&ChatNode> {
        find(&self.arena, self.root, key, key_of).map(|i| &self.arena[i as usize])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Inserts a session, or overwrites the title and timestamp of the
    /// existing one with the same key. Either way the node ends up at the
    /// root.
    pub fn insert(&mut self, key: impl Into<String>, title: impl Into<String>, timestamp: i64) -> &ChatNode {
        let key = key.into();
        let idx = match search(&self.arena, self.root, key.as_str(), key_of) {
            Search::Found(idx) => {
                let node = &mut self.arena[idx as usize];
                node.title = title.into();
                node.timestamp = timestamp;
                idx
            }
            Search::Vacant { parent, side } => {
                let idx = slot_index(self.arena.len());
                self.arena.push(ChatNode::new(key, title.into(), timestamp));
                match parent {
                    Some(p) => attach(&mut self.arena, p, idx, side),
                    None => self.root = Some(idx),
                }
                idx
            }
        };
        self.root = splay(&mut self.arena, self.root, idx);
        &self.arena[idx as usize]
    }

    /// Finds a session and splays it to the root. Title and timestamp are
    /// left untouched.
    pub fn access(&mut self, key: &str) -> Option<&ChatNode> {
        let idx = find(&self.arena, self.root, key, key_of)?;
        self.root = splay(&mut self.arena, self.root, idx);
        Some(&self.arena[idx as usize])
    }

    /// Removes a session and hands it back.
    ///
    /// The target is splayed to the root first. When it has both children,
    /// the maximum of its left subtree is splayed to the top of that
    /// subtree, which leaves it without a right child, and the right subtree
    /// is hung there.
    pub fn remove(&mut self, key: &str) -> Option<ChatNode> {
        let idx = find(&self.arena, self.root, key, key_of)?;
        self.root = splay(&mut self.arena, self.root, idx);

        let l = get_l(&self.arena, idx);
        let r = get_r(&self.arena, idx);
        let root = match (l, r) {
            (None, None) => None,
            (None, Some(child)) | (Some(child), None) => {
                set_p(&mut self.arena, child, None);
                Some(child)
            }
            (Some(l), Some(r)) => {
                set_p(&mut self.arena, l, None);
                set_p(&mut self.arena, r, None);
                let max = last(&self.arena, Some(l)).unwrap_or(l);
                splay(&mut self.arena, Some(l), max);
                attach(&mut self.arena, max, r, Side::Right);
                Some(max)
            }
        };

        let node = &mut self.arena[idx as usize];
        node.l = None;
        node.r = None;
        let (removed, root) = swap_remove(&mut self.arena, root, idx);
        self.root = root;
        Some(removed)
    }

    /// Removes a session; `false` when the key is absent.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Drops every session. No-op on an empty tree.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&ChatNode> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize])
    }

    /// Largest key.
    pub fn last(&self) -> Option<&ChatNode> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize])
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.root)
    }

    /// All sessions in ascending key order.
    pub fn in_order(&self) -> Vec<&ChatNode> {
        self.iter().collect()
    }

    /// At most `limit` sessions in ascending key order; the rest are
    /// silently left out and `truncated` is set.
    pub fn collect_up_to(&self, limit: usize) -> Collected<'_> {
        let nodes: Vec<&ChatNode> = self.iter().take(limit).collect();
        Collected {
            truncated: self.len() > nodes.len(),
            nodes,
        }
    }

    /// All sessions, newest first; equal timestamps stay in key order.
    pub fn by_recency(&self) -> Vec<&ChatNode> {
        let mut nodes = self.in_order();
        sort_by_recency(&mut nodes);
        nodes
    }

    /// Verifies parent links, key order and size.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            if self.arena.is_empty() {
                return Ok(());
            }
            return Err(InvariantError::SizeMismatch {
                reachable: 0,
                size: self.arena.len(),
            });
        };
        if get_p(&self.arena, root).is_some() {
            return Err(InvariantError::RootHasParent {
                key: self.arena[root as usize].key.clone(),
            });
        }

        let mut reachable = 0;
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            reachable += 1;
            if reachable > self.arena.len() {
                break;
            }
            for child in [get_l(&self.arena, idx), get_r(&self.arena, idx)].into_iter().flatten() {
                if get_p(&self.arena, child) != Some(idx) {
                    return Err(InvariantError::ParentMismatch {
                        key: self.arena[child as usize].key.clone(),
                    });
                }
                stack.push(child);
            }
        }
        if reachable != self.arena.len() {
            return Err(InvariantError::SizeMismatch {
                reachable,
                size: self.arena.len(),
            });
        }

        let mut prev: Option<&ChatNode> = None;
        for node in self.iter() {
            if let Some(prev) = prev {
                if prev.key >= node.key {
                    return Err(InvariantError::OutOfOrder {
                        prev: prev.key.clone(),
                        next: node.key.clone(),
                    });
                }
            }
            prev = Some(node);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SessionTree {
    type Item = &'a ChatNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SessionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionTree")?;
        print_tree(f, &self.arena, self.root, "", |n: &ChatNode| {
            format!("{} {:?} @{}", n.key, n.title, n.timestamp)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_dumps_shape() {
        let mut tree = SessionTree::new();
        tree.insert("b", "B", 2);
        tree.insert("a", "A", 1);
        tree.insert("c", "C", 3);
        // c is the root holding b, which holds a
        assert_eq!(
            tree.to_string(),
            "SessionTree\n└─ c \"C\" @3\n  ← b \"B\" @2\n    ← a \"A\" @1"
        );
        assert_eq!(SessionTree::new().to_string(), "SessionTree ∅");
    }

    #[test]
    fn check_invariants_detects_broken_parent_link() {
        let mut tree = SessionTree::new();
        tree.insert("a", "", 0);
        tree.insert("b", "", 0);
        assert_eq!(tree.check_invariants(), Ok(()));
        let child = tree.arena.iter().position(|n| n.p.is_some()).unwrap();
        tree.arena[child].p = None;
        assert!(matches!(
            tree.check_invariants(),
            Err(InvariantError::ParentMismatch { .. })
        ));
    }

    #[test]
    fn check_invariants_detects_order_violation() {
        let mut tree = SessionTree::new();
        tree.insert("a", "", 0);
        tree.insert("b", "", 0);
        let root = tree.root.unwrap() as usize;
        tree.arena[root].key = "0".to_string();
        assert!(matches!(
            tree.check_invariants(),
            Err(InvariantError::OutOfOrder { .. })
        ));
    }
}
