use splay_index::{ChatNode, SessionTree};

fn keys<'a>(nodes: impl IntoIterator<Item = &'a ChatNode>) -> Vec<&'a str> {
    nodes.into_iter().map(|n| n.key()).collect()
}

fn root_key(tree: &SessionTree) -> Option<&str> {
    tree.root().map(|n| n.key())
}

fn sample() -> SessionTree {
    let mut tree = SessionTree::new();
    tree.insert("s1", "Trip Planning", 100);
    tree.insert("s2", "Recipe Ideas", 200);
    tree.insert("s3", "Code Review", 150);
    tree
}

#[test]
fn session_listing_scenario() {
    let mut tree = sample();
    assert_eq!(tree.len(), 3);
    assert_eq!(keys(tree.by_recency()), ["s2", "s3", "s1"]);

    let node = tree.access("s1").expect("s1 exists");
    assert_eq!(node.title(), "Trip Planning");
    assert_eq!(node.timestamp(), 100);
    assert_eq!(root_key(&tree), Some("s1"));
    assert_eq!(keys(tree.by_recency()), ["s2", "s3", "s1"]);

    assert!(tree.delete("s2"));
    assert_eq!(keys(tree.by_recency()), ["s3", "s1"]);
    assert_eq!(tree.len(), 2);
    tree.check_invariants().unwrap();
}

#[test]
fn insert_into_empty_tree_becomes_root() {
    let mut tree = SessionTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);

    let node = tree.insert("only", "Only", 1);
    assert_eq!(node.key(), "only");
    assert_eq!(tree.len(), 1);
    assert_eq!(root_key(&tree), Some("only"));
    tree.check_invariants().unwrap();
}

#[test]
fn insert_splays_new_and_updated_nodes() {
    let mut tree = SessionTree::new();
    for (i, key) in ["m", "c", "x", "a", "e", "q", "z"].iter().enumerate() {
        tree.insert(*key, "", i as i64);
        assert_eq!(root_key(&tree), Some(*key));
        tree.check_invariants().unwrap();
    }
    tree.insert("e", "again", 99);
    assert_eq!(root_key(&tree), Some("e"));
    assert_eq!(tree.len(), 7);
}

#[test]
fn insert_existing_key_overwrites_in_place() {
    let mut tree = SessionTree::new();
    tree.insert("a", "X", 1);
    tree.insert("b", "other", 5);
    let node = tree.insert("a", "Y", 2);
    assert_eq!(node.title(), "Y");
    assert_eq!(node.timestamp(), 2);
    assert_eq!(tree.len(), 2);

    // last write wins even when the timestamp goes backwards
    tree.insert("a", "Z", 0);
    let node = tree.find("a").unwrap();
    assert_eq!((node.title(), node.timestamp()), ("Z", 0));
    assert_eq!(tree.len(), 2);
}

#[test]
fn find_does_not_restructure() {
    let mut tree = sample();
    assert_eq!(root_key(&tree), Some("s3"));
    assert_eq!(tree.find("s1").map(|n| n.title()), Some("Trip Planning"));
    assert_eq!(root_key(&tree), Some("s3"));
    assert!(tree.find("nope").is_none());
    assert!(!tree.contains("nope"));
    assert!(tree.contains("s2"));
}

#[test]
fn access_missing_key_leaves_tree_alone() {
    let mut tree = sample();
    let before = tree.to_string();
    assert!(tree.access("s9").is_none());
    assert_eq!(tree.to_string(), before);
}

#[test]
fn delete_absent_key_is_noop() {
    let mut tree = sample();
    assert!(!tree.delete("s9"));
    assert_eq!(tree.len(), 3);
    let mut empty = SessionTree::new();
    assert!(!empty.delete("s1"));
    assert_eq!(empty.len(), 0);
}

#[test]
fn delete_leaf_only_and_last_node() {
    let mut tree = SessionTree::new();
    tree.insert("a", "", 1);
    assert!(tree.delete("a"));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    tree.check_invariants().unwrap();
}

#[test]
fn delete_with_only_right_child() {
    let mut tree = SessionTree::new();
    tree.insert("b", "", 1);
    tree.insert("a", "", 1); // a is root, b on its right
    assert!(tree.delete("a"));
    assert_eq!(root_key(&tree), Some("b"));
    assert_eq!(tree.root().unwrap().p, None);
    tree.check_invariants().unwrap();
}

#[test]
fn delete_with_only_left_child() {
    let mut tree = SessionTree::new();
    tree.insert("a", "", 1);
    tree.insert("b", "", 1); // b is root, a on its left
    assert!(tree.delete("b"));
    assert_eq!(root_key(&tree), Some("a"));
    tree.check_invariants().unwrap();
}

#[test]
fn delete_with_two_children_promotes_predecessor() {
    let mut tree = SessionTree::new();
    for key in ["d", "b", "f", "a", "c", "e", "g"] {
        tree.insert(key, "", 0);
    }
    // splaying "d" leaves both subtrees populated
    tree.access("d");
    let root = tree.root().unwrap();
    assert!(root.l.is_some() && root.r.is_some());

    assert!(tree.delete("d"));
    assert_eq!(root_key(&tree), Some("c"));
    assert_eq!(keys(&tree), ["a", "b", "c", "e", "f", "g"]);
    assert!(tree.find("d").is_none());
    tree.check_invariants().unwrap();
}

#[test]
fn delete_everything_in_mixed_order() {
    let mut tree = SessionTree::new();
    let all = ["k", "c", "t", "a", "f", "p", "z", "b", "h", "r"];
    for (i, key) in all.iter().enumerate() {
        tree.insert(*key, "", i as i64);
    }
    for (n, key) in ["f", "a", "z", "k", "b", "r", "c", "t", "h", "p"].iter().enumerate() {
        assert!(tree.delete(key), "delete {key}");
        assert!(!tree.contains(key));
        assert_eq!(tree.len(), all.len() - n - 1);
        tree.check_invariants().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn clear_releases_everything() {
    let mut tree = sample();
    tree.clear();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root(), None);
    assert!(tree.in_order().is_empty());
    tree.clear();
    assert!(tree.is_empty());

    tree.insert("again", "", 1);
    assert_eq!(tree.len(), 1);
    tree.check_invariants().unwrap();
}

#[test]
fn in_order_is_ascending_byte_order() {
    let mut tree = SessionTree::new();
    for key in ["b", "B", "a", "ab", "A", "10", "9"] {
        tree.insert(key, "", 0);
    }
    assert_eq!(keys(tree.in_order()), ["10", "9", "A", "B", "a", "ab", "b"]);
    assert_eq!(tree.first().map(|n| n.key()), Some("10"));
    assert_eq!(tree.last().map(|n| n.key()), Some("b"));
    assert_eq!(tree.iter().len(), 7);
}

#[test]
fn recency_ties_keep_key_order() {
    let mut tree = SessionTree::new();
    tree.insert("c", "", 5);
    tree.insert("a", "", 5);
    tree.insert("d", "", 9);
    tree.insert("b", "", 5);
    assert_eq!(keys(tree.by_recency()), ["d", "a", "b", "c"]);
}

#[test]
fn collect_up_to_truncates_silently() {
    let mut tree = SessionTree::new();
    for key in ["e", "d", "c", "b", "a"] {
        tree.insert(key, "", 0);
    }
    let some = tree.collect_up_to(3);
    assert!(some.truncated);
    assert_eq!(keys(some.nodes), ["a", "b", "c"]);

    let all = tree.collect_up_to(5);
    assert!(!all.truncated);
    assert_eq!(all.nodes.len(), 5);
}

#[test]
fn deep_chain_is_handled_without_recursion() {
    // ascending inserts splay into a left-leaning chain
    let mut tree = SessionTree::new();
    for i in 0..50_000 {
        tree.insert(format!("{i:08}"), "", i);
    }
    assert_eq!(tree.in_order().len(), 50_000);
    tree.check_invariants().unwrap();
    assert!(tree.access("00000000").is_some());
    assert_eq!(root_key(&tree), Some("00000000"));
    tree.clear();
    assert!(tree.is_empty());
}
