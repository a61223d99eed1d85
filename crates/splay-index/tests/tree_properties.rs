use std::collections::BTreeMap;

use proptest::prelude::*;
use splay_index::SessionTree;

#[derive(Clone, Debug)]
enum Op {
    Insert(String, i64),
    Access(String),
    Delete(String),
}

fn op() -> impl Strategy<Value = Op> {
    let key = "[a-f]{1,2}";
    prop_oneof![
        3 => (key, -5i64..1_000).prop_map(|(k, ts)| Op::Insert(k, ts)),
        1 => key.prop_map(Op::Access),
        2 => key.prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn operations_match_ordered_map(ops in prop::collection::vec(op(), 0..200)) {
        let mut tree = SessionTree::new();
        let mut model: BTreeMap<String, (String, i64)> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, ts) => {
                    let title = format!("t{ts}");
                    tree.insert(key.clone(), title.clone(), ts);
                    model.insert(key.clone(), (title, ts));
                    prop_assert_eq!(tree.root().map(|n| n.key()), Some(key.as_str()));
                }
                Op::Access(key) => {
                    let before = tree.find(&key).cloned();
                    let found = tree.access(&key).map(|n| (n.title.clone(), n.timestamp));
                    prop_assert_eq!(found.clone(), model.get(&key).cloned());
                    if found.is_some() {
                        prop_assert_eq!(tree.root().map(|n| n.key()), Some(key.as_str()));
                        let after = tree.root().unwrap();
                        let before = before.unwrap();
                        prop_assert_eq!(&after.title, &before.title);
                        prop_assert_eq!(after.timestamp, before.timestamp);
                    }
                }
                Op::Delete(key) => {
                    let len = tree.len();
                    let removed = tree.delete(&key);
                    prop_assert_eq!(removed, model.remove(&key).is_some());
                    prop_assert_eq!(tree.len(), if removed { len - 1 } else { len });
                    prop_assert!(tree.find(&key).is_none());
                }
            }

            prop_assert_eq!(tree.check_invariants(), Ok(()));
            prop_assert_eq!(tree.len(), model.len());
            let keys: Vec<&str> = tree.iter().map(|n| n.key()).collect();
            let expected: Vec<&str> = model.keys().map(String::as_str).collect();
            prop_assert_eq!(keys, expected);
        }
    }

    #[test]
    fn size_is_inserts_minus_deletes(
        keys in prop::collection::btree_set("[a-z]{1,6}", 1..60),
        drop_every in 1usize..5,
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut tree = SessionTree::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key.as_str(), "", i as i64);
        }
        let mut deleted = 0;
        for key in keys.iter().step_by(drop_every) {
            prop_assert!(tree.delete(key));
            deleted += 1;
        }
        prop_assert_eq!(tree.len(), keys.len() - deleted);
        prop_assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn recency_listing_is_stable_sort_of_key_order(
        entries in prop::collection::btree_map("[a-z]{1,4}", 0i64..5, 0..40),
    ) {
        let mut tree = SessionTree::new();
        for (key, ts) in &entries {
            tree.insert(key.as_str(), "", *ts);
        }
        let listed: Vec<(&str, i64)> = tree.by_recency().iter().map(|n| (n.key(), n.timestamp())).collect();

        let mut expected: Vec<(&str, i64)> = entries.iter().map(|(k, ts)| (k.as_str(), *ts)).collect();
        expected.sort_by(|a, b| b.1.cmp(&a.1));
        prop_assert_eq!(listed, expected);
    }
}
