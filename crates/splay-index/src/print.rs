use std::fmt;

use crate::types::Node;

/// Write an indented dump of the subtree under `root`.
///
/// Each node is one line prefixed by `└─` for the root and `←` / `→` for
/// left and right children; `label` renders the node itself. Uses an
/// explicit stack so degenerate (list-shaped) trees print without deep
/// recursion.
pub fn print_tree<N, F>(f: &mut fmt::Formatter<'_>, arena: &[N], root: Option<u32>, tab: &str, label: F) -> fmt::Result
where
    N: Node,
    F: Fn(&N) -> String,
{
    let Some(root) = root else {
        return write!(f, " ∅");
    };
    let mut stack = vec![(root, tab.to_string(), "└─")];
    while let Some((idx, tab, side)) = stack.pop() {
        let node = &arena[idx as usize];
        write!(f, "\n{tab}{side} {}", label(node))?;
        let child_tab = format!("{tab}  ");
        if let Some(r) = node.r() {
            stack.push((r, child_tab.clone(), "→"));
        }
        if let Some(l) = node.l() {
            stack.push((l, child_tab, "←"));
        }
    }
    Ok(())
}
