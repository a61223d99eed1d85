use thiserror::Error;

/// First structural invariant found broken by
/// [`SessionTree::check_invariants`](crate::SessionTree::check_invariants).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root {key:?} has a parent link")]
    RootHasParent { key: String },
    #[error("node {key:?} does not point back at its parent")]
    ParentMismatch { key: String },
    #[error("keys out of order: {prev:?} is not below {next:?}")]
    OutOfOrder { prev: String, next: String },
    #[error("{reachable} nodes reachable from root, size is {size}")]
    SizeMismatch { reachable: usize, size: usize },
}
