//! Node link trait.
//!
//! Every tree helper in this crate works on a caller-owned arena slice and
//! `u32` indices into it. A node exposes its structural links through
//! [`Node`]; the arena owns the node, the links never do.

/// Structural links of an arena-resident tree node (`p`, `l`, `r`).
///
/// `p` is a non-owning back-reference: it is only ever read to re-link
/// during rotation and deletion.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Which child slot of a parent a node occupies (or will occupy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
