//! Node representation and the shared sentinel slot.

use serde::{Deserialize, Serialize};

/// Reserved arena slot of the shared sentinel leaf.
///
/// The sentinel stands in for every absent child and for the parent of the
/// root, so a link is never optional: descent and rotation code compares
/// against `NIL` instead of unwrapping. The sentinel is black, its own
/// `left`/`right` point back to slot 0, and it is written once at tree
/// construction and never again.
pub const NIL: u32 = 0;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// One key-bearing node (or the sentinel, in slot 0).
///
/// All links are arena slot indices, never pointers. `parent` is a
/// non-owning back-reference; `left`/`right` are the owning direction of
/// the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub key: i64,
    pub color: Color,
    pub left: u32,
    pub right: u32,
    pub parent: u32,
}

impl Node {
    pub(crate) fn sentinel() -> Self {
        Self {
            key: 0,
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    /// Fresh leaf as insertion creates it: red, both children sentinel.
    pub(crate) fn red_leaf(key: i64) -> Self {
        Self {
            key,
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }
}
