//! Opaque state blob for persisting the engine between invocations.
//!
//! The whole engine value — arena (sentinel slot included), free list, root
//! slot, and both counters — is encoded as CBOR. Restoring reproduces the
//! link topology exactly, not just keys and colors, so rotations behave
//! identically on a restored tree.

use crate::node::{Color, NIL};
use crate::tree::RbTree;

/// Failure while encoding or decoding a state blob.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("state blob encoding failed")]
    Encode,
    #[error("invalid state blob payload")]
    Decode,
    #[error("state blob does not describe a tree arena")]
    Invalid,
}

impl RbTree {
    /// Encodes the full engine state as an opaque blob.
    ///
    /// ```
    /// use rbtree_engine::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(42);
    /// let blob = tree.to_bytes().unwrap();
    /// let restored = RbTree::from_bytes(&blob).unwrap();
    /// assert_eq!(restored.snapshot(), tree.snapshot());
    /// assert_eq!(restored.stats(), tree.stats());
    /// ```
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        let mut out = Vec::new();
        ciborium::ser::into_writer(self, &mut out).map_err(|_| StateError::Encode)?;
        Ok(out)
    }

    /// Decodes a blob produced by [`to_bytes`](Self::to_bytes).
    ///
    /// The decoded value is checked for arena sanity (links in bounds,
    /// sentinel slot intact) before it is handed back.
    pub fn from_bytes(data: &[u8]) -> Result<RbTree, StateError> {
        let tree: RbTree = ciborium::de::from_reader(data).map_err(|_| StateError::Decode)?;
        if !arena_is_sane(&tree) {
            return Err(StateError::Invalid);
        }
        Ok(tree)
    }
}

fn arena_is_sane(tree: &RbTree) -> bool {
    let len = tree.arena.len() as u32;
    if len == 0 || tree.root >= len {
        return false;
    }
    let sentinel = &tree.arena[NIL as usize];
    if sentinel.color != Color::Black || sentinel.left != NIL || sentinel.right != NIL {
        return false;
    }
    if tree.free.iter().any(|&slot| slot == NIL || slot >= len) {
        return false;
    }
    tree.arena
        .iter()
        .all(|node| node.left < len && node.right < len && node.parent < len)
}
