//! Engine statistics.

use serde::{Deserialize, Serialize};

/// Point-in-time summary returned by [`stats`](crate::RbTree::stats).
///
/// `node_count` and `rotation_count` are maintained incrementally by the
/// mutating operations; `height` is measured by a full walk at read time
/// (0 for the empty tree).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub node_count: u64,
    pub rotation_count: u64,
    pub height: u64,
}
