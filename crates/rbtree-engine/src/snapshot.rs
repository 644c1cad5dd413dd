//! External hierarchical view of the tree.

use serde::{Deserialize, Serialize};

use crate::node::Color;

/// One node of a [`snapshot`](crate::RbTree::snapshot): key, color, and the
/// present children in left-then-right order (absent children are omitted,
/// not represented).
///
/// Serializes to the `{key, color, children}` shape consumed by rendering
/// collaborators:
///
/// ```
/// use rbtree_engine::RbTree;
///
/// let mut tree = RbTree::new();
/// tree.insert(7);
/// let json = serde_json::to_value(tree.snapshot()).unwrap();
/// assert_eq!(
///     json,
///     serde_json::json!({"key": 7, "color": "black", "children": []})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub key: i64,
    pub color: Color,
    pub children: Vec<SnapshotNode>,
}
