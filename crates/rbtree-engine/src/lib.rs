//! Arena-backed red-black tree engine.
//!
//! The engine owns a single tree as a plain value: nodes live in a `Vec`
//! arena and link to each other through `u32` slot indices, with slot 0
//! reserved for the shared black sentinel leaf. Insertion restores the
//! red-black invariants through the classic recolor/rotate case analysis;
//! deletion is a transplant-only splice that deliberately skips the deletion
//! fixup (see [`RbTree::delete`]). Snapshots and statistics are pure reads,
//! and the whole engine value round-trips through an opaque CBOR blob so a
//! caller can persist it between invocations.
//!
//! # Example
//!
//! ```
//! use rbtree_engine::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//!
//! // Inserting 30 triggers one left rotation at the old root.
//! let stats = tree.stats();
//! assert_eq!(stats.node_count, 3);
//! assert_eq!(stats.rotation_count, 1);
//! assert_eq!(stats.height, 2);
//!
//! let root = tree.snapshot().unwrap();
//! assert_eq!(root.key, 20);
//! assert_eq!(root.children.len(), 2);
//! ```

pub mod node;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod tree;

pub use node::{Color, Node, NIL};
pub use snapshot::SnapshotNode;
pub use state::StateError;
pub use stats::Stats;
pub use tree::RbTree;
