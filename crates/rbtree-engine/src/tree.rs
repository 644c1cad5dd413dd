//! The tree engine: rotations, insertion fixup, transplant deletion.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::node::{Color, Node, NIL};
use crate::snapshot::SnapshotNode;
use crate::stats::Stats;

/// A red-black tree over `i64` keys.
///
/// Duplicate keys are permitted and route to the right subtree. The tree is
/// a plain value: single-threaded, no interior mutability, cloneable, and
/// serializable in full (see [`RbTree::to_bytes`]).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RbTree {
    pub(crate) arena: Vec<Node>,
    pub(crate) free: Vec<u32>,
    pub(crate) root: u32,
    pub(crate) node_count: u64,
    pub(crate) rotation_count: u64,
}

impl Default for RbTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RbTree {
    /// Empty tree: arena holds only the sentinel, root points at it.
    pub fn new() -> Self {
        Self {
            arena: vec![Node::sentinel()],
            free: Vec::new(),
            root: NIL,
            node_count: 0,
            rotation_count: 0,
        }
    }

    #[inline]
    fn node(&self, i: u32) -> &Node {
        &self.arena[i as usize]
    }

    #[inline]
    fn node_mut(&mut self, i: u32) -> &mut Node {
        &mut self.arena[i as usize]
    }

    fn alloc(&mut self, node: Node) -> u32 {
        match self.free.pop() {
            Some(slot) => {
                self.arena[slot as usize] = node;
                slot
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.node_count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Total rotations performed since construction (or the last reset).
    pub fn rotation_count(&self) -> u64 {
        self.rotation_count
    }

    pub fn contains(&self, key: i64) -> bool {
        self.find(key) != NIL
    }

    /// All live keys in symmetric (sorted) order.
    pub fn keys(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.node_count as usize);
        self.collect_in_order(self.root, &mut out);
        out
    }

    fn collect_in_order(&self, n: u32, out: &mut Vec<i64>) {
        if n == NIL {
            return;
        }
        self.collect_in_order(self.node(n).left, out);
        out.push(self.node(n).key);
        self.collect_in_order(self.node(n).right, out);
    }

    // --- Rotation primitives ---
    //
    // Purely structural: colors are untouched, BST order is preserved, and
    // the parent links of the three affected nodes stay consistent. The
    // promoted child must be a real node; insertion fixup guarantees this.

    fn rotate_left(&mut self, x: u32) {
        self.rotation_count += 1;
        let y = self.node(x).right;
        let yl = self.node(y).left;
        self.node_mut(x).right = yl;
        if yl != NIL {
            self.node_mut(yl).parent = x;
        }
        let xp = self.node(x).parent;
        self.node_mut(y).parent = xp;
        if xp == NIL {
            self.root = y;
        } else if self.node(xp).left == x {
            self.node_mut(xp).left = y;
        } else {
            self.node_mut(xp).right = y;
        }
        self.node_mut(y).left = x;
        self.node_mut(x).parent = y;
    }

    fn rotate_right(&mut self, y: u32) {
        self.rotation_count += 1;
        let x = self.node(y).left;
        let xr = self.node(x).right;
        self.node_mut(y).left = xr;
        if xr != NIL {
            self.node_mut(xr).parent = y;
        }
        let yp = self.node(y).parent;
        self.node_mut(x).parent = yp;
        if yp == NIL {
            self.root = x;
        } else if self.node(yp).right == y {
            self.node_mut(yp).right = x;
        } else {
            self.node_mut(yp).left = x;
        }
        self.node_mut(x).right = y;
        self.node_mut(y).parent = x;
    }

    // --- Insertion ---

    /// Inserts `key` as a red leaf, then restores the color invariants.
    ///
    /// The very first node becomes the black root directly and no fixup
    /// runs; otherwise the fixup loop runs only when the new leaf's parent
    /// is red.
    pub fn insert(&mut self, key: i64) {
        let z = self.alloc(Node::red_leaf(key));
        let mut y = NIL;
        let mut x = self.root;
        while x != NIL {
            y = x;
            x = if key < self.node(x).key {
                self.node(x).left
            } else {
                self.node(x).right
            };
        }
        self.node_mut(z).parent = y;
        if y == NIL {
            self.root = z;
            self.node_mut(z).color = Color::Black;
        } else if key < self.node(y).key {
            self.node_mut(y).left = z;
        } else {
            self.node_mut(y).right = z;
        }
        self.node_count += 1;

        let p = self.node(z).parent;
        if self.node(p).color == Color::Red {
            self.insert_fixup(z);
        }
    }

    /// Boundary form of [`insert`](Self::insert): parses `raw` as an
    /// integer and silently ignores anything else.
    pub fn insert_raw(&mut self, raw: &str) {
        if let Ok(key) = raw.trim().parse::<i64>() {
            self.insert(key);
        }
    }

    /// Inserts one key drawn uniformly from `1..=100`.
    pub fn insert_random(&mut self) {
        self.insert(rand::thread_rng().gen_range(1..=100));
    }

    // Restores "no red node has a red child" after linking the red leaf
    // `z`. Terminates when z's parent is black or z reaches the root; only
    // the uncle-red case moves the cursor upward.
    fn insert_fixup(&mut self, mut z: u32) {
        loop {
            let p = self.node(z).parent;
            if self.node(p).color != Color::Red {
                break;
            }
            let g = self.node(p).parent;
            if g == NIL {
                break;
            }
            if p == self.node(g).left {
                let u = self.node(g).right;
                if self.node(u).color == Color::Red {
                    // Uncle red: recolor and ascend.
                    self.node_mut(p).color = Color::Black;
                    self.node_mut(u).color = Color::Black;
                    self.node_mut(g).color = Color::Red;
                    z = g;
                } else {
                    if z == self.node(p).right {
                        // Zig-zag: rotate down to the zig-zig shape.
                        z = p;
                        self.rotate_left(z);
                    }
                    let p = self.node(z).parent;
                    let g = self.node(p).parent;
                    self.node_mut(p).color = Color::Black;
                    self.node_mut(g).color = Color::Red;
                    self.rotate_right(g);
                }
            } else {
                let u = self.node(g).left;
                if self.node(u).color == Color::Red {
                    self.node_mut(p).color = Color::Black;
                    self.node_mut(u).color = Color::Black;
                    self.node_mut(g).color = Color::Red;
                    z = g;
                } else {
                    if z == self.node(p).left {
                        z = p;
                        self.rotate_right(z);
                    }
                    let p = self.node(z).parent;
                    let g = self.node(p).parent;
                    self.node_mut(p).color = Color::Black;
                    self.node_mut(g).color = Color::Red;
                    self.rotate_left(g);
                }
            }
        }
        // The uncle-red ascent can leave a red root behind.
        let root = self.root;
        self.node_mut(root).color = Color::Black;
    }

    // --- Deletion ---

    fn find(&self, key: i64) -> u32 {
        let mut cur = self.root;
        while cur != NIL && key != self.node(cur).key {
            cur = if key < self.node(cur).key {
                self.node(cur).left
            } else {
                self.node(cur).right
            };
        }
        cur
    }

    fn minimum(&self, mut n: u32) -> u32 {
        while self.node(n).left != NIL {
            n = self.node(n).left;
        }
        n
    }

    // Replaces the subtree rooted at `u` with the one rooted at `v` in u's
    // parent. The sentinel's own parent field is never written; nothing
    // reads it because no deletion fixup runs.
    fn transplant(&mut self, u: u32, v: u32) {
        let up = self.node(u).parent;
        if up == NIL {
            self.root = v;
        } else if self.node(up).left == u {
            self.node_mut(up).left = v;
        } else {
            self.node_mut(up).right = v;
        }
        if v != NIL {
            self.node_mut(v).parent = up;
        }
    }

    /// Removes the first node with exactly `key`, if any.
    ///
    /// This is a plain BST splice: one/zero-child nodes are transplanted
    /// out, two-child nodes are replaced by the minimum of the right
    /// subtree, which inherits the removed node's color. No rebalancing
    /// follows, so removing a black node can leave the tree violating the
    /// red-red and black-height invariants. That gap is intentional and
    /// kept observable; [`delete_fixup`](Self::delete_fixup) marks where
    /// the missing rebalancing would run.
    pub fn delete(&mut self, key: i64) {
        let z = self.find(key);
        if z == NIL {
            return;
        }

        let x;
        if self.node(z).left == NIL {
            x = self.node(z).right;
            self.transplant(z, x);
        } else if self.node(z).right == NIL {
            x = self.node(z).left;
            self.transplant(z, x);
        } else {
            let y = self.minimum(self.node(z).right);
            x = self.node(y).right;
            if self.node(y).parent != z {
                self.transplant(y, x);
                let zr = self.node(z).right;
                self.node_mut(y).right = zr;
                self.node_mut(zr).parent = y;
            }
            self.transplant(z, y);
            let zl = self.node(z).left;
            self.node_mut(y).left = zl;
            self.node_mut(zl).parent = y;
            let zc = self.node(z).color;
            self.node_mut(y).color = zc;
        }

        self.delete_fixup(x);
        self.free.push(z);
        self.node_count -= 1;
    }

    /// Deletion rebalancing point — intentionally a no-op.
    ///
    /// A full implementation would rebalance around `_x` (the node that
    /// replaced the spliced-out one) to restore the black-height invariant.
    /// The engine leaves the tree unbalanced after deletes instead; callers
    /// that need the invariants back must rebuild from the surviving keys.
    fn delete_fixup(&mut self, _x: u32) {}

    // --- Reads and lifecycle ---

    /// Hierarchical read-only copy of the tree, `None` when empty.
    pub fn snapshot(&self) -> Option<SnapshotNode> {
        self.snapshot_at(self.root)
    }

    fn snapshot_at(&self, n: u32) -> Option<SnapshotNode> {
        if n == NIL {
            return None;
        }
        let node = self.node(n);
        let mut children = Vec::new();
        if let Some(left) = self.snapshot_at(node.left) {
            children.push(left);
        }
        if let Some(right) = self.snapshot_at(node.right) {
            children.push(right);
        }
        Some(SnapshotNode {
            key: node.key,
            color: node.color,
            children,
        })
    }

    /// Counter values plus the height, which is recomputed on demand.
    pub fn stats(&self) -> Stats {
        Stats {
            node_count: self.node_count,
            rotation_count: self.rotation_count,
            height: self.height_of(self.root),
        }
    }

    fn height_of(&self, n: u32) -> u64 {
        if n == NIL {
            return 0;
        }
        let left = self.height_of(self.node(n).left);
        let right = self.height_of(self.node(n).right);
        1 + left.max(right)
    }

    /// Discards every node and zeroes both counters.
    pub fn reset(&mut self) {
        self.arena.truncate(1);
        self.free.clear();
        self.root = NIL;
        self.node_count = 0;
        self.rotation_count = 0;
    }
}
