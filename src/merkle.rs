//! The modified, order-canonical Merkle tree (C3).
//!
//! Nodes live in a flat arena (`Tree::arena`); children and parents are
//! arena indices rather than owned/back-reference pointers. This avoids
//! the ownership cycle of the original pointer-graph representation and
//! makes a tree cheap to walk in either direction.

use crate::error::{PocError, Result};
use crate::primitives::hash;

#[derive(Debug, Clone)]
pub struct Node {
    pub value: Vec<u8>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub parent: Option<usize>,
}

impl Node {
    fn leaf(value: Vec<u8>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Order-canonical pairwise hash: `hash(min(a, b) || max(a, b))`. Hash
/// order is independent of which operand is the left/right child.
fn hash_pair(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut preimage = Vec::with_capacity(lo.len() + hi.len());
    preimage.extend_from_slice(lo);
    preimage.extend_from_slice(hi);
    hash(&preimage).to_vec()
}

#[derive(Debug)]
pub struct Tree {
    arena: Vec<Node>,
    root: usize,
    num_leaves: usize,
}

impl Tree {
    /// Builds the tree level-by-level from an ordered sequence of leaf
    /// values. Odd-one-out nodes at any level are promoted to the next
    /// level verbatim, without a new hash.
    pub fn build(leaves: Vec<Vec<u8>>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(PocError::Config("cannot build a tree with no leaves".into()));
        }

        let num_leaves = leaves.len();
        let mut arena: Vec<Node> = leaves.into_iter().map(Node::leaf).collect();
        let mut level: Vec<usize> = (0..num_leaves).collect();

        while level.len() > 1 {
            let mut next_level = Vec::with_capacity(level.len().div_ceil(2));

            for pair in level.chunks(2) {
                match pair {
                    [a, b] => {
                        let parent_value = hash_pair(&arena[*a].value, &arena[*b].value);
                        arena.push(Node {
                            value: parent_value,
                            left: Some(*a),
                            right: Some(*b),
                            parent: None,
                        });
                        let parent_idx = arena.len() - 1;
                        arena[*a].parent = Some(parent_idx);
                        arena[*b].parent = Some(parent_idx);
                        next_level.push(parent_idx);
                    }
                    [only] => next_level.push(*only),
                    _ => unreachable!("chunks(2) never yields more than two elements"),
                }
            }

            level = next_level;
        }

        Ok(Self {
            arena,
            root: level[0],
            num_leaves,
        })
    }

    pub fn root(&self) -> &[u8] {
        &self.arena[self.root].value
    }

    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// `ceil(log2(num_leaves))`, the longest root-to-leaf path. Individual
    /// proofs may be shorter when odd-one-out promotion skips levels.
    pub fn depth(&self) -> u32 {
        if self.num_leaves <= 1 {
            0
        } else {
            (usize::BITS - (self.num_leaves - 1).leading_zeros()) as u32
        }
    }

    fn node(&self, idx: usize) -> &Node {
        &self.arena[idx]
    }

    /// Descends from the root following `directions`: at each step, branch
    /// to the lexicographically-lesser child iff the next direction bit is
    /// `true`. Stops early (returning the current node's arena index) if
    /// the current node has no children, which happens whenever the actual
    /// branch is shorter than `depth()` due to odd-one-out promotion.
    pub fn descend(&self, directions: &[bool]) -> usize {
        let mut idx = self.root;

        for &want_lesser in directions {
            let node = self.node(idx);
            let (left, right) = match (node.left, node.right) {
                (Some(l), Some(r)) => (l, r),
                _ => break,
            };

            let left_is_lesser = self.node(left).value < self.node(right).value;
            idx = if left_is_lesser == want_lesser { left } else { right };
        }

        idx
    }

    /// The leaf value and the leaf-to-root sibling chain starting at arena
    /// index `leaf_idx`. Siblings are omitted at levels where `leaf_idx`'s
    /// ancestor was itself promoted without a hash step.
    pub fn proof_from(&self, leaf_idx: usize) -> (Vec<u8>, Vec<Vec<u8>>) {
        let leaf_value = self.node(leaf_idx).value.clone();
        let mut siblings = Vec::new();
        let mut idx = leaf_idx;

        while let Some(parent_idx) = self.node(idx).parent {
            let parent = self.node(parent_idx);
            let sibling_idx = match (parent.left, parent.right) {
                (Some(l), _) if l != idx => l,
                (_, Some(r)) => r,
                _ => unreachable!("a node with a parent is always one of that parent's children"),
            };
            siblings.push(self.node(sibling_idx).value.clone());
            idx = parent_idx;
        }

        (leaf_value, siblings)
    }
}
