//! Proof producer (C6): for each sub-challenge, descends the data tree by
//! direction bits to a leaf and emits Merkle proofs for that leaf and its
//! bound signature leaf.

use crate::challenge::Challenge;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};

/// A Merkle proof: the reached leaf, then one sibling per ancestor hash
/// step, leaf-to-root order. Steps where the ancestor was itself promoted
/// without a hash (odd-one-out) are omitted, so `siblings.len()` may be
/// less than the tree's `depth()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MerkleProof {
    pub leaf: Vec<u8>,
    pub siblings: Vec<Vec<u8>>,
}

/// The full response to a challenge: one data/signature proof pair per
/// sub-challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoC {
    pub data_proofs: Vec<MerkleProof>,
    pub sig_proofs: Vec<MerkleProof>,
}

/// Produces the data/signature proof pair for a single sub-challenge's
/// direction bitstring.
pub fn produce_one(stage: &Stage, directions: &[bool]) -> (MerkleProof, MerkleProof) {
    let leaf_idx = stage.data_tree.descend(directions);

    let (data_leaf, data_siblings) = stage.data_tree.proof_from(leaf_idx);
    let (sig_leaf, sig_siblings) = stage.sig_tree.proof_from(leaf_idx);

    (
        MerkleProof {
            leaf: data_leaf,
            siblings: data_siblings,
        },
        MerkleProof {
            leaf: sig_leaf,
            siblings: sig_siblings,
        },
    )
}

/// Produces a full [`PoC`] for every sub-challenge in `challenge`.
pub fn produce(stage: &Stage, challenge: &Challenge) -> PoC {
    let mut data_proofs = Vec::with_capacity(challenge.directions.len());
    let mut sig_proofs = Vec::with_capacity(challenge.directions.len());

    for directions in &challenge.directions {
        let (data_proof, sig_proof) = produce_one(stage, directions);
        data_proofs.push(data_proof);
        sig_proofs.push(sig_proof);
    }

    PoC {
        data_proofs,
        sig_proofs,
    }
}
