//! Proof verifier (C7): reconstructs both roots from proofs, enforces
//! direction compatibility on the data-tree path, and checks that each
//! data leaf's signature recovers a signer.

use crate::challenge::Challenge;
use crate::error::{PocError, Result};
use crate::primitives::{hash, verify_signature, SIGNATURE_LEN};
use crate::proof::{MerkleProof, PoC};

fn hash_pair(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut preimage = Vec::with_capacity(lo.len() + hi.len());
    preimage.extend_from_slice(lo);
    preimage.extend_from_slice(hi);
    hash(&preimage).to_vec()
}

/// Folds `proof.siblings` onto `proof.leaf` via order-canonical hashing.
///
/// When `directions` is given, checks at each step that the climb agrees
/// with the corresponding root-to-leaf direction bit, rejecting on any
/// mismatch. Directions are indexed root-to-leaf while this walks
/// leaf-to-root, so the `i`-th sibling (counting up from the leaf) is
/// checked against `directions[siblings.len() - 1 - i]`. Direction bits
/// beyond the proof's own length (surplus bits left over from a branch
/// shorter than the tree's nominal depth) are never consulted.
pub fn reconstruct(proof: &MerkleProof, directions: Option<&[bool]>) -> Result<Vec<u8>> {
    let mut h = proof.leaf.clone();
    let num_siblings = proof.siblings.len();

    for (i, sibling) in proof.siblings.iter().enumerate() {
        if let Some(dirs) = directions {
            let idx = num_siblings - 1 - i;
            let want_lesser = *dirs
                .get(idx)
                .ok_or_else(|| PocError::Protocol("direction bitstring too short".into()))?;
            let h_is_lesser = h.as_slice() < sibling.as_slice();
            if h_is_lesser != want_lesser {
                return Err(PocError::Protocol("direction bit mismatch".into()));
            }
        }
        h = hash_pair(&h, sibling);
    }

    Ok(h)
}

/// The three checks of a single sub-challenge's response: the data proof
/// reconstructs to `file_root` under direction-checked reconstruction, the
/// signature proof reconstructs to `sig_root` undirected, and the data
/// leaf's signature recovers a signer. Never panics; any malformed input
/// degrades to `false`.
pub fn verify_one(
    data_proof: &MerkleProof,
    sig_proof: &MerkleProof,
    directions: &[bool],
    file_root: &[u8],
    sig_root: &[u8],
) -> bool {
    let data_ok = matches!(
        reconstruct(data_proof, Some(directions)),
        Ok(root) if root == file_root
    );

    let sig_ok = matches!(
        reconstruct(sig_proof, None),
        Ok(root) if root == sig_root
    );

    let signature_binds_leaf = (|| {
        let msg: [u8; 32] = data_proof.leaf.as_slice().try_into().ok()?;
        let sig: [u8; SIGNATURE_LEN] = sig_proof.leaf.as_slice().try_into().ok()?;
        Some(verify_signature(&msg, &sig))
    })()
    .unwrap_or(false);

    data_ok && sig_ok && signature_binds_leaf
}

/// Accepts iff every sub-challenge in `challenge` passes [`verify_one`].
pub fn verify(poc: &PoC, file_root: &[u8], sig_root: &[u8], challenge: &Challenge) -> bool {
    if poc.data_proofs.len() != challenge.directions.len()
        || poc.sig_proofs.len() != challenge.directions.len()
    {
        return false;
    }

    poc.data_proofs
        .iter()
        .zip(&poc.sig_proofs)
        .zip(&challenge.directions)
        .all(|((data_proof, sig_proof), directions)| {
            verify_one(data_proof, sig_proof, directions, file_root, sig_root)
        })
}
