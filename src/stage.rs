//! Stage assembly (C4): builds the dual data/signature trees from a file
//! and a private key, binding data leaf `i` to signature leaf `i`.

use crate::chunk;
use crate::error::Result;
use crate::merkle::Tree;
use crate::primitives::{sign, CHUNK_SIZE};
use serde::{Deserialize, Serialize};

/// The commitment a prover publishes to a verifier before the challenge
/// is revealed: the signature-tree root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment {
    pub sig_root: Vec<u8>,
}

#[derive(Debug)]
pub struct Stage {
    pub data_tree: Tree,
    pub sig_tree: Tree,
}

impl Stage {
    /// Chunks `file_bytes`, signs every chunk under `priv_key`, and builds
    /// both trees. Data leaf `i` and signature leaf `i` share an index by
    /// construction — no cross-tree pointer is needed to bind them.
    pub fn build(file_bytes: &[u8], priv_key: &[u8; 32]) -> Result<Self> {
        let chunks = chunk::split(file_bytes, CHUNK_SIZE)?;

        let mut signatures = Vec::with_capacity(chunks.len());
        for c in &chunks {
            let msg: [u8; CHUNK_SIZE] = c.as_slice().try_into().expect("chunks are CHUNK_SIZE bytes");
            signatures.push(sign(&msg, priv_key)?.to_vec());
        }

        let data_tree = Tree::build(chunks)?;
        let sig_tree = Tree::build(signatures)?;

        Ok(Self { data_tree, sig_tree })
    }

    /// Carried only for the stage's own self-test; the verifier is
    /// expected to obtain the data root independently.
    pub fn data_root(&self) -> &[u8] {
        self.data_tree.root()
    }

    pub fn sig_root(&self) -> &[u8] {
        self.sig_tree.root()
    }

    pub fn commitment(&self) -> Commitment {
        Commitment {
            sig_root: self.sig_tree.root().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::hash;

    fn key(byte: u8) -> [u8; 32] {
        let mut k = [0u8; 32];
        k[0] = 1;
        k[31] = byte;
        k
    }

    #[test]
    fn single_chunk_file_yields_single_leaf_trees() {
        let priv_key = key(1);
        let stage = Stage::build(b"Hello, world!\n", &priv_key).unwrap();
        assert_eq!(stage.data_tree.num_leaves(), 1);
        assert_eq!(stage.sig_tree.num_leaves(), 1);
    }

    #[test]
    fn trees_share_leaf_count() {
        let priv_key = key(2);
        let stage = Stage::build(&[7u8; 100], &priv_key).unwrap();
        assert_eq!(stage.data_tree.num_leaves(), stage.sig_tree.num_leaves());
    }

    #[test]
    fn commitment_is_the_signature_root() {
        let priv_key = key(3);
        let stage = Stage::build(b"some file contents", &priv_key).unwrap();
        assert_eq!(stage.commitment().sig_root, stage.sig_root().to_vec());
    }

    #[test]
    fn full_flow_scenario_from_spec() {
        // Passphrase "hello world" -> priv_key = keccak256(hex(passphrase bytes)).
        let passphrase = b"hello world";
        let hex_bytes = hex::encode(passphrase).into_bytes();
        let priv_key = hash(&hex_bytes);

        let stage = Stage::build(b"Hello, world!\n", &priv_key).unwrap();
        assert_eq!(stage.data_tree.num_leaves(), 1);
        assert_eq!(stage.data_tree.depth(), 0);
    }
}
