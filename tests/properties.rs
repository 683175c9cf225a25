//! Property-based tests for the quantified invariants named in the spec's
//! testable-properties section: tree-build determinism, round-trip proof
//! reconstruction, challenge determinism, and tamper rejection.

use poc_custody::{challenge, merkle::Tree, proof, stage::Stage, verify};
use proptest::prelude::*;

fn leaves_strategy(max_len: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 32), 1..=max_len)
}

fn priv_key_strategy() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_map(|mut k| {
        k[0] |= 1; // never the all-zero scalar
        k
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// `build_tree(L).root` is deterministic for any non-empty leaf sequence.
    #[test]
    fn prop_build_is_deterministic(leaves in leaves_strategy(20)) {
        let a = Tree::build(leaves.clone()).unwrap();
        let b = Tree::build(leaves).unwrap();
        prop_assert_eq!(a.root(), b.root());
    }

    /// Every leaf's proof reconstructs to the tree's root.
    #[test]
    fn prop_every_leaf_proof_round_trips(leaves in leaves_strategy(20)) {
        let tree = Tree::build(leaves.clone()).unwrap();
        for i in 0..leaves.len() {
            let (leaf, siblings) = tree.proof_from(i);
            let root = verify::reconstruct(
                &poc_custody::proof::MerkleProof { leaf, siblings },
                None,
            ).unwrap();
            prop_assert_eq!(root, tree.root().to_vec());
        }
    }

    /// `challenge(seed, n, k)` is a deterministic function of its inputs.
    #[test]
    fn prop_challenge_is_deterministic(
        seed in prop::collection::vec(any::<u8>(), 1..64),
        n_sub in 1usize..8,
        depth in 0u32..10,
    ) {
        let a = challenge::generate(&seed, n_sub, depth);
        let b = challenge::generate(&seed, n_sub, depth);
        prop_assert_eq!(a, b);
    }

    /// An honest stage always verifies against its own challenge response.
    #[test]
    fn prop_honest_response_always_verifies(
        file in prop::collection::vec(any::<u8>(), 1..512),
        priv_key in priv_key_strategy(),
    ) {
        let stage = Stage::build(&file, &priv_key).unwrap();
        let ch = challenge::generate(b"property-seed", 3, stage.data_tree.depth());
        let poc = proof::produce(&stage, &ch);
        prop_assert!(verify::verify(&poc, stage.data_root(), stage.sig_root(), &ch));
    }

    /// Flipping any single byte of a data-proof leaf breaks verification.
    #[test]
    fn prop_tampered_leaf_byte_is_rejected(
        file in prop::collection::vec(any::<u8>(), 32..512),
        priv_key in priv_key_strategy(),
        flip_index in 0usize..8,
    ) {
        let stage = Stage::build(&file, &priv_key).unwrap();
        let ch = challenge::generate(b"property-seed", 4, stage.data_tree.depth());
        let mut poc = proof::produce(&stage, &ch);

        let idx = flip_index % poc.data_proofs.len();
        poc.data_proofs[idx].leaf[0] ^= 0x01;

        prop_assert!(!verify::verify(&poc, stage.data_root(), stage.sig_root(), &ch));
    }
}
