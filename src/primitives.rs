//! Hash and signature primitives (C1).
//!
//! Signatures are taken over raw 32-byte chunks, never over a hash of a
//! chunk: if the prover could sign a hash instead, two provers could
//! collude by exchanging hashes without either holding the file. Signing
//! the chunk itself forces possession of the preimage.

use crate::error::{PocError, Result};
use sha3::{Digest, Keccak256};

/// Chunk size in bytes — the largest payload the curve can sign directly.
pub const CHUNK_SIZE: usize = 32;
/// Keccak-256 digest length.
pub const HASH_LEN: usize = 32;
/// Recoverable secp256k1 signature length (64-byte sig + 1-byte recovery id).
pub const SIGNATURE_LEN: usize = 65;
/// PRNG reseed threshold used by the challenge generator (C5).
pub const PRNG_RESEED_THRESHOLD: u32 = 1024;

/// Keccak-256 (the Ethereum variant, not FIPS SHA3-256).
pub fn hash(data: &[u8]) -> [u8; HASH_LEN] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Recoverable ECDSA signature over secp256k1. `msg` is treated as a
/// 32-byte message representative, not pre-hashed by this layer.
pub fn sign(msg: &[u8; 32], priv_key: &[u8; 32]) -> Result<[u8; SIGNATURE_LEN]> {
    let secret_key = libsecp256k1::SecretKey::parse(priv_key)
        .map_err(|e| PocError::Crypto(format!("bad private key: {e}")))?;
    let message = libsecp256k1::Message::parse(msg);
    let (sig, recovery_id) = libsecp256k1::sign(&message, &secret_key);

    let mut out = [0u8; SIGNATURE_LEN];
    out[..64].copy_from_slice(&sig.serialize());
    out[64] = recovery_id.serialize();
    Ok(out)
}

/// Recover the uncompressed public key (64 bytes, no `0x04` prefix) that
/// produced `sig` over `msg`.
pub fn recover(msg: &[u8; 32], sig: &[u8; SIGNATURE_LEN]) -> Result<[u8; 64]> {
    let recovery_id = libsecp256k1::RecoveryId::parse(sig[64])
        .map_err(|e| PocError::Crypto(format!("bad recovery id: {e}")))?;
    let signature = libsecp256k1::Signature::parse_standard_slice(&sig[..64])
        .map_err(|e| PocError::Crypto(format!("bad signature: {e}")))?;
    let message = libsecp256k1::Message::parse(msg);

    let public_key = libsecp256k1::recover(&message, &signature, &recovery_id)
        .map_err(|e| PocError::Crypto(format!("recovery failed: {e}")))?;

    let uncompressed = public_key.serialize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&uncompressed[1..]);
    Ok(out)
}

/// `true` iff `recover` succeeds. A historical variant of this protocol
/// returned `true` unconditionally when recovery failed; that is a bug,
/// not behavior this crate reproduces.
pub fn verify_signature(msg: &[u8; 32], sig: &[u8; SIGNATURE_LEN]) -> bool {
    recover(msg, sig).is_ok()
}
