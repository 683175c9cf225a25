pub mod challenge;
pub mod chunk;
pub mod error;
pub mod merkle;
pub mod primitives;
pub mod proof;
pub mod stage;
pub mod verify;

pub use challenge::Challenge;
pub use error::{PocError, Result};
pub use merkle::Tree;
pub use proof::{produce, MerkleProof, PoC};
pub use stage::{Commitment, Stage};
pub use verify::verify;
