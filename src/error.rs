use thiserror::Error;

/// Structured error kinds for the proof-of-custody core.
///
/// Staging surfaces `Config`/`Crypto`/`Io` to the caller; verification
/// never returns an `Err` — a malformed or tampered proof is folded into
/// a `false` accept/reject boolean instead (see `verify`).
#[derive(Error, Debug)]
pub enum PocError {
    #[error("config: {0}")]
    Config(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("crypto: {0}")]
    Crypto(String),

    #[error("protocol: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, PocError>;
