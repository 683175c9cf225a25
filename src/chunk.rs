//! Chunking and padding (C2): right-pads a file to a multiple of
//! `CHUNK_SIZE` and splits it into fixed-size signable units.

use crate::error::{PocError, Result};

/// Right-pads `data` with zero bytes to the next multiple of `chunk_size`.
/// Unchanged if `data` is already aligned.
pub fn pad(data: &[u8], chunk_size: usize) -> Result<Vec<u8>> {
    if chunk_size == 0 {
        return Err(PocError::Config("chunk size must be positive".into()));
    }
    if data.is_empty() {
        return Err(PocError::Config("cannot chunk an empty file".into()));
    }

    let remainder = data.len() % chunk_size;
    if remainder == 0 {
        return Ok(data.to_vec());
    }

    let mut padded = data.to_vec();
    padded.resize(data.len() + (chunk_size - remainder), 0);
    Ok(padded)
}

/// Pads then splits `data` into `ceil(|data| / chunk_size)` chunks of
/// exactly `chunk_size` bytes each.
pub fn split(data: &[u8], chunk_size: usize) -> Result<Vec<Vec<u8>>> {
    let padded = pad(data, chunk_size)?;
    Ok(padded.chunks(chunk_size).map(|c| c.to_vec()).collect())
}
