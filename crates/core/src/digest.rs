// crates/core/src/digest.rs
//! Chunked SHA-256 file hashing.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Read size per chunk. Disk images can be many gigabytes, so the file
/// is streamed through the hasher instead of loaded whole.
const CHUNK_SIZE: usize = 4096;

/// Compute the lowercase hex SHA-256 digest of a file.
///
/// This is a synchronous, blocking read; async callers run it inside
/// `tokio::task::spawn_blocking`.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
