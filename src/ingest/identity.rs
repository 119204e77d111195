// file: src/ingest/identity.rs
// description: whole-file content hash used for duplicate bookkeeping and audit display
// reference: https://docs.rs/sha2

use crate::error::{ExtractError, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const CHUNK_SIZE: usize = 4096;

/// Lowercase hex SHA-256 of the raw file bytes, read in fixed-size chunks.
pub fn file_identity(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| ExtractError::FileOperation {
        path: path.to_path_buf(),
        source,
    })?;
    digest_reader(BufReader::new(file)).map_err(|source| ExtractError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

pub fn digest_reader(mut reader: impl Read) -> std::io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
