//! Random identifiers for builds and staging directories.
//!
//! Identifiers are hex strings drawn from the operating system's CSPRNG.
//! Build ids are truncated to [`BUILD_ID_LEN`] characters and relocation
//! staging directories to [`STAGING_ID_LEN`]; the full 64-character string
//! keeps those prefixes collision resistant.

use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Length of the build id that namespaces a build's branches.
pub const BUILD_ID_LEN: usize = 4;

/// Length of the temporary directory name used while relocating a tree.
pub const STAGING_ID_LEN: usize = 8;

const RANDOM_BYTES: usize = 32;

/// Return 32 random bytes from the OS, hex encoded.
///
/// There is no fallback: if the OS cannot supply randomness the caller gets
/// [`Error::Entropy`] and must abort.
pub fn random_hex() -> Result<String> {
    let mut id = [0u8; RANDOM_BYTES];
    OsRng.try_fill_bytes(&mut id).map_err(|e| Error::Entropy {
        message: e.to_string(),
    })?;
    Ok(hex::encode(id))
}

/// Return the first `len` characters of [`random_hex`].
pub fn short_id(len: usize) -> Result<String> {
    let mut id = random_hex()?;
    id.truncate(len.min(RANDOM_BYTES * 2));
    Ok(id)
}

/// Source of identifiers for the planner.
///
/// Production code uses [`OsIdSource`]; tests plug in a fixed sequence so
/// plans are reproducible.
pub trait IdSource {
    /// Produce a fresh identifier of `len` characters.
    fn next_id(&mut self, len: usize) -> Result<String>;
}

/// Identifier source backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsIdSource;

impl IdSource for OsIdSource {
    fn next_id(&mut self, len: usize) -> Result<String> {
        short_id(len)
    }
}
