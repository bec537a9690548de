use sha2::{Digest, Sha256};

/// SHA-256 of the input, as the raw 32-byte digest.
pub(crate) fn digest(input: impl AsRef<[u8]>) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(input.as_ref()));
    out
}
