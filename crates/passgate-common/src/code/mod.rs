//! Short credential codes that need no cipher.
//!
//! [window] codes rotate with wall-clock time and are recomputed by the verifier.
//! [checksum] codes carry a suffix that catches transcription errors.

pub mod checksum;
pub mod window;

use sha2::{Digest, Sha256};

/// Uppercase hex prefix of the SHA-256 digest of `input`, `len` characters long.
fn digest_prefix(input: &str, len: usize) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = hexhex::hex(digest.as_slice()).to_string();
    hex.truncate(len);
    hex.make_ascii_uppercase();
    hex
}
