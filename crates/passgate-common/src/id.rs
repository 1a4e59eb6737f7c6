//! Random identifiers and codes.
//!
//! Everything here draws from the OS random source, so that a failing source
//! is reported to the caller instead of panicking.

use rand::{rngs::OsRng, RngCore};

/// Alphabet of [generate_unique_id].
const UNIQUE_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphabet of [generate_numeric_code].
const DIGITS: &[u8] = b"0123456789";

/// Length of identifiers produced by [generate_unique_id].
pub const UNIQUE_ID_LEN: usize = 16;

/// Default number of digits of [generate_numeric_code].
pub const DEFAULT_NUMERIC_CODE_LEN: usize = 8;

/// Number of random bytes in a payload nonce.
pub const NONCE_BYTES: usize = 16;

/// Create a random uppercase alphanumeric identifier.
pub fn generate_unique_id() -> Result<String, rand::Error> {
    sample(UNIQUE_ID_ALPHABET, UNIQUE_ID_LEN)
}

/// Create a code of exactly `length` decimal digits.
///
/// Every digit is drawn independently and uniformly.
pub fn generate_numeric_code(length: usize) -> Result<String, rand::Error> {
    sample(DIGITS, length)
}

/// Draw `len` symbols uniformly from `alphabet`.
///
/// Bytes at or above the largest multiple of the alphabet size are discarded,
/// so the modulo does not bias early symbols.
fn sample(alphabet: &[u8], len: usize) -> Result<String, rand::Error> {
    let limit = 256 - 256 % alphabet.len();
    let mut out = String::with_capacity(len);
    let mut buf = [0u8; 32];

    while out.len() < len {
        OsRng.try_fill_bytes(&mut buf)?;
        for byte in buf.iter().map(|b| *b as usize).filter(|b| *b < limit) {
            if out.len() == len {
                break;
            }
            out.push(alphabet[byte % alphabet.len()] as char);
        }
    }

    Ok(out)
}

/// Fill a fixed-size array from the OS random source.
pub fn try_random_bytes<const N: usize>() -> Result<[u8; N], rand::Error> {
    let mut bytes = [0u8; N];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Create a fresh lowercase hex nonce of [NONCE_BYTES] random bytes.
pub fn try_generate_nonce() -> Result<String, rand::Error> {
    let bytes = try_random_bytes::<NONCE_BYTES>()?;
    Ok(hexhex::hex(&bytes).to_string())
}
