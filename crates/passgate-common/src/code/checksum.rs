//! Checksummed short codes.
//!
//! The suffix is an unkeyed truncated hash. It catches transcription errors
//! but anyone can compute it, so it is no defence against forgery.

/// Number of checksum characters appended to a base code.
pub const CHECKSUM_LEN: usize = 4;

/// The checksum of `base_code`: four uppercase hex characters.
pub fn checksum(base_code: &str) -> String {
    super::digest_prefix(base_code, CHECKSUM_LEN)
}

/// Append the checksum to `base_code`.
pub fn generate_with_checksum(base_code: &str) -> String {
    let mut code = String::with_capacity(base_code.len() + CHECKSUM_LEN);
    code.push_str(base_code);
    code.push_str(&checksum(base_code));
    code
}

/// Verify a checksummed code, returning its base code when the suffix matches.
///
/// Codes without a non-empty base portion are rejected.
pub fn validate_with_checksum(code: &str) -> Option<&str> {
    if code.len() <= CHECKSUM_LEN {
        return None;
    }

    let split = code.len() - CHECKSUM_LEN;
    if !code.is_char_boundary(split) {
        return None;
    }

    let (base_code, claimed) = code.split_at(split);
    if claimed == checksum(base_code) {
        Some(base_code)
    } else {
        None
    }
}
