//! The `ivHex:cipherHex` wire format of an encrypted credential.
//!
//! Structural validation happens here, before any cipher is involved, so that
//! oversized or truncated input never reaches decryption.

use std::fmt::Display;

use tracing::debug;

/// Length of the cipher IV in bytes.
pub const IV_LEN: usize = 16;

/// Cipher block size in bytes. Ciphertext is a whole number of blocks.
pub const BLOCK_LEN: usize = 16;

/// Smallest accepted ciphertext, one cipher block.
pub const MIN_CIPHERTEXT_BYTES: usize = BLOCK_LEN;

/// Largest accepted ciphertext.
pub const MAX_CIPHERTEXT_BYTES: usize = 4096;

/// The single outcome reported for any untrusted credential that could not be recovered.
///
/// It deliberately carries no cause.
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Debug)]
#[error("invalid credential")]
pub struct InvalidCredential;

/// Internal reason a blob failed structural validation.
///
/// Only logged. Callers see [InvalidCredential].
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Rejection {
    #[error("malformed blob")]
    Format,

    #[error("invalid iv")]
    Iv,

    #[error("invalid ciphertext encoding")]
    CiphertextEncoding,

    #[error("ciphertext out of bounds")]
    CiphertextBounds,
}

/// A structurally valid encrypted credential.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CredentialBlob {
    /// The IV used to encrypt the payload.
    pub iv: [u8; IV_LEN],

    /// The encrypted payload.
    pub ciphertext: Vec<u8>,
}

impl CredentialBlob {
    /// Parse and structurally validate the wire representation.
    pub fn parse(blob: &str) -> Result<Self, InvalidCredential> {
        Self::validate(blob).map_err(|rejection| {
            debug!(%rejection, blob_len = blob.len(), "credential rejected");
            InvalidCredential
        })
    }

    fn validate(blob: &str) -> Result<Self, Rejection> {
        let (iv_hex, ciphertext_hex) = blob.split_once(':').ok_or(Rejection::Format)?;
        if ciphertext_hex.contains(':') {
            return Err(Rejection::Format);
        }

        if iv_hex.len() != IV_LEN * 2 || !is_hex(iv_hex) {
            return Err(Rejection::Iv);
        }
        let iv: [u8; IV_LEN] = hexhex::decode(iv_hex)
            .map_err(|_| Rejection::Iv)?
            .try_into()
            .map_err(|_| Rejection::Iv)?;

        if ciphertext_hex.len() % 2 != 0 || !is_hex(ciphertext_hex) {
            return Err(Rejection::CiphertextEncoding);
        }

        let ciphertext_len = ciphertext_hex.len() / 2;
        if !(MIN_CIPHERTEXT_BYTES..=MAX_CIPHERTEXT_BYTES).contains(&ciphertext_len)
            || ciphertext_len % BLOCK_LEN != 0
        {
            return Err(Rejection::CiphertextBounds);
        }

        let ciphertext =
            hexhex::decode(ciphertext_hex).map_err(|_| Rejection::CiphertextEncoding)?;

        Ok(Self { iv, ciphertext })
    }
}

impl Display for CredentialBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}",
            hexhex::hex(&self.iv),
            hexhex::hex(&self.ciphertext)
        )
    }
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}
