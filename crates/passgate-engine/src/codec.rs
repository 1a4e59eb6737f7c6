//! Payload codec: credential payload <-> encrypted `ivHex:cipherHex` blob.

use passgate_common::{
    blob::{CredentialBlob, InvalidCredential},
    id::try_generate_nonce,
    payload::{CredentialPayload, CredentialType},
};
use tracing::debug;

use crate::{cipher::Cipher, error, Error};

/// Mints and recovers encrypted credentials.
#[derive(Clone, Debug)]
pub struct PayloadCodec {
    cipher: Cipher,
}

impl PayloadCodec {
    /// Create a codec around a keyed cipher.
    pub fn new(cipher: Cipher) -> Self {
        Self { cipher }
    }

    /// Build a fresh payload issued at `now_ms` and encrypt it.
    ///
    /// Two calls never return the same blob, since both the nonce and the IV are fresh.
    pub fn generate<P: AsRef<str>>(
        &self,
        now_ms: i64,
        user_id: u64,
        credential_type: CredentialType,
        expiry_time_ms: i64,
        permissions: &[P],
    ) -> Result<String, Error> {
        let payload = CredentialPayload {
            user_id,
            credential_type,
            issued_at: now_ms,
            expiry_time: expiry_time_ms,
            permissions: permissions
                .iter()
                .map(|permission| permission.as_ref().to_string())
                .collect(),
            nonce: try_generate_nonce().map_err(error::entropy)?,
        };

        self.seal(&payload)
    }

    /// Encrypt an already built payload.
    pub fn seal(&self, payload: &CredentialPayload) -> Result<String, Error> {
        let plaintext = serde_json::to_vec(payload).map_err(error::codec)?;
        Ok(self.cipher.encrypt(&plaintext)?.to_string())
    }

    /// Recover the payload of a scanned blob.
    ///
    /// Every failure is the same [InvalidCredential]; the reason is only logged.
    /// Expiry is not judged here.
    pub fn parse(&self, blob: &str) -> Result<CredentialPayload, InvalidCredential> {
        let blob = CredentialBlob::parse(blob)?;

        let plaintext = self.cipher.decrypt(&blob).inspect_err(|_| {
            debug!("credential rejected: decryption failed");
        })?;

        serde_json::from_slice(&plaintext).map_err(|err| {
            debug!(%err, "credential rejected: invalid payload");
            InvalidCredential
        })
    }
}
