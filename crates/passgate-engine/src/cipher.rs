//! AES-256-CBC encryption of credential payloads.

use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use passgate_common::{
    blob::{CredentialBlob, InvalidCredential, IV_LEN},
    id::try_random_bytes,
};
use sha2::{Digest, Sha256};

use crate::{error, Error};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Length of the derived AES-256 key.
pub const KEY_LEN: usize = 32;

/// Symmetric cipher keyed once from the application secret.
#[derive(Clone)]
pub struct Cipher {
    key: [u8; KEY_LEN],
}

impl Cipher {
    /// Derive the cipher key from a static secret.
    pub fn from_secret(secret: &[u8]) -> Result<Self, Error> {
        if secret.is_empty() {
            return Err(Error::Config("empty secret"));
        }

        Ok(Self {
            key: Sha256::digest(secret).into(),
        })
    }

    /// Encrypt `plaintext` under a fresh random IV.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<CredentialBlob, Error> {
        let iv = try_random_bytes::<IV_LEN>().map_err(error::entropy)?;
        Ok(self.encrypt_with_iv(iv, plaintext))
    }

    /// Encrypt `plaintext` under the given IV.
    ///
    /// Reusing an IV for two plaintexts leaks their common prefix, prefer [Self::encrypt].
    pub fn encrypt_with_iv(&self, iv: [u8; IV_LEN], plaintext: &[u8]) -> CredentialBlob {
        let ciphertext = Aes256CbcEnc::new(&self.key.into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        CredentialBlob { iv, ciphertext }
    }

    /// Decrypt a structurally valid blob.
    ///
    /// Only reachable through the payload codec, which hides padding failures.
    pub(crate) fn decrypt(&self, blob: &CredentialBlob) -> Result<Vec<u8>, InvalidCredential> {
        Aes256CbcDec::new(&self.key.into(), &blob.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&blob.ciphertext)
            .map_err(|_| InvalidCredential)
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipher").finish_non_exhaustive()
    }
}
