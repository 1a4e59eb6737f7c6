//! `passgate-engine` turns access decisions into physical credentials and back.
//!
//! An [Engine] is built once per process from the application secret and can
//! be cloned freely into request handlers. It mints encrypted QR credentials,
//! recovers them from scans, and computes rotating codes against its clock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use passgate_common::{code::window, expiry};

pub use builder::EngineBuilder;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::Error;
pub use passgate_common::{
    blob::InvalidCredential,
    code::checksum::{generate_with_checksum, validate_with_checksum},
    id::{generate_numeric_code, generate_unique_id, DEFAULT_NUMERIC_CODE_LEN},
    payload::{CredentialPayload, CredentialType},
};

mod builder;
mod error;

pub mod cipher;
pub mod clock;
pub mod codec;

/// Environment variable holding the application secret.
pub const SECRET_ENV: &str = "PASSGATE_SECRET";

/// Environment variable naming a file that holds the application secret.
pub const SECRET_FILE_ENV: &str = "PASSGATE_SECRET_FILE";

/// The credential engine handle.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    codec: codec::PayloadCodec,
    clock: Arc<dyn Clock>,
}

/// Outcome of checking a scanned credential for use.
#[derive(Debug, PartialEq, Eq)]
pub enum Inspection {
    /// The credential is authentic and unexpired.
    Valid {
        /// The recovered payload.
        payload: CredentialPayload,
        /// Whole seconds until expiry.
        remaining_seconds: u64,
    },

    /// The credential is authentic but expired.
    Expired(CredentialPayload),

    /// The credential could not be recovered.
    Invalid,
}

impl Engine {
    /// Construct a new builder.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The current instant of the engine clock, in epoch milliseconds.
    pub fn now_ms(&self) -> i64 {
        self.inner.clock.now_ms()
    }

    /// Mint an encrypted credential.
    ///
    /// Fails only when the environment cannot produce randomness.
    pub fn generate<P: AsRef<str>>(
        &self,
        user_id: u64,
        credential_type: CredentialType,
        expiry_time_ms: i64,
        permissions: &[P],
    ) -> Result<String, Error> {
        self.inner.codec.generate(
            self.now_ms(),
            user_id,
            credential_type,
            expiry_time_ms,
            permissions,
        )
    }

    /// Recover the payload of a scanned credential.
    ///
    /// Every kind of malformed or forged input yields the same [InvalidCredential].
    /// Expiry and usage limits are left to the caller.
    pub fn parse(&self, blob: &str) -> Result<CredentialPayload, InvalidCredential> {
        self.inner.codec.parse(blob)
    }

    /// Recover a scanned credential and check it against the clock.
    pub fn inspect(&self, blob: &str) -> Inspection {
        let Ok(payload) = self.parse(blob) else {
            return Inspection::Invalid;
        };

        let now_ms = self.now_ms();
        if payload.is_valid_at(now_ms) {
            Inspection::Valid {
                remaining_seconds: expiry::remaining_seconds(payload.expiry_time, now_ms),
                payload,
            }
        } else {
            Inspection::Expired(payload)
        }
    }

    /// The rotating code of the current window.
    pub fn rotating_code(&self, base_code: &str, window_minutes: i64) -> String {
        window::generate(base_code, window_minutes, self.now_ms())
    }

    /// Whether `code` is the rotating code of the current or the previous window.
    pub fn validate_rotating_code(&self, code: &str, base_code: &str, window_minutes: i64) -> bool {
        window::validate(code, base_code, window_minutes, self.now_ms())
    }

    /// Whether a credential expiring at `expiry_time_ms` is still usable.
    pub fn is_valid(&self, expiry_time_ms: i64) -> bool {
        expiry::is_valid(expiry_time_ms, self.now_ms())
    }

    /// Whole seconds left until `expiry_time_ms`, never negative.
    pub fn remaining_seconds(&self, expiry_time_ms: i64) -> u64 {
        expiry::remaining_seconds(expiry_time_ms, self.now_ms())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("clock", &self.inner.clock.kind())
            .finish_non_exhaustive()
    }
}
