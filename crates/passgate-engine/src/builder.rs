use std::sync::Arc;

use tracing::info;

use crate::{
    cipher::Cipher,
    clock::{Clock, SystemClock},
    codec::PayloadCodec,
    error, Engine, EngineInner, Error, SECRET_ENV, SECRET_FILE_ENV,
};

/// Where the secret of a builder came from.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SecretSource {
    Manual,
    Env,
    File,
}

/// A builder for configuring an [Engine].
pub struct EngineBuilder {
    secret: Option<(Vec<u8>, SecretSource)>,
    clock: Arc<dyn Clock>,
}

impl EngineBuilder {
    pub(crate) fn new() -> Self {
        Self {
            secret: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Infer the secret from the process environment.
    ///
    /// Reads [SECRET_ENV], falling back to the file named by [SECRET_FILE_ENV].
    /// Fails with [Error::Config] when neither is set.
    pub fn from_environment(self) -> Result<Self, Error> {
        self.infer(|name| std::env::var(name).ok())
    }

    pub(crate) fn infer(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        if let Some(secret) = var(SECRET_ENV) {
            self.secret = Some((secret.into_bytes(), SecretSource::Env));
            Ok(self)
        } else if let Some(path) = var(SECRET_FILE_ENV) {
            let mut secret = std::fs::read(path).map_err(error::unclassified)?;
            while secret.last().is_some_and(|b| *b == b'\n' || *b == b'\r') {
                secret.pop();
            }
            self.secret = Some((secret, SecretSource::File));
            Ok(self)
        } else {
            Err(Error::Config("secret not inferrable"))
        }
    }

    /// Use an explicit secret.
    pub fn with_secret(mut self, secret: impl AsRef<[u8]>) -> Self {
        self.secret = Some((secret.as_ref().to_vec(), SecretSource::Manual));
        self
    }

    /// Override the wall clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Derive the key and build the engine.
    pub fn build(self) -> Result<Engine, Error> {
        let (secret, source) = self.secret.ok_or(Error::Config("secret not provided"))?;
        let cipher = Cipher::from_secret(&secret)?;

        info!(?source, clock = self.clock.kind(), "credential engine ready");

        Ok(Engine {
            inner: Arc::new(EngineInner {
                codec: PayloadCodec::new(cipher),
                clock: self.clock,
            }),
        })
    }
}
