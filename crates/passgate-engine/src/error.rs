/// Errors caused by the environment or configuration of the engine.
///
/// Untrusted credential input never produces this error.
/// It is reported as [passgate_common::blob::InvalidCredential] instead.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The engine is misconfigured.
    #[error("configuration error: {0}")]
    Config(&'static str),

    /// The OS random source failed.
    #[error("entropy error: {0}")]
    Entropy(anyhow::Error),

    /// A payload could not be encoded.
    #[error("encoding error: {0}")]
    Codec(anyhow::Error),

    /// Other type of unclassified error.
    #[error("unclassified error: {0}")]
    Unclassified(anyhow::Error),
}

pub(crate) fn entropy(err: impl std::error::Error + Send + Sync + 'static) -> Error {
    tracing::error!(?err, "random source failure");
    Error::Entropy(anyhow::Error::from(err))
}

pub(crate) fn codec(err: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::Codec(anyhow::Error::from(err))
}

pub(crate) fn unclassified(err: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::Unclassified(anyhow::Error::from(err))
}
