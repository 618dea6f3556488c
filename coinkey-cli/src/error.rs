//! Error types for the command-line front end.

use coinkey_address::AddressError;
use coinkey_crypto::CryptoError;
use coinkey_curve::CurveError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing input: {0}")]
    MissingInput(String),
}
