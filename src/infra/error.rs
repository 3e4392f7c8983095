//! Error types for signer identity extraction.

use thiserror::Error;

use crate::domain::der::DerError;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Every failure is fatal; no partial output is produced on any of them.
#[derive(Error, Debug, miette::Diagnostic)]
pub enum ExtractError {
    #[error("ASN.1 structure error: {0}")]
    #[diagnostic(help("the input must be a single DER-encoded X.509 certificate (not PEM)"))]
    Asn1(#[from] DerError),

    #[error("certificate has no subjectKeyIdentifier extension")]
    #[diagnostic(help("re-issue the signing certificate with subjectKeyIdentifier=hash"))]
    MissingExtension,

    #[error("unsupported output mode '{0}' (expected \"keyid\" or \"signer-name\")")]
    UnsupportedOutputMode(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::io::Error> for ExtractError {
    fn from(error: std::io::Error) -> Self {
        ExtractError::IoError(error.to_string())
    }
}
