//! Signer Key Identifier Library
//!
//! Extracts the Subject Key Identifier and a signer name from a DER-encoded
//! X.509 certificate so a signing step can embed both in its signature block.
//! Parsing is done by a small purpose-built DER reader restricted to the
//! certificate schema.

pub mod domain;
pub mod infra;
pub mod services;

use std::path::Path;

pub use domain::der::{DerCursor, DerError, DerResult, Expect, Extracted, Tlv};
pub use domain::identity::{KeyId, OutputMode, SignerIdentity, SignerName};
pub use infra::config::{ConfigManager, ExportFormat, ExtractorConfiguration};
pub use infra::error::{ExtractError, ExtractResult};
pub use infra::{config, error};
pub use services::IdentityExtractor;

/// Extract one identity value from a certificate file.
///
/// Returns the bytes the selected mode writes out, rendered per `config`.
/// Nothing is returned unless the whole certificate decoded.
pub fn extract_output<P: AsRef<Path>>(
    path: P,
    mode: OutputMode,
    config: ExtractorConfiguration,
) -> ExtractResult<Vec<u8>> {
    let extractor = IdentityExtractor::new(config);
    let identity = extractor.extract_from_file(path)?;
    Ok(extractor.render(&identity, mode))
}
