//! Extraction service: reads a certificate and renders one identity value.
//!
//! DER parsing stays in the domain layer; this service owns the input size
//! policy and the output encoding chosen by configuration.

use std::path::Path;

use crate::domain::identity::{OutputMode, SignerIdentity};
use crate::infra::config::ExtractorConfiguration;
use crate::infra::error::{ExtractError, ExtractResult};

/// Service extracting signer identities from DER certificates.
#[derive(Debug, Clone, Default)]
pub struct IdentityExtractor {
    config: ExtractorConfiguration,
}

impl IdentityExtractor {
    #[must_use]
    pub fn new(config: ExtractorConfiguration) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExtractorConfiguration {
        &self.config
    }

    /// Read a certificate file in full and extract its identity.
    pub fn extract_from_file<P: AsRef<Path>>(&self, path: P) -> ExtractResult<SignerIdentity> {
        let path = path.as_ref();
        log::debug!("Reading certificate from: {}", path.display());

        let metadata = std::fs::metadata(path).map_err(|e| {
            ExtractError::IoError(format!("Failed to access {}: {}", path.display(), e))
        })?;
        self.check_size(metadata.len())?;

        let der = std::fs::read(path).map_err(|e| {
            ExtractError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.extract_from_der(&der)
    }

    /// Extract the identity from certificate bytes already in memory.
    pub fn extract_from_der(&self, der: &[u8]) -> ExtractResult<SignerIdentity> {
        self.check_size(der.len() as u64)?;
        SignerIdentity::from_der(der)
    }

    /// Output bytes for `mode`, hex-encoded when configured. No newline is
    /// appended.
    #[must_use]
    pub fn render(&self, identity: &SignerIdentity, mode: OutputMode) -> Vec<u8> {
        let bytes = identity.output(mode);
        if self.config.hex_output() {
            hex::encode(bytes).into_bytes()
        } else {
            bytes.to_vec()
        }
    }

    fn check_size(&self, len: u64) -> ExtractResult<()> {
        if len == 0 {
            return Err(ExtractError::InvalidInput(
                "Certificate file is empty".to_string(),
            ));
        }
        if len > self.config.max_certificate_bytes {
            return Err(ExtractError::InvalidInput(format!(
                "Certificate is {} bytes, limit is {}",
                len, self.config.max_certificate_bytes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::oid::{OID_COMMON_NAME, OID_ORGANIZATION_NAME};
    use crate::domain::x509::test_support::{name, rdn, ski_extension, CertBuilder};
    use tempfile::NamedTempFile;

    fn certificate() -> Vec<u8> {
        CertBuilder::new(name(&[
            rdn(OID_ORGANIZATION_NAME, 0x13, b"Foo"),
            rdn(OID_COMMON_NAME, 0x0c, b"Bar"),
        ]))
        .with_extensions(vec![ski_extension(&[0xab, 0x01, 0x0a])])
        .certificate()
    }

    fn hex_config() -> ExtractorConfiguration {
        ExtractorConfiguration {
            output_encoding: "hex".to_string(),
            ..ExtractorConfiguration::default()
        }
    }

    #[test]
    fn test_render_raw() {
        let extractor = IdentityExtractor::default();
        let identity = extractor.extract_from_der(&certificate()).unwrap();

        assert_eq!(extractor.render(&identity, OutputMode::SignerName), b"Foo: Bar");
        assert_eq!(
            extractor.render(&identity, OutputMode::KeyId),
            vec![0xab, 0x01, 0x0a]
        );
    }

    #[test]
    fn test_render_hex() {
        let extractor = IdentityExtractor::new(hex_config());
        let identity = extractor.extract_from_der(&certificate()).unwrap();

        assert_eq!(extractor.render(&identity, OutputMode::KeyId), b"ab010a");
        assert_eq!(
            extractor.render(&identity, OutputMode::SignerName),
            b"466f6f3a20426172"
        );
    }

    #[test]
    fn test_extract_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), certificate()).unwrap();

        let identity = IdentityExtractor::default()
            .extract_from_file(file.path())
            .unwrap();
        assert_eq!(identity.key_id().as_bytes(), &[0xab, 0x01, 0x0a]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = IdentityExtractor::default()
            .extract_from_file(file.path())
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput(_)));
    }

    #[test]
    fn test_size_limit() {
        let der = certificate();
        let extractor = IdentityExtractor::new(ExtractorConfiguration {
            max_certificate_bytes: der.len() as u64 - 1,
            ..ExtractorConfiguration::default()
        });
        assert!(matches!(
            extractor.extract_from_der(&der),
            Err(ExtractError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = IdentityExtractor::default()
            .extract_from_file("/nonexistent/certificate.der")
            .unwrap_err();
        assert!(matches!(err, ExtractError::IoError(_)));
    }
}
