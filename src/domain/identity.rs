//! Signer identity values handed to the signing pipeline.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::domain::x509::{find_subject_key_identifier, SubjectIdentity, TbsCertificate};
use crate::infra::error::{ExtractError, ExtractResult};

/// Raw Subject Key Identifier bytes (may contain non-text bytes).
#[derive(Clone, PartialEq, Eq)]
pub struct KeyId(Box<[u8]>);

/// Raw signer name bytes as taken from the subject attributes.
#[derive(Clone, PartialEq, Eq)]
pub struct SignerName(Box<[u8]>);

/// Key identifier and signer name of one certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignerIdentity {
    signer_name: SignerName,
    key_id: KeyId,
}

/// What the extractor writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    SignerName,
    KeyId,
}

impl KeyId {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", hex::encode(&self.0))
    }
}

impl SignerName {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Text form for logs; invalid UTF-8 is replaced.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Debug for SignerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignerName({:?})", self.to_string_lossy())
    }
}

impl SignerIdentity {
    #[must_use]
    pub fn new(signer_name: SignerName, key_id: KeyId) -> Self {
        Self {
            signer_name,
            key_id,
        }
    }

    /// Parse a DER certificate and derive both values in one pass.
    ///
    /// A certificate without a subjectKeyIdentifier extension cannot serve
    /// as a signer identity and is rejected with
    /// [`ExtractError::MissingExtension`].
    pub fn from_der(der: &[u8]) -> ExtractResult<Self> {
        let tbs = TbsCertificate::from_certificate(der)?;
        let subject = SubjectIdentity::from_name(tbs.subject)?;
        let key_id = match tbs.extensions {
            Some(container) => find_subject_key_identifier(container)?,
            None => None,
        };
        let Some(key_id) = key_id else {
            return Err(ExtractError::MissingExtension);
        };

        let identity = Self::new(
            SignerName::new(subject.signer_name()),
            KeyId::new(key_id.to_vec()),
        );
        log::info!(
            "Extracted signer '{}' with key identifier {}",
            identity.signer_name.to_string_lossy(),
            identity.key_id
        );
        Ok(identity)
    }

    #[must_use]
    pub fn signer_name(&self) -> &SignerName {
        &self.signer_name
    }

    #[must_use]
    pub fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    /// Raw bytes for the selected mode.
    #[must_use]
    pub fn output(&self, mode: OutputMode) -> &[u8] {
        match mode {
            OutputMode::SignerName => self.signer_name.as_bytes(),
            OutputMode::KeyId => self.key_id.as_bytes(),
        }
    }
}

impl OutputMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::SignerName => "signer-name",
            OutputMode::KeyId => "keyid",
        }
    }
}

impl FromStr for OutputMode {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signer-name" => Ok(OutputMode::SignerName),
            "keyid" => Ok(OutputMode::KeyId),
            other => Err(ExtractError::UnsupportedOutputMode(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
