use crate::domain::constants::{
    ASN1_CONTEXT_0_EXPLICIT_TAG, ASN1_CONTEXT_1_CONSTRUCTED_TAG, ASN1_CONTEXT_1_IMPLICIT_TAG,
    ASN1_CONTEXT_2_CONSTRUCTED_TAG, ASN1_CONTEXT_2_IMPLICIT_TAG, ASN1_CONTEXT_3_EXPLICIT_TAG,
    ASN1_INTEGER_TAG, ASN1_SEQUENCE_TAG,
};
use crate::domain::der::{DerCursor, DerResult, Tlv};

/// Field views of a TBSCertificate.
///
/// Every field borrows the certificate buffer; nothing is copied. Only
/// `subject` and `extensions` are decoded further, the rest are kept so that
/// callers can inspect offsets in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TbsCertificate<'a> {
    pub version: Option<Tlv<'a>>,
    pub serial_number: Tlv<'a>,
    pub signature_algorithm: Tlv<'a>,
    pub issuer: Tlv<'a>,
    pub validity: Tlv<'a>,
    pub subject: Tlv<'a>,
    pub subject_public_key_info: Tlv<'a>,
    pub issuer_unique_id: Option<Tlv<'a>>,
    pub subject_unique_id: Option<Tlv<'a>>,
    /// The `[3]` container; its content is the extensions SEQUENCE.
    pub extensions: Option<Tlv<'a>>,
}

impl<'a> TbsCertificate<'a> {
    /// Walk a complete `Certificate` down to its TBSCertificate.
    ///
    /// The outer signature algorithm and signature value, and any bytes after
    /// the outer SEQUENCE, are not examined.
    pub fn from_certificate(der: &'a [u8]) -> DerResult<Self> {
        let mut root = DerCursor::new(der);
        let certificate = root.require(ASN1_SEQUENCE_TAG)?;
        if !root.is_empty() {
            log::debug!(
                "Ignoring {} trailing bytes after certificate",
                root.remaining()
            );
        }
        let mut certificate = certificate.value();
        let tbs = certificate.require(ASN1_SEQUENCE_TAG)?;
        Self::parse(tbs.value())
    }

    /// Apply the TBSCertificate field sequence to its content bytes.
    pub fn parse(mut tbs: DerCursor<'a>) -> DerResult<Self> {
        let version = tbs.optional(ASN1_CONTEXT_0_EXPLICIT_TAG)?;
        let serial_number = tbs.require(ASN1_INTEGER_TAG)?;
        let signature_algorithm = tbs.require(ASN1_SEQUENCE_TAG)?;
        let issuer = tbs.require(ASN1_SEQUENCE_TAG)?;
        let validity = tbs.require(ASN1_SEQUENCE_TAG)?;
        let subject = tbs.require(ASN1_SEQUENCE_TAG)?;
        let subject_public_key_info = tbs.require(ASN1_SEQUENCE_TAG)?;
        let issuer_unique_id = Self::unique_id(
            &mut tbs,
            ASN1_CONTEXT_1_IMPLICIT_TAG,
            ASN1_CONTEXT_1_CONSTRUCTED_TAG,
        )?;
        let subject_unique_id = Self::unique_id(
            &mut tbs,
            ASN1_CONTEXT_2_IMPLICIT_TAG,
            ASN1_CONTEXT_2_CONSTRUCTED_TAG,
        )?;
        let extensions = tbs.optional(ASN1_CONTEXT_3_EXPLICIT_TAG)?;

        log::debug!(
            "TBSCertificate: version {}, subject at offset {}, extensions {}",
            if version.is_some() { "explicit" } else { "default (v1)" },
            subject.offset(),
            if extensions.is_some() { "present" } else { "absent" }
        );
        if !tbs.is_empty() {
            log::debug!(
                "Ignoring {} unparsed bytes at offset {} in TBSCertificate",
                tbs.remaining(),
                tbs.offset()
            );
        }

        Ok(Self {
            version,
            serial_number,
            signature_algorithm,
            issuer,
            validity,
            subject,
            subject_public_key_info,
            issuer_unique_id,
            subject_unique_id,
            extensions,
        })
    }

    // DER uses the primitive IMPLICIT BIT STRING form; the constructed form
    // is accepted as well.
    fn unique_id(
        tbs: &mut DerCursor<'a>,
        primitive: u8,
        constructed: u8,
    ) -> DerResult<Option<Tlv<'a>>> {
        match tbs.optional(primitive)? {
            Some(tlv) => Ok(Some(tlv)),
            None => tbs.optional(constructed),
        }
    }
}
