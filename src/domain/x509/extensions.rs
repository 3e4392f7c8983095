use crate::domain::constants::{
    ASN1_BOOLEAN_TAG, ASN1_OCTET_STRING_TAG, ASN1_OID_TAG, ASN1_SEQUENCE_TAG,
};
use crate::domain::der::{DerCursor, DerResult, Tlv};
use crate::domain::oid::{self, KnownOid};

/// One decoded `Extension ::= SEQUENCE { extnID, critical, extnValue }`.
#[derive(Debug, Clone, Copy)]
pub struct Extension<'a> {
    /// Registry name; `None` for OIDs the extractor does not know.
    pub oid: Option<KnownOid>,
    pub raw_oid: &'a [u8],
    pub critical: bool,
    /// The extnValue OCTET STRING.
    pub value: Tlv<'a>,
}

/// Iterator over the entries of an `[3]` extensions container.
///
/// Yields `Err` once for the first malformed entry and then stops.
#[derive(Debug, Clone)]
pub struct Extensions<'a> {
    list: DerCursor<'a>,
    failed: bool,
}

impl<'a> Extensions<'a> {
    pub fn new(container: Tlv<'a>) -> DerResult<Self> {
        let mut container = container.value();
        let list = container.require(ASN1_SEQUENCE_TAG)?;
        Ok(Self {
            list: list.value(),
            failed: false,
        })
    }

    fn decode(list: &mut DerCursor<'a>) -> DerResult<Extension<'a>> {
        let mut extension = list.require(ASN1_SEQUENCE_TAG)?.value();
        let raw_oid = extension.require(ASN1_OID_TAG)?.bytes();
        let critical = extension
            .optional(ASN1_BOOLEAN_TAG)?
            .is_some_and(|flag| flag.bytes().first().is_some_and(|&b| b != 0));
        let value = extension.require(ASN1_OCTET_STRING_TAG)?;
        Ok(Extension {
            oid: KnownOid::from_der_bytes(raw_oid),
            raw_oid,
            critical,
            value,
        })
    }
}

impl<'a> Iterator for Extensions<'a> {
    type Item = DerResult<Extension<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.list.is_empty() {
            return None;
        }
        let item = Self::decode(&mut self.list);
        self.failed = item.is_err();
        Some(item)
    }
}

/// The key identifier inside a subjectKeyIdentifier extnValue.
///
/// The OCTET STRING payload is itself DER holding one more OCTET STRING.
pub fn decode_subject_key_identifier<'a>(extn_value: &Tlv<'a>) -> DerResult<&'a [u8]> {
    let mut payload = extn_value.value();
    Ok(payload.require(ASN1_OCTET_STRING_TAG)?.bytes())
}

/// Scan the extensions container for the subjectKeyIdentifier.
///
/// Unregistered extensions are skipped. The first subjectKeyIdentifier wins;
/// later ones must still decode but are otherwise ignored.
pub fn find_subject_key_identifier<'a>(container: Tlv<'a>) -> DerResult<Option<&'a [u8]>> {
    let mut key_id: Option<&'a [u8]> = None;

    for extension in Extensions::new(container)? {
        let extension = extension?;
        let Some(known) = extension.oid else {
            log::debug!(
                "Skipping unregistered extension {} at offset {}",
                oid::dotted(extension.raw_oid),
                extension.value.offset()
            );
            continue;
        };
        log::debug!(
            "Extension {known} (critical: {}, {} bytes)",
            extension.critical,
            extension.value.len()
        );
        if known != KnownOid::SubjectKeyIdentifier {
            continue;
        }

        let found = decode_subject_key_identifier(&extension.value)?;
        if key_id.is_some() {
            log::warn!(
                "Ignoring repeated subjectKeyIdentifier at offset {}",
                extension.value.offset()
            );
        } else {
            key_id = Some(found);
        }
    }

    Ok(key_id)
}
