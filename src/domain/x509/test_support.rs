//! Hand-built DER fragments for unit tests.

use crate::domain::constants::{
    ASN1_BIT_STRING_TAG, ASN1_BOOLEAN_TAG, ASN1_CONTEXT_0_EXPLICIT_TAG,
    ASN1_CONTEXT_3_EXPLICIT_TAG, ASN1_INTEGER_TAG, ASN1_OCTET_STRING_TAG, ASN1_OID_TAG,
    ASN1_SEQUENCE_TAG, ASN1_SET_TAG, ASN1_UTF8_STRING_TAG,
};
use crate::domain::oid::{OID_COMMON_NAME, OID_SUBJECT_KEY_IDENTIFIER};

pub fn tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = value.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len < 0x100 {
        out.extend_from_slice(&[0x81, len as u8]);
    } else {
        out.extend_from_slice(&[0x82, (len >> 8) as u8, (len & 0xff) as u8]);
    }
    out.extend_from_slice(value);
    out
}

pub fn seq(parts: &[&[u8]]) -> Vec<u8> {
    tlv(ASN1_SEQUENCE_TAG, &parts.concat())
}

pub fn set(parts: &[&[u8]]) -> Vec<u8> {
    tlv(ASN1_SET_TAG, &parts.concat())
}

pub fn oid(content: &[u8]) -> Vec<u8> {
    tlv(ASN1_OID_TAG, content)
}

/// One single-valued RDN: `SET { SEQUENCE { oid, value } }`.
pub fn rdn(oid_content: &[u8], value_tag: u8, value: &[u8]) -> Vec<u8> {
    set(&[&seq(&[&oid(oid_content), &tlv(value_tag, value)])])
}

pub fn name(rdns: &[Vec<u8>]) -> Vec<u8> {
    tlv(ASN1_SEQUENCE_TAG, &rdns.concat())
}

pub fn extension(oid_content: &[u8], critical: Option<bool>, value: &[u8]) -> Vec<u8> {
    let mut body = oid(oid_content);
    if let Some(critical) = critical {
        body.extend(tlv(ASN1_BOOLEAN_TAG, &[if critical { 0xff } else { 0x00 }]));
    }
    body.extend(tlv(ASN1_OCTET_STRING_TAG, value));
    tlv(ASN1_SEQUENCE_TAG, &body)
}

pub fn ski_extension(key_id: &[u8]) -> Vec<u8> {
    extension(
        OID_SUBJECT_KEY_IDENTIFIER,
        None,
        &tlv(ASN1_OCTET_STRING_TAG, key_id),
    )
}

/// `[3] { SEQUENCE { extensions... } }`
pub fn extensions_container(extensions: &[Vec<u8>]) -> Vec<u8> {
    tlv(
        ASN1_CONTEXT_3_EXPLICIT_TAG,
        &tlv(ASN1_SEQUENCE_TAG, &extensions.concat()),
    )
}

/// Assembles TBSCertificate / Certificate encodings with placeholder
/// algorithm, issuer, validity and key fields.
#[derive(Debug, Clone)]
pub struct CertBuilder {
    pub version: bool,
    pub subject: Vec<u8>,
    pub unique_ids: Vec<Vec<u8>>,
    pub extensions: Option<Vec<Vec<u8>>>,
}

impl CertBuilder {
    pub fn new(subject: Vec<u8>) -> Self {
        Self {
            version: true,
            subject,
            unique_ids: Vec::new(),
            extensions: None,
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<Vec<u8>>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn tbs(&self) -> Vec<u8> {
        let mut body = Vec::new();
        if self.version {
            body.extend(tlv(
                ASN1_CONTEXT_0_EXPLICIT_TAG,
                &tlv(ASN1_INTEGER_TAG, &[0x02]),
            ));
        }
        body.extend(tlv(ASN1_INTEGER_TAG, &[0x01, 0x23]));
        body.extend(seq(&[&oid(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b])]));
        body.extend(name(&[rdn(OID_COMMON_NAME, ASN1_UTF8_STRING_TAG, b"Issuer")]));
        body.extend(seq(&[
            &tlv(0x17, b"250101000000Z"),
            &tlv(0x17, b"351231235959Z"),
        ]));
        body.extend(self.subject.iter().copied());
        body.extend(seq(&[
            &seq(&[&oid(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01])]),
            &tlv(ASN1_BIT_STRING_TAG, &[0x00, 0xde, 0xad]),
        ]));
        for unique_id in &self.unique_ids {
            body.extend(unique_id.iter().copied());
        }
        if let Some(extensions) = &self.extensions {
            body.extend(extensions_container(extensions));
        }
        tlv(ASN1_SEQUENCE_TAG, &body)
    }

    pub fn certificate(&self) -> Vec<u8> {
        seq(&[
            &self.tbs(),
            &seq(&[&oid(&[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b])]),
            &tlv(ASN1_BIT_STRING_TAG, &[0x00, 0xbe, 0xef]),
        ])
    }
}
