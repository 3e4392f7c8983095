//! Centralized constants for DER tags, masks and length encodings.
//! Keep this intentionally small; only broadly reused literals should live here.

// === ASN.1 Universal Tags ===

/// ASN.1 BOOLEAN tag
pub const ASN1_BOOLEAN_TAG: u8 = 0x01;

/// ASN.1 INTEGER tag
pub const ASN1_INTEGER_TAG: u8 = 0x02;

/// ASN.1 BIT STRING tag
pub const ASN1_BIT_STRING_TAG: u8 = 0x03;

/// ASN.1 OCTET STRING tag
pub const ASN1_OCTET_STRING_TAG: u8 = 0x04;

/// ASN.1 OBJECT IDENTIFIER tag
pub const ASN1_OID_TAG: u8 = 0x06;

/// ASN.1 UTF8String tag
pub const ASN1_UTF8_STRING_TAG: u8 = 0x0c;

/// ASN.1 SEQUENCE tag (constructed)
pub const ASN1_SEQUENCE_TAG: u8 = 0x30;

/// ASN.1 SET tag (constructed)
pub const ASN1_SET_TAG: u8 = 0x31;

// === Context-specific Tags used by TBSCertificate ===

/// `[0] EXPLICIT Version`
pub const ASN1_CONTEXT_0_EXPLICIT_TAG: u8 = 0xa0;

/// `[1] IMPLICIT UniqueIdentifier` (issuerUniqueID, primitive DER form)
pub const ASN1_CONTEXT_1_IMPLICIT_TAG: u8 = 0x81;

/// `[1]` issuerUniqueID in constructed form
pub const ASN1_CONTEXT_1_CONSTRUCTED_TAG: u8 = 0xa1;

/// `[2] IMPLICIT UniqueIdentifier` (subjectUniqueID, primitive DER form)
pub const ASN1_CONTEXT_2_IMPLICIT_TAG: u8 = 0x82;

/// `[2]` subjectUniqueID in constructed form
pub const ASN1_CONTEXT_2_CONSTRUCTED_TAG: u8 = 0xa2;

/// `[3] EXPLICIT Extensions`
pub const ASN1_CONTEXT_3_EXPLICIT_TAG: u8 = 0xa3;

// === Tag / Length Masks ===

/// Low five bits of the identifier octet carry the tag number.
pub const DER_TAG_NUMBER_MASK: u8 = 0x1f;

/// Tag number value announcing a multi-octet (long form) tag number.
pub const DER_LONG_FORM_TAG: u8 = 0x1f;

/// Bit 8 of the first length octet selects the long form.
pub const DER_LONG_FORM_LENGTH_BIT: u8 = 0x80;

/// First length octet of the indefinite form (forbidden in DER).
pub const DER_INDEFINITE_LENGTH: u8 = 0x80;

/// Maximum number of subsequent length octets accepted in long form.
pub const DER_MAX_LENGTH_OCTETS: usize = 4;

/// Tag octet plus first length octet.
pub const DER_MIN_HEADER_LEN: usize = 2;

// === Signer Name Heuristic ===

/// Leading bytes compared when deciding whether organization and common
/// name describe the same signer.
pub const SIGNER_NAME_PREFIX_LEN: usize = 7;

/// Separator placed between organization and common name.
pub const SIGNER_NAME_SEPARATOR: &[u8] = b": ";
