//! Registry of the object identifiers the extractor understands.
//!
//! OIDs are matched on their raw DER content bytes; nothing here decodes them
//! except [`dotted`], which only exists for log output.

use std::fmt;

/// commonName (2.5.4.3)
pub const OID_COMMON_NAME: &[u8] = &[0x55, 0x04, 0x03];
/// countryName (2.5.4.6)
pub const OID_COUNTRY_NAME: &[u8] = &[0x55, 0x04, 0x06];
/// localityName (2.5.4.7)
pub const OID_LOCALITY_NAME: &[u8] = &[0x55, 0x04, 0x07];
/// stateOrProvinceName (2.5.4.8)
pub const OID_STATE_OR_PROVINCE_NAME: &[u8] = &[0x55, 0x04, 0x08];
/// organizationName (2.5.4.10)
pub const OID_ORGANIZATION_NAME: &[u8] = &[0x55, 0x04, 0x0a];
/// organizationalUnitName (2.5.4.11)
pub const OID_ORGANIZATIONAL_UNIT_NAME: &[u8] = &[0x55, 0x04, 0x0b];
/// PKCS#9 emailAddress (1.2.840.113549.1.9.1)
pub const OID_EMAIL_ADDRESS: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x01];

/// subjectKeyIdentifier (2.5.29.14)
pub const OID_SUBJECT_KEY_IDENTIFIER: &[u8] = &[0x55, 0x1d, 0x0e];
/// keyUsage (2.5.29.15)
pub const OID_KEY_USAGE: &[u8] = &[0x55, 0x1d, 0x0f];
/// subjectAltName (2.5.29.17)
pub const OID_SUBJECT_ALT_NAME: &[u8] = &[0x55, 0x1d, 0x11];
/// basicConstraints (2.5.29.19)
pub const OID_BASIC_CONSTRAINTS: &[u8] = &[0x55, 0x1d, 0x13];
/// authorityKeyIdentifier (2.5.29.35)
pub const OID_AUTHORITY_KEY_IDENTIFIER: &[u8] = &[0x55, 0x1d, 0x23];
/// extKeyUsage (2.5.29.37)
pub const OID_EXT_KEY_USAGE: &[u8] = &[0x55, 0x1d, 0x25];

/// Symbolic names for the registered OIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownOid {
    CommonName,
    CountryName,
    LocalityName,
    StateOrProvinceName,
    OrganizationName,
    OrganizationalUnitName,
    EmailAddress,
    SubjectKeyIdentifier,
    KeyUsage,
    SubjectAltName,
    BasicConstraints,
    AuthorityKeyIdentifier,
    ExtKeyUsage,
}

impl KnownOid {
    /// Resolve raw OID content bytes. Unregistered OIDs give `None`.
    #[must_use]
    pub fn from_der_bytes(oid: &[u8]) -> Option<Self> {
        let known = match oid {
            [0x55, 0x04, 0x03] => KnownOid::CommonName,
            [0x55, 0x04, 0x06] => KnownOid::CountryName,
            [0x55, 0x04, 0x07] => KnownOid::LocalityName,
            [0x55, 0x04, 0x08] => KnownOid::StateOrProvinceName,
            [0x55, 0x04, 0x0a] => KnownOid::OrganizationName,
            [0x55, 0x04, 0x0b] => KnownOid::OrganizationalUnitName,
            [0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x09, 0x01] => KnownOid::EmailAddress,
            [0x55, 0x1d, 0x0e] => KnownOid::SubjectKeyIdentifier,
            [0x55, 0x1d, 0x0f] => KnownOid::KeyUsage,
            [0x55, 0x1d, 0x11] => KnownOid::SubjectAltName,
            [0x55, 0x1d, 0x13] => KnownOid::BasicConstraints,
            [0x55, 0x1d, 0x23] => KnownOid::AuthorityKeyIdentifier,
            [0x55, 0x1d, 0x25] => KnownOid::ExtKeyUsage,
            _ => return None,
        };
        Some(known)
    }

    #[must_use]
    pub fn as_der_bytes(self) -> &'static [u8] {
        match self {
            KnownOid::CommonName => OID_COMMON_NAME,
            KnownOid::CountryName => OID_COUNTRY_NAME,
            KnownOid::LocalityName => OID_LOCALITY_NAME,
            KnownOid::StateOrProvinceName => OID_STATE_OR_PROVINCE_NAME,
            KnownOid::OrganizationName => OID_ORGANIZATION_NAME,
            KnownOid::OrganizationalUnitName => OID_ORGANIZATIONAL_UNIT_NAME,
            KnownOid::EmailAddress => OID_EMAIL_ADDRESS,
            KnownOid::SubjectKeyIdentifier => OID_SUBJECT_KEY_IDENTIFIER,
            KnownOid::KeyUsage => OID_KEY_USAGE,
            KnownOid::SubjectAltName => OID_SUBJECT_ALT_NAME,
            KnownOid::BasicConstraints => OID_BASIC_CONSTRAINTS,
            KnownOid::AuthorityKeyIdentifier => OID_AUTHORITY_KEY_IDENTIFIER,
            KnownOid::ExtKeyUsage => OID_EXT_KEY_USAGE,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            KnownOid::CommonName => "commonName",
            KnownOid::CountryName => "countryName",
            KnownOid::LocalityName => "localityName",
            KnownOid::StateOrProvinceName => "stateOrProvinceName",
            KnownOid::OrganizationName => "organizationName",
            KnownOid::OrganizationalUnitName => "organizationalUnitName",
            KnownOid::EmailAddress => "emailAddress",
            KnownOid::SubjectKeyIdentifier => "subjectKeyIdentifier",
            KnownOid::KeyUsage => "keyUsage",
            KnownOid::SubjectAltName => "subjectAltName",
            KnownOid::BasicConstraints => "basicConstraints",
            KnownOid::AuthorityKeyIdentifier => "authorityKeyIdentifier",
            KnownOid::ExtKeyUsage => "extKeyUsage",
        }
    }
}

impl fmt::Display for KnownOid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render OID content bytes in dotted-decimal form for diagnostics.
///
/// Malformed encodings (empty, unterminated or oversized arcs) fall back to
/// hex so that logging never fails.
#[must_use]
pub fn dotted(oid: &[u8]) -> String {
    let mut arcs: Vec<u64> = Vec::new();
    let mut accum: u64 = 0;
    let mut septets = 0;
    for &b in oid {
        septets += 1;
        if septets > 9 {
            return format!("OID({})", hex::encode(oid));
        }
        accum = (accum << 7) | u64::from(b & 0x7f);
        if b & 0x80 == 0 {
            if arcs.is_empty() {
                let (first, second) = match accum {
                    0..=39 => (0, accum),
                    40..=79 => (1, accum - 40),
                    _ => (2, accum - 80),
                };
                arcs.push(first);
                arcs.push(second);
            } else {
                arcs.push(accum);
            }
            accum = 0;
            septets = 0;
        }
    }
    if arcs.is_empty() || septets != 0 {
        return format!("OID({})", hex::encode(oid));
    }
    arcs.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
