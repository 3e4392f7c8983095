use crate::domain::constants::{
    ASN1_OID_TAG, ASN1_SEQUENCE_TAG, ASN1_SET_TAG, SIGNER_NAME_PREFIX_LEN, SIGNER_NAME_SEPARATOR,
};
use crate::domain::der::{DerResult, Tlv};
use crate::domain::oid::{self, KnownOid};

/// Identity components collected from a subject Name.
///
/// Values are the raw attribute bytes whatever their string type. When an
/// attribute appears more than once the last occurrence wins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubjectIdentity<'a> {
    pub organization: Option<&'a [u8]>,
    pub common_name: Option<&'a [u8]>,
    pub email_address: Option<&'a [u8]>,
}

impl<'a> SubjectIdentity<'a> {
    /// Scan the RDN sequence of a subject Name.
    ///
    /// Only the first attribute of each RDN SET is examined.
    pub fn from_name(subject: Tlv<'a>) -> DerResult<Self> {
        let mut identity = Self::default();
        let mut rdns = subject.value();

        while !rdns.is_empty() {
            let mut rdn = rdns.require(ASN1_SET_TAG)?.value();
            let mut attribute = rdn.require(ASN1_SEQUENCE_TAG)?.value();
            let attribute_type = attribute.require(ASN1_OID_TAG)?.bytes();
            let value = attribute.any()?;

            match KnownOid::from_der_bytes(attribute_type) {
                Some(KnownOid::OrganizationName) => identity.organization = Some(value.bytes()),
                Some(KnownOid::CommonName) => identity.common_name = Some(value.bytes()),
                Some(KnownOid::EmailAddress) => identity.email_address = Some(value.bytes()),
                Some(other) => log::debug!("Ignoring subject attribute {other}"),
                None => log::debug!(
                    "Ignoring unregistered subject attribute {}",
                    oid::dotted(attribute_type)
                ),
            }
        }

        Ok(identity)
    }

    /// Pick the signer name.
    ///
    /// Organization and common name are combined as `"O: CN"` unless the
    /// common name already starts with the organization, or both share their
    /// first seven bytes, in which case the common name alone is used. With
    /// neither present the email address (possibly empty) is the result.
    #[must_use]
    pub fn signer_name(&self) -> Vec<u8> {
        let org = self.organization.filter(|v| !v.is_empty());
        let cn = self.common_name.filter(|v| !v.is_empty());

        match (org, cn) {
            (Some(org), Some(cn)) => {
                if cn.starts_with(org) || share_prefix(org, cn) {
                    cn.to_vec()
                } else {
                    [org, SIGNER_NAME_SEPARATOR, cn].concat()
                }
            }
            (Some(org), None) => org.to_vec(),
            (None, Some(cn)) => cn.to_vec(),
            (None, None) => self.email_address.unwrap_or_default().to_vec(),
        }
    }
}

fn share_prefix(org: &[u8], cn: &[u8]) -> bool {
    org.len() >= SIGNER_NAME_PREFIX_LEN
        && cn.len() >= SIGNER_NAME_PREFIX_LEN
        && org[..SIGNER_NAME_PREFIX_LEN] == cn[..SIGNER_NAME_PREFIX_LEN]
}
