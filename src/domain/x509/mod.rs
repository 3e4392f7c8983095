//! X.509 certificate schema walking.
//!
//! Applies the fixed TBSCertificate field order on top of the DER reader and
//! decodes the two parts the signer identity needs:
//! - the subjectKeyIdentifier extension
//! - organizationName / commonName / emailAddress from the subject Name

pub mod extensions;
pub mod subject;
pub mod tbs;

#[cfg(test)]
pub(crate) mod test_support;

pub use extensions::{
    decode_subject_key_identifier, find_subject_key_identifier, Extension, Extensions,
};
pub use subject::SubjectIdentity;
pub use tbs::TbsCertificate;
