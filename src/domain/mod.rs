//! Domain layer: DER reading, the certificate schema and signer identities.
//!
//! Nothing here performs I/O; every function works on an in-memory buffer.

pub mod constants;
pub mod der;
pub mod identity;
pub mod oid;
pub mod x509;
