//! Minimal DER reader.
//!
//! Provides a non-allocating tag-length-value extractor over an immutable
//! byte buffer:
//! - Definite short and long form lengths (up to four length octets)
//! - Optional-field handling through [`Extracted::Absent`] instead of errors
//! - Absolute byte offsets on every error for diagnostics
//!
//! Indefinite lengths and multi-octet tag numbers are rejected.

mod cursor;
mod error;

pub use cursor::{DerCursor, Expect, Extracted, Tlv};
pub use error::{DerError, DerResult};
