/// Structural DER decoding failures.
///
/// Every variant carries the absolute byte offset of the element it concerns
/// so diagnostics can point into the certificate file.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DerError {
    #[error("truncated element at offset {offset}: needs {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("unexpected tag at offset {offset}: expected 0x{expected:02x}, found 0x{found:02x}")]
    UnexpectedTag {
        offset: usize,
        expected: u8,
        found: u8,
    },
    #[error("unsupported long-form tag 0x{tag:02x} at offset {offset}")]
    UnsupportedTag { offset: usize, tag: u8 },
    #[error("indefinite length at offset {offset} is not allowed in DER")]
    IndefiniteLength { offset: usize },
    #[error("length at offset {offset} uses {octets} length octets (maximum 4)")]
    LengthTooLarge { offset: usize, octets: usize },
}

impl DerError {
    /// Byte offset of the element that failed to decode.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            DerError::Truncated { offset, .. }
            | DerError::UnexpectedTag { offset, .. }
            | DerError::UnsupportedTag { offset, .. }
            | DerError::IndefiniteLength { offset }
            | DerError::LengthTooLarge { offset, .. } => offset,
        }
    }
}

pub type DerResult<T> = Result<T, DerError>;
