use std::fmt;

use super::error::{DerError, DerResult};
use crate::domain::constants::{
    DER_INDEFINITE_LENGTH, DER_LONG_FORM_LENGTH_BIT, DER_LONG_FORM_TAG, DER_MAX_LENGTH_OCTETS,
    DER_MIN_HEADER_LEN, DER_TAG_NUMBER_MASK,
};

/// Tag accepted by [`DerCursor::extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Only this exact identifier octet.
    Tag(u8),
    /// Whatever tag comes next.
    Any,
}

/// Outcome of an extraction that is allowed to find nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<'a> {
    Element(Tlv<'a>),
    /// The optional field is not there; the cursor was not moved.
    Absent,
}

impl<'a> Extracted<'a> {
    #[must_use]
    pub fn into_option(self) -> Option<Tlv<'a>> {
        match self {
            Extracted::Element(tlv) => Some(tlv),
            Extracted::Absent => None,
        }
    }
}

/// Read position over an immutable DER buffer.
///
/// Invariant: `offset + remaining <= buf.len()`. Cursors are plain `Copy`
/// values; the value cursor handed out by an extraction shares the buffer but
/// not the position of its parent.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DerCursor<'a> {
    buf: &'a [u8],
    offset: usize,
    remaining: usize,
}

/// One decoded tag-length-value element.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    tag: u8,
    offset: usize,
    header_len: usize,
    value: DerCursor<'a>,
}

impl<'a> DerCursor<'a> {
    /// Cursor spanning the whole buffer.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            remaining: buf.len(),
        }
    }

    /// Absolute offset of the next unread byte.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// The unread bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[self.offset..self.offset + self.remaining]
    }

    /// Consume one element.
    ///
    /// With `optional` set, an empty cursor or a tag mismatch yields
    /// [`Extracted::Absent`] and leaves the cursor where it was, so the caller
    /// can try a different tag. Every other failure is a [`DerError`].
    pub fn extract(&mut self, expect: Expect, optional: bool) -> DerResult<Extracted<'a>> {
        if optional && self.is_empty() {
            return Ok(Extracted::Absent);
        }
        let found = self.peek_tag()?;
        if let Expect::Tag(expected) = expect {
            if found != expected {
                if optional {
                    return Ok(Extracted::Absent);
                }
                return Err(DerError::UnexpectedTag {
                    offset: self.offset,
                    expected,
                    found,
                });
            }
        }
        self.consume().map(Extracted::Element)
    }

    /// Consume a mandatory element carrying `tag`.
    pub fn require(&mut self, tag: u8) -> DerResult<Tlv<'a>> {
        let found = self.peek_tag()?;
        if found != tag {
            return Err(DerError::UnexpectedTag {
                offset: self.offset,
                expected: tag,
                found,
            });
        }
        self.consume()
    }

    /// Consume an element carrying `tag` if it is the next one.
    pub fn optional(&mut self, tag: u8) -> DerResult<Option<Tlv<'a>>> {
        self.extract(Expect::Tag(tag), true)
            .map(Extracted::into_option)
    }

    /// Consume a mandatory element whatever its tag.
    pub fn any(&mut self) -> DerResult<Tlv<'a>> {
        self.peek_tag()?;
        self.consume()
    }

    fn peek_tag(&self) -> DerResult<u8> {
        if self.remaining < DER_MIN_HEADER_LEN {
            return Err(DerError::Truncated {
                offset: self.offset,
                needed: DER_MIN_HEADER_LEN,
                available: self.remaining,
            });
        }
        let tag = self.buf[self.offset];
        if tag & DER_TAG_NUMBER_MASK == DER_LONG_FORM_TAG {
            return Err(DerError::UnsupportedTag {
                offset: self.offset,
                tag,
            });
        }
        Ok(tag)
    }

    // Caller has checked that the two header octets are present.
    fn consume(&mut self) -> DerResult<Tlv<'a>> {
        let start = self.offset;
        let tag = self.buf[start];
        let first = self.buf[start + 1];

        let (length, header_len) = if first & DER_LONG_FORM_LENGTH_BIT == 0 {
            (usize::from(first), DER_MIN_HEADER_LEN)
        } else if first == DER_INDEFINITE_LENGTH {
            return Err(DerError::IndefiniteLength { offset: start });
        } else {
            let octets = usize::from(first & !DER_LONG_FORM_LENGTH_BIT);
            if octets > DER_MAX_LENGTH_OCTETS {
                return Err(DerError::LengthTooLarge {
                    offset: start,
                    octets,
                });
            }
            let header_len = DER_MIN_HEADER_LEN + octets;
            if self.remaining < header_len {
                return Err(DerError::Truncated {
                    offset: start,
                    needed: header_len,
                    available: self.remaining,
                });
            }
            let length = self.buf[start + DER_MIN_HEADER_LEN..start + header_len]
                .iter()
                .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
            (length, header_len)
        };

        if length > self.remaining - header_len {
            return Err(DerError::Truncated {
                offset: start,
                needed: header_len.saturating_add(length),
                available: self.remaining,
            });
        }

        let value = DerCursor {
            buf: self.buf,
            offset: start + header_len,
            remaining: length,
        };
        let consumed = header_len + length;
        self.offset += consumed;
        self.remaining -= consumed;

        Ok(Tlv {
            tag,
            offset: start,
            header_len,
            value,
        })
    }
}

impl<'a> Tlv<'a> {
    /// Identifier octet (class, constructed bit and tag number).
    #[must_use]
    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Absolute offset of the identifier octet.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Tag octet plus length octets.
    #[must_use]
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Length of the value in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.remaining
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.remaining == 0
    }

    /// Fresh cursor over the value bytes.
    #[must_use]
    pub fn value(&self) -> DerCursor<'a> {
        self.value
    }

    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.value.as_bytes()
    }

    /// The full encoding as it appears in the buffer: tag, length, value.
    #[must_use]
    pub fn encoded(&self) -> &'a [u8] {
        &self.value.buf[self.offset..self.offset + self.header_len + self.len()]
    }
}

impl fmt::Debug for DerCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DerCursor(offset={}, remaining={})",
            self.offset, self.remaining
        )
    }
}

impl fmt::Debug for Tlv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tlv(tag=0x{:02x}, offset={}, len={})",
            self.tag,
            self.offset,
            self.len()
        )
    }
}
