//! BER decoding.
//!
//! Zero-copy decoding using `Bytes` to avoid allocations. Decoding happens in
//! two phases: [`Decoder::read_raw`] splits a TLV off the buffer without
//! interpreting its contents, and the `RawTaggedValue::as_*` methods
//! re-decode that span under a chosen type rule.

use super::length::decode_length;
use super::tag;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::oid::Oid;
use bytes::Bytes;

pub(crate) type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Build a decode error, logging it at debug level.
fn fail(offset: usize, kind: DecodeErrorKind) -> DecodeError {
    tracing::debug!(target: "snmp_decode::ber", { snmp.offset = offset, %kind }, "decode error");
    DecodeError::new(offset, kind)
}

/// BER decoder that reads from a byte buffer.
///
/// Offsets reported in errors are absolute: a decoder created for the
/// contents of a SEQUENCE keeps counting from where that SEQUENCE started in
/// the enclosing buffer.
#[derive(Debug, Clone)]
pub struct Decoder {
    data: Bytes,
    offset: usize,
    base: usize,
}

impl Decoder {
    /// Create a new decoder from bytes.
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            offset: 0,
            base: 0,
        }
    }

    /// Create a decoder from a byte slice (copies the data).
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    fn nested(data: Bytes, base: usize) -> Self {
        Self {
            data,
            offset: 0,
            base,
        }
    }

    /// Get the current absolute offset.
    pub fn offset(&self) -> usize {
        self.base + self.offset
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check if we've reached the end.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Peek at the next tag without consuming it.
    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    /// Read a tag byte.
    pub fn read_tag(&mut self) -> DecodeResult<u8> {
        let tag = self
            .peek_tag()
            .ok_or_else(|| fail(self.offset(), DecodeErrorKind::TruncatedData))?;
        self.offset += 1;
        Ok(tag)
    }

    /// Read a length.
    pub fn read_length(&mut self) -> DecodeResult<usize> {
        let (len, consumed) = decode_length(&self.data[self.offset..], self.offset())
            .inspect_err(|e| {
                tracing::debug!(target: "snmp_decode::ber", { snmp.offset = e.offset, kind = %e.kind }, "bad length");
            })?;
        self.offset += consumed;
        Ok(len)
    }

    /// Read raw bytes without copying.
    pub fn read_bytes(&mut self, len: usize) -> DecodeResult<Bytes> {
        // saturating_add keeps a hostile length from wrapping past the bounds check
        if self.offset.saturating_add(len) > self.data.len() {
            return Err(fail(
                self.offset(),
                DecodeErrorKind::InsufficientData {
                    needed: len,
                    available: self.remaining(),
                },
            ));
        }
        let bytes = self.data.slice(self.offset..self.offset + len);
        self.offset += len;
        Ok(bytes)
    }

    /// Read and expect a specific tag, returning the content length.
    pub fn expect_tag(&mut self, expected: u8) -> DecodeResult<usize> {
        let start = self.offset();
        let tag = self.read_tag()?;
        if tag != expected {
            return Err(fail(
                start,
                DecodeErrorKind::UnexpectedTag {
                    expected,
                    actual: tag,
                },
            ));
        }
        self.read_length()
    }

    /// Read a BER integer (signed).
    pub fn read_integer(&mut self) -> DecodeResult<i32> {
        let len = self.expect_tag(tag::universal::INTEGER)?;
        let offset = self.offset();
        let bytes = self.read_bytes(len)?;
        decode_integer_value(&bytes, offset)
    }

    /// Read an OCTET STRING.
    pub fn read_octet_string(&mut self) -> DecodeResult<Bytes> {
        let len = self.expect_tag(tag::universal::OCTET_STRING)?;
        self.read_bytes(len)
    }

    /// Read an OBJECT IDENTIFIER.
    pub fn read_oid(&mut self) -> DecodeResult<Oid> {
        let len = self.expect_tag(tag::universal::OBJECT_IDENTIFIER)?;
        let offset = self.offset();
        let bytes = self.read_bytes(len)?;
        Oid::from_ber(&bytes).map_err(|e| fail(offset + e.offset, e.kind))
    }

    /// Read a SEQUENCE, returning a decoder for its contents.
    pub fn read_sequence(&mut self) -> DecodeResult<Decoder> {
        self.read_constructed(tag::universal::SEQUENCE)
    }

    /// Read a constructed type with a specific tag, returning a decoder for its contents.
    pub fn read_constructed(&mut self, expected_tag: u8) -> DecodeResult<Decoder> {
        let len = self.expect_tag(expected_tag)?;
        let base = self.offset();
        let content = self.read_bytes(len)?;
        Ok(Decoder::nested(content, base))
    }

    /// Split the next TLV off the buffer without interpreting its contents.
    pub fn read_raw(&mut self) -> DecodeResult<RawTaggedValue> {
        let start = self.offset;
        let tag = self.read_tag()?;
        let len = self.read_length()?;
        let header_len = self.offset - start;
        self.read_bytes(len)?;

        Ok(RawTaggedValue {
            tag,
            offset: self.base + start,
            header_len,
            full: self.data.slice(start..self.offset),
        })
    }

    /// Fail if any bytes remain.
    pub fn expect_end(&self) -> DecodeResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(fail(
                self.offset(),
                DecodeErrorKind::TrailingData {
                    remaining: self.remaining(),
                },
            ))
        }
    }

    /// Get remaining data as a slice.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.data[self.offset..]
    }
}

/// An unparsed tag-length-value span.
///
/// Holds the tag byte and the complete TLV bytes; the content is only given
/// meaning when one of the `as_*` methods is called with a type rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTaggedValue {
    tag: u8,
    offset: usize,
    header_len: usize,
    full: Bytes,
}

impl RawTaggedValue {
    /// The tag byte.
    pub fn tag(&self) -> u8 {
        self.tag
    }

    /// Absolute offset of the tag byte in the decoded buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Absolute offset of the first content byte.
    pub fn content_offset(&self) -> usize {
        self.offset + self.header_len
    }

    /// Content bytes (after tag and length).
    pub fn content(&self) -> Bytes {
        self.full.slice(self.header_len..)
    }

    /// Complete TLV bytes, including tag and length.
    pub fn full_bytes(&self) -> &Bytes {
        &self.full
    }

    /// Decoder positioned at the tag byte, for re-reading this value as a
    /// structure.
    pub fn decoder(&self) -> Decoder {
        Decoder::nested(self.full.clone(), self.offset)
    }

    /// Decode the content as a signed 32-bit INTEGER.
    pub fn as_integer(&self) -> DecodeResult<i32> {
        decode_integer_value(&self.full[self.header_len..], self.content_offset())
    }

    /// Decode the content as an unsigned 32-bit value.
    pub fn as_unsigned32(&self) -> DecodeResult<u32> {
        let value = decode_unsigned_value(&self.full[self.header_len..], 4, self.content_offset())?;
        Ok(value as u32)
    }

    /// Decode the content as an unsigned 64-bit value.
    pub fn as_unsigned64(&self) -> DecodeResult<u64> {
        decode_unsigned_value(&self.full[self.header_len..], 8, self.content_offset())
    }

    /// Check the content is empty, as NULL requires.
    pub fn as_null(&self) -> DecodeResult<()> {
        if self.full.len() == self.header_len {
            Ok(())
        } else {
            Err(fail(self.content_offset(), DecodeErrorKind::InvalidNull))
        }
    }

    /// Decode the content as OBJECT IDENTIFIER sub-identifiers.
    pub fn as_oid(&self) -> DecodeResult<Oid> {
        let offset = self.content_offset();
        Oid::from_ber(&self.full[self.header_len..]).map_err(|e| fail(offset + e.offset, e.kind))
    }
}

/// Decode a signed INTEGER into 32 bits.
///
/// Non-minimal encodings (redundant leading 0x00 or 0xFF octets) are
/// accepted. Values that do not fit in an `i32` are rejected rather than
/// truncated.
pub fn decode_integer_value(bytes: &[u8], offset: usize) -> DecodeResult<i32> {
    if bytes.is_empty() {
        return Err(fail(offset, DecodeErrorKind::ZeroLengthInteger));
    }

    let mut start = 0;
    while start + 1 < bytes.len() {
        let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }

    let significant = &bytes[start..];
    if significant.len() > 4 {
        return Err(fail(offset, DecodeErrorKind::IntegerOverflow));
    }

    let init: i32 = if significant[0] & 0x80 != 0 { -1 } else { 0 };
    Ok(significant
        .iter()
        .fold(init, |acc, &b| (acc << 8) | b as i32))
}

/// Decode an unsigned value of at most `width` octets.
///
/// One leading 0x00 (the sign octet for values with the top bit set) and any
/// further redundant zero octets are accepted. A first octet with the top
/// bit set is taken as the raw unsigned magnitude, matching net-snmp.
pub fn decode_unsigned_value(bytes: &[u8], width: usize, offset: usize) -> DecodeResult<u64> {
    if bytes.is_empty() {
        return Err(fail(offset, DecodeErrorKind::ZeroLengthInteger));
    }

    let leading_zeros = bytes
        .iter()
        .take(bytes.len() - 1)
        .take_while(|&&b| b == 0)
        .count();
    let significant = &bytes[leading_zeros..];
    if significant.len() > width {
        return Err(fail(offset, DecodeErrorKind::IntegerOverflow));
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64))
}
