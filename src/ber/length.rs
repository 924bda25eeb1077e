//! BER length decoding.
//!
//! Length encoding follows X.690 Section 8.1.3:
//! - Short form: Single byte, bit 8=0, value 0-127
//! - Long form: Initial byte (bit 8=1, bits 7-1=count), followed by length bytes
//! - Indefinite form (0x80): Rejected per net-snmp behavior

use crate::error::{DecodeError, DecodeErrorKind};

/// Maximum length we'll accept (to prevent DoS).
///
/// 2MB is far larger than any realistic SNMP message (typical messages are
/// hundreds of bytes to a few KB).
pub const MAX_LENGTH: usize = 0x200000; // 2MB

/// Decode a length from bytes, returning (length, bytes_consumed)
///
/// The `base_offset` parameter is used to report error offsets correctly
/// when this is called from within a decoder.
pub fn decode_length(data: &[u8], base_offset: usize) -> Result<(usize, usize), DecodeError> {
    let Some(&first) = data.first() else {
        return Err(DecodeError::new(base_offset, DecodeErrorKind::TruncatedData));
    };

    if first == 0x80 {
        return Err(DecodeError::new(
            base_offset,
            DecodeErrorKind::IndefiniteLength,
        ));
    }

    if first & 0x80 == 0 {
        return Ok((first as usize, 1));
    }

    let num_octets = (first & 0x7F) as usize;

    if num_octets > 4 {
        return Err(DecodeError::new(
            base_offset,
            DecodeErrorKind::LengthTooLong { octets: num_octets },
        ));
    }

    if data.len() < 1 + num_octets {
        return Err(DecodeError::new(base_offset, DecodeErrorKind::TruncatedData));
    }

    let len = data[1..=num_octets]
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize);

    if len > MAX_LENGTH {
        return Err(DecodeError::new(
            base_offset,
            DecodeErrorKind::LengthExceedsMax {
                length: len,
                max: MAX_LENGTH,
            },
        ));
    }

    Ok((len, 1 + num_octets))
}
