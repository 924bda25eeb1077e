//! Error types for snmp-decode.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//!
//! Two layers are kept apart:
//!
//! - [`DecodeError`] is a structural BER failure: the bytes are not
//!   well-formed TLV framing, or a field has the wrong tag or width.
//! - [`Error`] is what [`decode`](crate::decode) returns. Structural failures
//!   are wrapped as [`Error::MalformedEnvelope`] or [`Error::MalformedPdu`]
//!   depending on which layer hit them. Exception sentinels and tags the
//!   decoder cannot turn into a value have their own variants, each naming
//!   the variable that produced them.

use bytes::Bytes;

use crate::ber::Tag;
use crate::oid::Oid;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// BER decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// Expected different tag.
    UnexpectedTag { expected: u8, actual: u8 },
    /// Data truncated unexpectedly.
    TruncatedData,
    /// Indefinite length not supported.
    IndefiniteLength,
    /// Integer value does not fit the target width.
    IntegerOverflow,
    /// Zero-length integer.
    ZeroLengthInteger,
    /// Unknown PDU type in the message envelope.
    UnknownPduType(u8),
    /// NULL with non-zero length.
    InvalidNull,
    /// Length field too long.
    LengthTooLong { octets: usize },
    /// Length exceeds maximum.
    LengthExceedsMax { length: usize, max: usize },
    /// Insufficient data for read.
    InsufficientData { needed: usize, available: usize },
    /// Zero-length OBJECT IDENTIFIER content.
    ZeroLengthOid,
    /// Subidentifier with a leading 0x80 padding octet.
    InvalidOidEncoding,
    /// OID exceeds maximum arc count during decode.
    OidTooLong { count: usize, max: usize },
    /// Bytes left over after a complete structure.
    TrailingData { remaining: usize },
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedTag { expected, actual } => {
                write!(f, "expected tag 0x{:02X}, got 0x{:02X}", expected, actual)
            }
            Self::TruncatedData => write!(f, "unexpected end of data"),
            Self::IndefiniteLength => write!(f, "indefinite length encoding not supported"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
            Self::ZeroLengthInteger => write!(f, "zero-length integer"),
            Self::UnknownPduType(t) => write!(f, "unknown PDU type: 0x{:02X}", t),
            Self::InvalidNull => write!(f, "NULL with non-zero length"),
            Self::LengthTooLong { octets } => {
                write!(f, "length encoding too long ({} octets)", octets)
            }
            Self::LengthExceedsMax { length, max } => {
                write!(f, "length {} exceeds maximum {}", length, max)
            }
            Self::InsufficientData { needed, available } => {
                write!(f, "need {} bytes but only {} remaining", needed, available)
            }
            Self::ZeroLengthOid => write!(f, "zero-length OID"),
            Self::InvalidOidEncoding => write!(f, "invalid OID encoding"),
            Self::OidTooLong { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
            Self::TrailingData { remaining } => {
                write!(f, "{} trailing bytes after structure", remaining)
            }
        }
    }
}

/// Structural BER decode failure at a byte offset.
///
/// The offset is absolute within the buffer handed to the decoder that
/// failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("decode error at offset {offset}: {kind}")]
pub struct DecodeError {
    pub offset: usize,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    /// Create a decode error.
    pub fn new(offset: usize, kind: DecodeErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Invalid arc value.
    InvalidArc,
    /// OID has too many arcs (exceeds MAX_OID_LEN).
    TooManyArcs { count: usize, max: usize },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::TooManyArcs { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
        }
    }
}

/// SNMP error status codes (RFC 3416).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorStatus {
    NoError,
    TooBig,
    NoSuchName,
    BadValue,
    ReadOnly,
    GenErr,
    NoAccess,
    WrongType,
    WrongLength,
    WrongEncoding,
    WrongValue,
    NoCreation,
    InconsistentValue,
    ResourceUnavailable,
    CommitFailed,
    UndoFailed,
    AuthorizationError,
    NotWritable,
    InconsistentName,
    /// Unknown/future error status code.
    Unknown(i32),
}

impl ErrorStatus {
    /// Create from raw status code.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::NoError,
            1 => Self::TooBig,
            2 => Self::NoSuchName,
            3 => Self::BadValue,
            4 => Self::ReadOnly,
            5 => Self::GenErr,
            6 => Self::NoAccess,
            7 => Self::WrongType,
            8 => Self::WrongLength,
            9 => Self::WrongEncoding,
            10 => Self::WrongValue,
            11 => Self::NoCreation,
            12 => Self::InconsistentValue,
            13 => Self::ResourceUnavailable,
            14 => Self::CommitFailed,
            15 => Self::UndoFailed,
            16 => Self::AuthorizationError,
            17 => Self::NotWritable,
            18 => Self::InconsistentName,
            other => Self::Unknown(other),
        }
    }

    /// Convert to raw status code.
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::TooBig => 1,
            Self::NoSuchName => 2,
            Self::BadValue => 3,
            Self::ReadOnly => 4,
            Self::GenErr => 5,
            Self::NoAccess => 6,
            Self::WrongType => 7,
            Self::WrongLength => 8,
            Self::WrongEncoding => 9,
            Self::WrongValue => 10,
            Self::NoCreation => 11,
            Self::InconsistentValue => 12,
            Self::ResourceUnavailable => 13,
            Self::CommitFailed => 14,
            Self::UndoFailed => 15,
            Self::AuthorizationError => 16,
            Self::NotWritable => 17,
            Self::InconsistentName => 18,
            Self::Unknown(code) => *code,
        }
    }
}

impl std::fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoError => write!(f, "noError"),
            Self::TooBig => write!(f, "tooBig"),
            Self::NoSuchName => write!(f, "noSuchName"),
            Self::BadValue => write!(f, "badValue"),
            Self::ReadOnly => write!(f, "readOnly"),
            Self::GenErr => write!(f, "genErr"),
            Self::NoAccess => write!(f, "noAccess"),
            Self::WrongType => write!(f, "wrongType"),
            Self::WrongLength => write!(f, "wrongLength"),
            Self::WrongEncoding => write!(f, "wrongEncoding"),
            Self::WrongValue => write!(f, "wrongValue"),
            Self::NoCreation => write!(f, "noCreation"),
            Self::InconsistentValue => write!(f, "inconsistentValue"),
            Self::ResourceUnavailable => write!(f, "resourceUnavailable"),
            Self::CommitFailed => write!(f, "commitFailed"),
            Self::UndoFailed => write!(f, "undoFailed"),
            Self::AuthorizationError => write!(f, "authorizationError"),
            Self::NotWritable => write!(f, "notWritable"),
            Self::InconsistentName => write!(f, "inconsistentName"),
            Self::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The outer message failed to parse or carried an unrecognized PDU tag.
    #[error("malformed envelope: {source}")]
    MalformedEnvelope {
        #[source]
        source: DecodeError,
    },

    /// The PDU or one of its values failed to parse.
    ///
    /// `raw` holds the TLV bytes that were being decoded.
    #[error("malformed PDU ({} bytes): {source}", raw.len())]
    MalformedPdu {
        raw: Bytes,
        #[source]
        source: DecodeError,
    },

    /// The agent reported noSuchObject for this variable.
    #[error("noSuchObject: {oid}")]
    NoSuchObject { oid: Oid },

    /// The agent reported noSuchInstance for this variable.
    #[error("noSuchInstance: {oid}")]
    NoSuchInstance { oid: Oid },

    /// Value tag byte outside the tag registry.
    #[error("unsupported tag 0x{tag:02X} for {oid}")]
    UnsupportedTag { oid: Oid, tag: u8 },

    /// Recognized value tag with no decode rule.
    #[error("decoding {tag} (0x{:02X}) is not implemented, variable {oid}", tag.as_u8())]
    Unimplemented { oid: Oid, tag: Tag },

    /// Invalid OID format.
    #[error("invalid OID: {kind}")]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },
}

impl Error {
    /// Wrap a structural failure in the outer message.
    pub fn envelope(source: DecodeError) -> Self {
        Self::MalformedEnvelope { source }
    }

    /// Wrap a structural failure in a PDU, keeping the offending bytes.
    pub fn pdu(raw: Bytes, source: DecodeError) -> Self {
        Self::MalformedPdu { raw, source }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// The variable this error is attached to, if any.
    pub fn oid(&self) -> Option<&Oid> {
        match self {
            Self::NoSuchObject { oid } => Some(oid),
            Self::NoSuchInstance { oid } => Some(oid),
            Self::UnsupportedTag { oid, .. } => Some(oid),
            Self::Unimplemented { oid, .. } => Some(oid),
            _ => None,
        }
    }

    /// Whether this error is an exception sentinel reported by the agent
    /// rather than a malformed or undecodable message.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::NoSuchObject { .. } | Self::NoSuchInstance { .. })
    }

    /// The underlying structural failure, for malformed input.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::MalformedEnvelope { source } => Some(source),
            Self::MalformedPdu { source, .. } => Some(source),
            _ => None,
        }
    }
}
