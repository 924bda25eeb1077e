//! Community-based SNMP response envelope (v1/v2c).
//!
//! `SEQUENCE { version INTEGER, community OCTET STRING, data ANY }`
//!
//! The envelope is parsed without interpreting `data`: its tag is checked
//! against the response PDU types and the TLV is kept raw for
//! [`Pdu::parse`](crate::pdu::Pdu::parse).

use crate::ber::{Decoder, RawTaggedValue, tag};
use crate::error::{DecodeError, DecodeErrorKind, Error, Result};
use crate::version::Version;
use bytes::Bytes;

/// Response PDU type, identified by the outer tag of the message data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PduType {
    /// GetResponse (0x20).
    GetResponse = tag::pdu::GET_RESPONSE,
    /// Report (0x21).
    Report = tag::pdu::REPORT,
    /// Response (0x22).
    Response = tag::pdu::RESPONSE,
}

impl PduType {
    /// Recognize an outer PDU tag.
    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            tag::pdu::GET_RESPONSE => Some(PduType::GetResponse),
            tag::pdu::REPORT => Some(PduType::Report),
            tag::pdu::RESPONSE => Some(PduType::Response),
            _ => None,
        }
    }

    /// The tag byte.
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for PduType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PduType::GetResponse => write!(f, "GetResponse"),
            PduType::Report => write!(f, "Report"),
            PduType::Response => write!(f, "Response"),
        }
    }
}

/// Outer framing of a response message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Version number as sent. Not validated.
    pub version: i32,
    /// Community string.
    pub community: Bytes,
    /// Which response PDU the body holds.
    pub pdu_type: PduType,
    /// The PDU, still raw.
    pub body: RawTaggedValue,
}

impl Envelope {
    /// Parse the envelope from a complete message.
    ///
    /// Any structural failure, an unrecognized data tag, or bytes left over
    /// after the message SEQUENCE give [`Error::MalformedEnvelope`].
    pub fn parse(data: Bytes) -> Result<Self> {
        Self::parse_inner(data).map_err(Error::envelope)
    }

    fn parse_inner(data: Bytes) -> std::result::Result<Self, DecodeError> {
        let mut decoder = Decoder::new(data);
        let mut seq = decoder.read_sequence()?;

        let version = seq.read_integer()?;
        let community = seq.read_octet_string()?;
        let body = seq.read_raw()?;
        seq.expect_end()?;
        decoder.expect_end()?;

        let pdu_type = PduType::from_u8(body.tag()).ok_or_else(|| {
            let kind = DecodeErrorKind::UnknownPduType(body.tag());
            tracing::debug!(target: "snmp_decode::ber", { snmp.offset = body.offset(), %kind }, "decode error");
            DecodeError::new(body.offset(), kind)
        })?;

        Ok(Envelope {
            version,
            community,
            pdu_type,
            body,
        })
    }

    /// The version as a known [`Version`], if it is one.
    pub fn snmp_version(&self) -> Option<Version> {
        Version::from_i32(self.version)
    }
}
