//! Whole-message decoding.

use crate::error::{ErrorStatus, Result};
use crate::message::{Envelope, PduType};
use crate::pdu::Pdu;
use crate::varbind::VarBind;
use crate::version::Version;
use bytes::Bytes;

/// A fully decoded SNMP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResponse {
    /// Version number as sent.
    pub version: i32,
    /// Community string.
    pub community: Bytes,
    /// Which response PDU carried the bindings.
    pub pdu_type: PduType,
    /// Request ID.
    pub request_id: i32,
    /// Raw error status.
    pub error_status: i32,
    /// Error index.
    pub error_index: i32,
    /// Decoded bindings, in wire order.
    pub varbinds: Vec<VarBind>,
}

impl DecodedResponse {
    /// Decode a complete response message.
    ///
    /// Runs the envelope, PDU and per-variable stages in turn. The first
    /// failure at any stage is returned; no partial result is produced.
    pub fn decode(data: Bytes) -> Result<Self> {
        let result = Self::decode_inner(data);
        match &result {
            Ok(response) => tracing::trace!(
                target: "snmp_decode::response",
                {
                    snmp.request_id = response.request_id,
                    snmp.pdu_type = %response.pdu_type,
                    snmp.varbind_count = response.varbinds.len(),
                },
                "decoded response"
            ),
            Err(error) => tracing::debug!(
                target: "snmp_decode::response",
                %error,
                "failed to decode response"
            ),
        }
        result
    }

    fn decode_inner(data: Bytes) -> Result<Self> {
        let envelope = Envelope::parse(data)?;
        let pdu = Pdu::parse(&envelope.body, envelope.pdu_type)?;
        let varbinds = pdu.decode_bindings()?;

        Ok(DecodedResponse {
            version: envelope.version,
            community: envelope.community,
            pdu_type: pdu.pdu_type,
            request_id: pdu.request_id,
            error_status: pdu.error_status,
            error_index: pdu.error_index,
            varbinds,
        })
    }

    /// Error status as a named RFC 3416 code.
    pub fn status(&self) -> ErrorStatus {
        ErrorStatus::from_i32(self.error_status)
    }

    /// The version as a known [`Version`], if it is one.
    pub fn snmp_version(&self) -> Option<Version> {
        Version::from_i32(self.version)
    }
}

/// Decode a complete SNMP response message.
///
/// # Examples
///
/// ```
/// use snmp_decode::{Value, decode, oid};
///
/// let packet = [
///     0x30, 0x21, 0x02, 0x01, 0x01, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c',
///     0x22, 0x14, 0x02, 0x01, 0x2A, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00,
///     0x30, 0x09, 0x30, 0x07, 0x06, 0x03, 0x2B, 0x06, 0x01, 0x05, 0x00,
/// ];
///
/// let response = decode(&packet)?;
/// assert_eq!(response.request_id, 42);
/// assert_eq!(response.varbinds[0].oid, oid!(1, 3, 6, 1));
/// assert_eq!(response.varbinds[0].value, Value::Null);
/// # Ok::<(), snmp_decode::Error>(())
/// ```
pub fn decode(data: &[u8]) -> Result<DecodedResponse> {
    DecodedResponse::decode(Bytes::copy_from_slice(data))
}
