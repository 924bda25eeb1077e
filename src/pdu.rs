//! Response PDU parsing.
//!
//! ```text
//! <tag> {
//!     request-id   INTEGER,
//!     error-status INTEGER,
//!     error-index  INTEGER,
//!     variable-bindings SEQUENCE OF SEQUENCE { name OBJECT IDENTIFIER, value ANY }
//! }
//! ```
//!
//! Values stay raw here; [`Pdu::decode_bindings`] and [`Pdu::decode_each`]
//! run them through [`VarBind::decode`].

use crate::ber::RawTaggedValue;
use crate::error::{DecodeError, Error, ErrorStatus, Result};
use crate::message::PduType;
use crate::varbind::{RawVarBind, VarBind, read_raw_varbind_list};

/// A response PDU with undecoded values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdu {
    /// Which response PDU this was.
    pub pdu_type: PduType,
    /// Request ID echoed from the request.
    pub request_id: i32,
    /// Error status (0 = noError).
    pub error_status: i32,
    /// 1-based index of the failing binding, or 0.
    pub error_index: i32,
    /// Bindings in wire order.
    pub varbinds: Vec<RawVarBind>,
}

impl Pdu {
    /// Parse a PDU from the envelope body.
    ///
    /// The body's full TLV is re-read as a constructed value carrying
    /// `pdu_type`'s tag. Failures give [`Error::MalformedPdu`] with the
    /// body's bytes attached.
    pub fn parse(body: &RawTaggedValue, pdu_type: PduType) -> Result<Self> {
        Self::parse_inner(body, pdu_type).map_err(|e| Error::pdu(body.full_bytes().clone(), e))
    }

    fn parse_inner(
        body: &RawTaggedValue,
        pdu_type: PduType,
    ) -> std::result::Result<Self, DecodeError> {
        let mut outer = body.decoder();
        let mut pdu = outer.read_constructed(pdu_type.tag())?;

        let request_id = pdu.read_integer()?;
        let error_status = pdu.read_integer()?;
        let error_index = pdu.read_integer()?;
        let varbinds = read_raw_varbind_list(&mut pdu)?;

        pdu.expect_end()?;
        outer.expect_end()?;

        Ok(Pdu {
            pdu_type,
            request_id,
            error_status,
            error_index,
            varbinds,
        })
    }

    /// Error status as a named RFC 3416 code.
    pub fn status(&self) -> ErrorStatus {
        ErrorStatus::from_i32(self.error_status)
    }

    /// Decode every binding, stopping at the first failure.
    pub fn decode_bindings(&self) -> Result<Vec<VarBind>> {
        self.varbinds.iter().map(RawVarBind::decode).collect()
    }

    /// Decode every binding independently.
    ///
    /// One result per binding, in wire order. Useful when a response mixes
    /// real values with `noSuchObject`/`noSuchInstance` sentinels and the
    /// caller wants the values anyway.
    pub fn decode_each(&self) -> Vec<Result<VarBind>> {
        self.varbinds.iter().map(RawVarBind::decode).collect()
    }
}
