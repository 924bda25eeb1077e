//! Variable binding (VarBind) types and the per-variable decoder.
//!
//! A [`RawVarBind`] pairs an OID with a value span that has not been
//! interpreted yet. [`VarBind::decode`] classifies the span's tag and turns it
//! into a typed [`Value`], or into the error that tag calls for.

use crate::ber::{Decoder, RawTaggedValue, Tag};
use crate::error::{DecodeError, Error, Result};
use crate::oid::Oid;
use crate::value::Value;

/// A name/value pair as it appears on the wire, value not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVarBind {
    /// The object identifier.
    pub oid: Oid,
    /// The undecoded value.
    pub value: RawTaggedValue,
}

impl RawVarBind {
    /// Read `SEQUENCE { OBJECT IDENTIFIER, ANY }` from the decoder.
    pub fn read(decoder: &mut Decoder) -> std::result::Result<Self, DecodeError> {
        let mut seq = decoder.read_sequence()?;
        let oid = seq.read_oid()?;
        let value = seq.read_raw()?;
        seq.expect_end()?;
        Ok(RawVarBind { oid, value })
    }

    /// Decode the value under its tag's type rule.
    pub fn decode(&self) -> Result<VarBind> {
        VarBind::decode(self.oid.clone(), &self.value)
    }
}

/// Variable binding - an OID-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBind {
    /// The object identifier.
    pub oid: Oid,
    /// The value.
    pub value: Value,
}

/// A decoded name/value pair.
pub type Binding = VarBind;

impl VarBind {
    /// Create a new VarBind.
    pub fn new(oid: Oid, value: Value) -> Self {
        Self { oid, value }
    }

    /// The value's tag.
    pub fn tag(&self) -> Tag {
        self.value.tag()
    }

    /// Decode one raw value into a typed binding.
    ///
    /// | Tag | Outcome |
    /// |-----|---------|
    /// | INTEGER, OCTET STRING, NULL, OBJECT IDENTIFIER | universal decode |
    /// | Counter32, Gauge32, TimeTicks, UInteger32 | unsigned 32-bit |
    /// | Counter64 | unsigned 64-bit |
    /// | Opaque, NsapAddress | raw bytes |
    /// | noSuchObject, noSuchInstance | [`Error::NoSuchObject`], [`Error::NoSuchInstance`] |
    /// | BIT STRING | [`Error::Unimplemented`] |
    /// | anything else | [`Error::UnsupportedTag`] |
    ///
    /// Malformed content yields [`Error::MalformedPdu`] carrying the value's
    /// TLV bytes.
    pub fn decode(oid: Oid, raw: &RawTaggedValue) -> Result<Self> {
        let Some(tag) = Tag::classify(raw.tag()) else {
            tracing::warn!(target: "snmp_decode::varbind", { snmp.oid = %oid, tag = raw.tag() }, "unsupported value tag");
            return Err(Error::UnsupportedTag {
                oid,
                tag: raw.tag(),
            });
        };

        let malformed = |source: DecodeError| Error::pdu(raw.full_bytes().clone(), source);

        let value = match tag {
            Tag::Integer => Value::Integer(raw.as_integer().map_err(malformed)?),
            Tag::OctetString => Value::OctetString(raw.content()),
            Tag::Null => {
                raw.as_null().map_err(malformed)?;
                Value::Null
            }
            Tag::ObjectIdentifier => Value::ObjectIdentifier(raw.as_oid().map_err(malformed)?),
            Tag::Counter32 => Value::Counter32(raw.as_unsigned32().map_err(malformed)?),
            Tag::Gauge32 => Value::Gauge32(raw.as_unsigned32().map_err(malformed)?),
            Tag::TimeTicks => Value::TimeTicks(raw.as_unsigned32().map_err(malformed)?),
            Tag::Uinteger32 => Value::Uinteger32(raw.as_unsigned32().map_err(malformed)?),
            Tag::Counter64 => Value::Counter64(raw.as_unsigned64().map_err(malformed)?),
            Tag::Opaque => Value::Opaque(raw.content()),
            Tag::NsapAddress => Value::NsapAddress(raw.content()),
            Tag::NoSuchObject => {
                tracing::debug!(target: "snmp_decode::varbind", { snmp.oid = %oid }, "noSuchObject");
                return Err(Error::NoSuchObject { oid });
            }
            Tag::NoSuchInstance => {
                tracing::debug!(target: "snmp_decode::varbind", { snmp.oid = %oid }, "noSuchInstance");
                return Err(Error::NoSuchInstance { oid });
            }
            Tag::BitString => {
                tracing::warn!(target: "snmp_decode::varbind", { snmp.oid = %oid, %tag }, "no decode rule for tag");
                return Err(Error::Unimplemented { oid, tag });
            }
        };

        Ok(VarBind { oid, value })
    }
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}

/// Decode one raw variable into a typed binding.
///
/// Same as [`VarBind::decode`].
pub fn decode_variable(oid: Oid, raw: &RawTaggedValue) -> Result<VarBind> {
    VarBind::decode(oid, raw)
}

/// Read a `SEQUENCE OF VarBind`, keeping values raw and order intact.
pub fn read_raw_varbind_list(
    decoder: &mut Decoder,
) -> std::result::Result<Vec<RawVarBind>, DecodeError> {
    let mut seq = decoder.read_sequence()?;
    let mut varbinds = Vec::new();

    while !seq.is_empty() {
        varbinds.push(RawVarBind::read(&mut seq)?);
    }

    Ok(varbinds)
}
