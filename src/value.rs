//! SNMP value types.
//!
//! The `Value` enum has one variant per value-bearing [`Tag`]; the
//! exception sentinels never become values.

use crate::ber::Tag;
use crate::oid::Oid;
use bytes::Bytes;

/// Decoded SNMP value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Value {
    /// INTEGER (ASN.1 primitive, signed 32-bit)
    Integer(i32),

    /// OCTET STRING (arbitrary bytes).
    OctetString(Bytes),

    /// NULL
    Null,

    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),

    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32(u32),

    /// Gauge32 (unsigned 32-bit, non-wrapping)
    Gauge32(u32),

    /// TimeTicks (hundredths of seconds since some epoch)
    TimeTicks(u32),

    /// Opaque (legacy, arbitrary bytes)
    Opaque(Bytes),

    /// NsapAddress (raw address octets)
    NsapAddress(Bytes),

    /// Counter64 (unsigned 64-bit, wrapping).
    Counter64(u64),

    /// UInteger32 (unsigned 32-bit)
    Uinteger32(u32),
}

impl Value {
    /// The tag this value was decoded from.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Integer(_) => Tag::Integer,
            Value::OctetString(_) => Tag::OctetString,
            Value::Null => Tag::Null,
            Value::ObjectIdentifier(_) => Tag::ObjectIdentifier,
            Value::Counter32(_) => Tag::Counter32,
            Value::Gauge32(_) => Tag::Gauge32,
            Value::TimeTicks(_) => Tag::TimeTicks,
            Value::Opaque(_) => Tag::Opaque,
            Value::NsapAddress(_) => Tag::NsapAddress,
            Value::Counter64(_) => Tag::Counter64,
            Value::Uinteger32(_) => Tag::Uinteger32,
        }
    }

    /// Try to get as i32.
    ///
    /// Returns `Some(i32)` for [`Value::Integer`], `None` otherwise.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    ///
    /// Returns `Some(u32)` for the 32-bit unsigned types, or non-negative
    /// [`Value::Integer`].
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_decode::Value;
    ///
    /// assert_eq!(Value::Counter32(100).as_u32(), Some(100));
    /// assert_eq!(Value::TimeTicks(300).as_u32(), Some(300));
    /// assert_eq!(Value::Integer(-1).as_u32(), None);
    /// assert_eq!(Value::Counter64(100).as_u32(), None);
    /// ```
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) | Value::Uinteger32(v) => {
                Some(*v)
            }
            Value::Integer(v) if *v >= 0 => Some(*v as u32),
            _ => None,
        }
    }

    /// Try to get as u64.
    ///
    /// Returns `Some(u64)` for [`Value::Counter64`] and anything
    /// [`as_u32`](Self::as_u32) accepts.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Counter64(v) => Some(*v),
            other => other.as_u32().map(u64::from),
        }
    }

    /// Try to get as raw bytes.
    ///
    /// Returns bytes for [`Value::OctetString`], [`Value::Opaque`] and
    /// [`Value::NsapAddress`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(v) | Value::Opaque(v) | Value::NsapAddress(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as a UTF-8 string.
    ///
    /// Returns `Some` only for an [`Value::OctetString`] holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::OctetString(v) => std::str::from_utf8(v).ok(),
            _ => None,
        }
    }

    /// Try to get as an OID.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Value::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }
}

fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::OctetString(data) => {
                if let Ok(s) = std::str::from_utf8(data) {
                    write!(f, "{}", s)
                } else {
                    write!(f, "0x{}", hex(data))
                }
            }
            Value::Null => write!(f, "NULL"),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::Counter32(v) => write!(f, "{}", v),
            Value::Gauge32(v) => write!(f, "{}", v),
            Value::TimeTicks(v) => {
                let secs = v / 100;
                let days = secs / 86400;
                let hours = (secs % 86400) / 3600;
                let mins = (secs % 3600) / 60;
                let s = secs % 60;
                write!(f, "{}d {}h {}m {}s", days, hours, mins, s)
            }
            Value::Opaque(data) => write!(f, "Opaque(0x{})", hex(data)),
            Value::NsapAddress(data) => write!(f, "NsapAddress(0x{})", hex(data)),
            Value::Counter64(v) => write!(f, "{}", v),
            Value::Uinteger32(v) => write!(f, "{}", v),
        }
    }
}
