//! BER tag definitions for SNMP responses.
//!
//! Tag encoding follows X.690 Section 8.1.2:
//! - Bits 7-6: Class (00=Universal, 01=Application, 10=Context-specific, 11=Private)
//! - Bit 5: Primitive (0) or Constructed (1)
//! - Bits 4-0: Tag number (0-30, or 31 for long form)
//!
//! Value tags are classified by their full byte. The universal and
//! application namespaces reuse the same tag numbers (OCTET STRING is 0x04,
//! Opaque is 0x44), so masking off the class bits would conflate them.

use std::fmt;

/// Tag class bits (bits 7-6)
pub mod class {
    pub const UNIVERSAL: u8 = 0x00;
    pub const APPLICATION: u8 = 0x40;
}

/// Universal tags (class bits 00)
pub mod universal {
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    pub const SEQUENCE: u8 = 0x30; // Constructed
}

/// Application tags (class bits 01) - SNMP-specific types
pub mod application {
    pub const COUNTER32: u8 = 0x41;
    pub const GAUGE32: u8 = 0x42;
    pub const TIMETICKS: u8 = 0x43;
    pub const OPAQUE: u8 = 0x44;
    pub const NSAP_ADDRESS: u8 = 0x45;
    pub const COUNTER64: u8 = 0x46;
    pub const UINTEGER32: u8 = 0x47;
}

/// Exception sentinels carried in place of a value.
pub mod sentinel {
    pub const NO_SUCH_OBJECT: u8 = 0x00;
    pub const NO_SUCH_INSTANCE: u8 = 0x01;
}

/// Response-class PDU tags accepted in the message envelope.
pub mod pdu {
    pub const GET_RESPONSE: u8 = 0x20;
    pub const REPORT: u8 = 0x21;
    pub const RESPONSE: u8 = 0x22;
}

/// Get the class of a tag
#[inline]
pub const fn tag_class(tag: u8) -> u8 {
    tag & 0xC0
}

/// Semantic kind of a variable-binding value tag.
///
/// This is a closed set: [`Tag::classify`] returns `None` for every byte
/// outside it.
///
/// # Examples
///
/// ```
/// use snmp_decode::ber::Tag;
///
/// assert_eq!(Tag::classify(0x04), Some(Tag::OctetString));
/// assert_eq!(Tag::classify(0x44), Some(Tag::Opaque));
/// assert_eq!(Tag::classify(0x80), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    /// noSuchObject exception sentinel
    NoSuchObject = sentinel::NO_SUCH_OBJECT,
    /// noSuchInstance exception sentinel
    NoSuchInstance = sentinel::NO_SUCH_INSTANCE,
    /// INTEGER (signed)
    Integer = universal::INTEGER,
    /// BIT STRING
    BitString = universal::BIT_STRING,
    /// OCTET STRING
    OctetString = universal::OCTET_STRING,
    /// NULL
    Null = universal::NULL,
    /// OBJECT IDENTIFIER
    ObjectIdentifier = universal::OBJECT_IDENTIFIER,
    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32 = application::COUNTER32,
    /// Gauge32 (unsigned 32-bit, non-wrapping)
    Gauge32 = application::GAUGE32,
    /// TimeTicks (hundredths of seconds)
    TimeTicks = application::TIMETICKS,
    /// Opaque (arbitrary bytes)
    Opaque = application::OPAQUE,
    /// NsapAddress
    NsapAddress = application::NSAP_ADDRESS,
    /// Counter64 (unsigned 64-bit, wrapping)
    Counter64 = application::COUNTER64,
    /// UInteger32 (unsigned 32-bit)
    Uinteger32 = application::UINTEGER32,
}

impl Tag {
    /// Every supported tag, in ascending byte order.
    pub const ALL: [Tag; 14] = [
        Tag::NoSuchObject,
        Tag::NoSuchInstance,
        Tag::Integer,
        Tag::BitString,
        Tag::OctetString,
        Tag::Null,
        Tag::ObjectIdentifier,
        Tag::Counter32,
        Tag::Gauge32,
        Tag::TimeTicks,
        Tag::Opaque,
        Tag::NsapAddress,
        Tag::Counter64,
        Tag::Uinteger32,
    ];

    /// Classify a tag byte.
    ///
    /// Returns `None` for bytes this decoder does not recognize.
    pub const fn classify(byte: u8) -> Option<Self> {
        match byte {
            sentinel::NO_SUCH_OBJECT => Some(Tag::NoSuchObject),
            sentinel::NO_SUCH_INSTANCE => Some(Tag::NoSuchInstance),
            universal::INTEGER => Some(Tag::Integer),
            universal::BIT_STRING => Some(Tag::BitString),
            universal::OCTET_STRING => Some(Tag::OctetString),
            universal::NULL => Some(Tag::Null),
            universal::OBJECT_IDENTIFIER => Some(Tag::ObjectIdentifier),
            application::COUNTER32 => Some(Tag::Counter32),
            application::GAUGE32 => Some(Tag::Gauge32),
            application::TIMETICKS => Some(Tag::TimeTicks),
            application::OPAQUE => Some(Tag::Opaque),
            application::NSAP_ADDRESS => Some(Tag::NsapAddress),
            application::COUNTER64 => Some(Tag::Counter64),
            application::UINTEGER32 => Some(Tag::Uinteger32),
            _ => None,
        }
    }

    /// The wire byte for this tag.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this tag signals a missing object or instance rather than data.
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Tag::NoSuchObject | Tag::NoSuchInstance)
    }

    /// Whether this is an SNMP application-class tag.
    pub const fn is_application(self) -> bool {
        tag_class(self as u8) == class::APPLICATION
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Tag::classify(byte).ok_or(byte)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.as_u8()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::NoSuchObject => "noSuchObject",
            Tag::NoSuchInstance => "noSuchInstance",
            Tag::Integer => "INTEGER",
            Tag::BitString => "BIT STRING",
            Tag::OctetString => "OCTET STRING",
            Tag::Null => "NULL",
            Tag::ObjectIdentifier => "OBJECT IDENTIFIER",
            Tag::Counter32 => "Counter32",
            Tag::Gauge32 => "Gauge32",
            Tag::TimeTicks => "TimeTicks",
            Tag::Opaque => "Opaque",
            Tag::NsapAddress => "NsapAddress",
            Tag::Counter64 => "Counter64",
            Tag::Uinteger32 => "UInteger32",
        };
        f.write_str(name)
    }
}
