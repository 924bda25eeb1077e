//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.

use crate::error::{DecodeError, DecodeErrorKind, Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Maximum number of arcs (subidentifiers) allowed in an OID.
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a value".
/// Enforced by [`Oid::from_ber()`] and [`Oid::parse()`].
pub const MAX_OID_LEN: usize = 128;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_decode::oid::Oid;
    ///
    /// let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// A leading dot is accepted, so `.1.3.6.1` and `1.3.6.1` are the same OID.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_decode::oid::Oid;
    ///
    /// let oid = Oid::parse(".1.3.6.1.2.1.1.3.0").unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.3.0");
    ///
    /// assert!(Oid::parse("1.3.six.1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut arcs = SmallVec::new();

        for part in s.strip_prefix('.').unwrap_or(s).split('.') {
            if part.is_empty() && arcs.is_empty() {
                continue;
            }

            let arc: u32 = part.parse().map_err(|_| {
                Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s.to_string())
            })?;

            arcs.push(arc);
        }

        if arcs.len() > MAX_OID_LEN {
            return Err(Error::invalid_oid_with_input(
                OidErrorKind::TooManyArcs {
                    count: arcs.len(),
                    max: MAX_OID_LEN,
                },
                s.to_string(),
            ));
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_decode::oid;
    ///
    /// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
    /// assert!(sys_descr.starts_with(&oid!(1, 3, 6, 1, 2, 1, 1)));
    /// assert!(!sys_descr.starts_with(&oid!(1, 3, 6, 1, 2, 1, 2)));
    /// ```
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Decode from BER content octets.
    ///
    /// OID encoding (X.690 Section 8.19):
    /// - First subidentifier encodes (arc1 * 40) + arc2 in base-128
    /// - Remaining arcs are base-128 variable length
    ///
    /// Error offsets are relative to the start of `data`. Empty content and
    /// subidentifiers padded with a leading 0x80 octet are rejected.
    /// Enforces [`MAX_OID_LEN`] per RFC 2578 Section 3.5.
    pub fn from_ber(data: &[u8]) -> std::result::Result<Self, DecodeError> {
        if data.is_empty() {
            return Err(DecodeError::new(0, DecodeErrorKind::ZeroLengthOid));
        }

        let mut arcs = SmallVec::new();

        // May be multi-byte for large arc2 values (when arc1=2)
        let (first_subid, consumed) = decode_subidentifier(data, 0)?;

        if first_subid < 40 {
            arcs.push(0);
            arcs.push(first_subid);
        } else if first_subid < 80 {
            arcs.push(1);
            arcs.push(first_subid - 40);
        } else {
            arcs.push(2);
            arcs.push(first_subid - 80);
        }

        let mut i = consumed;
        while i < data.len() {
            let (arc, bytes_consumed) = decode_subidentifier(&data[i..], i)?;
            arcs.push(arc);
            i += bytes_consumed;

            if arcs.len() > MAX_OID_LEN {
                return Err(DecodeError::new(
                    i,
                    DecodeErrorKind::OidTooLong {
                        count: arcs.len(),
                        max: MAX_OID_LEN,
                    },
                ));
            }
        }

        Ok(Self { arcs })
    }
}

/// Decode a subidentifier, returning (value, bytes_consumed).
///
/// `base` is the position of `data` within the OID content, for error offsets.
fn decode_subidentifier(data: &[u8], base: usize) -> std::result::Result<(u32, usize), DecodeError> {
    if data.first() == Some(&0x80) {
        return Err(DecodeError::new(base, DecodeErrorKind::InvalidOidEncoding));
    }

    let mut value: u32 = 0;
    let mut i = 0;

    loop {
        let Some(&byte) = data.get(i) else {
            return Err(DecodeError::new(base + i, DecodeErrorKind::TruncatedData));
        };
        i += 1;

        if value > (u32::MAX >> 7) {
            return Err(DecodeError::new(base + i, DecodeErrorKind::IntegerOverflow));
        }

        value = (value << 7) | ((byte & 0x7F) as u32);

        if byte & 0x80 == 0 {
            break;
        }
    }

    Ok((value, i))
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// # Examples
///
/// ```
/// use snmp_decode::oid;
///
/// let sys_uptime = oid!(1, 3, 6, 1, 2, 1, 1, 3, 0);
/// assert_eq!(sys_uptime.to_string(), "1.3.6.1.2.1.1.3.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
