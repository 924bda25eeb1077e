// Allow large error types - the Error enum includes OIDs inline for debugging convenience.
#![allow(clippy::result_large_err)]
//! # snmp-decode
//!
//! Decoder for BER-encoded SNMP v1/v2c response messages.
//!
//! ## Features
//!
//! - Zero-copy BER decoding on top of [`bytes::Bytes`]
//! - Closed tag registry with full-byte classification
//! - Typed values, one [`Value`] variant per SNMP data type
//! - Errors that say which stage failed and where
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_decode::{Value, decode};
//!
//! # let packet: &[u8] = &[
//! #     0x30, 0x29, 0x02, 0x01, 0x01, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c',
//! #     0x22, 0x1C, 0x02, 0x01, 0x01, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00,
//! #     0x30, 0x11, 0x30, 0x0F, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x03, 0x00,
//! #     0x43, 0x03, 0x01, 0xE2, 0x40,
//! # ];
//! let response = decode(packet)?;
//!
//! for vb in &response.varbinds {
//!     println!("{} = {}", vb.oid, vb.value);
//! }
//! assert_eq!(response.varbinds[0].value, Value::TimeTicks(123_456));
//! # Ok::<(), snmp_decode::Error>(())
//! ```
//!
//! ## Stages
//!
//! [`decode`] runs three stages, each available on its own:
//!
//! 1. [`Envelope::parse`] strips `SEQUENCE { version, community, data }` and
//!    checks the data tag is a response PDU.
//! 2. [`Pdu::parse`] reads request-id, error-status, error-index and the raw
//!    variable bindings.
//! 3. [`VarBind::decode`] turns each raw value into a [`Value`] based on its
//!    tag.
//!
//! ## Error Handling
//!
//! `noSuchObject` and `noSuchInstance` abort [`decode`] with an error naming
//! the OID. Callers that want the other bindings anyway can drive the stages
//! themselves:
//!
//! ```rust
//! use snmp_decode::{Envelope, Pdu};
//! # use bytes::Bytes;
//! # let packet = Bytes::from_static(&[
//! #     0x30, 0x22, 0x02, 0x01, 0x01, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c',
//! #     0x22, 0x15, 0x02, 0x01, 0x01, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00,
//! #     0x30, 0x0A, 0x30, 0x08, 0x06, 0x04, 0x2B, 0x06, 0x01, 0x09, 0x01, 0x00,
//! # ]);
//! let envelope = Envelope::parse(packet)?;
//! let pdu = Pdu::parse(&envelope.body, envelope.pdu_type)?;
//!
//! for result in pdu.decode_each() {
//!     match result {
//!         Ok(vb) => println!("{}", vb),
//!         Err(e) if e.is_sentinel() => println!("{}: missing", e.oid().unwrap()),
//!         Err(e) => return Err(e),
//!     }
//! }
//! # Ok::<(), snmp_decode::Error>(())
//! ```
//!
//! See the [`error`] module for the full error model.
//!
//! ## Tracing Integration
//!
//! The library uses the `tracing` crate for structured logging and never
//! installs a subscriber.
//!
//! ```rust,no_run
//! use tracing_subscriber::EnvFilter;
//!
//! tracing_subscriber::fmt()
//!     .with_env_filter(
//!         EnvFilter::from_default_env()
//!             .add_directive("snmp_decode=debug".parse().unwrap())
//!     )
//!     .init();
//! ```
//!
//! ### Log Levels
//!
//! | Level | What's Logged |
//! |-------|---------------|
//! | WARN | Value tags with no decode rule |
//! | DEBUG | BER decode errors, exception sentinels, failed decodes |
//! | TRACE | Decoded response summaries |
//!
//! ### Structured Fields
//!
//! | Field | Description |
//! |-------|-------------|
//! | `snmp.offset` | Absolute byte offset of a decode error |
//! | `snmp.oid` | OID of the binding being decoded |
//! | `snmp.request_id` | SNMP request identifier |
//! | `snmp.pdu_type` | Response PDU type |
//! | `snmp.varbind_count` | Number of bindings in the response |
//!
//! ### Targets
//!
//! | Target | Contents |
//! |--------|----------|
//! | `snmp_decode::ber` | Structural decode errors |
//! | `snmp_decode::varbind` | Per-binding outcomes |
//! | `snmp_decode::response` | Whole-message results |

pub mod ber;
pub mod error;
pub mod message;
pub mod oid;
pub mod pdu;
pub mod prelude;
pub mod response;
pub mod util;
pub mod value;
pub mod varbind;
pub mod version;

#[cfg(feature = "cli")]
pub mod cli;

pub use ber::{MAX_LENGTH, RawTaggedValue, Tag};
pub use error::{DecodeError, DecodeErrorKind, Error, ErrorStatus, OidErrorKind, Result};
pub use message::{Envelope, PduType};
pub use oid::{MAX_OID_LEN, Oid};
pub use pdu::Pdu;
pub use response::{DecodedResponse, decode};
pub use util::parse_u16;
pub use value::Value;
pub use varbind::{Binding, RawVarBind, VarBind, decode_variable};
pub use version::Version;
