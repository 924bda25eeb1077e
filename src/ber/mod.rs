//! BER (Basic Encoding Rules) decoding for SNMP responses.
//!
//! Only the decode direction exists. Parsing is strict where it matters for
//! safety (definite lengths, bounded sizes) and otherwise follows net-snmp.

mod decode;
mod length;
pub mod tag;

pub use decode::*;
pub use length::*;
pub use tag::*;
