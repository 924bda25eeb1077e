//! Prelude module for convenient imports.
//!
//! ```rust
//! use snmp_decode::prelude::*;
//! ```
//!
//! This imports:
//! - Entry points: [`decode`], [`DecodedResponse`]
//! - Core types: [`Oid`], [`Value`], [`VarBind`], [`Tag`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`oid!`] macro for compile-time OID construction

pub use crate::ber::Tag;
pub use crate::error::{Error, Result};
pub use crate::oid::Oid;
pub use crate::response::{DecodedResponse, decode};
pub use crate::value::Value;
pub use crate::varbind::VarBind;
pub use crate::version::Version;

#[doc(no_inline)]
pub use crate::oid;
