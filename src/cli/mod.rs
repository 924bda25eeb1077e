//! CLI utilities for snmp-decode.
//!
//! Argument parsing, output formatting, and OID hint resolution for the
//! `snmp-decode` binary.
//!
//! This module is only available with the `cli` feature.

pub mod args;
pub mod hints;
pub mod output;
