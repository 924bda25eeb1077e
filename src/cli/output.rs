//! Output formatting for the CLI.
//!
//! Supports human-readable, JSON, and raw output formats.

use crate::cli::args::OutputFormat;
use crate::cli::hints;
use crate::error::Error;
use crate::{DecodedResponse, Envelope, ErrorStatus, Oid, Pdu, PduType, Value, VarBind, Version};
use serde::Serialize;
use std::io::{self, Write};

/// A decoded message, ready for output.
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub version: String,
    pub community: String,
    pub pdu_type: String,
    pub request_id: i32,
    pub error_status: String,
    pub error_index: i32,
    pub results: Vec<VarBindResult>,
}

/// A single binding, or the reason it has no value.
#[derive(Debug, Serialize)]
pub struct VarBindResult {
    pub oid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Message-level fields shared by both report sources.
struct Header<'a> {
    version: i32,
    community: &'a [u8],
    pdu_type: PduType,
    request_id: i32,
    error_status: i32,
    error_index: i32,
}

/// Output context for formatting.
pub struct OutputContext {
    pub format: OutputFormat,
    pub show_hints: bool,
    pub force_hex: bool,
    pub prefix: Option<Oid>,
}

impl OutputContext {
    /// Create a new output context with default settings.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_hints: true,
            force_hex: false,
            prefix: None,
        }
    }

    /// Build a report from a fully decoded response.
    pub fn report(&self, response: &DecodedResponse) -> DecodeReport {
        let header = Header {
            version: response.version,
            community: &response.community,
            pdu_type: response.pdu_type,
            request_id: response.request_id,
            error_status: response.error_status,
            error_index: response.error_index,
        };
        let results = response
            .varbinds
            .iter()
            .filter(|vb| self.selected(&vb.oid))
            .map(|vb| self.format_varbind(vb))
            .collect();
        build_report(header, results)
    }

    /// Build a report binding by binding, keeping exception sentinels as
    /// entries instead of failing.
    ///
    /// Errors other than `noSuchObject`/`noSuchInstance` are still returned.
    pub fn lenient_report(&self, envelope: &Envelope, pdu: &Pdu) -> Result<DecodeReport, Error> {
        let header = Header {
            version: envelope.version,
            community: &envelope.community,
            pdu_type: pdu.pdu_type,
            request_id: pdu.request_id,
            error_status: pdu.error_status,
            error_index: pdu.error_index,
        };

        let mut results = Vec::with_capacity(pdu.varbinds.len());
        for (raw, decoded) in pdu.varbinds.iter().zip(pdu.decode_each()) {
            if !self.selected(&raw.oid) {
                continue;
            }
            match decoded {
                Ok(vb) => results.push(self.format_varbind(&vb)),
                Err(e) if e.is_sentinel() => results.push(self.format_sentinel(&raw.oid, &e)),
                Err(e) => return Err(e),
            }
        }
        Ok(build_report(header, results))
    }

    /// Write a report to stdout.
    pub fn write_report(&self, report: &DecodeReport) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, report)
    }

    fn write_to<W: Write>(&self, w: &mut W, report: &DecodeReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => self.write_human(w, report),
            OutputFormat::Json => self.write_json(w, report),
            OutputFormat::Raw => self.write_raw(w, report),
        }
    }

    fn selected(&self, oid: &Oid) -> bool {
        self.prefix.as_ref().is_none_or(|p| oid.starts_with(p))
    }

    fn hint(&self, oid: &Oid) -> Option<String> {
        if self.show_hints {
            hints::describe(oid)
        } else {
            None
        }
    }

    fn format_varbind(&self, vb: &VarBind) -> VarBindResult {
        let (value_type, value, formatted, raw_hex) = format_value(&vb.value, self.force_hex);

        VarBindResult {
            oid: vb.oid.to_string(),
            hint: self.hint(&vb.oid),
            value_type,
            value,
            formatted,
            raw_hex,
            error: None,
        }
    }

    fn format_sentinel(&self, oid: &Oid, err: &Error) -> VarBindResult {
        let (value_type, message) = match err {
            Error::NoSuchObject { .. } => ("NoSuchObject", "No Such Object available"),
            _ => ("NoSuchInstance", "No Such Instance currently exists"),
        };

        VarBindResult {
            oid: oid.to_string(),
            hint: self.hint(oid),
            value_type: value_type.into(),
            value: serde_json::Value::Null,
            formatted: Some(message.into()),
            raw_hex: None,
            error: Some(err.to_string()),
        }
    }

    fn write_human<W: Write>(&self, w: &mut W, report: &DecodeReport) -> io::Result<()> {
        if report.error_status != "noError" {
            writeln!(
                w,
                "# {} at index {}",
                report.error_status, report.error_index
            )?;
        }

        for vb in &report.results {
            if let Some(ref hint) = vb.hint {
                write!(w, "{} ({})", vb.oid, hint)?;
            } else {
                write!(w, "{}", vb.oid)?;
            }

            write!(w, " = {}: ", vb.value_type)?;

            if let Some(ref formatted) = vb.formatted {
                writeln!(w, "{}", formatted)?;
            } else {
                match &vb.value {
                    serde_json::Value::String(s) => writeln!(w, "\"{}\"", s)?,
                    serde_json::Value::Null => writeln!(w)?,
                    other => writeln!(w, "{}", other)?,
                }
            }
        }

        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W, report: &DecodeReport) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
        writeln!(w, "{}", json)
    }

    fn write_raw<W: Write>(&self, w: &mut W, report: &DecodeReport) -> io::Result<()> {
        for vb in &report.results {
            let value_str = match &vb.value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            writeln!(w, "{}\t{}", vb.oid, value_str)?;
        }
        Ok(())
    }
}

fn build_report(header: Header<'_>, results: Vec<VarBindResult>) -> DecodeReport {
    DecodeReport {
        version: format_version(header.version),
        community: String::from_utf8_lossy(header.community).into_owned(),
        pdu_type: header.pdu_type.to_string(),
        request_id: header.request_id,
        error_status: ErrorStatus::from_i32(header.error_status).to_string(),
        error_index: header.error_index,
        results,
    }
}

fn format_version(version: i32) -> String {
    match Version::from_i32(version) {
        Some(v) => v.to_string(),
        None => format!("unknown({})", version),
    }
}

/// Write envelope and PDU header detail to stderr.
pub fn write_verbose_header(envelope: &Envelope, pdu: &Pdu) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "--- Message ---");
    let _ = writeln!(stderr, "Version:     {}", format_version(envelope.version));
    let _ = writeln!(
        stderr,
        "Community:   {}",
        String::from_utf8_lossy(&envelope.community)
    );
    let _ = writeln!(
        stderr,
        "PDU:         {} (0x{:02X}, {} bytes)",
        pdu.pdu_type,
        pdu.pdu_type.tag(),
        envelope.body.full_bytes().len()
    );
    let _ = writeln!(stderr, "Request ID:  {}", pdu.request_id);
    let _ = writeln!(stderr, "Status:      {}", pdu.status());
    let _ = writeln!(stderr, "Error index: {}", pdu.error_index);
    let _ = writeln!(stderr, "Bindings:    {}", pdu.varbinds.len());
    let _ = writeln!(stderr);
}

/// Write detailed binding information to stderr.
///
/// Bindings that fail to decode are listed with their raw tag and the error.
pub fn write_verbose_varbinds(pdu: &Pdu, show_hints: bool) {
    let mut stderr = io::stderr().lock();
    write_verbose_varbinds_to(&mut stderr, pdu, show_hints);
}

fn write_verbose_varbinds_to<W: Write>(w: &mut W, pdu: &Pdu, show_hints: bool) {
    let _ = writeln!(w, "--- Bindings ---");
    for (raw, decoded) in pdu.varbinds.iter().zip(pdu.decode_each()) {
        write_verbose_name(w, &raw.oid, show_hints);
        match decoded {
            Ok(vb) => write_verbose_value(w, &vb),
            Err(e) => {
                let _ = writeln!(w, "    Type:    (tag 0x{:02X})", raw.value.tag());
                let _ = writeln!(w, "    Error:   {}", e);
            }
        }
    }
    if !pdu.varbinds.is_empty() {
        let _ = writeln!(w);
    }
}

fn write_verbose_name<W: Write>(w: &mut W, oid: &Oid, show_hints: bool) {
    let hint = if show_hints { hints::describe(oid) } else { None };
    if let Some(h) = hint {
        let _ = writeln!(w, "  {} ({})", oid, h);
    } else {
        let _ = writeln!(w, "  {}", oid);
    }
}

fn write_verbose_value<W: Write>(w: &mut W, vb: &VarBind) {
    let (type_name, decoded, raw_hex, size) = format_verbose_value(&vb.value);

    let _ = writeln!(w, "    Type:    {} (tag 0x{:02X})", type_name, vb.tag().as_u8());
    let _ = writeln!(w, "    Value:   {}", decoded);

    if let Some(hex) = raw_hex {
        let _ = writeln!(w, "    Raw:     {}", hex);
    }

    if let Some(s) = size {
        let _ = writeln!(w, "    Size:    {} bytes", s);
    }
}

/// Format a value for verbose output, returning (type_name, decoded_value, raw_hex, size).
fn format_verbose_value(value: &Value) -> (String, String, Option<String>, Option<usize>) {
    match value {
        Value::OctetString(bytes) => {
            let raw_hex = format_hex_string(bytes);
            let size = Some(bytes.len());

            if is_printable(bytes) {
                let decoded = String::from_utf8_lossy(bytes).to_string();
                (
                    "STRING".into(),
                    format!("\"{}\"", decoded),
                    Some(raw_hex),
                    size,
                )
            } else {
                ("Hex-STRING".into(), raw_hex.clone(), Some(raw_hex), size)
            }
        }

        Value::ObjectIdentifier(oid) => {
            let decoded = match hints::describe(oid) {
                Some(h) => format!("{} ({})", oid, h),
                None => oid.to_string(),
            };
            ("OID".into(), decoded, None, None)
        }

        Value::TimeTicks(v) => (
            "TimeTicks".into(),
            format!("{} ({})", v, format_timeticks(*v)),
            None,
            None,
        ),

        Value::Opaque(bytes) | Value::NsapAddress(bytes) => {
            let raw_hex = format_hex_string(bytes);
            (
                value.tag().to_string(),
                raw_hex.clone(),
                Some(raw_hex),
                Some(bytes.len()),
            )
        }

        other => {
            let (type_name, _, _, _) = format_value(other, false);
            (type_name, other.to_string(), None, None)
        }
    }
}

/// Format a value, returning (type_name, json_value, formatted_string, raw_hex).
fn format_value(
    value: &Value,
    force_hex: bool,
) -> (String, serde_json::Value, Option<String>, Option<String>) {
    match value {
        Value::Integer(v) => ("INTEGER".into(), (*v).into(), None, None),

        Value::OctetString(bytes) => {
            let raw_hex = hex_string(bytes);

            if force_hex || !is_printable(bytes) {
                (
                    "Hex-STRING".into(),
                    serde_json::Value::String(raw_hex.clone()),
                    Some(format_hex_string(bytes)),
                    Some(raw_hex),
                )
            } else {
                let s = String::from_utf8_lossy(bytes);
                (
                    "STRING".into(),
                    serde_json::Value::String(s.to_string()),
                    None,
                    Some(raw_hex),
                )
            }
        }

        Value::Null => ("NULL".into(), serde_json::Value::Null, None, None),

        Value::ObjectIdentifier(oid) => (
            "OID".into(),
            serde_json::Value::String(oid.to_string()),
            None,
            None,
        ),

        Value::Counter32(v) => ("Counter32".into(), (*v).into(), None, None),

        Value::Gauge32(v) => ("Gauge32".into(), (*v).into(), None, None),

        Value::TimeTicks(v) => (
            "TimeTicks".into(),
            (*v).into(),
            Some(format!("({}) {}", v, format_timeticks(*v))),
            None,
        ),

        Value::Opaque(bytes) | Value::NsapAddress(bytes) => {
            let raw_hex = hex_string(bytes);
            (
                value.tag().to_string(),
                serde_json::Value::String(raw_hex.clone()),
                Some(format_hex_string(bytes)),
                Some(raw_hex),
            )
        }

        Value::Counter64(v) => ("Counter64".into(), (*v).into(), None, None),

        Value::Uinteger32(v) => ("UInteger32".into(), (*v).into(), None, None),
    }
}

/// Check if bytes are printable ASCII/UTF-8.
fn is_printable(bytes: &[u8]) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(s) => s
            .chars()
            .all(|c| c.is_ascii_graphic() || c.is_ascii_whitespace()),
        Err(_) => false,
    }
}

/// Format bytes as hex string (lowercase, no separator).
fn hex_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Format bytes as spaced hex for display.
fn format_hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format TimeTicks as human-readable duration.
fn format_timeticks(centiseconds: u32) -> String {
    let total_seconds = centiseconds / 100;
    let cs = centiseconds % 100;

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!(
            "{}d {:02}:{:02}:{:02}.{:02}",
            days, hours, minutes, seconds, cs
        )
    } else {
        format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, cs)
    }
}

/// Write an error message to stderr, with the offending bytes for
/// malformed PDUs.
pub fn write_error(err: &Error) {
    eprintln!("Error: {}", err);
    if let Error::MalformedPdu { raw, .. } = err {
        eprintln!("  PDU bytes: {}", format_hex_string(raw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;
    use bytes::Bytes;

    fn response(varbinds: Vec<VarBind>) -> DecodedResponse {
        DecodedResponse {
            version: 1,
            community: Bytes::from_static(b"public"),
            pdu_type: PduType::Response,
            request_id: 9,
            error_status: 0,
            error_index: 0,
            varbinds,
        }
    }

    fn render(ctx: &OutputContext, report: &DecodeReport) -> String {
        let mut out = Vec::new();
        ctx.write_to(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_timeticks() {
        // 1 day, 10 hours, 17 minutes, 36.78 seconds
        assert_eq!(format_timeticks(12345678), "1d 10:17:36.78");
        assert_eq!(format_timeticks(360000), "01:00:00.00");
        assert_eq!(format_timeticks(0), "00:00:00.00");
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable(b"Hello World"));
        assert!(is_printable(b"Line 1\nLine 2"));
        assert!(is_printable(b""));
        assert!(!is_printable(&[0x00, 0x01, 0x02]));
        assert!(!is_printable(&[0x80, 0x81]));
    }

    #[test]
    fn test_hex_formats() {
        assert_eq!(hex_string(&[0x00, 0x1A, 0x2B]), "001a2b");
        assert_eq!(format_hex_string(&[0x00, 0x1A, 0x2B]), "00 1A 2B");
    }

    #[test]
    fn test_human_output() {
        let ctx = OutputContext::new(OutputFormat::Human);
        let report = ctx.report(&response(vec![
            VarBind::new(
                oid!(1, 3, 6, 1, 2, 1, 1, 5, 0),
                Value::OctetString(Bytes::from_static(b"router1")),
            ),
            VarBind::new(oid!(1, 3, 6, 1, 4, 1, 1), Value::Counter64(5)),
        ]));

        assert_eq!(
            render(&ctx, &report),
            "1.3.6.1.2.1.1.5.0 (sysName.0) = STRING: \"router1\"\n\
             1.3.6.1.4.1.1 = Counter64: 5\n"
        );
    }

    #[test]
    fn test_raw_output_and_prefix() {
        let mut ctx = OutputContext::new(OutputFormat::Raw);
        ctx.prefix = Some(oid!(1, 3, 6, 1, 2, 1, 1));
        let report = ctx.report(&response(vec![
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 3, 0), Value::TimeTicks(100)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 2, 1, 0), Value::Integer(4)),
        ]));

        assert_eq!(render(&ctx, &report), "1.3.6.1.2.1.1.3.0\t100\n");
    }

    #[test]
    fn test_json_output() {
        let ctx = OutputContext::new(OutputFormat::Json);
        let report = ctx.report(&response(vec![VarBind::new(
            oid!(1, 3, 6, 1, 2, 1, 1, 1, 0),
            Value::Opaque(Bytes::from_static(&[0x9F, 0x78])),
        )]));

        let json: serde_json::Value = serde_json::from_str(&render(&ctx, &report)).unwrap();
        assert_eq!(json["version"], "SNMPv2c");
        assert_eq!(json["community"], "public");
        assert_eq!(json["pdu_type"], "Response");
        assert_eq!(json["error_status"], "noError");
        assert_eq!(json["results"][0]["type"], "Opaque");
        assert_eq!(json["results"][0]["value"], "9f78");
        assert_eq!(json["results"][0]["hint"], "sysDescr.0");
    }

    #[test]
    fn test_force_hex() {
        let mut ctx = OutputContext::new(OutputFormat::Raw);
        ctx.force_hex = true;
        let report = ctx.report(&response(vec![VarBind::new(
            oid!(1, 3, 6, 1),
            Value::OctetString(Bytes::from_static(b"AB")),
        )]));
        assert_eq!(report.results[0].value_type, "Hex-STRING");
        assert_eq!(render(&ctx, &report), "1.3.6.1\t4142\n");
    }

    /// Response { 3, 0, 0, [ 1.3.6.1 = INTEGER 1, 1.3.6 = noSuchObject ] }
    fn sentinel_pdu() -> (Envelope, Pdu) {
        let packet = [
            0x30, 0x2A, 0x02, 0x01, 0x01, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c', 0x22,
            0x1D, 0x02, 0x01, 0x03, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00, 0x30, 0x12, 0x30, 0x08,
            0x06, 0x03, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x30, 0x06, 0x06, 0x02, 0x2B, 0x06,
            0x00, 0x00,
        ];
        let envelope = Envelope::parse(Bytes::copy_from_slice(&packet)).unwrap();
        let pdu = Pdu::parse(&envelope.body, envelope.pdu_type).unwrap();
        (envelope, pdu)
    }

    #[test]
    fn test_lenient_report_keeps_sentinels() {
        let (envelope, pdu) = sentinel_pdu();

        let ctx = OutputContext::new(OutputFormat::Raw);
        let report = ctx.lenient_report(&envelope, &pdu).unwrap();
        assert_eq!(report.request_id, 3);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[1].value_type, "NoSuchObject");
        assert!(report.results[1].error.is_some());
    }

    #[test]
    fn test_verbose_varbinds_list_failed_bindings() {
        let (_, pdu) = sentinel_pdu();

        let mut out = Vec::new();
        write_verbose_varbinds_to(&mut out, &pdu, false);
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  1.3.6.1\n    Type:    INTEGER (tag 0x02)\n    Value:   1\n"));
        assert!(text.contains("  1.3.6\n    Type:    (tag 0x00)\n    Error:   noSuchObject: 1.3.6\n"));
    }
}
