//! Builders for BER-encoded response packets.
//!
//! The crate has no encoder, so fixtures are assembled here from TLV parts.

use snmp_decode::Oid;

/// Response PDU tags.
pub const GET_RESPONSE: u8 = 0x20;
pub const REPORT: u8 = 0x21;
pub const RESPONSE: u8 = 0x22;

/// Encode a definite length in the shortest form.
pub fn length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes = (len as u32).to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out = vec![0x80 | (4 - skip) as u8];
    out.extend_from_slice(&bytes[skip..]);
    out
}

/// Tag, length, content.
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend(length(content.len()));
    out.extend_from_slice(content);
    out
}

/// SEQUENCE over concatenated parts.
pub fn sequence(parts: &[Vec<u8>]) -> Vec<u8> {
    tlv(0x30, &parts.concat())
}

/// Minimal two's-complement INTEGER.
pub fn integer(value: i32) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < 3 {
        let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    tlv(0x02, &bytes[start..])
}

/// OBJECT IDENTIFIER.
pub fn oid(oid: &Oid) -> Vec<u8> {
    let arcs = oid.arcs();
    let mut content = vec![(arcs[0] * 40 + arcs[1]) as u8];
    for &arc in &arcs[2..] {
        let mut chunk = vec![(arc & 0x7F) as u8];
        let mut rest = arc >> 7;
        while rest > 0 {
            chunk.push(0x80 | (rest & 0x7F) as u8);
            rest >>= 7;
        }
        chunk.reverse();
        content.extend(chunk);
    }
    tlv(0x06, &content)
}

/// One `SEQUENCE { name, value }` binding; `value` is a complete TLV.
pub fn varbind(name: &Oid, value: Vec<u8>) -> Vec<u8> {
    sequence(&[oid(name), value])
}

/// A complete community response message.
pub fn message(
    version: i32,
    community: &[u8],
    pdu_tag: u8,
    request_id: i32,
    error_status: i32,
    error_index: i32,
    varbinds: &[Vec<u8>],
) -> Vec<u8> {
    let pdu = tlv(
        pdu_tag,
        &[
            integer(request_id),
            integer(error_status),
            integer(error_index),
            sequence(varbinds),
        ]
        .concat(),
    );
    sequence(&[integer(version), tlv(0x04, community), pdu])
}

/// A v2c Response with request-id 1 and no error.
pub fn v2c_response(varbinds: &[Vec<u8>]) -> Vec<u8> {
    message(1, b"public", RESPONSE, 1, 0, 0, varbinds)
}
