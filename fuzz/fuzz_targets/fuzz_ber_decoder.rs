#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use snmp_decode::ber::{Decoder, decode_length};
use snmp_decode::varbind::{RawVarBind, VarBind};

fuzz_target!(|data: &[u8]| {
    let bytes = Bytes::copy_from_slice(data);

    // BER decoder primitives
    let _ = decode_length(data, 0);

    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_integer();

    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_octet_string();

    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_oid();

    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_sequence();

    // Raw TLV split, then every type rule on the same span
    let mut decoder = Decoder::new(bytes.clone());
    while let Ok(raw) = decoder.read_raw() {
        let _ = raw.as_integer();
        let _ = raw.as_unsigned32();
        let _ = raw.as_unsigned64();
        let _ = raw.as_null();
        let _ = raw.as_oid();
        let _ = raw.decoder().read_sequence();
        let _ = VarBind::decode(snmp_decode::Oid::empty(), &raw);
    }

    // VarBind SEQUENCE
    let mut decoder = Decoder::new(bytes);
    if let Ok(raw) = RawVarBind::read(&mut decoder) {
        let _ = raw.decode();
    }
});
