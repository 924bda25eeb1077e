#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_decode::oid::Oid;

fuzz_target!(|data: &[u8]| {
    // Sub-identifier decoding; anything accepted must print and re-parse
    if let Ok(oid) = Oid::from_ber(data) {
        let text = oid.to_string();
        if !oid.is_empty() {
            assert_eq!(Oid::parse(&text).ok(), Some(oid));
        }
    }

    // Dotted string notation
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Oid::parse(s);
    }
});
