#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use snmp_decode::message::{Envelope, PduType};
use snmp_decode::pdu::Pdu;

fuzz_target!(|data: &[u8]| {
    let bytes = Bytes::copy_from_slice(data);

    // Whole-message decode
    let _ = snmp_decode::decode(data);

    // Stage by stage, keeping going past sentinels
    if let Ok(envelope) = Envelope::parse(bytes.clone())
        && let Ok(pdu) = Pdu::parse(&envelope.body, envelope.pdu_type)
    {
        let _ = pdu.decode_each();
    }

    // PDU parser on raw input, under every accepted tag
    let mut decoder = snmp_decode::ber::Decoder::new(bytes);
    if let Ok(body) = decoder.read_raw() {
        for pdu_type in [PduType::GetResponse, PduType::Report, PduType::Response] {
            let _ = Pdu::parse(&body, pdu_type);
        }
    }
});
