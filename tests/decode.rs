//! End-to-end decoding of response messages.

mod common;

use bytes::Bytes;
use common::*;
use snmp_decode::{
    DecodeErrorKind, DecodedResponse, Envelope, Error, ErrorStatus, Pdu, PduType, Tag, Value,
    Version, decode, oid,
};

#[test]
fn bindings_keep_wire_order() {
    let packet = v2c_response(&[
        varbind(&sys_descr(), tlv(0x04, b"Linux router 5.15")),
        varbind(&sys_uptime(), tlv(0x43, &[0x01, 0xE2, 0x40])),
    ]);

    let resp = decode(&packet).unwrap();

    assert_eq!(resp.varbinds.len(), 2);
    assert_eq!(resp.varbinds[0].oid, sys_descr());
    assert_eq!(
        resp.varbinds[0].value,
        Value::OctetString(Bytes::from_static(b"Linux router 5.15"))
    );
    assert_eq!(resp.varbinds[1].oid, sys_uptime());
    assert_eq!(resp.varbinds[1].value, Value::TimeTicks(123_456));
}

#[test]
fn reversed_order_is_not_sorted() {
    let packet = v2c_response(&[
        varbind(&sys_uptime(), tlv(0x43, &[0x05])),
        varbind(&sys_descr(), tlv(0x04, b"x")),
    ]);

    let resp = decode(&packet).unwrap();
    let oids: Vec<_> = resp.varbinds.iter().map(|vb| vb.oid.clone()).collect();
    assert_eq!(oids, vec![sys_uptime(), sys_descr()]);
}

#[test]
fn header_fields_are_exposed() {
    let packet = message(0, COMMUNITY_RO, GET_RESPONSE, 0x1234_5678, 2, 1, &[varbind(
        &nonexistent_oid(),
        tlv(0x05, &[]),
    )]);

    let resp = decode(&packet).unwrap();
    assert_eq!(resp.snmp_version(), Some(Version::V1));
    assert_eq!(resp.community.as_ref(), COMMUNITY_RO);
    assert_eq!(resp.pdu_type, PduType::GetResponse);
    assert_eq!(resp.request_id, 0x1234_5678);
    assert_eq!(resp.status(), ErrorStatus::NoSuchName);
    assert_eq!(resp.error_index, 1);
    assert_eq!(resp.varbinds[0].value, Value::Null);
}

#[test]
fn report_pdu_is_accepted() {
    let packet = message(1, b"", REPORT, -1, 0, 0, &[]);
    let resp = decode(&packet).unwrap();
    assert_eq!(resp.pdu_type, PduType::Report);
    assert_eq!(resp.request_id, -1);
    assert!(resp.varbinds.is_empty());
}

#[test]
fn no_such_instance_names_the_binding() {
    let packet = v2c_response(&[
        varbind(&sys_descr(), tlv(0x04, b"ok")),
        varbind(&nonexistent_oid(), tlv(0x01, &[])),
    ]);

    match decode(&packet).unwrap_err() {
        Error::NoSuchInstance { oid } => assert_eq!(oid, nonexistent_oid()),
        other => panic!("expected NoSuchInstance, got {:?}", other),
    }
}

#[test]
fn no_such_object_names_the_binding() {
    let packet = v2c_response(&[varbind(&sys_name(), tlv(0x00, &[]))]);

    let err = decode(&packet).unwrap_err();
    assert!(err.is_sentinel());
    assert_eq!(err.oid(), Some(&sys_name()));
    assert_eq!(err.to_string(), "noSuchObject: 1.3.6.1.2.1.1.5.0");
}

#[test]
fn decode_each_reports_every_binding() {
    let packet = v2c_response(&[
        varbind(&sys_descr(), tlv(0x04, b"ok")),
        varbind(&nonexistent_oid(), tlv(0x01, &[])),
        varbind(&sys_uptime(), tlv(0x43, &[0x64])),
    ]);

    let envelope = Envelope::parse(Bytes::from(packet)).unwrap();
    let pdu = Pdu::parse(&envelope.body, envelope.pdu_type).unwrap();
    let results = pdu.decode_each();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::NoSuchInstance { .. })));
    assert_eq!(results[2].as_ref().unwrap().value, Value::TimeTicks(100));
}

#[test]
fn counter64_max() {
    let packet = v2c_response(&[varbind(
        &if_hc_in_octets_1(),
        tlv(0x46, &[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]),
    )]);

    let resp = decode(&packet).unwrap();
    assert_eq!(resp.varbinds[0].value, Value::Counter64(u64::MAX));
    assert_eq!(resp.varbinds[0].value.as_u64(), Some(18_446_744_073_709_551_615));
}

#[test]
fn counter32_max() {
    let packet = v2c_response(&[varbind(
        &if_in_octets_1(),
        tlv(0x41, &[0x00, 0xFF, 0xFF, 0xFF, 0xFF]),
    )]);

    let resp = decode(&packet).unwrap();
    assert_eq!(resp.varbinds[0].value, Value::Counter32(4_294_967_295));
}

#[test]
fn every_value_bearing_tag_decodes() {
    let packet = v2c_response(&[
        varbind(&oid!(1, 3, 6, 1, 1), integer(-42)),
        varbind(&oid!(1, 3, 6, 1, 2), tlv(0x04, &[0xDE, 0xAD])),
        varbind(&oid!(1, 3, 6, 1, 3), tlv(0x05, &[])),
        varbind(&oid!(1, 3, 6, 1, 4), oid(&net_snmp_enterprise())),
        varbind(&oid!(1, 3, 6, 1, 5), tlv(0x41, &[0x01])),
        varbind(&oid!(1, 3, 6, 1, 6), tlv(0x42, &[0x02])),
        varbind(&oid!(1, 3, 6, 1, 7), tlv(0x43, &[0x03])),
        varbind(&oid!(1, 3, 6, 1, 8), tlv(0x44, &[0x04])),
        varbind(&oid!(1, 3, 6, 1, 9), tlv(0x45, &[0x05])),
        varbind(&oid!(1, 3, 6, 1, 10), tlv(0x46, &[0x06])),
        varbind(&oid!(1, 3, 6, 1, 11), tlv(0x47, &[0x07])),
    ]);

    let resp = decode(&packet).unwrap();
    let tags: Vec<Tag> = resp.varbinds.iter().map(|vb| vb.tag()).collect();
    assert_eq!(
        tags,
        vec![
            Tag::Integer,
            Tag::OctetString,
            Tag::Null,
            Tag::ObjectIdentifier,
            Tag::Counter32,
            Tag::Gauge32,
            Tag::TimeTicks,
            Tag::Opaque,
            Tag::NsapAddress,
            Tag::Counter64,
            Tag::Uinteger32,
        ]
    );
    assert_eq!(resp.varbinds[0].value, Value::Integer(-42));
    assert_eq!(
        resp.varbinds[3].value,
        Value::ObjectIdentifier(net_snmp_enterprise())
    );
    assert_eq!(resp.varbinds[10].value, Value::Uinteger32(7));
}

#[test]
fn bit_string_is_unimplemented() {
    let packet = v2c_response(&[varbind(&sys_descr(), tlv(0x03, &[0x00, 0x80]))]);

    match decode(&packet).unwrap_err() {
        Error::Unimplemented { oid, tag } => {
            assert_eq!(oid, sys_descr());
            assert_eq!(tag, Tag::BitString);
        }
        other => panic!("expected Unimplemented, got {:?}", other),
    }
}

#[test]
fn unknown_value_tag_is_unsupported() {
    // IpAddress (0x40) is outside the registry
    let packet = v2c_response(&[varbind(&sys_descr(), tlv(0x40, &[192, 0, 2, 1]))]);

    match decode(&packet).unwrap_err() {
        Error::UnsupportedTag { oid, tag } => {
            assert_eq!(oid, sys_descr());
            assert_eq!(tag, 0x40);
        }
        other => panic!("expected UnsupportedTag, got {:?}", other),
    }
}

#[test]
fn truncated_message_is_malformed_envelope() {
    let packet = v2c_response(&[varbind(&sys_descr(), tlv(0x04, b"abc"))]);

    let err = decode(&packet[..packet.len() - 1]).unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope { .. }), "{:?}", err);
}

#[test]
fn every_truncation_fails_cleanly() {
    let packet = v2c_response(&[
        varbind(&sys_descr(), tlv(0x04, b"abc")),
        varbind(&sys_uptime(), tlv(0x43, &[0x01, 0x00])),
    ]);

    for len in 0..packet.len() {
        let err = decode(&packet[..len]).unwrap_err();
        assert!(
            matches!(err, Error::MalformedEnvelope { .. }),
            "len {}: {:?}",
            len,
            err
        );
    }
}

#[test]
fn unknown_pdu_tag_is_malformed_envelope() {
    let packet = message(1, b"public", 0x23, 1, 0, 0, &[]);

    let err = decode(&packet).unwrap_err();
    match err {
        Error::MalformedEnvelope { source } => {
            assert_eq!(source.kind, DecodeErrorKind::UnknownPduType(0x23));
        }
        other => panic!("expected MalformedEnvelope, got {:?}", other),
    }
}

#[test]
fn rfc_response_tag_is_not_accepted() {
    // 0xA2 is the RFC 3416 context-constructed tag; only 0x20-0x22 are accepted
    let packet = message(1, b"public", 0xA2, 1, 0, 0, &[]);
    assert!(matches!(
        decode(&packet),
        Err(Error::MalformedEnvelope { .. })
    ));
}

#[test]
fn broken_varbind_is_malformed_pdu() {
    // varbind SEQUENCE holding only the name
    let bad = sequence(&[oid(&sys_descr())]);
    let packet = v2c_response(&[bad]);

    match decode(&packet).unwrap_err() {
        Error::MalformedPdu { raw, source } => {
            assert_eq!(raw[0], RESPONSE);
            assert_eq!(source.kind, DecodeErrorKind::TruncatedData);
        }
        other => panic!("expected MalformedPdu, got {:?}", other),
    }
}

#[test]
fn empty_oid_value_is_rejected() {
    let packet = v2c_response(&[varbind(&sys_descr(), tlv(0x06, &[]))]);

    match decode(&packet).unwrap_err() {
        Error::MalformedPdu { source, .. } => {
            assert_eq!(source.kind, DecodeErrorKind::ZeroLengthOid);
        }
        other => panic!("expected MalformedPdu, got {:?}", other),
    }
}

#[test]
fn empty_binding_name_is_rejected() {
    let packet = v2c_response(&[sequence(&[tlv(0x06, &[]), tlv(0x05, &[])])]);

    let err = decode(&packet).unwrap_err();
    assert!(matches!(err, Error::MalformedPdu { .. }), "{:?}", err);
    assert_eq!(
        err.decode_error().map(|e| e.kind),
        Some(DecodeErrorKind::ZeroLengthOid)
    );
}

#[test]
fn padded_oid_subidentifier_is_rejected() {
    // 1.3.6.1 with the last arc written as 0x80 0x01
    let packet = v2c_response(&[varbind(
        &sys_descr(),
        tlv(0x06, &[0x2B, 0x06, 0x80, 0x01]),
    )]);

    let err = decode(&packet).unwrap_err();
    assert_eq!(
        err.decode_error().map(|e| e.kind),
        Some(DecodeErrorKind::InvalidOidEncoding)
    );
}

#[test]
fn oversized_integer_is_rejected() {
    let packet = v2c_response(&[varbind(&sys_descr(), tlv(0x02, &[0x01, 0, 0, 0, 0]))]);

    let err = decode(&packet).unwrap_err();
    assert_eq!(
        err.decode_error().map(|e| e.kind),
        Some(DecodeErrorKind::IntegerOverflow)
    );
}

#[test]
fn long_form_lengths_decode() {
    let text = vec![b'a'; 300];
    let packet = v2c_response(&[varbind(&sys_descr(), tlv(0x04, &text))]);
    assert_eq!(packet[1], 0x82);

    let resp = decode(&packet).unwrap();
    assert_eq!(resp.varbinds[0].value.as_bytes(), Some(&text[..]));
}

#[test]
fn indefinite_length_is_rejected() {
    let mut packet = v2c_response(&[]);
    packet[1] = 0x80;
    let err = decode(&packet).unwrap_err();
    assert_eq!(
        err.decode_error().map(|e| e.kind),
        Some(DecodeErrorKind::IndefiniteLength)
    );
}

#[test]
fn decoding_is_idempotent() {
    let packet = v2c_response(&[
        varbind(&sys_descr(), tlv(0x04, b"same")),
        varbind(&if_hc_in_octets_1(), tlv(0x46, &[0x12, 0x34])),
    ]);

    let first = decode(&packet).unwrap();
    let second = decode(&packet).unwrap();
    assert_eq!(first, second);

    let from_bytes = DecodedResponse::decode(Bytes::from(packet)).unwrap();
    assert_eq!(first, from_bytes);
}

#[test]
fn values_borrow_from_the_input_buffer() {
    let packet = Bytes::from(v2c_response(&[varbind(&sys_descr(), tlv(0x04, b"zero-copy"))]));
    let range = packet.as_ptr_range();

    let resp = DecodedResponse::decode(packet.clone()).unwrap();
    let bytes = resp.varbinds[0].value.as_bytes().unwrap();
    assert!(range.contains(&bytes.as_ptr()));
}
