//! Decoding with a subscriber installed, so every log call site is enabled.

mod common;

use common::*;
use snmp_decode::{Error, decode};
use tracing_subscriber::{EnvFilter, fmt::TestWriter};

fn with_trace_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("snmp_decode=trace"))
        .compact()
        .with_writer(TestWriter::default())
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

#[test]
fn successful_decode_logs_summary() {
    let packet = v2c_response(&[varbind(&sys_descr(), tlv(0x04, b"router"))]);
    let resp = with_trace_logging(|| decode(&packet)).unwrap();
    assert_eq!(resp.varbinds.len(), 1);
}

#[test]
fn sentinels_are_logged() {
    for tag in [0x00, 0x01] {
        let packet = v2c_response(&[varbind(&nonexistent_oid(), tlv(tag, &[]))]);
        let err = with_trace_logging(|| decode(&packet)).unwrap_err();
        assert!(err.is_sentinel());
    }
}

#[test]
fn unsupported_and_unimplemented_tags_are_logged() {
    let unsupported = v2c_response(&[varbind(&sys_descr(), tlv(0x40, &[10, 0, 0, 1]))]);
    assert!(matches!(
        with_trace_logging(|| decode(&unsupported)),
        Err(Error::UnsupportedTag { .. })
    ));

    let bits = v2c_response(&[varbind(&sys_descr(), tlv(0x03, &[0x00]))]);
    assert!(matches!(
        with_trace_logging(|| decode(&bits)),
        Err(Error::Unimplemented { .. })
    ));
}

#[test]
fn decoder_failures_are_logged() {
    let mut indefinite = v2c_response(&[]);
    indefinite[1] = 0x80;
    assert!(with_trace_logging(|| decode(&indefinite)).is_err());

    let wrong_pdu = message(1, b"public", 0x23, 1, 0, 0, &[]);
    assert!(matches!(
        with_trace_logging(|| decode(&wrong_pdu)),
        Err(Error::MalformedEnvelope { .. })
    ));

    let truncated = v2c_response(&[varbind(&sys_descr(), tlv(0x04, b"abc"))]);
    assert!(with_trace_logging(|| decode(&truncated[..truncated.len() - 2])).is_err());
}
