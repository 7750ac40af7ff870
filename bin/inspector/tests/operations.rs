//! Tests for the inspector operations against real encoded calldata.

use alloy_primitives::{address, hex, Address, Bytes, B256, U256};
use codec::{AcrossNativePacked, PackedFormat, PackedRecord};
use inspector::{decode_calldata, encode_record, parse_record, scan_calldata};

fn sample_native_record() -> AcrossNativePacked {
    let mut transaction_id = B256::ZERO;
    transaction_id[..8].copy_from_slice(&hex!("0102030405060708"));

    AcrossNativePacked {
        transaction_id,
        receiver: address!("552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0"),
        destination_chain_id: 10,
        relayer_fee_pct: 1_000_000,
        quote_timestamp: 1_700_000_000,
        message: Bytes::from(vec![0xde, 0xad]),
    }
}

#[test]
fn test_decode_operation_reports_record_and_referrer() {
    let record = sample_native_record();
    let referrer = address!("c0ffee254729296a45a3885639ac7e10f9d54979");
    let calldata = reftag::append_referrer_tag(&record.encode().unwrap(), referrer);

    let decoded = decode_calldata(PackedFormat::AcrossNative, &hex::encode_prefixed(&calldata))
        .expect("decode should succeed");

    assert_eq!(decoded.format, "across-native");
    assert_eq!(decoded.referrer, Some(referrer));
    match decoded.record {
        PackedRecord::AcrossNative(inner) => {
            assert_eq!(inner.receiver, record.receiver);
            assert_eq!(inner.message, record.message);
        }
        other => panic!("wrong record variant: {other:?}"),
    }
}

#[test]
fn test_decode_operation_accepts_unprefixed_hex() {
    let record = sample_native_record();
    let calldata = record.encode().unwrap();

    let decoded =
        decode_calldata(PackedFormat::AcrossNative, &hex::encode(&calldata)).unwrap();
    assert_eq!(decoded.referrer, None);
}

#[test]
fn test_decode_operation_rejects_bad_hex_and_short_buffers() {
    assert!(decode_calldata(PackedFormat::AcrossNative, "0xzz").is_err());
    assert!(decode_calldata(PackedFormat::HopL1Erc20, "0x0102").is_err());
}

#[test]
fn test_parse_record_from_toml() {
    let source = r#"
        transaction_id = "0x0102030405060708000000000000000000000000000000000000000000000000"
        receiver = "0x552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0"
        destination_chain_id = 137
        sending_asset_id = "0x2791bca1f2de4661ed88a30c99a7a9449aa84174"
        min_amount = "0x5f5e100"
        relayer_fee_pct = 0
        quote_timestamp = 1700000000
        message = "0x"
    "#;

    let record = parse_record(PackedFormat::AcrossErc20, source).unwrap();
    match &record {
        PackedRecord::AcrossErc20(inner) => {
            assert_eq!(inner.destination_chain_id, 137);
            assert_eq!(inner.min_amount, U256::from(100_000000u64));
        }
        other => panic!("wrong record variant: {other:?}"),
    }
    assert_eq!(record.format(), PackedFormat::AcrossErc20);
}

#[test]
fn test_encode_operation_round_trips_through_file() {
    let source = r#"
        transaction_id = "0x0102030405060708000000000000000000000000000000000000000000000000"
        receiver = "0x552008c0f6870c2f77e5cc1d2eb9bdff03e30ea0"
        destination_chain_id = 10
        relayer_fee_pct = 1000000
        quote_timestamp = 1700000000
        message = "0xdead"
    "#;

    let path = std::env::temp_dir().join(format!(
        "inspector-encode-test-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, source).unwrap();

    let referrer = address!("c0ffee254729296a45a3885639ac7e10f9d54979");
    let calldata_hex =
        encode_record(PackedFormat::AcrossNative, &path, Some(referrer)).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(calldata_hex.starts_with("0x"));
    let decoded = decode_calldata(PackedFormat::AcrossNative, &calldata_hex).unwrap();
    assert_eq!(decoded.referrer, Some(referrer));
    match decoded.record {
        PackedRecord::AcrossNative(inner) => {
            assert_eq!(inner.destination_chain_id, 10);
            assert_eq!(inner.message, Bytes::from(vec![0xde, 0xad]));
        }
        other => panic!("wrong record variant: {other:?}"),
    }
}

#[test]
fn test_scan_operation() {
    let core = sample_native_record().encode().unwrap();
    let plain = scan_calldata(&hex::encode_prefixed(&core)).unwrap();
    assert!(!plain.tag_present);
    assert_eq!(plain.referrer, None);
    assert_eq!(plain.calldata_len, core.len());

    let tagged = reftag::append_referrer_tag(&core, Address::from([0x42; 20]));
    let scanned = scan_calldata(&hex::encode_prefixed(&tagged)).unwrap();
    assert!(scanned.tag_present);
    assert_eq!(scanned.referrer, Some(Address::from([0x42; 20])));
}

#[test]
fn test_decoded_calldata_serializes_to_json() {
    let record = sample_native_record();
    let calldata = record.encode().unwrap();
    let decoded = decode_calldata(PackedFormat::AcrossNative, &hex::encode_prefixed(&calldata))
        .unwrap();

    let json = serde_json::to_value(&decoded).unwrap();
    assert_eq!(json["format"], "across-native");
    assert_eq!(
        json["record"]["receiver"],
        "0x552008C0f6870C2F77e5cC1d2eB9Bdff03e30Ea0".to_lowercase()
    );
}
