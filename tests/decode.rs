//! Decoder tests: binary layout extraction and malformed input handling

use chrono::DateTime;
use retoken::utils::base64;
use retoken::{EncodedToken, Error};

/// Documented sample token from the originating ecosystem
const SAMPLE_DATA: &str = "826C9A7E5C000000012B022C0100296E5A1004";

fn encode_token(seconds: u64, ordinal: u32, extension: &[u8]) -> EncodedToken {
    let mut bytes = seconds.to_be_bytes().to_vec();
    bytes.extend_from_slice(&ordinal.to_be_bytes());
    bytes.extend_from_slice(extension);
    EncodedToken::new(base64::encode_bytes(&bytes))
}

// ============================================================================
// Layout Extraction
// ============================================================================

#[test]
fn test_round_trip_recovers_fields() {
    let extension = [0x2b, 0x02, 0x2c, 0x01, 0x00, 0x29, 0x6e, 0x5a, 0x10, 0x04];
    let token = encode_token(1_700_000_000, 7, &extension);

    let decoded = token.decode().unwrap();
    assert_eq!(
        decoded.cluster_time,
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    );
    assert_eq!(decoded.ordinal, 7);
    assert_eq!(decoded.length, 22);
    assert_eq!(
        decoded.raw_hex,
        "000000006553f100000000072b022c0100296e5a1004"
    );
}

#[test]
fn test_decode_is_deterministic() {
    let token = encode_token(1_700_000_000, 42, &[0xab; 7]);
    assert_eq!(token.decode().unwrap(), token.decode().unwrap());
}

#[test]
fn test_exactly_twelve_bytes() {
    let decoded = encode_token(0, u32::MAX, &[]).decode().unwrap();
    assert_eq!(decoded.cluster_time, DateTime::UNIX_EPOCH);
    assert_eq!(decoded.ordinal, u32::MAX);
    assert_eq!(decoded.length, 12);
}

#[test]
fn test_raw_hex_is_lowercase() {
    let token = EncodedToken::new(base64::encode_bytes(&[0xDE, 0xAD].repeat(6)));
    let decoded = token.decode().unwrap();
    assert_eq!(decoded.raw_hex, decoded.raw_hex.to_lowercase());
    assert_eq!(decoded.raw_hex, "deaddeaddeaddeaddeaddead");
}

// ============================================================================
// Malformed Input
// ============================================================================

#[test]
fn test_shorter_than_twelve_bytes_rejected() {
    for len in 0..12 {
        let token = EncodedToken::new(base64::encode_bytes(&vec![0u8; len]));
        assert_eq!(
            token.decode(),
            Err(Error::TokenTooShort { size: len, min: 12 }),
            "length {len} should be rejected"
        );
    }
}

#[test]
fn test_invalid_base64_rejected() {
    let token = EncodedToken::new("not base64 at all!");
    assert!(matches!(token.decode(), Err(Error::InvalidBase64(_))));
}

#[test]
fn test_missing_data_field() {
    let token = EncodedToken::from_json(r#"{"_typeBits": "AA=="}"#).unwrap();
    assert_eq!(
        token.decode(),
        Err(Error::MissingField("_data".to_string()))
    );
}

#[test]
fn test_invalid_json_rejected() {
    assert!(matches!(
        EncodedToken::from_json("{not json"),
        Err(Error::InvalidJson(_))
    ));
}

#[test]
fn test_oversized_payload_rejected() {
    let token = EncodedToken::new("A".repeat(8192));
    assert!(matches!(token.decode(), Err(Error::TokenTooLarge { .. })));
}

#[test]
fn test_oversized_decoded_sequence_rejected() {
    // 2000 bytes encode to ~2668 characters, under the encoded limit but
    // over the decoded one
    let token = EncodedToken::new(base64::encode_bytes(&vec![0u8; 2000]));
    assert!(matches!(token.decode(), Err(Error::InvalidBase64(_))));
}

// ============================================================================
// Documented Sample
// ============================================================================

#[test]
fn test_sample_token_fails_strict_padding() {
    // 38 characters is not a multiple of 4; the strict standard-alphabet
    // engine rejects it, matching the originating decoder's behavior
    let token = EncodedToken::from_json(&format!(r#"{{"_data": "{SAMPLE_DATA}"}}"#)).unwrap();
    assert!(matches!(token.decode(), Err(Error::InvalidBase64(_))));
}

#[test]
fn test_sample_token_padded_is_out_of_range() {
    // Padded, the sample decodes to 28 bytes whose leading u64
    // (0xf36e82f40ec4e42d) is far beyond any representable UTC instant
    let token = EncodedToken::new(format!("{SAMPLE_DATA}=="));
    assert_eq!(
        token.decode(),
        Err(Error::TimestampOutOfRange(0xf36e_82f4_0ec4_e42d))
    );
}

// ============================================================================
// JSON Mapping Input
// ============================================================================

#[test]
fn test_from_json_ignores_extra_fields() {
    let json = r#"{"_data": "AAAAAGVT8QAAAAAHKwIsAQApbloQBA==", "_typeBits": "gA=="}"#;
    let token = EncodedToken::from_json(json).unwrap();

    let decoded = token.decode().unwrap();
    assert_eq!(decoded.cluster_time.timestamp(), 1_700_000_000);
    assert_eq!(decoded.ordinal, 7);
}
