use approx::assert_abs_diff_eq;

use querycurve::encoding::base62::{
    from_base62,
    to_base62
};
use querycurve::encoding::chaincodec::{
    is_valid_chain_length,
    truncate_to_fixed_point
};
use querycurve::{
    EncodingError,
    ScaledBezierChain,
    decode,
    decode_strict,
    encode
};

#[test]
fn decoded_chain_round_trips_through_encoding() {
    let chain = vec![
        0.9, 0.9, 1.5, -2.25,
        0.0, 0.0, 0.1234567, 0.0, 0.3333333, 0.75,
        0.5, 0.75, 0.6666667, 0.75, 0.9, 1.0,
        1.0, 1.0,
    ];
    assert!(is_valid_chain_length(chain.len()));

    let encoded = encode(&chain).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.len(), chain.len());
    for (original, restored) in chain.iter().zip(decoded.iter()) {
        assert_abs_diff_eq!(*original, *restored, epsilon = 1e-7);
    }
    assert_eq!(decode_strict(&encoded).unwrap(), decoded);
}

#[test]
fn encoding_is_stable_after_truncation() {
    let chain: Vec<f64> = [0.12345678, -9.87654321, 42.0]
        .iter()
        .map(|&value| truncate_to_fixed_point(value))
        .collect();
    let encoded = encode(&chain).unwrap();
    assert_eq!(encode(&decode(&encoded).unwrap()).unwrap(), encoded);
}

#[test]
fn typed_chain_survives_json_and_text() {
    let chain = ScaledBezierChain::from_encoded("1Luue-2hppI--21sMy-3NnHc-0-0-fxSK-fxSK-0-0-fxSK-fxSK").unwrap();
    let json = serde_json::to_string(&chain).unwrap();
    let from_json: ScaledBezierChain = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, chain);
    assert_eq!(ScaledBezierChain::from_encoded(&from_json.encode().unwrap()).unwrap(), chain);
}

#[test]
fn lenient_and_strict_decoding_differ_on_stray_hyphens() {
    let chain = "fxSK-fxSK-0-0-0-0-fxSK-fxSK-0-0-fxSK-fxSK-";
    assert_eq!(decode(chain).unwrap().len(), 12);
    assert!(matches!(decode_strict(chain), Err(EncodingError::UnmatchedInput { .. })));
}

#[test]
fn base62_round_trip() {
    for number in [0, 1, 61, 62, 3843, 3844, 10_000_000, 1 << 53] {
        assert_eq!(from_base62(&to_base62(number)), Ok(number));
    }
}
