use std::sync::LazyLock;

use regex::Regex;

use crate::math::round::{
    round_half_up,
    round_to_grid
};

use super::base62::{
    from_base62,
    to_base62
};
use super::encodingerror::EncodingError;

// Encoded chain will look like this:
//   fxSK-fxSK-0-0-fxSK-fxSK-0-0-fxSK-fxSK
// A value is negative when its token is preceded by an extra '-', i.e. a
// leading '-' on the first token or a doubled '--' on any later one.

/// Fixed-point scale of encoded values: 7 decimal digits.
pub const ENCODING_SCALE_FACTOR: f64 = 10_000_000.0;

// Largest magnitude whose fixed-point integer is still exact in an f64.
const MAX_ENCODABLE_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

// One or two hyphens, then the token body up to the next hyphen. Alphabet
// membership is checked by the base62 codec so that bad characters fail
// loudly instead of silently splitting the token.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--?[^-]+").expect("token pattern is a valid regex")
});

fn decode_token(token: &str, offset: usize) -> Result<f64, EncodingError> {
    let is_negative = token.starts_with("--");
    let body = token.trim_start_matches('-');
    let hyphens = token.len() - body.len();
    let magnitude = from_base62(body).map_err(|error| match error {
        EncodingError::AlphabetLookupFailure { character, position } => {
            EncodingError::AlphabetLookupFailure { character, position: offset + hyphens + position }
        }
        other => other,
    })? as f64;
    let signed = if is_negative { -magnitude } else { magnitude };
    Ok(signed / ENCODING_SCALE_FACTOR)
}

/// Decodes an encoded scaled bezier chain into its values.
///
/// Text that does not form a token (trailing or over-long hyphen runs) is
/// skipped. Positions in errors refer to the caller's string.
pub fn decode(chain: &str) -> Result<Vec<f64>, EncodingError> {
    let prefixed = format!("-{}", chain);
    let mut values = Vec::new();
    let mut covered = 0;
    for token in TOKEN_PATTERN.find_iter(&prefixed) {
        if token.start() != covered {
            log::debug!(
                "skipping unmatched chain text '{}' at position {}",
                &prefixed[covered..token.start()],
                covered.saturating_sub(1)
            );
        }
        // -1 removes the prepended hyphen from reported positions
        values.push(decode_token(token.as_str(), token.start().saturating_sub(1))?);
        covered = token.end();
    }
    if covered < prefixed.len() {
        log::debug!("skipping trailing chain text '{}'", &prefixed[covered..]);
    }
    Ok(values)
}

/// Like [`decode`], but every character of the chain must belong to a token.
pub fn decode_strict(chain: &str) -> Result<Vec<f64>, EncodingError> {
    if chain.is_empty() {
        return Ok(Vec::new());
    }

    let prefixed = format!("-{}", chain);
    let mut values = Vec::new();
    let mut covered = 0;
    for token in TOKEN_PATTERN.find_iter(&prefixed) {
        if token.start() != covered {
            return Err(unmatched(&prefixed, covered, token.start()));
        }
        values.push(decode_token(token.as_str(), token.start().saturating_sub(1))?);
        covered = token.end();
    }
    if covered != prefixed.len() {
        return Err(unmatched(&prefixed, covered, prefixed.len()));
    }
    Ok(values)
}

fn unmatched(prefixed: &str, start: usize, end: usize) -> EncodingError {
    EncodingError::UnmatchedInput {
        position: start.saturating_sub(1),
        fragment: prefixed[start..end].to_owned(),
    }
}

/// Encodes chain values as 7-digit fixed-point base62 tokens joined by '-'.
pub fn encode(chain: &[f64]) -> Result<String, EncodingError> {
    let tokens = chain
        .iter()
        .map(|&value| encode_value(value))
        .collect::<Result<Vec<String>, EncodingError>>()?;
    Ok(tokens.join("-"))
}

fn encode_value(value: f64) -> Result<String, EncodingError> {
    if !value.is_finite() {
        return Err(EncodingError::NonFiniteValue(value));
    }
    let transformed = round_half_up(value * ENCODING_SCALE_FACTOR);
    if transformed.abs() > MAX_ENCODABLE_MAGNITUDE {
        return Err(EncodingError::ValueOutOfRange(value));
    }
    let encoded = to_base62(transformed.abs() as u64);
    if transformed < 0.0 {
        Ok(format!("-{}", encoded))
    } else {
        Ok(encoded)
    }
}

/// Rounds a value onto the grid that survives an encode/decode round trip.
pub fn truncate_to_fixed_point(value: f64) -> f64 {
    round_to_grid(value, ENCODING_SCALE_FACTOR)
}

/// A scaled chain holds 4 header values, a first anchor, and 6 values per
/// further segment (two handles and the next anchor).
///
/// ```text
/// ssoo pp hhhhpp hhhhpp ...
/// ```
pub fn is_valid_chain_length(len: usize) -> bool {
    len >= 12 && (len - 6) % 6 == 0
}
