use super::encodingerror::EncodingError;

/// Digits, then uppercase, then lowercase: index 0 is '0', index 61 is 'z'.
pub const BASE_62_CHAR_SET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

fn char_index(character: char) -> Option<u64> {
    let index = match character {
        '0'..='9' => character as u32 - '0' as u32,
        'A'..='Z' => character as u32 - 'A' as u32 + 10,
        'a'..='z' => character as u32 - 'a' as u32 + 36,
        _ => return None,
    };
    Some(index as u64)
}

/// Converts a base62 string to its integer value, most significant character first.
///
/// Lookup failures report the byte offset of the offending character.
pub fn from_base62(token: &str) -> Result<u64, EncodingError> {
    if token.is_empty() {
        return Err(EncodingError::EmptyToken);
    }

    token
        .char_indices()
        .try_fold(0u64, |acc, (position, character)| {
            let digit = char_index(character)
                .ok_or(EncodingError::AlphabetLookupFailure { character, position })?;
            acc.checked_mul(BASE)
                .and_then(|shifted| shifted.checked_add(digit))
                .ok_or_else(|| EncodingError::MagnitudeOverflow(token.to_owned()))
        })
}

pub fn to_base62(number: u64) -> String {
    if number == 0 {
        return "0".to_owned();
    }

    let alphabet = BASE_62_CHAR_SET.as_bytes();
    let mut digits: Vec<u8> = Vec::new();
    let mut remainder = number;
    while remainder > 0 {
        digits.push(alphabet[(remainder % BASE) as usize]);
        remainder /= BASE;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
