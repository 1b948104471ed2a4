use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    #[error("character '{character}' at position {position} is not part of the base62 alphabet")]
    AlphabetLookupFailure { character: char, position: usize },

    #[error("cannot decode an empty base62 token")]
    EmptyToken,

    #[error("base62 token '{0}' exceeds the representable magnitude")]
    MagnitudeOverflow(String),

    #[error("unmatched input '{fragment}' at position {position}")]
    UnmatchedInput { position: usize, fragment: String },

    #[error("cannot encode non-finite value {0}")]
    NonFiniteValue(f64),

    #[error("value {0} is out of the encodable range")]
    ValueOutOfRange(f64),
}
