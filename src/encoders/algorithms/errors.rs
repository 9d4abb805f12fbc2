use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur during decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input text contains a character outside the alphabet and its aliases
    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },
    /// The input buffer contains a byte that is not a symbol code
    #[error("invalid symbol byte 0x{byte:02X} at position {position}")]
    InvalidByte { byte: u8, position: usize },
    /// The decoded bytes are not valid UTF-8
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

impl DecodeError {
    /// Position of the offending symbol, if the error points at one.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidCharacter { position, .. }
            | DecodeError::InvalidByte { position, .. } => Some(*position),
            DecodeError::InvalidUtf8(_) => None,
        }
    }
}

/// A malformed alphabet was supplied at construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("alphabet must contain exactly 32 symbols, got {actual}")]
    InvalidLength { actual: usize },
    #[error("duplicate symbol '{symbol}' at position {position}")]
    DuplicateSymbol { symbol: char, position: usize },
    /// Letters must be given in their uppercase rendering.
    #[error("symbol '{symbol}' at position {position} is not canonical (use '{}')", .symbol.to_ascii_uppercase())]
    NonCanonicalSymbol { symbol: char, position: usize },
    /// Only printable ASCII is accepted, and `-` is reserved for the sign marker.
    #[error("unsupported symbol {symbol:?} at position {position}")]
    UnsupportedSymbol { symbol: char, position: usize },
}

/// An integer outside the safe range was given to the bounded encoder.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("{0} is outside the safe integer range (magnitude must not exceed 2^53 - 1)")]
    UnsafeInteger(i64),
}

/// Error when a named alphabet is not found in the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "alphabet '{name}' not found{}",
    .suggestion.as_ref().map(|s| format!(" (did you mean '{}'?)", s)).unwrap_or_default()
)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

/// Errors from resolving a named alphabet into a codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    NotFound(#[from] AlphabetNotFoundError),
    #[error("alphabet '{name}' is invalid: {source}")]
    InvalidAlphabet {
        name: String,
        #[source]
        source: AlphabetError,
    },
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (strsim::levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.to_string())
}
