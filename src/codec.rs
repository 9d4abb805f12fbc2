use num_bigint::BigInt;

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::{AlphabetError, DecodeError, RangeError};
use crate::encoders::algorithms::{chunked, integer};
use crate::encoders::slice;

/// A Crockford Base32 codec bound to one alphabet.
///
/// The lookup tables are built once in the constructor and never change
/// afterwards, so a codec can be shared freely between threads.
///
/// Every byte and string operation has a `_range` variant taking optional
/// `start`/`end` offsets with slice semantics: negative offsets count from
/// the end, offsets clamp to the input, and `start >= end` selects nothing.
/// Offsets index bytes for byte input and characters for text input.
///
/// # Example
///
/// ```
/// use crockford_base32::Crockford;
///
/// let codec = Crockford::new();
/// assert_eq!(codec.encode(b"foobar"), "CSQPYRK1E8");
/// assert_eq!(codec.decode("csqpyrk1e8").unwrap(), b"foobar");
/// assert_eq!(codec.encode_integer(1234).unwrap(), "16J");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Crockford {
    alphabet: Alphabet,
}

impl Crockford {
    /// Creates a codec over the canonical Crockford alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec over a custom 32-symbol alphabet.
    ///
    /// Symbols must be printable ASCII, given in their canonical
    /// (uppercase) form.
    pub fn with_alphabet(alphabet: &str) -> Result<Self, AlphabetError> {
        Ok(Crockford {
            alphabet: Alphabet::new(alphabet)?,
        })
    }

    /// Returns the lookup tables backing this codec.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes bytes as a symbol string.
    pub fn encode(&self, data: &[u8]) -> String {
        chunked::encode_chunked(data, &self.alphabet)
    }

    /// Encodes the `start..end` slice of `data`.
    pub fn encode_range(&self, data: &[u8], start: Option<isize>, end: Option<isize>) -> String {
        let range = slice::resolve(data.len(), start, end);
        chunked::encode_chunked(&data[range], &self.alphabet)
    }

    /// Encodes bytes as a buffer of symbol codes rather than text.
    pub fn encode_to_bytes(&self, data: &[u8]) -> Vec<u8> {
        chunked::encode_chunked_bytes(data, &self.alphabet)
    }

    /// Encodes the `start..end` slice of `data` as a buffer of symbol codes.
    pub fn encode_range_to_bytes(
        &self,
        data: &[u8],
        start: Option<isize>,
        end: Option<isize>,
    ) -> Vec<u8> {
        let range = slice::resolve(data.len(), start, end);
        chunked::encode_chunked_bytes(&data[range], &self.alphabet)
    }

    /// Decodes a symbol string. Case and confusable aliases are accepted.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        self.decode_range(encoded, None, None)
    }

    /// Decodes the `start..end` characters of `encoded`.
    pub fn decode_range(
        &self,
        encoded: &str,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<Vec<u8>, DecodeError> {
        let chars: Vec<char> = encoded.chars().collect();
        let range = slice::resolve(chars.len(), start, end);
        chunked::decode_chunked(&chars[range.clone()], range.start, &self.alphabet)
    }

    /// Decodes a buffer of symbol codes.
    pub fn decode_bytes(&self, encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
        chunked::decode_chunked_bytes(encoded, 0, &self.alphabet)
    }

    /// Decodes the `start..end` slice of a buffer of symbol codes.
    pub fn decode_bytes_range(
        &self,
        encoded: &[u8],
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<Vec<u8>, DecodeError> {
        let range = slice::resolve(encoded.len(), start, end);
        chunked::decode_chunked_bytes(&encoded[range.clone()], range.start, &self.alphabet)
    }

    /// Encodes an integer whose magnitude is at most 2^53 - 1.
    pub fn encode_integer(&self, n: i64) -> Result<String, RangeError> {
        integer::encode_integer(n, &self.alphabet)
    }

    /// Decodes an integer. The result is not range checked and saturates
    /// past 64 bits.
    pub fn decode_integer(&self, encoded: &str) -> Result<i64, DecodeError> {
        integer::decode_integer(encoded, &self.alphabet)
    }

    /// Encodes an integer of any size.
    pub fn encode_big_integer(&self, n: &BigInt) -> String {
        integer::encode_big_integer(n, &self.alphabet)
    }

    /// Decodes an integer of any size.
    pub fn decode_big_integer(&self, encoded: &str) -> Result<BigInt, DecodeError> {
        integer::decode_big_integer(encoded, &self.alphabet)
    }

    /// Encodes the UTF-8 bytes of `text`.
    pub fn encode_text(&self, text: &str) -> String {
        self.encode(text.as_bytes())
    }

    /// Like [`encode_range`](Self::encode_range), with offsets into the UTF-8 bytes.
    pub fn encode_text_range(&self, text: &str, start: Option<isize>, end: Option<isize>) -> String {
        self.encode_range(text.as_bytes(), start, end)
    }

    /// Decodes symbols and interprets the result as UTF-8.
    pub fn decode_text(&self, encoded: &str) -> Result<String, DecodeError> {
        self.decode_text_range(encoded, None, None)
    }

    /// Decodes the `start..end` characters of `encoded` as UTF-8 text.
    pub fn decode_text_range(
        &self,
        encoded: &str,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<String, DecodeError> {
        let bytes = self.decode_range(encoded, start, end)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Checks that every character of `encoded` is a symbol or alias.
    pub fn is_valid(&self, encoded: &str) -> bool {
        encoded.chars().all(|c| self.alphabet.value_of(c).is_some())
    }
}
