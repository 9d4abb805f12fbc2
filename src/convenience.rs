//! Free functions backed by a process-wide codec over the canonical alphabet.
//!
//! The shared codec is built on first use and is immutable afterwards.
//! Callers that need a custom alphabet should hold their own [`Crockford`].
//!
//! # Example
//! ```
//! use crockford_base32::convenience::{decode_integer, encode, encode_integer};
//!
//! assert_eq!(encode(b"f"), "CR");
//! assert_eq!(encode_integer(32).unwrap(), "10");
//! assert_eq!(decode_integer("-10").unwrap(), -32);
//! ```

use std::sync::OnceLock;

use num_bigint::BigInt;

use crate::Crockford;
use crate::encoders::algorithms::errors::{DecodeError, RangeError};

static DEFAULT_CODEC: OnceLock<Crockford> = OnceLock::new();

/// The shared codec over the canonical Crockford alphabet.
pub fn default_codec() -> &'static Crockford {
    DEFAULT_CODEC.get_or_init(Crockford::new)
}

/// Encodes bytes as a symbol string.
pub fn encode(data: &[u8]) -> String {
    default_codec().encode(data)
}

/// Encodes the `start..end` slice of `data`.
pub fn encode_range(data: &[u8], start: Option<isize>, end: Option<isize>) -> String {
    default_codec().encode_range(data, start, end)
}

/// Encodes bytes as a buffer of symbol codes.
pub fn encode_to_bytes(data: &[u8]) -> Vec<u8> {
    default_codec().encode_to_bytes(data)
}

/// Encodes the `start..end` slice of `data` as a buffer of symbol codes.
pub fn encode_range_to_bytes(data: &[u8], start: Option<isize>, end: Option<isize>) -> Vec<u8> {
    default_codec().encode_range_to_bytes(data, start, end)
}

/// Decodes a symbol string, accepting case and confusable aliases.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    default_codec().decode(encoded)
}

/// Decodes the `start..end` characters of `encoded`.
pub fn decode_range(
    encoded: &str,
    start: Option<isize>,
    end: Option<isize>,
) -> Result<Vec<u8>, DecodeError> {
    default_codec().decode_range(encoded, start, end)
}

/// Decodes a buffer of symbol codes.
pub fn decode_bytes(encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    default_codec().decode_bytes(encoded)
}

/// Decodes the `start..end` slice of a buffer of symbol codes.
pub fn decode_bytes_range(
    encoded: &[u8],
    start: Option<isize>,
    end: Option<isize>,
) -> Result<Vec<u8>, DecodeError> {
    default_codec().decode_bytes_range(encoded, start, end)
}

/// Encodes an integer whose magnitude is at most 2^53 - 1.
pub fn encode_integer(n: i64) -> Result<String, RangeError> {
    default_codec().encode_integer(n)
}

/// Decodes an integer without range checking.
pub fn decode_integer(encoded: &str) -> Result<i64, DecodeError> {
    default_codec().decode_integer(encoded)
}

/// Encodes an integer of any size.
pub fn encode_big_integer(n: &BigInt) -> String {
    default_codec().encode_big_integer(n)
}

/// Decodes an integer of any size.
pub fn decode_big_integer(encoded: &str) -> Result<BigInt, DecodeError> {
    default_codec().decode_big_integer(encoded)
}

/// Encodes the UTF-8 bytes of `text`.
pub fn encode_text(text: &str) -> String {
    default_codec().encode_text(text)
}

/// Encodes the `start..end` UTF-8 bytes of `text`.
pub fn encode_text_range(text: &str, start: Option<isize>, end: Option<isize>) -> String {
    default_codec().encode_text_range(text, start, end)
}

/// Decodes symbols and interprets the result as UTF-8.
pub fn decode_text(encoded: &str) -> Result<String, DecodeError> {
    default_codec().decode_text(encoded)
}

/// Decodes the `start..end` characters of `encoded` as UTF-8 text.
pub fn decode_text_range(
    encoded: &str,
    start: Option<isize>,
    end: Option<isize>,
) -> Result<String, DecodeError> {
    default_codec().decode_text_range(encoded, start, end)
}

/// Checks a string against the canonical alphabet and its aliases.
pub fn is_valid(encoded: &str) -> bool {
    default_codec().is_valid(encoded)
}
