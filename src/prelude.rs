//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use crockford_base32::prelude::*;
//!
//! let codec = Crockford::with_alphabet(CROCKFORD_ALPHABET).unwrap();
//! assert_eq!(codec.decode_integer("ZZ").unwrap(), 1023);
//! ```

pub use crate::{
    // Core types
    Alphabet,
    AlphabetError,
    BigInt,
    CROCKFORD_ALPHABET,
    Crockford,
    DecodeError,
    MAX_SAFE_INTEGER,
    RangeError,

    // Default-codec functions
    decode,
    decode_big_integer,
    decode_bytes,
    decode_bytes_range,
    decode_integer,
    decode_range,
    decode_text,
    decode_text_range,
    encode,
    encode_big_integer,
    encode_integer,
    encode_range,
    encode_range_to_bytes,
    encode_text,
    encode_text_range,
    encode_to_bytes,
    is_valid,
    is_valid_alphabet,
};

#[cfg(feature = "config")]
pub use crate::{AlphabetRegistry, RegistryError};
