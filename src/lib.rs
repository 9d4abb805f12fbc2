//! Crockford's Base32.
//!
//! Byte sequences, bounded and arbitrary-precision integers, and UTF-8 text
//! are mapped to a 32-symbol alphabet built for human transcription.
//! Decoding is case-insensitive and accepts `O` for `0` and `I`/`L` for `1`.
//!
//! # Example
//!
//! ```
//! use crockford_base32::{decode, encode, encode_integer};
//!
//! let encoded = encode(b"Hello");
//! assert_eq!(encoded, "91JPRV3F");
//! assert_eq!(decode("91jprv3f").unwrap(), b"Hello");
//! assert_eq!(encode_integer(-32).unwrap(), "-10");
//! ```

mod codec;
pub mod convenience;
mod core;
mod encoders;
pub mod prelude;

pub use codec::Crockford;
pub use crate::core::alphabet::{Alphabet, CROCKFORD_ALPHABET, NEGATIVE_SIGN, is_valid_alphabet};
#[cfg(feature = "config")]
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, ConfigError, Settings};
pub use crate::encoders::algorithms::errors::{
    AlphabetError, AlphabetNotFoundError, DecodeError, RangeError, RegistryError,
};
pub use crate::encoders::chunked::{decoded_len, encoded_len};
pub use crate::encoders::integer::MAX_SAFE_INTEGER;

pub use convenience::{
    decode, decode_big_integer, decode_bytes, decode_bytes_range, decode_integer, decode_range,
    decode_text, decode_text_range, encode, encode_big_integer, encode_integer, encode_range,
    encode_range_to_bytes, encode_text, encode_text_range, encode_to_bytes, is_valid,
};

// Arbitrary-precision integer type used by the big-integer codec
pub use num_bigint::BigInt;
