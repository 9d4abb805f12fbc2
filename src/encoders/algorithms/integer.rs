use crate::core::alphabet::{Alphabet, NEGATIVE_SIGN};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

pub use super::errors::{DecodeError, RangeError};

/// Largest magnitude accepted by [`encode_integer`]: 2^53 - 1.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

const BASE: u32 = 32;

/// Encodes a safe integer as positional base-32, most significant symbol first.
///
/// # Errors
///
/// Returns [`RangeError::UnsafeInteger`] if `|n| > 2^53 - 1`.
pub fn encode_integer(n: i64, alphabet: &Alphabet) -> Result<String, RangeError> {
    if n.unsigned_abs() > MAX_SAFE_INTEGER as u64 {
        return Err(RangeError::UnsafeInteger(n));
    }
    if n == 0 {
        return Ok(alphabet.symbol(0).to_string());
    }

    let mut value = n.unsigned_abs();
    // 53 bits need at most 11 symbols, plus the sign
    let mut result = Vec::with_capacity(12);

    while value != 0 {
        result.push(alphabet.symbol((value % BASE as u64) as u8));
        value /= BASE as u64;
    }
    if n < 0 {
        result.push(NEGATIVE_SIGN);
    }

    result.reverse();
    Ok(result.into_iter().collect())
}

/// Decodes a base-32 integer.
///
/// The result is not checked against the safe range and never fails for
/// size. Magnitudes beyond 64 bits saturate at `i64::MAX` (or `-i64::MAX`
/// when negative), so use [`decode_big_integer`] for exact results.
pub fn decode_integer(encoded: &str, alphabet: &Alphabet) -> Result<i64, DecodeError> {
    let (negative, digits, offset) = split_sign(encoded);

    let mut result: i64 = 0;
    for (i, c) in digits.chars().enumerate() {
        let digit = digit_value(c, offset + i, alphabet)?;
        result = result.saturating_mul(BASE as i64).saturating_add(digit as i64);
    }

    Ok(if negative { -result } else { result })
}

/// Encodes an arbitrary-precision integer. Never fails.
pub fn encode_big_integer(n: &BigInt, alphabet: &Alphabet) -> String {
    if n.is_zero() {
        return alphabet.symbol(0).to_string();
    }

    let base_big = BigUint::from(BASE);
    let mut value = n.magnitude().clone();
    let mut result = Vec::with_capacity((value.bits() / 5 + 2) as usize);

    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&base_big);
        let digit = remainder.to_u32_digits().first().copied().unwrap_or(0);
        result.push(alphabet.symbol(digit as u8));
        value = quotient;
    }
    if n.sign() == Sign::Minus {
        result.push(NEGATIVE_SIGN);
    }

    result.reverse();
    result.into_iter().collect()
}

/// Decodes an arbitrary-precision integer.
pub fn decode_big_integer(encoded: &str, alphabet: &Alphabet) -> Result<BigInt, DecodeError> {
    let (negative, digits, offset) = split_sign(encoded);

    let base_big = BigUint::from(BASE);
    let mut magnitude = BigUint::zero();
    for (i, c) in digits.chars().enumerate() {
        let digit = digit_value(c, offset + i, alphabet)?;
        magnitude *= &base_big;
        magnitude += digit as u32;
    }

    // BigInt has no negative zero, so "-0" stays zero.
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Splits a leading sign marker off, unless the marker is the whole input.
fn split_sign(encoded: &str) -> (bool, &str, usize) {
    match encoded.strip_prefix(NEGATIVE_SIGN) {
        Some(rest) if !rest.is_empty() => (true, rest, 1),
        _ => (false, encoded, 0),
    }
}

fn digit_value(c: char, position: usize, alphabet: &Alphabet) -> Result<u8, DecodeError> {
    alphabet
        .value_of(c)
        .ok_or(DecodeError::InvalidCharacter { char: c, position })
}
