use crate::core::alphabet::Alphabet;

pub use super::errors::DecodeError;

const SYMBOL_BITS: u32 = 5;
const SYMBOL_MASK: u32 = 0x1F;

/// Number of symbols produced for `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    (len * 8 + 4) / 5
}

/// Number of whole bytes carried by `len` symbols.
pub fn decoded_len(len: usize) -> usize {
    len * 5 / 8
}

/// Repacks 8-bit units into 5-bit values, most significant bit first.
///
/// Each byte yields one or two values; the final value of the input may
/// carry fewer than five significant bits, zero-padded on the low end.
fn pack(data: &[u8], mut emit: impl FnMut(u8)) {
    let mut shift: u32 = 3;
    let mut carry: u32 = 0;

    for &byte in data {
        let byte = byte as u32;

        emit(((carry | (byte >> shift)) & SYMBOL_MASK) as u8);
        if shift > SYMBOL_BITS {
            shift -= SYMBOL_BITS;
            emit(((byte >> shift) & SYMBOL_MASK) as u8);
        }

        shift = SYMBOL_BITS - shift;
        carry = byte << shift;
        shift = 8 - shift;
    }

    if shift != 3 {
        emit((carry & SYMBOL_MASK) as u8);
    }
}

/// Repacks 5-bit values into bytes.
///
/// Bits that do not complete a byte are dropped when they are zero, which
/// is what [`pack`] leaves behind. A nonzero remainder is kept as one
/// final byte.
fn unpack<I>(values: I, capacity: usize) -> Result<Vec<u8>, DecodeError>
where
    I: Iterator<Item = Result<u8, DecodeError>>,
{
    let mut result = Vec::with_capacity(capacity);
    let mut shift: i32 = 8;
    let mut carry: u32 = 0;

    for value in values {
        let value = value? as u32;
        shift -= SYMBOL_BITS as i32;

        if shift > 0 {
            carry |= value << shift;
        } else if shift < 0 {
            result.push((carry | (value >> -shift)) as u8);
            shift += 8;
            carry = (value << shift) & 0xFF;
        } else {
            result.push((carry | value) as u8);
            shift = 8;
            carry = 0;
        }
    }

    if shift != 8 && carry != 0 {
        result.push(carry as u8);
    }

    Ok(result)
}

/// Encodes bytes as a string of canonical symbols.
pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> String {
    let mut result = String::with_capacity(encoded_len(data.len()));
    pack(data, |value| result.push(alphabet.symbol(value)));
    result
}

/// Encodes bytes as a buffer of canonical symbol codes.
pub fn encode_chunked_bytes(data: &[u8], alphabet: &Alphabet) -> Vec<u8> {
    let mut result = Vec::with_capacity(encoded_len(data.len()));
    pack(data, |value| result.push(alphabet.symbol_code(value)));
    result
}

/// Decodes symbols given as characters.
///
/// `offset` is the index of `symbols[0]` in the caller's input and is
/// only used for error positions.
pub fn decode_chunked(
    symbols: &[char],
    offset: usize,
    alphabet: &Alphabet,
) -> Result<Vec<u8>, DecodeError> {
    let values = symbols.iter().enumerate().map(|(i, &c)| {
        alphabet
            .value_of(c)
            .ok_or(DecodeError::InvalidCharacter {
                char: c,
                position: offset + i,
            })
    });

    unpack(values, decoded_len(symbols.len()))
}

/// Decodes symbols given as byte codes.
pub fn decode_chunked_bytes(
    symbols: &[u8],
    offset: usize,
    alphabet: &Alphabet,
) -> Result<Vec<u8>, DecodeError> {
    let values = symbols.iter().enumerate().map(|(i, &code)| {
        alphabet
            .value_of_byte(code)
            .ok_or(DecodeError::InvalidByte {
                byte: code,
                position: offset + i,
            })
    });

    unpack(values, decoded_len(symbols.len()))
}
