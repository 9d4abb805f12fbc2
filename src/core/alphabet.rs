use std::fmt;

use crate::encoders::algorithms::errors::AlphabetError;

/// Canonical Crockford alphabet. `I`, `L`, `O` and `U` are left out.
pub const CROCKFORD_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Marker prefixed to negative integers. Never allowed as a symbol.
pub const NEGATIVE_SIGN: char = '-';

const INVALID: u8 = 0xFF;

/// Lookup tables derived from a 32-symbol alphabet.
///
/// Every symbol is a single printable ASCII character, so the symbol's
/// character and its byte code coincide. One 256-entry table therefore
/// serves both text decoding and byte-buffer decoding.
///
/// Besides the canonical symbols, decoding accepts:
/// - the lowercase form of every letter symbol
/// - `O`/`o` for the symbol `0` and `I`/`i`/`L`/`l` for the symbol `1`,
///   unless the alphabet already uses that letter for another value
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Value to canonical symbol code
    symbols: [u8; 32],
    /// Symbol code (canonical or alias) to value, `INVALID` when unmapped
    values: [u8; 256],
}

impl Alphabet {
    /// Number of symbols in every alphabet.
    pub const LEN: usize = 32;

    /// Builds the lookup tables for `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the alphabet does not hold exactly 32 characters
    /// - a character is not printable ASCII, or is the sign marker `-`
    /// - a letter is given in lowercase
    /// - a character repeats
    pub fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        let symbols = validate(alphabet)?;
        let table = Self::from_symbols(symbols);
        tracing::debug!(alphabet, "built alphabet table");
        Ok(table)
    }

    /// The canonical Crockford alphabet.
    pub fn crockford() -> Self {
        let mut symbols = [0u8; 32];
        symbols.copy_from_slice(CROCKFORD_ALPHABET.as_bytes());
        Self::from_symbols(symbols)
    }

    fn from_symbols(symbols: [u8; 32]) -> Self {
        let mut values = [INVALID; 256];

        for (value, &code) in symbols.iter().enumerate() {
            values[code as usize] = value as u8;
        }

        // Lowercase letters are rejected by validation, so case folding
        // cannot collide with a canonical symbol.
        for (value, &code) in symbols.iter().enumerate() {
            if code.is_ascii_uppercase() {
                values[code.to_ascii_lowercase() as usize] = value as u8;
            }
        }

        for (value, &code) in symbols.iter().enumerate() {
            let confusables: &[u8] = match code {
                b'0' => b"O",
                b'1' => b"IL",
                _ => continue,
            };
            for &upper in confusables {
                if values[upper as usize] == INVALID {
                    values[upper as usize] = value as u8;
                    values[upper.to_ascii_lowercase() as usize] = value as u8;
                }
            }
        }

        Alphabet { symbols, values }
    }

    /// Returns the canonical symbol for a 5-bit value.
    ///
    /// Only the low five bits of `value` are used.
    #[inline]
    pub fn symbol(&self, value: u8) -> char {
        char::from(self.symbol_code(value))
    }

    /// Returns the byte code of the canonical symbol for a 5-bit value.
    #[inline]
    pub fn symbol_code(&self, value: u8) -> u8 {
        self.symbols[(value & 0x1F) as usize]
    }

    /// Resolves a character (canonical or alias) to its value.
    #[inline]
    pub fn value_of(&self, c: char) -> Option<u8> {
        if c.is_ascii() {
            self.value_of_byte(c as u8)
        } else {
            None
        }
    }

    /// Resolves a symbol byte code (canonical or alias) to its value.
    #[inline]
    pub fn value_of_byte(&self, code: u8) -> Option<u8> {
        match self.values[code as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// The canonical symbols in value order.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::crockford()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for &code in &self.symbols {
            f.write_char(char::from(code))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

fn validate(alphabet: &str) -> Result<[u8; 32], AlphabetError> {
    let actual = alphabet.chars().count();
    if actual != Alphabet::LEN {
        return Err(AlphabetError::InvalidLength { actual });
    }

    let mut symbols = [0u8; 32];
    let mut seen = [false; 128];

    for (position, symbol) in alphabet.chars().enumerate() {
        if !symbol.is_ascii_graphic() || symbol == NEGATIVE_SIGN {
            return Err(AlphabetError::UnsupportedSymbol { symbol, position });
        }
        if symbol.is_ascii_lowercase() {
            return Err(AlphabetError::NonCanonicalSymbol { symbol, position });
        }

        let code = symbol as u8;
        if std::mem::replace(&mut seen[code as usize], true) {
            return Err(AlphabetError::DuplicateSymbol { symbol, position });
        }
        symbols[position] = code;
    }

    Ok(symbols)
}

/// Checks whether `candidate` would be accepted by [`Alphabet::new`].
pub fn is_valid_alphabet(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crockford_matches_validated_build() {
        let built = Alphabet::new(CROCKFORD_ALPHABET).unwrap();
        assert_eq!(built, Alphabet::crockford());
        assert_eq!(built.to_string(), CROCKFORD_ALPHABET);
    }

    #[test]
    fn test_every_value_has_its_symbol() {
        let alphabet = Alphabet::crockford();
        for value in 0..32u8 {
            let symbol = alphabet.symbol(value);
            assert_eq!(alphabet.value_of(symbol), Some(value));
            assert_eq!(alphabet.value_of_byte(alphabet.symbol_code(value)), Some(value));
        }
    }

    #[test]
    fn test_confusable_aliases() {
        let alphabet = Alphabet::crockford();
        for c in ['0', 'O', 'o'] {
            assert_eq!(alphabet.value_of(c), Some(0), "alias {c}");
        }
        for c in ['1', 'I', 'i', 'L', 'l'] {
            assert_eq!(alphabet.value_of(c), Some(1), "alias {c}");
        }
    }

    #[test]
    fn test_lowercase_aliases() {
        let alphabet = Alphabet::crockford();
        assert_eq!(alphabet.value_of('a'), Some(10));
        assert_eq!(alphabet.value_of('z'), Some(31));
        assert_eq!(alphabet.value_of_byte(b'h'), Some(17));
    }

    #[test]
    fn test_unmapped_symbols() {
        let alphabet = Alphabet::crockford();
        for c in ['U', 'u', '@', '-', ' ', '=', 'é'] {
            assert_eq!(alphabet.value_of(c), None, "{c:?} should not decode");
        }
        assert_eq!(alphabet.value_of_byte(0xFF), None);
    }

    #[test]
    fn test_custom_alphabet_keeps_its_own_letters() {
        // RFC 4648 "extended hex" uses I, L and O as real symbols.
        let alphabet = Alphabet::new("0123456789ABCDEFGHIJKLMNOPQRSTUV").unwrap();
        assert_eq!(alphabet.value_of('O'), Some(24));
        assert_eq!(alphabet.value_of('o'), Some(24));
        assert_eq!(alphabet.value_of('I'), Some(18));
        assert_eq!(alphabet.value_of('L'), Some(21));
        assert_eq!(alphabet.value_of('W'), None);
    }

    #[test]
    fn test_custom_alphabet_without_digits_gets_no_confusables() {
        let alphabet = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567").unwrap();
        assert_eq!(alphabet.value_of('0'), None);
        assert_eq!(alphabet.value_of('1'), None);
        assert_eq!(alphabet.value_of('o'), Some(14));
    }

    #[test]
    fn test_invalid_length() {
        let short = &CROCKFORD_ALPHABET[..31];
        assert_eq!(
            Alphabet::new(short),
            Err(AlphabetError::InvalidLength { actual: 31 })
        );

        let long = format!("{CROCKFORD_ALPHABET}U");
        assert_eq!(
            Alphabet::new(&long),
            Err(AlphabetError::InvalidLength { actual: 33 })
        );
        assert!(!is_valid_alphabet(""));
    }

    #[test]
    fn test_duplicate_symbol() {
        let duplicated = "0123456789ABCDEFGHJKMNPQRSTVWXYY";
        assert_eq!(
            Alphabet::new(duplicated),
            Err(AlphabetError::DuplicateSymbol {
                symbol: 'Y',
                position: 31
            })
        );
        assert!(!is_valid_alphabet(duplicated));
    }

    #[test]
    fn test_non_canonical_symbol() {
        let lowered = "0123456789aBCDEFGHJKMNPQRSTVWXYZ";
        assert_eq!(
            Alphabet::new(lowered),
            Err(AlphabetError::NonCanonicalSymbol {
                symbol: 'a',
                position: 10
            })
        );
    }

    #[test]
    fn test_unsupported_symbols() {
        let with_sign = "-123456789ABCDEFGHJKMNPQRSTVWXYZ";
        assert!(matches!(
            Alphabet::new(with_sign),
            Err(AlphabetError::UnsupportedSymbol { symbol: '-', position: 0 })
        ));

        let with_space = "0123456789ABCDEFGHJKMNPQRSTVWXY ";
        assert!(!is_valid_alphabet(with_space));

        let with_unicode = "0123456789ABCDEFGHJKMNPQRSTVWXYÉ";
        assert!(matches!(
            Alphabet::new(with_unicode),
            Err(AlphabetError::UnsupportedSymbol { symbol: 'É', position: 31 })
        ));
    }

    #[test]
    fn test_is_valid_alphabet() {
        assert!(is_valid_alphabet(CROCKFORD_ALPHABET));
        assert!(is_valid_alphabet("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"));
        assert!(!is_valid_alphabet("0123456789abcdefghjkmnpqrstvwxyz"));
    }
}
