use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{IdError, Result};

/// Upper-case letters, lower-case letters, then digits. Index is digit value.
pub const BASE62: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Crockford's base32: digits plus upper-case letters without I, L, O and U.
pub const CROCKFORD: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Digits then lower-case letters; used for the sequential timestamp prefix.
pub const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// An ordered set of distinct characters defining a positional base.
///
/// The position of each character is its digit value, so the first character
/// acts as the zero used for left padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from `symbols`, in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAlphabet` if `symbols` has fewer than two characters or
    /// repeats a character.
    pub fn new(symbols: &str) -> Result<Self> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.len() < 2 {
            return Err(IdError::InvalidAlphabet {
                reason: format!("need at least 2 characters, got {}", chars.len()),
            });
        }

        let mut seen = HashSet::with_capacity(chars.len());
        for &c in &chars {
            if !seen.insert(c) {
                return Err(IdError::InvalidAlphabet {
                    reason: format!("duplicate character '{c}'"),
                });
            }
        }

        Ok(Self { chars })
    }

    /// The 62-character alphabet, see [`BASE62`].
    #[must_use]
    pub fn base62() -> Self {
        Self::from_static(BASE62)
    }

    /// The Crockford base32 alphabet, see [`CROCKFORD`].
    #[must_use]
    pub fn crockford() -> Self {
        Self::from_static(CROCKFORD)
    }

    /// The base36 alphabet, see [`BASE36`].
    #[must_use]
    pub fn base36() -> Self {
        Self::from_static(BASE36)
    }

    // Only for the constants above, which are known to be valid.
    fn from_static(symbols: &'static str) -> Self {
        Self {
            chars: symbols.chars().collect(),
        }
    }

    /// Number of characters, i.e. the encoding base.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// The encoding base as a divisor for [`crate::BigValue::div_rem_small`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn base(&self) -> u32 {
        // distinct chars never outnumber char::MAX
        self.chars.len() as u32
    }

    /// Always false: a valid alphabet has at least two characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character for digit value `index`, if in range.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The digit value of `c`, if it belongs to this alphabet.
    #[must_use]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&x| x == c)
    }

    /// Returns true if `c` belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The zero digit, used for left padding.
    #[must_use]
    pub fn zero(&self) -> char {
        self.chars[0]
    }

    /// Bits of information carried by one character: log2 of the base.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bits_per_char(&self) -> f64 {
        (self.chars.len() as f64).log2()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// The named alphabets accepted by the generator's options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlphabetKind {
    #[default]
    Base62,
    Crockford,
}

impl AlphabetKind {
    /// The canonical option name: `"base62"` or `"crockford"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base62 => "base62",
            Self::Crockford => "crockford",
        }
    }

    /// The characters of this alphabet, in digit order.
    #[must_use]
    pub const fn symbols(self) -> &'static str {
        match self {
            Self::Base62 => BASE62,
            Self::Crockford => CROCKFORD,
        }
    }

    #[must_use]
    pub fn alphabet(self) -> Alphabet {
        Alphabet::from_static(self.symbols())
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlphabetKind {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base62" => Ok(Self::Base62),
            "crockford" => Ok(Self::Crockford),
            _ => Err(IdError::UnknownAlphabet {
                name: s.to_string(),
            }),
        }
    }
}
