use std::time::{SystemTime, UNIX_EPOCH};

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::alphabet::Alphabet;
use crate::config::{GenerateIdOptions, Mode};
use crate::encode::{encode, encode_bytes};
use crate::error::{IdError, Result};
use crate::value::BigValue;

/// Width of the base36 timestamp at the front of a sequential ID.
pub const TIMESTAMP_LENGTH: usize = 8;

/// A source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `Entropy` if the underlying source fails.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// The operating system's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|err| IdError::Entropy {
            reason: err.to_string(),
        })
    }
}

impl<F> EntropySource for F
where
    F: FnMut(&mut [u8]) -> Result<()>,
{
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self(buf)
    }
}

/// Number of random bytes needed to cover `length` characters of `alphabet`.
///
/// Computes `ceil(length * log2(base) / 8)`; rounding down would leave the
/// high digits starved of entropy.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn entropy_bytes(length: usize, alphabet: &Alphabet) -> usize {
    ((length as f64 * alphabet.bits_per_char()) / 8.0).ceil() as usize
}

/// Renders epoch milliseconds as the 8-character base36 sequential prefix.
///
/// Timestamps beyond `36^8 - 1` keep only their low 8 digits.
///
/// # Examples
///
/// ```
/// use compactid::timestamp_prefix;
///
/// assert_eq!(timestamp_prefix(0), "00000000");
/// assert_eq!(timestamp_prefix(1_700_000_000_000), "loyw3v28");
/// ```
#[must_use]
pub fn timestamp_prefix(millis: u64) -> String {
    encode(&BigValue::from(millis), TIMESTAMP_LENGTH, &Alphabet::base36())
}

/// Reads the epoch milliseconds back out of a sequential ID.
///
/// Returns `None` if `id` is shorter than the prefix or the prefix is not
/// lower-case base36.
#[must_use]
pub fn sequential_timestamp(id: &str) -> Option<u64> {
    let prefix = id.get(..TIMESTAMP_LENGTH)?;
    let base36 = Alphabet::base36();
    prefix.chars().try_fold(0u64, |acc, c| {
        let digit = u64::try_from(base36.index_of(c)?).ok()?;
        Some(acc * 36 + digit)
    })
}

/// Generate an ID using the system clock and the OS random source.
///
/// # Examples
///
/// ```
/// use compactid::{generate_id, AlphabetKind, GenerateIdOptions};
///
/// let id = generate_id(&GenerateIdOptions::new()).unwrap();
/// assert_eq!(id.len(), 10);
///
/// let a = generate_id(&GenerateIdOptions::new().input("user:123")).unwrap();
/// let b = generate_id(&GenerateIdOptions::new().input("user:123")).unwrap();
/// assert_eq!(a, b);
///
/// let sortable = generate_id(&GenerateIdOptions::new().sequential(true)).unwrap();
/// assert_eq!(sortable.len(), 16);
///
/// let crockford = generate_id(
///     &GenerateIdOptions::new().length(12).alphabet(AlphabetKind::Crockford),
/// ).unwrap();
/// assert!(crockford.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
/// ```
///
/// # Errors
///
/// Returns `SequentialTooShort` for a sequential length below 16, or
/// `Entropy` if the OS random source fails.
pub fn generate_id(options: &GenerateIdOptions) -> Result<String> {
    generate_id_with(options, now_millis, &mut OsEntropy)
}

/// Generate an ID with an explicit clock and entropy source.
///
/// `now_ms` is only called in sequential mode. `entropy` is not touched in
/// deterministic mode.
///
/// # Errors
///
/// Same as [`generate_id`], with `Entropy` coming from `entropy`.
pub fn generate_id_with<C, E>(options: &GenerateIdOptions, now_ms: C, entropy: &mut E) -> Result<String>
where
    C: FnOnce() -> u64,
    E: EntropySource + ?Sized,
{
    let resolved = options.resolve()?;
    let alphabet = resolved.alphabet.alphabet();
    let length = resolved.length;

    tracing::debug!(
        mode = resolved.mode.name(),
        length,
        alphabet = %resolved.alphabet,
        "generating id"
    );

    match resolved.mode {
        Mode::Deterministic { input } => {
            // Same input, length and alphabet always give the same ID.
            let hash = crate::hash::digest(input.as_bytes());
            Ok(encode_bytes(&hash, length, &alphabet))
        }
        Mode::Sequential => {
            let prefix = timestamp_prefix(now_ms());
            let suffix = random_chars(length - TIMESTAMP_LENGTH, &alphabet, entropy)?;
            Ok(prefix + &suffix)
        }
        Mode::Random => random_chars(length, &alphabet, entropy),
    }
}

fn random_chars<E>(length: usize, alphabet: &Alphabet, entropy: &mut E) -> Result<String>
where
    E: EntropySource + ?Sized,
{
    let mut raw = vec![0u8; entropy_bytes(length, alphabet)];
    tracing::trace!(bytes = raw.len(), length, "drawing entropy");
    entropy.fill(&mut raw)?;
    Ok(encode_bytes(&raw, length, alphabet))
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
