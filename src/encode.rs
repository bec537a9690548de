use crate::alphabet::Alphabet;
use crate::value::BigValue;

/// Encode `value` as exactly `length` digits over `alphabet`, most significant first.
///
/// Shorter representations are left-padded with the alphabet's zero
/// character. Wider ones keep only their lowest `length` digits, i.e. the
/// result is `value mod base^length`. A `length` of zero gives the empty string.
///
/// # Examples
///
/// ```
/// use compactid::{encode, Alphabet, BigValue};
///
/// let base62 = Alphabet::base62();
/// assert_eq!(encode(&BigValue::from(1u8), 6, &base62), "AAAAAB");
/// assert_eq!(encode(&BigValue::from(62u8), 3, &base62), "ABA");
/// assert_eq!(encode(&BigValue::zero(), 0, &base62), "");
/// ```
#[must_use]
pub fn encode(value: &BigValue, length: usize, alphabet: &Alphabet) -> String {
    let base = alphabet.base();
    let mut num = value.clone();
    let mut output = Vec::with_capacity(length);

    while output.len() < length {
        let rem = num.div_rem_small(base) as usize;
        output.push(alphabet.char_at(rem).unwrap_or_else(|| alphabet.zero()));
    }

    output.iter().rev().collect()
}

/// Encode a big-endian byte string, see [`encode`].
///
/// Empty and all-zero inputs encode as all zero characters.
#[must_use]
pub fn encode_bytes(bytes: &[u8], length: usize, alphabet: &Alphabet) -> String {
    encode(&BigValue::from_be_bytes(bytes), length, alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{AlphabetKind, BASE62};
    use proptest::prelude::*;

    #[test]
    fn test_encode_one_pads_to_length() {
        let encoded = encode(&BigValue::from(1u8), 6, &Alphabet::base62());
        assert_eq!(encoded.len(), 6);
        assert_eq!(encoded, "AAAAAB");
    }

    #[test]
    fn test_encode_zero_length_is_empty() {
        assert_eq!(encode(&BigValue::zero(), 0, &Alphabet::base62()), "");
        assert_eq!(encode(&BigValue::from(u64::MAX), 0, &Alphabet::base62()), "");
    }

    #[test]
    fn test_encode_zero_is_all_zero_chars() {
        assert_eq!(encode(&BigValue::zero(), 4, &Alphabet::base62()), "AAAA");
        assert_eq!(encode(&BigValue::zero(), 4, &Alphabet::crockford()), "0000");
    }

    #[test]
    fn test_encode_known_values_base62() {
        let base62 = Alphabet::base62();
        assert_eq!(encode(&BigValue::from(61u8), 1, &base62), "9");
        assert_eq!(encode(&BigValue::from(62u8), 2, &base62), "BA");
        assert_eq!(encode(&BigValue::from(62u32 * 62 - 1), 2, &base62), "99");
    }

    #[test]
    fn test_encode_known_values_crockford() {
        let crockford = Alphabet::crockford();
        assert_eq!(encode(&BigValue::from(31u8), 2, &crockford), "0Z");
        assert_eq!(encode(&BigValue::from(32u8), 2, &crockford), "10");
        assert_eq!(encode(&BigValue::from(0xffff_ffffu32), 7, &crockford), "3ZZZZZZ");
    }

    #[test]
    fn test_encode_truncates_high_digits() {
        // 62^2 needs three digits; only the low two survive.
        let base62 = Alphabet::base62();
        assert_eq!(encode(&BigValue::from(62u32 * 62), 2, &base62), "AA");
        assert_eq!(encode(&BigValue::from(62u32 * 62 + 5), 2, &base62), "AF");
    }

    #[test]
    fn test_encode_bytes_matches_integer() {
        let base62 = Alphabet::base62();
        assert_eq!(
            encode_bytes(&[0x01, 0x00], 4, &base62),
            encode(&BigValue::from(256u32), 4, &base62)
        );
    }

    #[test]
    fn test_encode_bytes_empty_and_zero() {
        let base62 = Alphabet::base62();
        assert_eq!(encode_bytes(&[], 3, &base62), "AAA");
        assert_eq!(encode_bytes(&[0, 0, 0, 0], 3, &base62), "AAA");
    }

    #[test]
    fn test_encode_buffer_has_requested_length() {
        let buffer = [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc];
        let encoded = encode_bytes(&buffer, 6, &Alphabet::base62());
        assert_eq!(encoded.len(), 6);
        assert!(encoded.chars().all(|c| BASE62.contains(c)));
    }

    #[test]
    fn test_encode_large_decimal_input() {
        let value: BigValue = "12345678901234567890".parse().expect("valid number");
        let encoded = encode(&value, 12, &Alphabet::base62());
        assert_eq!(encoded.len(), 12);
        assert!(encoded.chars().all(|c| BASE62.contains(c)));
    }

    #[test]
    fn test_encode_full_sha256_width() {
        let digest = [0xffu8; 32];
        // 2^256 - 1 needs 43 base62 digits
        let encoded = encode_bytes(&digest, 43, &Alphabet::base62());
        assert_eq!(encoded.len(), 43);
        assert_ne!(encoded.chars().next(), Some('A'));
        let padded = encode_bytes(&digest, 45, &Alphabet::base62());
        assert!(padded.starts_with("AA"));
        assert!(padded.ends_with(&encoded));
    }

    #[test]
    fn test_encode_custom_binary_alphabet() {
        let binary = Alphabet::new("01").expect("valid alphabet");
        assert_eq!(encode(&BigValue::from(5u8), 8, &binary), "00000101");
    }

    #[test]
    fn test_encode_base36_matches_std_radix() {
        let base36 = Alphabet::base36();
        let n = 1_700_000_000_000u64;
        let mut expected = String::new();
        let mut v = n;
        while v > 0 {
            let digit = u32::try_from(v % 36).expect("digit");
            expected.insert(0, char::from_digit(digit, 36).expect("digit"));
            v /= 36;
        }
        assert_eq!(encode(&BigValue::from(n), expected.len(), &base36), expected);
    }

    proptest! {
        #[test]
        fn prop_encode_length_and_membership(
            bytes in proptest::collection::vec(any::<u8>(), 0..48),
            length in 0usize..64,
            crockford in any::<bool>(),
        ) {
            let kind = if crockford { AlphabetKind::Crockford } else { AlphabetKind::Base62 };
            let alphabet = kind.alphabet();
            let encoded = encode_bytes(&bytes, length, &alphabet);
            prop_assert_eq!(encoded.chars().count(), length);
            for c in encoded.chars() {
                prop_assert!(alphabet.contains(c), "invalid character: {}", c);
            }
        }

        #[test]
        fn prop_shorter_encoding_is_suffix(
            bytes in proptest::collection::vec(any::<u8>(), 0..40),
            short in 0usize..20,
            extra in 0usize..20,
        ) {
            let alphabet = Alphabet::base62();
            let long = encode_bytes(&bytes, short + extra, &alphabet);
            let truncated = encode_bytes(&bytes, short, &alphabet);
            prop_assert!(long.ends_with(&truncated));
        }

        #[test]
        fn prop_encode_matches_u64_arithmetic(n in any::<u64>(), length in 1usize..16) {
            let alphabet = Alphabet::crockford();
            let encoded = encode(&BigValue::from(n), length, &alphabet);
            let mut expected = Vec::new();
            let mut v = n;
            for _ in 0..length {
                let digit = usize::try_from(v % 32).expect("digit");
                expected.push(char::from(CROCKFORD_BYTES[digit]));
                v /= 32;
            }
            let expected: String = expected.iter().rev().collect();
            prop_assert_eq!(encoded, expected);
        }
    }

    const CROCKFORD_BYTES: &[u8] = crate::alphabet::CROCKFORD.as_bytes();
}
