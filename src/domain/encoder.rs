//! Fixed-width base-62 suffix encoding.
//!
//! Suffixes are written over the alphabet `0-9A-Za-z`, where `'0'` is the zero
//! symbol and `'z'` is 61. Output is left-padded with `'0'` to the configured
//! width, so `encode(10, 7) == "000000A"`.

/// Symbols in value order: digits, uppercase, lowercase.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = 62;

/// Converts a counter value into a suffix.
///
/// Implementations must be deterministic and injective over the range of
/// counter values they are asked to encode.
pub trait Encoder: Send + Sync {
    fn encode(&self, num: u64) -> String;
}

/// Default [`Encoder`] producing fixed-width base-62 suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base62Encoder {
    width: usize,
}

impl Base62Encoder {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Encoder for Base62Encoder {
    fn encode(&self, num: u64) -> String {
        encode(num, self.width)
    }
}

/// Encodes `num` as a base-62 string of at least `width` characters.
///
/// Values above `62^width - 1` produce a longer string. Keeping the counter
/// below that bound is the caller's job.
pub fn encode(mut num: u64, width: usize) -> String {
    let mut digits = Vec::with_capacity(width.max(11));

    while num > 0 {
        digits.push(BASE62_ALPHABET[(num % BASE) as usize]);
        num /= BASE;
    }

    while digits.len() < width {
        digits.push(b'0');
    }

    digits.reverse();

    // Every byte comes from the ASCII alphabet.
    digits.into_iter().map(char::from).collect()
}

/// Decodes a base-62 suffix back into its counter value.
///
/// Returns `None` for an empty string, a symbol outside the alphabet, or a
/// value that does not fit in `u64`.
pub fn decode(suffix: &str) -> Option<u64> {
    if suffix.is_empty() {
        return None;
    }

    suffix.bytes().try_fold(0u64, |acc, byte| {
        let value = symbol_value(byte)?;
        acc.checked_mul(BASE)?.checked_add(value)
    })
}

/// Largest value that fits in `width` base-62 symbols (`62^width - 1`).
///
/// Saturates at `u64::MAX` for widths that exceed the `u64` range.
pub fn max_value(width: u32) -> u64 {
    BASE.checked_pow(width)
        .map(|capacity| capacity - 1)
        .unwrap_or(u64::MAX)
}

fn symbol_value(byte: u8) -> Option<u64> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'Z' => byte - b'A' + 10,
        b'a'..=b'z' => byte - b'a' + 36,
        _ => return None,
    };
    Some(u64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_encode_zero_is_all_zero_symbols() {
        assert_eq!(encode(0, 7), "0000000");
        assert_eq!(encode(0, 3), "000");
    }

    #[test]
    fn test_encode_alphabet_ordering() {
        assert_eq!(encode(9, 7), "0000009");
        assert_eq!(encode(10, 7), "000000A");
        assert_eq!(encode(35, 7), "000000Z");
        assert_eq!(encode(36, 7), "000000a");
        assert_eq!(encode(61, 7), "000000z");
        assert_eq!(encode(62, 7), "0000010");
    }

    #[test]
    fn test_encode_default_start_counter() {
        // 501 = 8 * 62 + 5
        assert_eq!(encode(501, 7), "0000085");
    }

    #[test]
    fn test_encode_max_value_fills_width() {
        assert_eq!(encode(3_521_614_606_207, 7), "zzzzzzz");
    }

    #[test]
    fn test_encode_past_width_overflows() {
        assert_eq!(encode(3_521_614_606_208, 7), "10000000");
    }

    #[test]
    fn test_encode_fixed_width_and_alphabet() {
        let samples = [
            0,
            1,
            61,
            62,
            3_843,
            238_327,
            916_132_831,
            56_800_235_583,
            1_000_000_000_000,
            3_521_614_606_206,
            3_521_614_606_207,
        ];

        for n in samples {
            let suffix = encode(n, 7);
            assert_eq!(suffix.len(), 7, "wrong width for {n}");
            assert!(
                suffix.bytes().all(|b| BASE62_ALPHABET.contains(&b)),
                "symbol outside alphabet in {suffix}"
            );
        }
    }

    #[test]
    fn test_encode_is_injective_over_range_sample() {
        let mut seen = HashSet::new();

        for n in 0..50_000u64 {
            assert!(seen.insert(encode(n, 7)), "duplicate suffix for {n}");
        }

        let step = 3_521_614_606_207u64 / 10_000;
        for n in (0..=3_521_614_606_207u64).step_by(step as usize) {
            seen.insert(encode(n, 7));
        }
        assert!(seen.len() > 50_000);
    }

    #[test]
    fn test_encoder_trait_uses_width() {
        let encoder = Base62Encoder::new(4);
        assert_eq!(encoder.encode(10), "000A");
        assert_eq!(encoder.width(), 4);
    }

    #[test]
    fn test_decode_inverts_encode() {
        assert_eq!(decode("0000000"), Some(0));
        assert_eq!(decode("000000A"), Some(10));
        assert_eq!(decode("0000085"), Some(501));
        assert_eq!(decode("zzzzzzz"), Some(3_521_614_606_207));
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("abc-12"), None);
        assert_eq!(decode("zzzzzzzzzzzzzzzzzzzz"), None);
    }

    #[test]
    fn test_max_value() {
        assert_eq!(max_value(1), 61);
        assert_eq!(max_value(7), 3_521_614_606_207);
        assert_eq!(max_value(20), u64::MAX);
    }
}
