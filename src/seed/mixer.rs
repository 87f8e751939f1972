//! Non-cryptographic 64-bit integer hashes.

const FINALIZE_MUL_1: u64 = 0xff51_afd7_ed55_8ccd;
const FINALIZE_MUL_2: u64 = 0xc4ce_b9fe_1a85_ec53;

const ITERATIVE_INIT: u64 = 3_074_457_345_618_258_791;
const ITERATIVE_MUL: u64 = 3_074_457_345_618_258_799;

/// 64-bit avalanche finalizer (MurmurHash3 `fmix64`).
#[inline]
pub fn finalize(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(FINALIZE_MUL_1);
    x ^= x >> 33;
    x = x.wrapping_mul(FINALIZE_MUL_2);
    x ^= x >> 33;
    x
}

/// Iterative multiplicative hash over a byte string.
///
/// Order dependent: permuting the input changes the result.
pub fn iterative_hash(bytes: &[u8]) -> u64 {
    bytes.iter().fold(ITERATIVE_INIT, |acc, &b| {
        acc.wrapping_add(u64::from(b)).wrapping_mul(ITERATIVE_MUL)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_fixed_point_at_zero() {
        assert_eq!(finalize(0), 0);
    }

    #[test]
    fn test_finalize_deterministic() {
        for x in [1u64, 42, u64::MAX, 0xdead_beef] {
            assert_eq!(finalize(x), finalize(x));
        }
        assert_ne!(finalize(1), finalize(2));
    }

    #[test]
    fn test_finalize_avalanche() {
        let x = 0x0123_4567_89ab_cdefu64;
        let reference = finalize(x);

        let total: u32 = (0..64)
            .map(|bit| (finalize(x ^ (1 << bit)) ^ reference).count_ones())
            .sum();
        let mean = total as f64 / 64.0;

        // Ideal is 32 flipped output bits per flipped input bit
        assert!(mean > 24.0 && mean < 40.0, "mean flipped bits {}", mean);
    }

    #[test]
    fn test_iterative_hash_empty_is_init() {
        assert_eq!(iterative_hash(&[]), ITERATIVE_INIT);
    }

    #[test]
    fn test_iterative_hash_single_byte() {
        let expected = ITERATIVE_INIT
            .wrapping_add(0x61)
            .wrapping_mul(ITERATIVE_MUL);
        assert_eq!(iterative_hash(b"a"), expected);
    }

    #[test]
    fn test_iterative_hash_order_sensitive() {
        assert_ne!(iterative_hash(b"ab"), iterative_hash(b"ba"));
        assert_ne!(iterative_hash(b"PATH=/bin"), iterative_hash(b"/bin=PATH"));
    }
}
