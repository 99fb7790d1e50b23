//! Karatsuba multiplication over decimal digits.
//!
//! `(x0 + x1·10^m)(y0 + y1·10^m) = z0 + z1·10^m + z2·10^2m` where `z0 = x0·y0`,
//! `z2 = x1·y1` and `z1 = (x0 + x1)(y0 + y1) - z0 - z2`, so each level does three
//! sub-multiplications instead of four. Operands shorter than the threshold fall
//! back to [`schoolbook_mul`]. Balanced operands recurse about
//! `log2(n / threshold)` levels deep.
use crate::low_level::split_digits;
use crate::schoolbook_mul::schoolbook_mul;
use crate::BigInt;
use log::{debug, trace};

/// Below this many digits in either operand, multiply directly.
pub const KARATSUBA_THRESHOLD: usize = 30;
/// Smallest threshold [`karatsuba_mul_with_threshold`] accepts. Anything lower
/// is raised to this: the split boundary must be at least 2 for every
/// recursive call to shrink its operands.
pub const MIN_KARATSUBA_THRESHOLD: usize = 4;

/// Splits both operands at `m = min(len l, len r) / 2`.
///
/// Returns `m` along with the `[low, high]` halves of each operand; the low
/// halves hold digits `[0, m)` and the high halves everything above. The
/// boundary comes from the shorter operand, so a much longer operand keeps
/// most of its digits in the high half.
pub fn split(l: &BigInt, r: &BigInt) -> (usize, [BigInt; 2], [BigInt; 2]) {
    let m = std::cmp::min(l.digits.len(), r.digits.len()) / 2;
    (m, split_digits(&l.digits, m), split_digits(&r.digits, m))
}

pub fn karatsuba_mul(l: &BigInt, r: &BigInt) -> BigInt {
    karatsuba_mul_with_threshold(l, r, KARATSUBA_THRESHOLD)
}

/// Like [`karatsuba_mul`] with a custom fallback threshold, clamped to at
/// least [`MIN_KARATSUBA_THRESHOLD`].
///
/// The result has exactly `l.digit_count() + r.digit_count()` digits and is
/// equal, digit for digit, to [`schoolbook_mul`] of the same operands.
pub fn karatsuba_mul_with_threshold(l: &BigInt, r: &BigInt, threshold: usize) -> BigInt {
    let threshold = std::cmp::max(threshold, MIN_KARATSUBA_THRESHOLD);
    debug!(
        "karatsuba_mul: {} x {} digits, threshold {}",
        l.digits.len(),
        r.digits.len(),
        threshold
    );
    karatsuba_rec(l, r, threshold)
}

fn karatsuba_rec(l: &BigInt, r: &BigInt, threshold: usize) -> BigInt {
    if l.digits.len() < threshold || r.digits.len() < threshold {
        trace!(
            "schoolbook fallback: {} x {} digits",
            l.digits.len(),
            r.digits.len()
        );
        return schoolbook_mul(l, r);
    }
    let (m, [x0, x1], [y0, y1]) = split(l, r);
    trace!(
        "split {} x {} digits at {}",
        l.digits.len(),
        r.digits.len(),
        m
    );
    let z0 = karatsuba_rec(&x0, &y0, threshold);
    let mut z2 = karatsuba_rec(&x1, &y1, threshold);
    let mut z1 = karatsuba_rec(&(x0 + x1), &(y0 + y1), threshold);
    z1 -= &z2;
    z1 -= &z0;
    z1 <<= m;
    z2 <<= 2 * m;
    z0 + z1 + z2
}
