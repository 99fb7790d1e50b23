use crate::low_level::carry_digits;
use crate::BigInt;
use std::ops::{Mul, MulAssign};

/// O(n·m) multiplication. Partial products are summed without carrying and
/// the accumulated columns are normalized in a single pass at the end.
///
/// The product always has exactly `l.digit_count() + r.digit_count()` digits.
pub fn schoolbook_mul(l: &BigInt, r: &BigInt) -> BigInt {
    let (max_op, min_op) = if l.digits.len() >= r.digits.len() {
        (l, r)
    } else {
        (r, l)
    };
    // Each column holds at most 81 * min_op.len(), far below u64::MAX.
    let mut columns = vec![0u64; max_op.digits.len() + min_op.digits.len()];
    for (i, &min_digit) in min_op.digits.iter().enumerate() {
        if min_digit == 0 {
            continue;
        }
        let row = u64::from(min_digit);
        for (column, &max_digit) in columns[i..].iter_mut().zip(max_op.digits.iter()) {
            *column += u64::from(max_digit) * row;
        }
    }
    let digits = carry_digits(&columns);
    if digits.is_empty() {
        return BigInt::zero();
    }
    BigInt::from_digits(digits)
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &'b BigInt) -> BigInt {
        schoolbook_mul(self, other)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        schoolbook_mul(&self, &other)
    }
}

impl<'a> MulAssign<&'a BigInt> for BigInt {
    fn mul_assign(&mut self, other: &'a BigInt) {
        *self = schoolbook_mul(self, other);
    }
}
