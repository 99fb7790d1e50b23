use crate::low_level::{add_assign_digits, sub_assign_digits};
use crate::{BigInt, Error};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

impl Add for BigInt {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<&'a BigInt> for BigInt {
    type Output = Self;

    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}

impl<'a> Add<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, mut other: BigInt) -> BigInt {
        other += self;
        other
    }
}

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &'b BigInt) -> BigInt {
        let (big, small) = if self.digits.len() > other.digits.len() {
            (self, other)
        } else {
            (other, self)
        };
        big.clone() + small
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, mut other: Self) {
        // Reuse whichever buffer is already long enough.
        if self.digits.len() < other.digits.len() {
            std::mem::swap(self, &mut other);
        }
        add_assign_digits(&mut self.digits, &other.digits);
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &'a Self) {
        add_assign_digits(&mut self.digits, &other.digits);
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<'a> Sub<&'a BigInt> for BigInt {
    type Output = Self;

    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}

impl<'a> Sub<BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: BigInt) -> BigInt {
        self.clone() - &other
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &'b BigInt) -> BigInt {
        self.clone() - other
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

/// Panics if `other` is numerically larger than `self`. The result keeps
/// `max(len self, len other)` digits; nothing is trimmed.
impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &'a Self) {
        let borrow = sub_assign_digits(&mut self.digits, &other.digits);
        assert!(borrow == 0, "attempted to subtract a larger BigInt from a smaller one");
    }
}

impl BigInt {
    /// Like `self - other`, but reports underflow instead of panicking.
    pub fn checked_sub(&self, other: &BigInt) -> Result<BigInt, Error> {
        if self.cmp_value(other) == Ordering::Less {
            return Err(Error::PrecisionUnderflow);
        }
        Ok(self - other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;
    proptest! {
        #[test]
        fn test_addition_methods_match(a in any_bigint(1..40),b in any_bigint(1..40)) {
            let reference_sum = &a + &b;
            assert_eq!(reference_sum, &b + &a);
            assert_eq!(reference_sum, a.clone() + &b);
            assert_eq!(reference_sum, b.clone() + &a);
            assert_eq!(reference_sum, &a + b.clone());
            assert_eq!(reference_sum, &b + a.clone());
            assert_eq!(reference_sum, a.clone() + b.clone());
            assert_eq!(reference_sum, b.clone() + a.clone());
        }
    }
    proptest! {
        #[test]
        fn test_additive_identity(a in any_bigint(1..40)) {
            assert_eq!(a, a.clone() + big("0"));
            assert_eq!(a, big("0") + &a);
        }
    }
    proptest! {
        #[test]
        fn test_additive_associatvity(
            a in any_bigint(1..40),
            b in any_bigint(1..40),
            c in any_bigint(1..40),
            ) {
            assert_eq!(&a + (&b + &c), (&a + &b) + &c);
        }
    }
    proptest! {
        #[test]
        fn test_add_small(a in any::<u32>(), b in any::<u32>()) {
            let sum = BigInt::from(u64::from(a)) + BigInt::from(u64::from(b));
            assert_eq!(sum.trimmed(), BigInt::from(u64::from(a) + u64::from(b)));
            assert!(sum.digits().iter().all(|&d| d < 10));
        }
    }
    proptest! {
        #[test]
        fn test_subtraction_methods_match(a in any_bigint(1..40),b in any_bigint(1..40)) {
            let sum = &a + &b;
            let reference_diff = &sum - &b;
            assert_eq!(reference_diff, sum.clone() - &b);
            assert_eq!(reference_diff, &sum - b.clone());
            assert_eq!(reference_diff, sum.clone() - b.clone());
            assert_eq!(Ok(reference_diff.clone()), sum.checked_sub(&b));
            assert!(reference_diff.numeric_eq(&a));
        }
    }
    proptest! {
        #[test]
        fn test_sub_small(a in any::<u64>(), b in any::<u64>()) {
            let (big_one, small_one) = if a >= b { (a, b) } else { (b, a) };
            let diff = BigInt::from(big_one) - BigInt::from(small_one);
            assert_eq!(diff.digit_count(), BigInt::from(big_one).digit_count());
            assert!(diff.numeric_eq(&BigInt::from(big_one - small_one)));
        }
    }
    #[test]
    fn subtraction_keeps_high_zeros() {
        let diff = big("1000") - big("1");
        assert_eq!(diff, big("0999"));
        assert_eq!(diff.to_string(), "0999");
        assert_eq!(big("5") - big("5"), big("0"));
    }
    #[test]
    fn subtraction_pads_short_minuend() {
        // The subtrahend has more digits but a smaller value.
        let diff = big("5") - big("003");
        assert_eq!(diff, big("002"));
    }
    #[test]
    fn checked_sub_underflow() {
        let a = big("0999");
        let b = big("1000");
        assert_eq!(a.checked_sub(&b), Err(Error::PrecisionUnderflow));
        assert_eq!(big("1").checked_sub(&big("22")), Err(Error::PrecisionUnderflow));
        assert_eq!(big("22").checked_sub(&big("0022")), Ok(big("0000")));
    }
    #[test]
    #[should_panic(expected = "attempted to subtract a larger BigInt")]
    fn subtraction_underflow_panics() {
        let _ = big("12") - big("13");
    }
    #[test]
    fn addition_carries_into_new_digit() {
        assert_eq!(big("999") + big("1"), big("1000"));
        assert_eq!(big("1") + big("0999"), big("1000"));
        assert_eq!(big("0005") + big("5"), big("0010"));
    }
}
