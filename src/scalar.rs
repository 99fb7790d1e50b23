use crate::low_level::{mul_assign_digits_scalar, shift_digits};
use crate::BigInt;
use std::ops::{Mul, MulAssign, Shl, ShlAssign};

impl MulAssign<u32> for BigInt {
    fn mul_assign(&mut self, k: u32) {
        mul_assign_digits_scalar(&mut self.digits, k);
    }
}

impl Mul<u32> for BigInt {
    type Output = Self;

    fn mul(mut self, k: u32) -> Self {
        self *= k;
        self
    }
}

impl<'a> Mul<u32> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, k: u32) -> BigInt {
        self.clone() * k
    }
}

/// Multiplies by `10^n`.
impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, n: usize) {
        shift_digits(&mut self.digits, n);
    }
}

impl Shl<usize> for BigInt {
    type Output = Self;

    fn shl(mut self, n: usize) -> Self {
        self <<= n;
        self
    }
}

impl<'a> Shl<usize> for &'a BigInt {
    type Output = BigInt;

    fn shl(self, n: usize) -> BigInt {
        let mut digits = vec![0; n + self.digits.len()];
        digits[n..].copy_from_slice(&self.digits);
        BigInt::from_digits(digits)
    }
}
