//! Arbitrary-precision non-negative integers stored as decimal digits.
//!
//! Values are little-endian runs of base-10 digits. Nothing is ever trimmed:
//! `"007"` parses to three digits and formats back as `"007"`, so `==` compares
//! digit runs while [`BigInt::numeric_eq`] and [`BigInt::cmp_value`] compare the
//! numbers they denote.
//!
//! ```
//! use decmul::{karatsuba_mul, schoolbook_mul, BigInt};
//!
//! let a: BigInt = "999".parse().unwrap();
//! let b: BigInt = "999".parse().unwrap();
//! assert_eq!(schoolbook_mul(&a, &b).to_string(), "998001");
//! assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
//! ```
pub mod addsub;
pub mod error;
pub mod karatsuba;
pub mod low_level;
pub mod scalar;
pub mod schoolbook_mul;
#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use karatsuba::{
    karatsuba_mul, karatsuba_mul_with_threshold, split, KARATSUBA_THRESHOLD,
    MIN_KARATSUBA_THRESHOLD,
};
pub use schoolbook_mul::schoolbook_mul;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, Clone, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
}
impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("digits", &format_args!("{}", self))
            .finish()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .digits
            .iter()
            .rev()
            .map(|&digit| char::from(b'0' + digit))
            .collect();
        f.pad(&rendered)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        let mut digits = s
            .char_indices()
            .map(|(index, found)| match found.to_digit(10) {
                Some(digit) => Ok(digit as u8),
                None => Err(Error::InvalidDigit { index, found }),
            })
            .collect::<Result<Vec<u8>, Error>>()?;
        digits.reverse();
        Ok(BigInt { digits })
    }
}

impl From<u64> for BigInt {
    fn from(mut x: u64) -> Self {
        let mut digits = Vec::new();
        loop {
            digits.push((x % 10) as u8);
            x /= 10;
            if x == 0 {
                break;
            }
        }
        BigInt { digits }
    }
}

impl BigInt {
    // Callers guarantee every digit is in 0..10.
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d < 10));
        BigInt { digits }
    }
    pub fn zero() -> Self {
        BigInt { digits: vec![0] }
    }
    /// Number of stored digits, high-order zeros included.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
    /// The stored digits, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
    fn significant_len(&self) -> usize {
        self.digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1)
    }
    /// Drops high-order zero digits, keeping at least one digit.
    pub fn trimmed(&self) -> BigInt {
        let len = std::cmp::max(self.significant_len(), 1);
        BigInt {
            digits: self.digits[..len].to_vec(),
        }
    }
    /// Compares the numbers denoted, ignoring high-order zeros.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let self_len = self.significant_len();
        let other_len = other.significant_len();
        let len_cmp = self_len.cmp(&other_len);
        if len_cmp != Ordering::Equal {
            return len_cmp;
        }
        for (s, o) in self.digits[..self_len]
            .iter()
            .rev()
            .zip(other.digits[..other_len].iter().rev())
        {
            let digit_cmp = s.cmp(o);
            if digit_cmp != Ordering::Equal {
                return digit_cmp;
            }
        }
        Ordering::Equal
    }
    pub fn numeric_eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}
