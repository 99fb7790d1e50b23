use crate::BigInt;
use proptest::prelude::*;

/// Decimal strings without a leading zero, with a length drawn from `range`.
pub fn decimal_string(range: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    (1u8..10, proptest::collection::vec(0u8..10, range)).prop_map(|(lead, rest)| {
        std::iter::once(lead)
            .chain(rest.into_iter().skip(1))
            .map(|digit| char::from(b'0' + digit))
            .collect()
    })
}
/// Arbitrary digit runs, high-order zeros included. `range` must not admit 0.
pub fn any_bigint(range: std::ops::Range<usize>) -> impl Strategy<Value = BigInt> {
    proptest::collection::vec(0u8..10, range).prop_map(BigInt::from_digits)
}
pub fn repeat_digit(digit: u8, len: usize) -> BigInt {
    BigInt::from_digits(vec![digit; len])
}
pub fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}
