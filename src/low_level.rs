use crate::BigInt;

/// Running carry for a least-significant-first pass over digits.
///
/// Each step folds the carry into an arbitrary (possibly multi-digit) value,
/// emits the units digit and keeps the rest for the next position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Carry(u64);

impl Carry {
    pub fn new(carry: u64) -> Self {
        Carry(carry)
    }
    pub fn value(self) -> u64 {
        self.0
    }
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
    pub fn step(&mut self, value: u64) -> u8 {
        let n = value + self.0;
        self.0 = n / 10;
        (n % 10) as u8
    }
}

/// Running borrow for a least-significant-first pass over digit differences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Borrow(u64);

impl Borrow {
    pub fn value(self) -> u64 {
        self.0
    }
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
    // Adds as many tens as it takes to bring the difference back into [0, 9].
    pub fn step(&mut self, difference: i64) -> u8 {
        let n = difference - self.0 as i64;
        let borrow = if n < 0 { (9 - n) / 10 } else { 0 };
        self.0 = borrow as u64;
        let digit = n + 10 * borrow;
        debug_assert!((0..10).contains(&digit), "digit difference {} out of range", n);
        digit as u8
    }
}

pub fn propagate_carry(digits: &mut [u8], carry: &mut Carry) {
    for digit in digits.iter_mut() {
        if carry.is_zero() {
            break;
        }
        *digit = carry.step(u64::from(*digit));
    }
}

pub fn propagate_borrow(digits: &mut [u8], borrow: &mut Borrow) {
    for digit in digits.iter_mut() {
        if borrow.is_zero() {
            break;
        }
        *digit = borrow.step(i64::from(*digit));
    }
}

/// Appends whatever carry is left as new high-order digits.
pub fn drain_carry(digits: &mut Vec<u8>, mut carry: Carry) {
    while !carry.is_zero() {
        digits.push(carry.step(0));
    }
}

pub fn add_assign_digits(target: &mut Vec<u8>, other: &[u8]) {
    if target.len() < other.len() {
        target.resize(other.len(), 0);
    }
    let mut carry = Carry::default();
    let (overlap, rest) = target.split_at_mut(other.len());
    for (target_digit, &other_digit) in overlap.iter_mut().zip(other.iter()) {
        *target_digit = carry.step(u64::from(*target_digit) + u64::from(other_digit));
    }
    propagate_carry(rest, &mut carry);
    drain_carry(target, carry);
}

// Pads target up to other's length. Returns the borrow out of the most
// significant digit, which is nonzero exactly when other > target.
pub fn sub_assign_digits(target: &mut Vec<u8>, other: &[u8]) -> u64 {
    if target.len() < other.len() {
        target.resize(other.len(), 0);
    }
    let mut borrow = Borrow::default();
    let (overlap, rest) = target.split_at_mut(other.len());
    for (target_digit, &other_digit) in overlap.iter_mut().zip(other.iter()) {
        *target_digit = borrow.step(i64::from(*target_digit) - i64::from(other_digit));
    }
    propagate_borrow(rest, &mut borrow);
    borrow.value()
}

pub fn mul_assign_digits_scalar(target: &mut Vec<u8>, k: u32) {
    let mut carry = Carry::default();
    for digit in target.iter_mut() {
        *digit = carry.step(u64::from(*digit) * u64::from(k));
    }
    drain_carry(target, carry);
}

pub fn shift_digits(target: &mut Vec<u8>, shift: usize) {
    let len = target.len();
    target.resize(len + shift, 0);
    target.copy_within(0..len, shift);
    target[..shift].fill(0);
}

/// Normalizes a carry-free accumulator into proper decimal digits in one pass.
pub fn carry_digits(accumulated: &[u64]) -> Vec<u8> {
    let mut carry = Carry::default();
    let mut digits: Vec<u8> = accumulated.iter().map(|&x| carry.step(x)).collect();
    drain_carry(&mut digits, carry);
    digits
}

pub fn split_digits(digits: &[u8], split: usize) -> [BigInt; 2] {
    let (low, high) = digits.split_at(split);
    [
        BigInt::from_digits(low.to_vec()),
        BigInt::from_digits(high.to_vec()),
    ]
}
