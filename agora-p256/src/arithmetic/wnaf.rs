//! Scalar multiplication in windowed non-adjacent form.
use super::point::Point;
use super::scalar::Scalar;
use crate::{Curve, PointError};

use bigint::{Encoding, U384};
use zeroize::Zeroize;

pub const SCALAR_BYTES: usize = 32;

/// Window width and minimum number of precomputed odd multiples for a
/// scalar of `bit_length` bits.
pub fn window_for_bit_length(bit_length: usize) -> (u32, usize) {
    match bit_length {
        0..=12 => (2, 1),
        13..=40 => (3, 2),
        41..=120 => (4, 4),
        121..=336 => (5, 8),
        337..=896 => (6, 16),
        897..=2304 => (7, 32),
        _ => (8, 127),
    }
}

pub fn bit_length(scalar: &[u8; SCALAR_BYTES]) -> usize {
    scalar
        .iter()
        .position(|byte| *byte != 0)
        .map(|i| (SCALAR_BYTES - i) * 8 - scalar[i].leading_zeros() as usize)
        .unwrap_or(0)
}

/// Signed digits of `scalar`, least significant first.
///
/// Every nonzero digit is odd, smaller than `2^(width - 1)` in absolute
/// value and followed by at least `width - 1` zero digits. The last digit
/// is always nonzero.
pub fn wnaf_digits(width: u32, scalar: &[u8; SCALAR_BYTES]) -> Vec<i8> {
    debug_assert!((2..=8).contains(&width));
    let modulus = 1i16 << width;
    let mask = (modulus - 1) as u8;
    let sign_bit = 1i16 << (width - 1);

    // the spare high bytes above the scalar absorb `k - digit` for negative digits
    let mut widened = [0u8; 48];
    widened[16..].copy_from_slice(scalar);
    let mut k = U384::from_be_bytes(widened);
    widened.zeroize();

    let mut digits = Vec::with_capacity(SCALAR_BYTES * 8 + 1);
    while k != U384::ZERO {
        let low = k.to_be_bytes()[47];
        if low & 1 == 1 {
            let r = i16::from(low & mask);
            let digit = if r & sign_bit != 0 { r - modulus } else { r };
            k = if digit > 0 {
                k.wrapping_sub(&U384::from_u8(digit as u8))
            } else {
                k.wrapping_add(&U384::from_u8(digit.unsigned_abs() as u8))
            };
            digits.push(digit as i8);
        } else {
            digits.push(0);
        }
        k = k.shr_vartime(1);
    }
    k.zeroize();

    while digits.last() == Some(&0) {
        digits.pop();
    }
    digits
}

impl<C: Curve> Point<C> {
    /// Multiplies the point by a 32 byte big-endian unsigned integer.
    pub fn multiply(&self, scalar: &[u8]) -> Result<Self, PointError> {
        let scalar: &[u8; SCALAR_BYTES] = scalar.try_into().map_err(|_| {
            PointError::Argument(format!(
                "scalar must be {} bytes, got {}",
                SCALAR_BYTES,
                scalar.len()
            ))
        })?;
        Ok(self.mul_be_bytes(scalar))
    }

    pub fn scalar_mul(&self, scalar: &Scalar<C>) -> Self {
        let mut bytes = scalar.to_be_bytes();
        let product = self.mul_be_bytes(&bytes);
        bytes.zeroize();
        product
    }

    pub fn mul_generator(scalar: &Scalar<C>) -> Self {
        Self::GENERATOR.scalar_mul(scalar)
    }

    fn mul_be_bytes(&self, scalar: &[u8; SCALAR_BYTES]) -> Self {
        if self.is_identity() {
            return Self::IDENTITY;
        }
        let bits = bit_length(scalar);
        if bits == 0 {
            return Self::IDENTITY;
        }

        let (width, table_len) = window_for_bit_length(bits);
        let table = self.odd_multiples(table_len);
        let mut digits = wnaf_digits(width, scalar);

        let mut q = Self::IDENTITY;
        for &digit in digits.iter().rev() {
            q = q.double();
            if digit > 0 {
                q = q.geometric_add(&table[((digit - 1) / 2) as usize]);
            } else if digit < 0 {
                q = q.geometric_sub(&table[((-i16::from(digit) - 1) / 2) as usize]);
            }
        }
        digits.zeroize();
        q
    }

    /// `[P, 3P, 5P, ...]` with `len` entries.
    fn odd_multiples(&self, len: usize) -> Vec<Self> {
        let twice = self.double();
        let mut table = Vec::with_capacity(len);
        table.push(*self);
        for i in 1..len {
            let next = table[i - 1].geometric_add(&twice);
            table.push(next);
        }
        table
    }
}
