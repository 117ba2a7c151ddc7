use bigint::{Encoding, NonZero, U256, U512};

pub trait Modular: Sized + Copy {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Square-and-multiply exponentiation, scanning the exponent from its
    /// most significant bit.
    fn pow(&self, exponent: &U256) -> Self {
        let mut result = Self::new(U256::ONE);
        for byte in exponent.to_be_bytes() {
            for shift in (0..8).rev() {
                result = result.square();
                if (byte >> shift) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Multiplicative inverse, `None` for zero.
    fn inverse(&self) -> Option<Self> {
        inv_mod_u256(self.inner(), &Self::MODULUS).map(Self::new)
    }

    fn is_zero(&self) -> bool {
        self.inner() == &U256::ZERO
    }

    fn is_odd(&self) -> bool {
        is_odd(self.inner())
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(widen(modulus)).unwrap();
    // the product of two 256 bit numbers always fits into 512 bits
    let product = widen(lhs).wrapping_mul(&widen(rhs));
    let rem = (product % mod512).to_be_bytes();
    // the upper half of the remainder is always zero because the modulus is an U256 number
    U256::from_be_slice(&rem[32..])
}

/// Binary extended Euclidean inversion for an odd modulus.
///
/// Keeps the invariants `x1 * a = u` and `x2 * a = v` (mod modulus) while
/// halving `u` and `v` until one of them reaches one.
pub fn inv_mod_u256(number: &U256, modulus: &U256) -> Option<U256> {
    let a = if number < modulus {
        *number
    } else {
        // NOTE modulus is never zero, so unwrap is fine here
        number % NonZero::new(*modulus).unwrap()
    };
    if a == U256::ZERO {
        return None;
    }

    let mut u = a;
    let mut v = *modulus;
    let mut x1 = U256::ONE;
    let mut x2 = U256::ZERO;

    while u != U256::ONE && v != U256::ONE {
        while !is_odd(&u) {
            u = u.shr_vartime(1);
            x1 = half_mod(&x1, modulus);
        }
        while !is_odd(&v) {
            v = v.shr_vartime(1);
            x2 = half_mod(&x2, modulus);
        }
        if u >= v {
            u = u.wrapping_sub(&v);
            x1 = x1.sub_mod(&x2, modulus);
        } else {
            v = v.wrapping_sub(&u);
            x2 = x2.sub_mod(&x1, modulus);
        }
    }

    if u == U256::ONE {
        Some(x1)
    } else {
        Some(x2)
    }
}

/// Computes `number / 2` modulo an odd modulus without leaving 256 bits.
fn half_mod(number: &U256, modulus: &U256) -> U256 {
    if is_odd(number) {
        // (n + m) / 2 == (n >> 1) + (m >> 1) + 1 when both are odd
        number
            .shr_vartime(1)
            .wrapping_add(&modulus.shr_vartime(1))
            .wrapping_add(&U256::ONE)
    } else {
        number.shr_vartime(1)
    }
}

pub(crate) fn is_odd(number: &U256) -> bool {
    number.to_be_bytes()[31] & 1 == 1
}

fn widen(number: &U256) -> U512 {
    let mut bytes = [0u8; 64];
    bytes[32..].copy_from_slice(&number.to_be_bytes());
    U512::from_be_slice(&bytes)
}
