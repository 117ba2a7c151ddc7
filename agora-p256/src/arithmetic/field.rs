use super::modular::Modular;
use crate::Curve;

use bigint::{Encoding, NonZero, U256};

use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> FieldElement<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    /// Parses a canonical big-endian encoding, `None` if the value is not
    /// below the field modulus.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let number = U256::from_be_bytes(*bytes);
        if number < C::PRIME_MODULUS {
            Some(Self(number, PhantomData))
        } else {
            None
        }
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Square root via `n^((p + 1) / 4)`, checked by squaring the candidate.
    pub fn sqrt(&self) -> Option<Self> {
        let exponent = C::PRIME_MODULUS.wrapping_add(&U256::ONE).shr_vartime(2);
        let root = self.pow(&exponent);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

impl<C: Curve> Modular for FieldElement<C> {
    const MODULUS: U256 = C::PRIME_MODULUS;

    fn new(number: U256) -> Self {
        let reduced = if number < Self::MODULUS {
            number
        } else {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            number % NonZero::new(Self::MODULUS).unwrap()
        };

        Self(reduced, PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn add(self, rhs: &'b FieldElement<C>) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl<C: Curve> std::ops::Add for FieldElement<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<C: Curve> std::ops::Sub for FieldElement<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn sub(self, rhs: &FieldElement<C>) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl<C: Curve> std::ops::Neg for FieldElement<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Mul for FieldElement<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn mul(self, rhs: &FieldElement<C>) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

// Dividing by zero yields zero, the same value `rhs^(p - 2)` would give.
impl<C: Curve> std::ops::Div for FieldElement<C> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        match rhs.inverse() {
            Some(inv) => Modular::mul(&self, &inv),
            None => Self::ZERO,
        }
    }
}
