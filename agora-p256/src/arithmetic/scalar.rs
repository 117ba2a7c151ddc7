use super::modular::Modular;
use crate::Curve;

use bigint::{Encoding, NonZero, U256};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use std::marker::PhantomData;

/// Integer modulo the curve order, stored as a fixed-width `U256`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar<C: Curve>(U256, PhantomData<C>);

impl<C: Curve> Scalar<C> {
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);
    pub const ONE: Self = Self(U256::ONE, PhantomData);

    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let scalar = Self::new(U256::from_be_bytes(bytes));
        bytes.zeroize();
        scalar
    }

    /// Big-endian encoding, the form consumed by `Point::multiply`.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }
}

impl<C: Curve> Modular for Scalar<C> {
    const MODULUS: U256 = C::ORDER;

    fn new(number: U256) -> Self {
        // NOTE unwrap is fine here because the modulus
        // can be safely assumed to be nonzero
        Self(number % NonZero::new(Self::MODULUS).unwrap(), PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<C: Curve> Zeroize for Scalar<C> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<C: Curve> std::ops::Add for Scalar<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<C: Curve> std::ops::Sub for Scalar<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<C: Curve> std::ops::Neg for Scalar<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Mul for Scalar<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}
