use crate::U256;

/// Constants of a short Weierstrass curve `y^2 = x^3 + ax + b` over a prime
/// field.
///
/// Square roots are taken as `n^((p + 1) / 4)`, so the prime modulus has to
/// be congruent to 3 modulo 4.
pub trait Curve: Clone + Copy + std::fmt::Debug + PartialEq + Eq + Send + Sync {
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;
    const COEFF_A: U256;
    const COEFF_B: U256;
}

/// NIST P-256.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256r1;

impl Curve for Secp256r1 {
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    const ORDER: U256 =
        U256::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
    const GENERATOR_X: U256 =
        U256::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");
    const GENERATOR_Y: U256 =
        U256::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");
    // a = -3
    const COEFF_A: U256 =
        U256::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
    const COEFF_B: U256 =
        U256::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
}
