use super::field::FieldElement;
use super::modular::Modular;
use super::scalar::Scalar;
use crate::{Curve, PointError, U256};

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// An affine curve point or the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point<C: Curve> {
    Identity,
    Affine {
        x: FieldElement<C>,
        y: FieldElement<C>,
    },
}

impl<C: Curve> Point<C> {
    pub const IDENTITY: Self = Self::Identity;

    pub const GENERATOR: Self = Self::Affine {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
    };

    pub fn new(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self::Affine { x, y }
    }

    /// Builds a point from optional coordinates where both missing means
    /// infinity.
    pub fn from_coordinates(
        x: Option<FieldElement<C>>,
        y: Option<FieldElement<C>>,
    ) -> Result<Self, PointError> {
        match (x, y) {
            (Some(x), Some(y)) => Ok(Self::Affine { x, y }),
            (None, None) => Ok(Self::Identity),
            _ => Err(PointError::Construction),
        }
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn x(&self) -> Option<&FieldElement<C>> {
        match self {
            Self::Affine { x, .. } => Some(x),
            Self::Identity => None,
        }
    }

    pub fn y(&self) -> Option<&FieldElement<C>> {
        match self {
            Self::Affine { y, .. } => Some(y),
            Self::Identity => None,
        }
    }

    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Identity => true,
            Self::Affine { x, y } => {
                let a = FieldElement::new(C::COEFF_A);
                let b = FieldElement::new(C::COEFF_B);

                let y2 = y * y;
                let x3 = x.square() * *x;
                let ax = a * *x;
                let t5 = y2 - (x3 + ax + b);

                t5.inner() == &U256::ZERO
            }
        }
    }

    pub fn negate(&self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Affine { x, y } => Self::Affine { x: *x, y: -*y },
        }
    }

    /// Tangent rule. Points with `y = 0` have order two, so they double to
    /// infinity.
    pub fn double(&self) -> Self {
        let (x, y) = match self {
            Self::Affine { x, y } if !y.is_zero() => (x, y),
            _ => return Self::Identity,
        };
        let a = FieldElement::new(C::COEFF_A);
        let three = FieldElement::new(U256::from_u8(3));

        let gamma = (three * x.square() + a) / (*y + *y);
        let x3 = gamma.square() - *x - *x;
        let y3 = gamma * (*x - x3) - *y;

        Self::Affine { x: x3, y: y3 }
    }

    /// Chord rule, falling back to doubling or infinity when the x
    /// coordinates coincide.
    pub fn geometric_add(&self, rhs: &Self) -> Self {
        let ((px, py), (qx, qy)) = match (self, rhs) {
            (Self::Identity, _) => return *rhs,
            (_, Self::Identity) => return *self,
            (Self::Affine { x: px, y: py }, Self::Affine { x: qx, y: qy }) => {
                ((px, py), (qx, qy))
            }
        };

        if px == qx {
            return if py == qy {
                self.double()
            } else {
                Self::Identity
            };
        }

        let gamma = (*qy - *py) / (*qx - *px);
        let x3 = gamma.square() - *px - *qx;
        let y3 = gamma * (*px - x3) - *py;

        Self::Affine { x: x3, y: y3 }
    }

    pub fn geometric_sub(&self, rhs: &Self) -> Self {
        if rhs.is_identity() {
            return *self;
        }
        self.geometric_add(&rhs.negate())
    }
}

impl<C: Curve> Default for Point<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Infinity sorts first, finite points by x and then by y.
impl<C: Curve> Ord for Point<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Identity, Self::Identity) => Ordering::Equal,
            (Self::Identity, _) => Ordering::Less,
            (_, Self::Identity) => Ordering::Greater,
            (Self::Affine { x: x0, y: y0 }, Self::Affine { x: x1, y: y1 }) => x0
                .inner()
                .cmp(x1.inner())
                .then_with(|| y0.inner().cmp(y1.inner())),
        }
    }
}

impl<C: Curve> PartialOrd for Point<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Curve> std::ops::Neg for Point<C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: Curve> std::ops::Neg for &Point<C> {
    type Output = Point<C>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<C: Curve> std::ops::Add for Point<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.geometric_add(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn add(self, rhs: &'b Point<C>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<C: Curve> std::ops::AddAssign<&Point<C>> for Point<C> {
    fn add_assign(&mut self, rhs: &Self) {
        *self = &*self + rhs
    }
}

impl<C: Curve> std::ops::Sub for Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: Self) -> Self {
        self.geometric_sub(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b Point<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn sub(self, rhs: &'b Point<C>) -> Self::Output {
        self.geometric_sub(rhs)
    }
}

impl<C: Curve> std::ops::Mul<Scalar<C>> for &Point<C> {
    type Output = Point<C>;
    fn mul(self, rhs: Scalar<C>) -> Self::Output {
        self.scalar_mul(&rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b Scalar<C>> for &'a Point<C> {
    type Output = Point<C>;
    fn mul(self, rhs: &'b Scalar<C>) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl<C: Curve> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_compressed() {
            Some(bytes) => write!(f, "{}", hex::encode(bytes)),
            None => write!(f, "00"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::test::TestCurve23;
    use crate::Secp256r1;

    type SecPoint = Point<Secp256r1>;
    type SecScalar = Scalar<Secp256r1>;
    type ToyPoint = Point<TestCurve23>;

    fn fe(hex: &str) -> FieldElement<Secp256r1> {
        FieldElement::new(U256::from_be_hex(hex))
    }

    fn toy(x: u8, y: u8) -> ToyPoint {
        ToyPoint::new(
            FieldElement::new(U256::from_u8(x)),
            FieldElement::new(U256::from_u8(y)),
        )
    }

    fn toy_points() -> Vec<ToyPoint> {
        let mut points = vec![ToyPoint::IDENTITY];
        for x in 0..23u8 {
            for y in 0..23u8 {
                let point = toy(x, y);
                if point.is_on_curve() {
                    points.push(point);
                }
            }
        }
        points
    }

    #[test]
    fn construction() {
        let x = Some(FieldElement::<Secp256r1>::ONE);
        assert_eq!(
            SecPoint::from_coordinates(None, None),
            Ok(SecPoint::IDENTITY)
        );
        assert_eq!(
            SecPoint::from_coordinates(x, x),
            Ok(SecPoint::new(FieldElement::ONE, FieldElement::ONE))
        );
        assert_eq!(
            SecPoint::from_coordinates(x, None),
            Err(PointError::Construction)
        );
        assert_eq!(
            SecPoint::from_coordinates(None, x),
            Err(PointError::Construction)
        );
        assert!(SecPoint::IDENTITY.x().is_none());
        assert!(SecPoint::IDENTITY.y().is_none());
    }

    #[test]
    fn on_curve_check() {
        assert!(SecPoint::GENERATOR.is_on_curve());
        assert!(SecPoint::IDENTITY.is_on_curve());
        assert!(SecPoint::GENERATOR.double().is_on_curve());
        assert!(!SecPoint::new(FieldElement::ONE, FieldElement::ONE).is_on_curve());
        assert_eq!(toy_points().len(), 28);
    }

    #[test]
    fn point_doubling() {
        let g2 = SecPoint::GENERATOR.double();
        assert_eq!(
            g2,
            SecPoint::new(
                fe("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
                fe("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
            )
        );
        assert_eq!(SecPoint::IDENTITY.double(), SecPoint::IDENTITY);
        // (4, 0) is the only point of order two on the toy curve
        assert_eq!(toy(4, 0).double(), ToyPoint::IDENTITY);
        assert_eq!(toy(4, 0).geometric_add(&toy(4, 0)), ToyPoint::IDENTITY);
    }

    #[test]
    fn point_addition() {
        let g = SecPoint::GENERATOR;
        let g2 = g.double();
        let g3 = g2 + g;
        assert_eq!(
            g3,
            SecPoint::new(
                fe("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
                fe("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
            )
        );
        assert_eq!(g + g, g2);
        assert_eq!(&g + &SecPoint::IDENTITY, g);
        assert_eq!(&SecPoint::IDENTITY + &g, g);
        assert_eq!(g + (-g), SecPoint::IDENTITY);
        assert_eq!(g3 - g2, g);
        assert_eq!(g3 - SecPoint::IDENTITY, g3);
        assert_eq!(g2 + g3, g3 + g2);

        let mut acc = SecPoint::IDENTITY;
        acc += &g;
        acc += &g;
        assert_eq!(acc, g2);
    }

    #[test]
    fn negation() {
        assert_eq!(SecPoint::IDENTITY.negate(), SecPoint::IDENTITY);
        let neg = -SecPoint::GENERATOR;
        assert_eq!(neg.x(), SecPoint::GENERATOR.x());
        assert_eq!(
            neg.y(),
            Some(&fe("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a"))
        );
        assert!(neg.is_on_curve());
    }

    #[test]
    fn toy_curve_group_laws() {
        let points = toy_points();
        for p in &points {
            assert_eq!(p + &ToyPoint::IDENTITY, *p);
            assert_eq!(p + &p.negate(), ToyPoint::IDENTITY);
            assert_eq!(p + p, p.double());
            for q in &points {
                let sum = p + q;
                assert!(sum.is_on_curve());
                assert_eq!(sum, q + p);
                assert_eq!(&sum - q, *p);
            }
        }
        for p in points.iter().step_by(3) {
            for q in points.iter().step_by(2) {
                for r in &points {
                    assert_eq!(&(p + q) + r, p + &(q + r));
                }
            }
        }
    }

    #[test]
    fn associativity_on_p256() {
        let g = SecPoint::GENERATOR;
        let p = g.double();
        let q = p + g;
        let r = q.double();
        assert_eq!((p + q) + r, p + (q + r));
        assert_eq!((p + p) + q, p + (p + q));
        assert_eq!((r - q) + q, r);
    }

    #[test]
    fn ordering() {
        let mut points = vec![toy(3, 13), toy(3, 10), ToyPoint::IDENTITY, toy(0, 1)];
        points.sort();
        assert_eq!(
            points,
            vec![ToyPoint::IDENTITY, toy(0, 1), toy(3, 10), toy(3, 13)]
        );
    }

    #[test]
    fn scalar_mul_operator() {
        let three = SecScalar::new(U256::from_u8(3));
        let g = SecPoint::GENERATOR;
        assert_eq!(&g * three, g.double() + g);
        assert_eq!(&g * &SecScalar::ZERO, SecPoint::IDENTITY);
    }
}
