#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
pub mod encoding;
mod error;

pub use arithmetic::{FieldElement, Modular, Point, Scalar};
pub use bigint::U256;
pub use curve::{Curve, Secp256r1};
pub use error::PointError;

pub type P256Point = Point<Secp256r1>;
pub type P256Scalar = Scalar<Secp256r1>;
