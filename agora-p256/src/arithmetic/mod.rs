mod field;
mod modular;
mod point;
mod scalar;
pub mod wnaf;

pub use field::FieldElement;
pub use modular::Modular;
pub use point::Point;
pub use scalar::Scalar;
