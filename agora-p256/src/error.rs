use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointError {
    #[error("invalid point encoding tag: {0:#04x}")]
    Format(u8),
    #[error("unsupported raw point length: {0}")]
    FormatLength(usize),
    #[error("invalid encoding length for tag {tag:#04x}: expected {expected}, got {actual}")]
    Length {
        tag: u8,
        expected: usize,
        actual: usize,
    },
    #[error("point must have either both or neither of its coordinates")]
    Construction,
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("coordinate is not below the field modulus")]
    CoordinateOverflow,
    #[error("invalid argument: {0}")]
    Argument(String),
    #[error("the point at infinity has no coordinate encoding")]
    InfinityEncoding,
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("failed to read point: {0}")]
    Io(std::io::ErrorKind),
}

impl From<std::io::Error> for PointError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.kind())
    }
}
