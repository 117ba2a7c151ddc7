//! SEC1 point encodings.
//!
//! | tag            | layout           |
//! |----------------|------------------|
//! | `0x00`         | point at infinity |
//! | `0x02`, `0x03` | `tag || x`, the low bit of the tag is the parity of `y` |
//! | `0x04`         | `tag || x || y`  |
//! | `0x06`, `0x07` | hybrid, decoded like `0x04` |
use crate::arithmetic::{FieldElement, Modular, Point};
use crate::{Curve, PointError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::io::Read;
use std::str::FromStr;

pub const FIELD_BYTES: usize = 32;
pub const COMPRESSED_LEN: usize = 1 + FIELD_BYTES;
pub const UNCOMPRESSED_LEN: usize = 1 + 2 * FIELD_BYTES;

const TAG_INFINITY: u8 = 0x00;
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Total encoded length implied by a tag byte.
fn expected_len(tag: u8) -> Result<usize, PointError> {
    match tag {
        TAG_INFINITY => Ok(1),
        0x02 | 0x03 => Ok(COMPRESSED_LEN),
        TAG_UNCOMPRESSED | 0x06 | 0x07 => Ok(UNCOMPRESSED_LEN),
        _ => Err(PointError::Format(tag)),
    }
}

fn parse_coordinate<C: Curve>(bytes: &[u8; FIELD_BYTES]) -> Result<FieldElement<C>, PointError> {
    FieldElement::from_be_bytes(bytes).ok_or(PointError::CoordinateOverflow)
}

impl<C: Curve> Point<C> {
    pub fn decode(bytes: &[u8]) -> Result<Self, PointError> {
        let tag = *bytes.first().ok_or(PointError::Length {
            tag: TAG_INFINITY,
            expected: 1,
            actual: 0,
        })?;
        let expected = expected_len(tag)?;
        if bytes.len() != expected {
            return Err(PointError::Length {
                tag,
                expected,
                actual: bytes.len(),
            });
        }
        log::trace!("decoding point with tag {:#04x}", tag);

        let mut x_bytes = [0u8; FIELD_BYTES];
        match tag {
            TAG_INFINITY => Ok(Self::IDENTITY),
            0x02 | 0x03 => {
                x_bytes.copy_from_slice(&bytes[1..]);
                let x = parse_coordinate(&x_bytes)?;
                Self::decompress(x, tag & 1 == 1)
            }
            // hybrid encodings carry a parity hint in the tag which is not
            // checked against y
            _ => {
                let mut y_bytes = [0u8; FIELD_BYTES];
                x_bytes.copy_from_slice(&bytes[1..1 + FIELD_BYTES]);
                y_bytes.copy_from_slice(&bytes[1 + FIELD_BYTES..]);
                let x = parse_coordinate(&x_bytes)?;
                let y = parse_coordinate(&y_bytes)?;
                Ok(Self::new(x, y))
            }
        }
    }

    /// Recovers `y` from `x` and the parity of `y`.
    pub fn decompress(x: FieldElement<C>, y_is_odd: bool) -> Result<Self, PointError> {
        let a = FieldElement::new(C::COEFF_A);
        let b = FieldElement::new(C::COEFF_B);
        let alpha = x * (x.square() + a) + b;
        let beta = alpha.sqrt().ok_or(PointError::NotOnCurve)?;

        let y = if beta.is_odd() == y_is_odd {
            beta
        } else {
            // Q - beta, the other root
            -beta
        };
        Ok(Self::new(x, y))
    }

    pub fn encode(&self, compressed: bool) -> Result<Vec<u8>, PointError> {
        let encoded = if compressed {
            self.to_compressed().map(|bytes| bytes.to_vec())
        } else {
            self.to_uncompressed().map(|bytes| bytes.to_vec())
        };
        encoded.ok_or(PointError::InfinityEncoding)
    }

    pub fn to_compressed(&self) -> Option<[u8; COMPRESSED_LEN]> {
        let (x, y) = self.coordinates()?;
        let mut bytes = [0u8; COMPRESSED_LEN];
        bytes[0] = if y.is_odd() { 0x03 } else { 0x02 };
        bytes[1..].copy_from_slice(&x.to_be_bytes());
        Some(bytes)
    }

    pub fn to_uncompressed(&self) -> Option<[u8; UNCOMPRESSED_LEN]> {
        let (x, y) = self.coordinates()?;
        let mut bytes = [0u8; UNCOMPRESSED_LEN];
        bytes[0] = TAG_UNCOMPRESSED;
        bytes[1..1 + FIELD_BYTES].copy_from_slice(&x.to_be_bytes());
        bytes[1 + FIELD_BYTES..].copy_from_slice(&y.to_be_bytes());
        Some(bytes)
    }

    /// Length of the compressed encoding, one byte for infinity.
    pub fn encoded_len(&self) -> usize {
        if self.is_identity() {
            1
        } else {
            COMPRESSED_LEN
        }
    }

    /// Accepts any SEC1 encoding as well as raw untagged `x || y`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PointError> {
        match bytes.len() {
            1 | COMPRESSED_LEN | UNCOMPRESSED_LEN => Self::decode(bytes),
            len if len == 2 * FIELD_BYTES => {
                let mut tagged = [0u8; UNCOMPRESSED_LEN];
                tagged[0] = TAG_UNCOMPRESSED;
                tagged[1..].copy_from_slice(bytes);
                Self::decode(&tagged)
            }
            len => Err(PointError::FormatLength(len)),
        }
    }

    /// Reads one encoded point, consuming exactly the bytes its tag implies.
    pub fn decode_from_reader<R: Read>(reader: &mut R) -> Result<Self, PointError> {
        let mut tag = [0u8; 1];
        reader
            .read_exact(&mut tag)
            ?;
        let mut bytes = vec![0u8; expected_len(tag[0])?];
        bytes[0] = tag[0];
        reader
            .read_exact(&mut bytes[1..])
            ?;
        Self::decode(&bytes)
    }

    fn coordinates(&self) -> Option<(&FieldElement<C>, &FieldElement<C>)> {
        match self {
            Self::Affine { x, y } => Some((x, y)),
            Self::Identity => None,
        }
    }
}

impl<C: Curve> FromStr for Point<C> {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim_start_matches("0x"))?;
        Self::decode(&bytes)
    }
}

impl<C: Curve> Serialize for Point<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, C: Curve> Deserialize<'de> for Point<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        encoded.parse().map_err(serde::de::Error::custom)
    }
}
