//! Marshal G2 points to and from a pair of big-integer coordinates.
//!
//! A point is represented as `(x, y)` where each coordinate is the big-endian integer
//! formed by an element of Fp2 serialized as `c1 || c0` (96 bytes). The pair `(0, 0)`
//! denotes the point at infinity.

use super::{
    group::{G2, G2_COORDINATE_LENGTH, G2_SERIALIZED_LENGTH},
    Error,
};
use crate::Coordinates;
use num_bigint::BigUint;

/// Flag bits (compression, infinity, sign) carried in the first byte of a serialized point.
const FLAG_MASK: u8 = 0xe0;

/// Writes `value` as a fixed-width big-endian integer, left-padded with zeros.
pub fn write_coordinate(value: &BigUint, out: &mut [u8; G2_COORDINATE_LENGTH]) -> Result<(), Error> {
    let bytes = value.to_bytes_be();
    if bytes.len() > G2_COORDINATE_LENGTH {
        return Err(Error::CoordinateTooLarge(bytes.len()));
    }
    out.fill(0);
    out[G2_COORDINATE_LENGTH - bytes.len()..].copy_from_slice(&bytes);
    Ok(())
}

/// Parses a pair of coordinates into a G2 point.
///
/// The point must satisfy the curve equation. Subgroup membership is not checked.
pub fn encode(x: &BigUint, y: &BigUint) -> Result<G2, Error> {
    if x.bits() == 0 && y.bits() == 0 {
        return Ok(G2::zero());
    }

    let mut coordinate = [0u8; G2_COORDINATE_LENGTH];
    let mut bytes = [0u8; G2_SERIALIZED_LENGTH];
    write_coordinate(x, &mut coordinate)?;
    bytes[..G2_COORDINATE_LENGTH].copy_from_slice(&coordinate);
    write_coordinate(y, &mut coordinate)?;
    bytes[G2_COORDINATE_LENGTH..].copy_from_slice(&coordinate);

    // A valid field element never sets the top bits, so any flag is malformed input
    if bytes[0] & FLAG_MASK != 0 || bytes[G2_COORDINATE_LENGTH] & FLAG_MASK != 0 {
        return Err(Error::InvalidEncoding);
    }
    G2::deserialize(&bytes)
}

/// Splits a G2 point into its affine coordinates.
pub fn decode(point: &G2) -> Coordinates {
    if point.is_zero() {
        return (BigUint::default(), BigUint::default());
    }
    let bytes = point.to_affine().serialize();
    let (x, y) = bytes.split_at(G2_COORDINATE_LENGTH);
    (BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
}
