//! Expose the BLS12-381 G2 group through a generic short-Weierstrass curve interface.
//!
//! Integrated encryption schemes (ECIES) are usually written against an abstract curve: a public key
//! is a point `(x, y)`, a private key is a big-endian scalar, and key agreement is scalar multiplication.
//! This crate implements that abstraction ([Curve]) for G2 by marshalling coordinates into
//! [blst](https://github.com/supranational/blst) points and delegating all arithmetic to it.
//!
//! # Status
//!
//! `g2curve-cryptography` is **ALPHA** software and is not yet recommended for production use. Developers should
//! expect breaking changes and occasional instability.

use num_bigint::BigUint;

pub mod bls12381;
pub use bls12381::{bls12381, Bls12381};

/// Affine coordinates `(x, y)` of a point. `(0, 0)` is the point at infinity.
pub type Coordinates = (BigUint, BigUint);

/// Immutable parameters describing a [Curve].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    /// Order of the underlying base field.
    pub p: BigUint,
    /// Constant `b` of the curve equation `y^2 = x^3 + b`.
    pub b: BigUint,
    /// Order of the group.
    pub n: BigUint,
    /// x-coordinate of the generator.
    pub gx: BigUint,
    /// y-coordinate of the generator.
    pub gy: BigUint,
    /// Size of the base field in bits.
    pub bit_size: usize,
    /// Canonical name of the curve.
    pub name: &'static str,
}

/// A short-Weierstrass curve addressed with big-integer coordinates.
///
/// # Warning
///
/// These are low-level primitives. Only [Curve::is_on_curve] is safe to call on untrusted input:
/// callers must validate points (for example, via [bls12381::keys::PublicKey]) before performing
/// arithmetic on them.
pub trait Curve: Send + Sync {
    /// Error returned when an operand cannot be interpreted as a point.
    type Error: std::error::Error;

    /// Returns the parameters of the curve.
    fn params(&self) -> &CurveParams;

    /// Reports whether `(x, y)` lies on the curve.
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    /// Returns the sum of `(x1, y1)` and `(x2, y2)`.
    fn add(
        &self,
        x1: &BigUint,
        y1: &BigUint,
        x2: &BigUint,
        y2: &BigUint,
    ) -> Result<Coordinates, Self::Error>;

    /// Returns `2 * (x, y)`.
    fn double(&self, x: &BigUint, y: &BigUint) -> Result<Coordinates, Self::Error>;

    /// Returns `k * (x, y)` where `k` is an integer in big-endian form.
    fn scalar_mult(&self, x: &BigUint, y: &BigUint, k: &[u8]) -> Result<Coordinates, Self::Error>;

    /// Returns `k * G` where `G` is the generator and `k` is an integer in big-endian form.
    fn scalar_base_mult(&self, k: &[u8]) -> Coordinates;
}
