//! Primitives that adapt BLS12-381 G2 to the generic [crate::Curve] interface.
//!
//! # Acknowledgements
//!
//! _The following crates were used as a reference when implementing this crate. If code is very similar
//! to the reference, it is accompanied by a comment and link._
//!
//! * <https://github.com/filecoin-project/blstrs> + <https://github.com/MystenLabs/fastcrypto>: Implementing operations over
//!   the BLS12-381 scalar field with <https://github.com/supranational/blst>.
//! * <https://github.com/zkcrypto/bls12_381>: Reducing a wide digest into the scalar field.
//!
//! # Example
//!
//! ```rust
//! use g2curve_cryptography::bls12381::primitives::{codec, group::{G2, Scalar}, hash};
//!
//! // Derive a scalar from a message
//! let scalar = hash::hash_to_scalar(b"hello world");
//!
//! // Multiply the generator and marshal the result into coordinates
//! let mut point = G2::one();
//! point.mul(&scalar);
//! let (x, y) = codec::decode(&point);
//!
//! // Coordinates parse back into the same point
//! assert_eq!(codec::encode(&x, &y).unwrap(), point);
//! ```

pub mod codec;
pub mod group;
pub mod hash;

use blst::BLST_ERROR;
use thiserror::Error;

/// Errors that can occur when working with BLS12-381 primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("coordinate too large: {0} bytes")]
    CoordinateTooLarge(usize),
    #[error("invalid point length: {0}")]
    InvalidPointLength(usize),
    #[error("invalid encoding")]
    InvalidEncoding,
    #[error("point not on curve")]
    NotOnCurve,
    #[error("point not in subgroup")]
    NotInSubgroup,
    #[error("invalid private key length")]
    InvalidPrivateKeyLength,
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("invalid public key length")]
    InvalidPublicKeyLength,
    #[error("invalid public key prefix: {0:#04x}")]
    InvalidPublicKeyPrefix(u8),
    #[error("key is the identity")]
    IdentityKey,
}

impl From<BLST_ERROR> for Error {
    fn from(err: BLST_ERROR) -> Self {
        match err {
            BLST_ERROR::BLST_POINT_NOT_ON_CURVE => Error::NotOnCurve,
            BLST_ERROR::BLST_POINT_NOT_IN_GROUP => Error::NotInSubgroup,
            _ => Error::InvalidEncoding,
        }
    }
}
