//! Key material for integrated encryption (ECIES) over G2.
//!
//! [PublicKey] is the validating layer expected in front of the low-level [Curve] primitives:
//! it only admits points that lie on the curve, belong to G2, and are not the identity.
//!
//! Public keys are encoded SEC1-style as `0x04 || x || y` with each coordinate padded to
//! 96 bytes. Private keys are 32-byte big-endian scalars. Both implement the
//! [commonware_codec] traits, and `TryFrom<&[u8]>` reads through the same path.

use super::{
    curve::{bls12381, CURVE_NAME},
    primitives::{
        codec::{encode, write_coordinate},
        group::{Scalar, G2_COORDINATE_LENGTH, SCALAR_LENGTH},
        hash::hash_to_scalar,
        Error,
    },
};
use crate::{Coordinates, Curve};
use bytes::{Buf, BufMut};
use commonware_codec::{Error as CodecError, FixedSize, Read, Write};
use num_bigint::BigUint;
use rand::{CryptoRng, Rng};
use std::fmt::{Debug, Display};
use std::ops::Deref;
use tracing::debug;
use zeroize::Zeroize;

/// Length of an encoded [PrivateKey].
pub const PRIVATE_KEY_LENGTH: usize = SCALAR_LENGTH;
/// Length of an encoded [PublicKey] (prefix and two padded coordinates).
pub const PUBLIC_KEY_LENGTH: usize = 1 + 2 * G2_COORDINATE_LENGTH;

/// Prefix of an uncompressed point.
const UNCOMPRESSED: u8 = 0x04;

fn hex(f: &mut std::fmt::Formatter<'_>, bytes: &[u8]) -> std::fmt::Result {
    for byte in bytes {
        write!(f, "{:02x}", byte)?;
    }
    Ok(())
}

/// A private key (a non-zero scalar) and its corresponding [PublicKey].
#[derive(Clone)]
pub struct PrivateKey {
    scalar: Scalar,
    public: PublicKey,
}

impl PrivateKey {
    fn from_scalar(scalar: Scalar) -> Result<Self, Error> {
        if scalar.is_zero() {
            return Err(Error::IdentityKey);
        }
        let (x, y) = bls12381().scalar_base_mult(&scalar.serialize());
        let public = PublicKey::new(x, y)?;
        Ok(Self { scalar, public })
    }

    /// Creates a private key from a big-endian integer of any length, reducing it modulo the
    /// group order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_scalar(Scalar::from_be_bytes(bytes))
    }

    /// Derives a private key from `message`.
    pub fn from_message(message: &[u8]) -> Result<Self, Error> {
        Self::from_scalar(hash_to_scalar(message))
    }

    /// Creates a fresh private key using the supplied RNG.
    pub fn from_rng<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        loop {
            if let Ok(key) = Self::from_scalar(Scalar::rand(rng)) {
                return key;
            }
        }
    }

    /// Returns the [PublicKey] corresponding to this private key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Canonically serializes the private key.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        bytes.copy_from_slice(&self.scalar.serialize());
        bytes
    }

    /// Computes the Diffie-Hellman point shared with `peer`.
    pub fn shared_point(&self, peer: &PublicKey) -> Result<Coordinates, Error> {
        let mut k = self.scalar.serialize();
        let shared = bls12381().scalar_mult(&peer.x, &peer.y, &k);
        k.zeroize();
        shared
    }

    fn read_from(buf: &mut impl Buf) -> Result<Self, Error> {
        if buf.remaining() < PRIVATE_KEY_LENGTH {
            return Err(Error::InvalidPrivateKeyLength);
        }
        let mut raw = [0u8; PRIVATE_KEY_LENGTH];
        buf.copy_to_slice(&mut raw);
        let scalar = Scalar::deserialize(&raw).ok_or(Error::InvalidPrivateKey);
        raw.zeroize();
        Self::from_scalar(scalar?)
    }
}

impl Write for PrivateKey {
    fn write(&self, buf: &mut impl BufMut) {
        let mut raw = self.to_bytes();
        raw.write(buf);
        raw.zeroize();
    }
}

impl Read for PrivateKey {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        Self::read_from(buf).map_err(|err| CodecError::Wrapped(CURVE_NAME, err.into()))
    }
}

impl FixedSize for PrivateKey {
    const SIZE: usize = PRIVATE_KEY_LENGTH;
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl Eq for PrivateKey {}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;
    fn try_from(mut value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != PRIVATE_KEY_LENGTH {
            return Err(Error::InvalidPrivateKeyLength);
        }
        Self::read_from(&mut value)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey({})", self.public)
    }
}

/// A validated point of G2 (other than the identity).
#[derive(Clone, Eq, PartialEq)]
pub struct PublicKey {
    raw: [u8; PUBLIC_KEY_LENGTH],
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Creates a public key from affine coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self, Error> {
        let point = encode(&x, &y).inspect_err(|err| debug!(?err, "invalid public key"))?;
        if point.is_zero() {
            return Err(Error::IdentityKey);
        }
        if !point.in_group() {
            debug!("public key not in subgroup");
            return Err(Error::NotInSubgroup);
        }

        let mut raw = [0u8; PUBLIC_KEY_LENGTH];
        let mut coordinate = [0u8; G2_COORDINATE_LENGTH];
        raw[0] = UNCOMPRESSED;
        write_coordinate(&x, &mut coordinate)?;
        raw[1..1 + G2_COORDINATE_LENGTH].copy_from_slice(&coordinate);
        write_coordinate(&y, &mut coordinate)?;
        raw[1 + G2_COORDINATE_LENGTH..].copy_from_slice(&coordinate);
        Ok(Self { raw, x, y })
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    fn read_from(buf: &mut impl Buf) -> Result<Self, Error> {
        if buf.remaining() < PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidPublicKeyLength);
        }
        let prefix = buf.get_u8();
        if prefix != UNCOMPRESSED {
            return Err(Error::InvalidPublicKeyPrefix(prefix));
        }
        let mut coordinate = [0u8; G2_COORDINATE_LENGTH];
        buf.copy_to_slice(&mut coordinate);
        let x = BigUint::from_bytes_be(&coordinate);
        buf.copy_to_slice(&mut coordinate);
        let y = BigUint::from_bytes_be(&coordinate);
        Self::new(x, y)
    }
}

impl Write for PublicKey {
    fn write(&self, buf: &mut impl BufMut) {
        self.raw.write(buf);
    }
}

impl Read for PublicKey {
    type Cfg = ();

    fn read_cfg(buf: &mut impl Buf, _: &()) -> Result<Self, CodecError> {
        Self::read_from(buf).map_err(|err| CodecError::Wrapped(CURVE_NAME, err.into()))
    }
}

impl FixedSize for PublicKey {
    const SIZE: usize = PUBLIC_KEY_LENGTH;
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl Deref for PublicKey {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.raw
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;
    fn try_from(mut value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != PUBLIC_KEY_LENGTH {
            return Err(Error::InvalidPublicKeyLength);
        }
        Self::read_from(&mut value)
    }
}

impl TryFrom<Vec<u8>> for PublicKey {
    type Error = Error;
    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        hex(f, &self.raw)
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        hex(f, &self.raw)
    }
}
