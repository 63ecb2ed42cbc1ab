//! Group operations over BLS12-381 G2 and the BLS12-381 scalar field.
//!
//! This module wraps the subset of [blst] required to treat G2 as a conventional
//! short-Weierstrass curve: point addition, doubling, scalar multiplication, and
//! uncompressed (de)serialization.
//!
//! # Warning
//!
//! [G2::deserialize] only checks that a point satisfies the curve equation. Points received
//! from untrusted sources must also be checked with [G2::in_group] before being used as keys
//! (this is done for you by [crate::bls12381::keys::PublicKey]).

use super::Error;
use blst::{
    blst_bendian_from_scalar, blst_fr, blst_fr_add, blst_fr_from_scalar, blst_fr_from_uint64,
    blst_fr_mul, blst_keygen_v3, blst_p2, blst_p2_add_or_double, blst_p2_affine, blst_p2_cneg,
    blst_p2_deserialize, blst_p2_double, blst_p2_from_affine, blst_p2_in_g2, blst_p2_is_equal,
    blst_p2_is_inf, blst_p2_mult, blst_p2_on_curve, blst_p2_serialize, blst_p2_to_affine,
    blst_scalar, blst_scalar_fr_check, blst_scalar_from_be_bytes, blst_scalar_from_bendian,
    blst_scalar_from_fr, BLS12_381_G2, BLST_ERROR,
};
use rand::RngCore;
use std::ptr;
use zeroize::Zeroize;

/// An element of the BLS12-381 scalar field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub struct Scalar(blst_fr);

/// Length of a canonically serialized [Scalar].
pub const SCALAR_LENGTH: usize = 32;

/// `R = 2^256 mod q` in little-endian Montgomery form which is equivalent to 1 in little-endian
/// non-Montgomery form.
///
/// mod(2^256, 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001) = 0x1824b159acc5056f998c4fefecbc4ff55884b7fa0003480200000001fffffffe
// Reference: https://github.com/filecoin-project/blstrs/blob/ffbb41d1495d84e40a712583346439924603b49a/src/scalar.rs#L77-L89
const BLST_FR_ONE: Scalar = Scalar(blst_fr {
    l: [
        0x0000_0001_ffff_fffe,
        0x5884_b7fa_0003_4802,
        0x998c_4fef_ecbc_4ff5,
        0x1824_b159_acc5_056f,
    ],
});

/// A point on the BLS12-381 G2 curve, held in projective form.
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct G2(blst_p2);

/// Length of a single serialized coordinate (an element of Fp2).
pub const G2_COORDINATE_LENGTH: usize = 96;

/// Length of an uncompressed G2 point (`x || y`).
pub const G2_SERIALIZED_LENGTH: usize = 2 * G2_COORDINATE_LENGTH;

/// Returns the size in bits of a given blst_scalar (represented in little-endian).
fn bits(scalar: &blst_scalar) -> usize {
    let mut bits: usize = SCALAR_LENGTH * 8;
    for i in scalar.b.iter().rev() {
        let leading = i.leading_zeros();
        bits -= leading as usize;
        if leading < 8 {
            break;
        }
    }
    bits
}

impl Scalar {
    /// Returns the additive identity.
    pub fn zero() -> Self {
        Self(blst_fr::default())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        BLST_FR_ONE
    }

    /// Generates a random scalar using the provided RNG.
    pub fn rand<R: RngCore>(rng: &mut R) -> Self {
        // Generate a random 64 byte buffer
        let mut ikm = [0u8; 64];
        rng.fill_bytes(&mut ikm);

        // Generate a scalar from the randomly populated buffer
        let mut ret = blst_fr::default();
        unsafe {
            let mut sc = blst_scalar::default();
            blst_keygen_v3(&mut sc, ikm.as_ptr(), ikm.len(), ptr::null(), 0);
            blst_fr_from_scalar(&mut ret, &sc);
        }
        ikm.zeroize();
        Self(ret)
    }

    /// Creates a scalar from four little-endian 64-bit limbs (non-Montgomery form).
    pub fn from_limbs(limbs: [u64; 4]) -> Self {
        // blst requires a buffer of 4 uint64 values. Failure to provide one will
        // result in unexpected behavior (will read past the provided buffer).
        //
        // Reference: https://github.com/supranational/blst/blob/415d4f0e2347a794091836a3065206edfd9c72f3/bindings/blst.h#L102
        let mut ret = blst_fr::default();
        unsafe { blst_fr_from_uint64(&mut ret, limbs.as_ptr()) };
        Self(ret)
    }

    /// Parses a big-endian integer of any length, reducing it modulo the group order.
    ///
    /// An empty slice is zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::zero();
        }
        let mut ret = blst_fr::default();
        unsafe {
            let mut scalar = blst_scalar::default();
            blst_scalar_from_be_bytes(&mut scalar, bytes.as_ptr(), bytes.len());
            blst_fr_from_scalar(&mut ret, &scalar);
        }
        Self(ret)
    }

    /// Returns whether the scalar is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Adds to self in-place.
    pub fn add(&mut self, rhs: &Self) {
        unsafe {
            blst_fr_add(&mut self.0, &self.0, &rhs.0);
        }
    }

    /// Multiplies self in-place.
    pub fn mul(&mut self, rhs: &Self) {
        unsafe {
            blst_fr_mul(&mut self.0, &self.0, &rhs.0);
        }
    }

    /// Canonically serializes the scalar (32 bytes, big-endian).
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = [0u8; SCALAR_LENGTH];
        unsafe {
            let mut scalar = blst_scalar::default();
            blst_scalar_from_fr(&mut scalar, &self.0);
            blst_bendian_from_scalar(bytes.as_mut_ptr(), &scalar);
        }
        bytes.to_vec()
    }

    /// Deserializes a canonically encoded scalar.
    ///
    /// Unlike [Scalar::from_be_bytes], values greater than or equal to the group
    /// order are rejected.
    pub fn deserialize(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != SCALAR_LENGTH {
            return None;
        }
        let mut ret = blst_fr::default();
        unsafe {
            let mut scalar = blst_scalar::default();
            blst_scalar_from_bendian(&mut scalar, bytes.as_ptr());
            if !blst_scalar_fr_check(&scalar) {
                return None;
            }
            blst_fr_from_scalar(&mut ret, &scalar);
        }
        Some(Self(ret))
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.l.zeroize();
    }
}

impl G2 {
    /// Returns the point at infinity.
    pub fn zero() -> Self {
        Self(blst_p2::default())
    }

    /// Returns the group generator.
    pub fn one() -> Self {
        let mut ret = blst_p2::default();
        unsafe {
            blst_p2_from_affine(&mut ret, &BLS12_381_G2);
        }
        Self(ret)
    }

    /// Returns whether the point is the point at infinity.
    pub fn is_zero(&self) -> bool {
        unsafe { blst_p2_is_inf(&self.0) }
    }

    /// Returns whether the point satisfies the curve equation.
    pub fn is_on_curve(&self) -> bool {
        unsafe { blst_p2_on_curve(&self.0) }
    }

    /// Returns whether the point belongs to the prime-order subgroup.
    pub fn in_group(&self) -> bool {
        unsafe { blst_p2_in_g2(&self.0) }
    }

    /// Adds to self in-place.
    pub fn add(&mut self, rhs: &Self) {
        unsafe {
            blst_p2_add_or_double(&mut self.0, &self.0, &rhs.0);
        }
    }

    /// Doubles self in-place.
    pub fn double(&mut self) {
        unsafe {
            blst_p2_double(&mut self.0, &self.0);
        }
    }

    /// Negates self in-place.
    pub fn neg(&mut self) {
        unsafe {
            blst_p2_cneg(&mut self.0, true);
        }
    }

    /// Multiplies self in-place.
    pub fn mul(&mut self, rhs: &Scalar) {
        let mut scalar = blst_scalar::default();
        unsafe {
            blst_scalar_from_fr(&mut scalar, &rhs.0);
        }
        let nbits = bits(&scalar);
        if nbits == 0 {
            *self = Self::zero();
            return;
        }
        unsafe {
            blst_p2_mult(&mut self.0, &self.0, scalar.b.as_ptr(), nbits);
        }
    }

    /// Returns the unique affine representative of the point (`Z = 1`).
    pub fn to_affine(&self) -> Self {
        let mut affine = blst_p2_affine::default();
        let mut ret = blst_p2::default();
        unsafe {
            blst_p2_to_affine(&mut affine, &self.0);
            blst_p2_from_affine(&mut ret, &affine);
        }
        Self(ret)
    }

    /// Serializes the point in uncompressed form (`x.c1 || x.c0 || y.c1 || y.c0`).
    ///
    /// The point at infinity is encoded with the infinity flag set.
    pub fn serialize(&self) -> [u8; G2_SERIALIZED_LENGTH] {
        let mut bytes = [0u8; G2_SERIALIZED_LENGTH];
        unsafe {
            blst_p2_serialize(bytes.as_mut_ptr(), &self.0);
        }
        bytes
    }

    /// Deserializes an uncompressed point, verifying that it lies on the curve.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != G2_SERIALIZED_LENGTH {
            return Err(Error::InvalidPointLength(bytes.len()));
        }
        let mut ret = blst_p2::default();
        unsafe {
            let mut affine = blst_p2_affine::default();
            match blst_p2_deserialize(&mut affine, bytes.as_ptr()) {
                BLST_ERROR::BLST_SUCCESS => {}
                err => return Err(err.into()),
            }
            blst_p2_from_affine(&mut ret, &affine);
        }
        Ok(Self(ret))
    }
}

impl PartialEq for G2 {
    fn eq(&self, other: &Self) -> bool {
        unsafe { blst_p2_is_equal(&self.0, &other.0) }
    }
}

impl Eq for G2 {}
