//! Deterministically derive scalars from arbitrary messages.
//!
//! A message is hashed with keyless BLAKE2b configured for a 384-bit digest. The digest is
//! interpreted as a big-endian integer and reduced into the scalar field by splitting it into two
//! 192-bit halves (`high`, `low`) and computing `high * 2^192 + low`. Reducing 384 bits (rather
//! than truncating to 256) keeps the bias of the result negligible.

use super::group::{Scalar, SCALAR_LENGTH};
use blake2::{digest::consts::U48, Blake2b, Digest};
use tracing::trace;

/// Length of a BLAKE2b-384 digest.
pub const DIGEST_LENGTH: usize = 48;

const HALF_LENGTH: usize = DIGEST_LENGTH / 2;

/// `2^192 mod q` as little-endian limbs (`2^192 < q`, so no reduction occurs).
const TWO_POW_192: [u64; 4] = [0, 0, 0, 1];

/// Keyless BLAKE2b with a 48-byte output.
#[derive(Clone)]
pub struct Blake2b384 {
    hasher: Blake2b<U48>,
}

impl Blake2b384 {
    /// Creates a hasher with no recorded data.
    pub fn new() -> Self {
        Self {
            hasher: Blake2b::new(),
        }
    }

    /// Append message to previously recorded data.
    pub fn update(&mut self, message: &[u8]) {
        Digest::update(&mut self.hasher, message);
    }

    /// Hash all recorded data and reset the hasher to the initial state.
    pub fn finalize(&mut self) -> [u8; DIGEST_LENGTH] {
        let mut digest = [0u8; DIGEST_LENGTH];
        digest.copy_from_slice(&self.hasher.finalize_reset());
        digest
    }

    /// Reset the hasher without generating a hash.
    pub fn reset(&mut self) {
        Digest::reset(&mut self.hasher);
    }
}

impl Default for Blake2b384 {
    fn default() -> Self {
        Self::new()
    }
}

/// Hashes `message` with [Blake2b384].
pub fn digest(message: &[u8]) -> [u8; DIGEST_LENGTH] {
    let mut hasher = Blake2b384::new();
    hasher.update(message);
    hasher.finalize()
}

/// Reads 24 bytes as a big-endian integer (left-padded to a full scalar).
fn scalar_from_half(half: &[u8]) -> Scalar {
    let mut padded = [0u8; SCALAR_LENGTH];
    padded[SCALAR_LENGTH - HALF_LENGTH..].copy_from_slice(half);
    Scalar::from_be_bytes(&padded)
}

/// Reduces a 48-byte digest (output keying material) into the scalar field.
pub fn scalar_from_okm(okm: &[u8; DIGEST_LENGTH]) -> Scalar {
    let (high, low) = okm.split_at(HALF_LENGTH);
    let mut scalar = scalar_from_half(high);
    scalar.mul(&Scalar::from_limbs(TWO_POW_192));
    scalar.add(&scalar_from_half(low));
    scalar
}

/// Derives a scalar from `message`.
pub fn hash_to_scalar(message: &[u8]) -> Scalar {
    trace!(len = message.len(), "deriving scalar");
    scalar_from_okm(&digest(message))
}
