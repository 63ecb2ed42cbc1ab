//! Scalar multiplication, point addition, and key agreement over BLS12-381 G2.
//!
//! All field and group arithmetic is delegated to [blst](https://github.com/supranational/blst).
//! This module only marshals points between `(x, y)` big-integer coordinates and `blst` points
//! ([primitives::codec]) and derives scalars from messages ([primitives::hash]).
//!
//! # Features
//!
//! This crate has the following features:
//!
//! - `portable`: Enables `portable` feature on `blst` (<https://github.com/supranational/blst?tab=readme-ov-file#platform-and-language-compatibility>).
//!
//! # Example
//!
//! ```rust
//! use g2curve_cryptography::{bls12381, bls12381::keys::PrivateKey, Curve};
//!
//! // Derive a key pair for each party
//! let alice = PrivateKey::from_message(b"alice").unwrap();
//! let bob = PrivateKey::from_message(b"bob").unwrap();
//!
//! // Public keys are points on the curve
//! let public = bob.public_key();
//! assert!(bls12381().is_on_curve(public.x(), public.y()));
//!
//! // Both parties agree on the same shared point
//! let shared = alice.shared_point(bob.public_key()).unwrap();
//! assert_eq!(shared, bob.shared_point(alice.public_key()).unwrap());
//! ```
//!
//! # Benchmarks
//!
//! ```bash
//! cargo bench --bench bls12381
//! ```

mod curve;
pub mod keys;
pub mod primitives;
pub use curve::{bls12381, Bls12381, BIT_SIZE, CURVE_NAME};
