//! BLS12-381 G2 as a [Curve].

use super::primitives::{
    codec::{decode, encode},
    group::{Scalar, G2},
    Error,
};
use crate::{Coordinates, Curve, CurveParams};
use num_bigint::BigUint;
use std::sync::OnceLock;
use tracing::debug;

/// Name reported by [CurveParams::name].
pub const CURVE_NAME: &str = "BLS12-381";

/// Size of the base field in bits.
pub const BIT_SIZE: usize = 381;

/// Constant `b` of the base curve `y^2 = x^3 + 4` (G2 uses the twist `4(u + 1)`).
const B: u32 = 4;

/// Base field modulus, big-endian.
const P: [u8; 48] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// Group order, big-endian.
const N: [u8; 32] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// The BLS12-381 G2 group.
///
/// Holds the curve parameters and the generator. It is immutable once constructed and may be
/// shared freely between threads (see [bls12381] for a process-wide instance).
#[derive(Clone, Debug)]
pub struct Bls12381 {
    params: CurveParams,
    generator: G2,
}

impl Bls12381 {
    pub fn new() -> Self {
        let generator = G2::one();
        let (gx, gy) = decode(&generator);
        Self {
            params: CurveParams {
                p: BigUint::from_bytes_be(&P),
                b: BigUint::from(B),
                n: BigUint::from_bytes_be(&N),
                gx,
                gy,
                bit_size: BIT_SIZE,
                name: CURVE_NAME,
            },
            generator,
        }
    }

    /// Returns the generator of the group.
    pub fn generator(&self) -> &G2 {
        &self.generator
    }

    fn point(x: &BigUint, y: &BigUint) -> Result<G2, Error> {
        encode(x, y).inspect_err(|err| debug!(?err, "rejected point"))
    }
}

impl Default for Bls12381 {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process-wide [Bls12381] instance.
pub fn bls12381() -> &'static Bls12381 {
    static CURVE: OnceLock<Bls12381> = OnceLock::new();
    CURVE.get_or_init(Bls12381::new)
}

impl Curve for Bls12381 {
    type Error = Error;

    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        match Self::point(x, y) {
            Ok(point) => point.is_zero() || point.is_on_curve(),
            Err(_) => false,
        }
    }

    fn add(
        &self,
        x1: &BigUint,
        y1: &BigUint,
        x2: &BigUint,
        y2: &BigUint,
    ) -> Result<Coordinates, Error> {
        let mut point = Self::point(x1, y1)?;
        point.add(&Self::point(x2, y2)?);
        Ok(decode(&point))
    }

    fn double(&self, x: &BigUint, y: &BigUint) -> Result<Coordinates, Error> {
        let mut point = Self::point(x, y)?;
        point.double();
        Ok(decode(&point))
    }

    fn scalar_mult(&self, x: &BigUint, y: &BigUint, k: &[u8]) -> Result<Coordinates, Error> {
        let mut point = Self::point(x, y)?;
        point.mul(&Scalar::from_be_bytes(k));
        Ok(decode(&point))
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Coordinates {
        let mut point = self.generator;
        point.mul(&Scalar::from_be_bytes(k));
        decode(&point.to_affine())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12381::primitives::group::G2_COORDINATE_LENGTH;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn coordinates(hex: &str) -> Coordinates {
        let (x, y) = hex.split_at(2 * G2_COORDINATE_LENGTH);
        (
            BigUint::parse_bytes(x.as_bytes(), 16).unwrap(),
            BigUint::parse_bytes(y.as_bytes(), 16).unwrap(),
        )
    }

    fn random_point(curve: &Bls12381, rng: &mut StdRng) -> Coordinates {
        let k: [u8; 32] = rng.gen();
        curve.scalar_base_mult(&k)
    }

    fn identity() -> Coordinates {
        (BigUint::default(), BigUint::default())
    }

    /// Private key used by the end-to-end encryption test vectors.
    const PRIVATE_KEY: &str = "63e5cd2c608861a712f003254d6bf5f5f5921651e323162bea78d0f5e7d77225";

    /// `2 * G` (`x.c1 || x.c0 || y.c1 || y.c0`).
    const TWO_G: &str = "0a4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c335771638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a0530f6d4552fa65dd2638b361543f887136a43253d9c66c411697003f7a13c308f5422e1aa0a59c8967acdefd8b6e36ccf30468fb440d82b0630aeb8dca2b5256789a66da69bf91009cbfe6bd221e47aa8ae88dece9764bf3bd999d95d71e4c9899";

    /// `3 * G`.
    const THREE_G: &str = "09380275bbc8e5dcea7dc4dd7e0550ff2ac480905396eda55062650f8d251c96eb480673937cc6d9d6a44aaa56ca66dc122915c824a0857e2ee414a3dccb23ae691ae54329781315a0c75df1c04d6d7a50a030fc866f09d516020ef82324afae08f239ba329b3967fe48d718a36cfe5f62a7e42e0bf1c1ed714150a166bfbd6bcf6b3b58b975b9edea56d53f23a0e8490b21da7955969e61010c7a1abc1a6f0136961d1e3b20b1a7326ac738fef5c721479dfd948b52fdf2455e44813ecfd892";

    /// `PRIVATE_KEY * G`.
    const PUBLIC_KEY: &str = "0d97c2a4839226ade350184b7fa828397dcf8d41ab7aefde6404a9baef893411a1727b07db2e796a5a0f86f53b0a44b60f8744e4c7df351c50c1fdf1e02c75d51f0d7fe5b9d9bc2dedcb6f92fcab4ba724615a56d95e367eb7592b95e6b329fa150a38dfeb547d5eb0837dad37865fc10613f3e6dc8937189fb51cf3f7d917274e749f26e6cf27f9490d79d2f3655d870cf7fc85a430956f843ba494e4203e38b2a48f02742fffee9513264691e29df497f86cc9869a15996f0b96db03a7499b";

    #[test]
    fn test_params() {
        let curve = Bls12381::new();
        let params = curve.params();
        assert_eq!(params.name, "BLS12-381");
        assert_eq!(params.bit_size, 381);
        assert_eq!(params.p.bits(), 381);
        assert_eq!(params.b, BigUint::from(4u32));
        assert_eq!(params.n.to_bytes_be(), N.to_vec());
        assert!(curve.is_on_curve(&params.gx, &params.gy));
        assert_eq!(curve.scalar_base_mult(&[1]), (params.gx.clone(), params.gy.clone()));
    }

    #[test]
    fn test_shared_instance() {
        let first = bls12381();
        let second = bls12381();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.params(), Bls12381::new().params());
    }

    #[test]
    fn test_shared_instance_threads() {
        let mut rng = StdRng::seed_from_u64(7);
        let scalars: Vec<[u8; 32]> = (0..8).map(|_| rng.gen()).collect();
        let expected: Vec<Coordinates> = scalars
            .iter()
            .map(|k| bls12381().scalar_base_mult(k))
            .collect();

        let results: Vec<Vec<Coordinates>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        scalars
                            .iter()
                            .map(|k| bls12381().scalar_base_mult(k))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for result in results {
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_scalar_base_mult_vectors() {
        let curve = bls12381();
        assert_eq!(curve.scalar_base_mult(&[2]), coordinates(TWO_G));
        assert_eq!(curve.scalar_base_mult(&[3]), coordinates(THREE_G));
    }

    #[test]
    fn test_scalar_base_mult_private_key() {
        let curve = bls12381();
        let k = BigUint::parse_bytes(PRIVATE_KEY.as_bytes(), 16).unwrap().to_bytes_be();
        assert_eq!(k.len(), 32);

        let (x, y) = curve.scalar_base_mult(&k);
        assert_eq!(x.to_bytes_be().len(), G2_COORDINATE_LENGTH);
        assert!(curve.is_on_curve(&x, &y));
        assert_eq!((x, y), coordinates(PUBLIC_KEY));
    }

    #[test]
    fn test_scalar_base_mult_reduces() {
        let curve = bls12381();
        let params = curve.params();

        // n * G = 0 * G = O
        assert_eq!(curve.scalar_base_mult(&params.n.to_bytes_be()), identity());
        assert_eq!(curve.scalar_base_mult(&[]), identity());
        assert_eq!(curve.scalar_base_mult(&[0u8; 32]), identity());

        // (n + 2) * G = 2 * G, including 33-byte scalars
        let wide = (&params.n + 2u32).to_bytes_be();
        assert_eq!(curve.scalar_base_mult(&wide), coordinates(TWO_G));
        let mut padded = vec![0u8];
        padded.extend_from_slice(&[0u8; 31]);
        padded.push(2);
        assert_eq!(padded.len(), 33);
        assert_eq!(curve.scalar_base_mult(&padded), coordinates(TWO_G));
    }

    #[test]
    fn test_scalar_base_mult_on_curve() {
        let curve = bls12381();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..8 {
            let (x, y) = random_point(curve, &mut rng);
            assert!(curve.is_on_curve(&x, &y));
        }
    }

    #[test]
    fn test_double() {
        let curve = bls12381();
        let params = curve.params();
        assert_eq!(
            curve.double(&params.gx, &params.gy).unwrap(),
            coordinates(TWO_G)
        );

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..4 {
            let (x, y) = random_point(curve, &mut rng);
            assert_eq!(curve.double(&x, &y).unwrap(), curve.add(&x, &y, &x, &y).unwrap());
        }
    }

    #[test]
    fn test_double_identity() {
        let curve = bls12381();
        let (x, y) = identity();
        assert_eq!(curve.double(&x, &y).unwrap(), identity());
    }

    #[test]
    fn test_add() {
        let curve = bls12381();
        let params = curve.params();
        let (x2, y2) = coordinates(TWO_G);
        assert_eq!(
            curve.add(&x2, &y2, &params.gx, &params.gy).unwrap(),
            coordinates(THREE_G)
        );
    }

    #[test]
    fn test_add_identity() {
        let curve = bls12381();
        let mut rng = StdRng::seed_from_u64(2);
        let (x, y) = random_point(curve, &mut rng);
        let (ox, oy) = identity();
        assert_eq!(curve.add(&x, &y, &ox, &oy).unwrap(), (x.clone(), y.clone()));
        assert_eq!(curve.add(&ox, &oy, &x, &y).unwrap(), (x, y));
    }

    #[test]
    fn test_add_commutative() {
        let curve = bls12381();
        let mut rng = StdRng::seed_from_u64(3);
        let (x1, y1) = random_point(curve, &mut rng);
        let (x2, y2) = random_point(curve, &mut rng);
        assert_eq!(
            curve.add(&x1, &y1, &x2, &y2).unwrap(),
            curve.add(&x2, &y2, &x1, &y1).unwrap()
        );
    }

    #[test]
    fn test_add_inverse() {
        let curve = bls12381();
        let mut rng = StdRng::seed_from_u64(4);
        let k: [u8; 32] = rng.gen();
        let (x, y) = curve.scalar_base_mult(&k);

        // (n - k) * G = -(k * G)
        let params = curve.params();
        let negated = &params.n - (BigUint::from_bytes_be(&k) % &params.n);
        let (nx, ny) = curve.scalar_base_mult(&negated.to_bytes_be());
        assert_eq!(nx, x);
        assert_ne!(ny, y);
        assert_eq!(curve.add(&x, &y, &nx, &ny).unwrap(), identity());
    }

    #[test]
    fn test_scalar_mult_matches_base_mult() {
        let curve = bls12381();
        let params = curve.params();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..4 {
            let k: [u8; 32] = rng.gen();
            assert_eq!(
                curve.scalar_mult(&params.gx, &params.gy, &k).unwrap(),
                curve.scalar_base_mult(&k)
            );
        }
    }

    #[test]
    fn test_scalar_mult_agreement() {
        let curve = bls12381();
        let mut rng = StdRng::seed_from_u64(6);
        let a: [u8; 32] = rng.gen();
        let b: [u8; 32] = rng.gen();
        let (ax, ay) = curve.scalar_base_mult(&a);
        let (bx, by) = curve.scalar_base_mult(&b);
        assert_eq!(
            curve.scalar_mult(&bx, &by, &a).unwrap(),
            curve.scalar_mult(&ax, &ay, &b).unwrap()
        );
    }

    #[test]
    fn test_is_on_curve_rejects() {
        let curve = bls12381();
        let params = curve.params();

        // Off-curve point
        let one = BigUint::from(1u32);
        assert!(!curve.is_on_curve(&one, &one));

        // Coordinate wider than 96 bytes
        let wide = BigUint::from_bytes_be(&[0x01; G2_COORDINATE_LENGTH + 1]);
        assert!(!curve.is_on_curve(&wide, &params.gy));

        // Coordinates of the wrong group (G1 generator)
        let g1x = BigUint::parse_bytes(b"17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb", 16).unwrap();
        let g1y = BigUint::parse_bytes(b"08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1", 16).unwrap();
        assert!(!curve.is_on_curve(&g1x, &g1y));

        // Base field modulus is not a valid field element
        assert!(!curve.is_on_curve(&params.p, &params.gy));
    }

    #[test]
    fn test_is_on_curve_identity() {
        let curve = bls12381();
        let (x, y) = identity();
        assert!(curve.is_on_curve(&x, &y));
    }

    #[test]
    fn test_operations_reject_invalid_points() {
        let curve = bls12381();
        let params = curve.params();
        let one = BigUint::from(1u32);

        assert_eq!(curve.double(&one, &one), Err(Error::NotOnCurve));
        assert_eq!(
            curve.add(&params.gx, &params.gy, &one, &one),
            Err(Error::NotOnCurve)
        );
        assert_eq!(
            curve.add(&one, &one, &params.gx, &params.gy),
            Err(Error::NotOnCurve)
        );
        assert_eq!(curve.scalar_mult(&one, &one, &[1]), Err(Error::NotOnCurve));
    }
}
