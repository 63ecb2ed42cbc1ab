#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use g2curve_cryptography::{
    bls12381,
    bls12381::primitives::hash::{hash_to_scalar, scalar_from_okm, DIGEST_LENGTH},
    Coordinates, Curve,
};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

#[derive(Debug)]
enum FuzzOperation {
    ScalarBaseMult { k: Vec<u8> },
    ScalarMult { base: Vec<u8>, k: Vec<u8> },
    Add { a: Vec<u8>, b: Vec<u8> },
    Double { a: Vec<u8> },
    Identity { a: Vec<u8> },
    HashToScalar { message: Vec<u8> },
    ScalarFromOkm { okm: [u8; DIGEST_LENGTH] },
}

impl<'a> Arbitrary<'a> for FuzzOperation {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self, arbitrary::Error> {
        let choice = u.int_in_range(0..=6)?;
        match choice {
            0 => Ok(FuzzOperation::ScalarBaseMult { k: u.arbitrary()? }),
            1 => Ok(FuzzOperation::ScalarMult {
                base: u.arbitrary()?,
                k: u.arbitrary()?,
            }),
            2 => Ok(FuzzOperation::Add {
                a: u.arbitrary()?,
                b: u.arbitrary()?,
            }),
            3 => Ok(FuzzOperation::Double { a: u.arbitrary()? }),
            4 => Ok(FuzzOperation::Identity { a: u.arbitrary()? }),
            5 => Ok(FuzzOperation::HashToScalar {
                message: u.arbitrary()?,
            }),
            6 => Ok(FuzzOperation::ScalarFromOkm {
                okm: u.arbitrary()?,
            }),
            _ => Err(arbitrary::Error::IncorrectFormat),
        }
    }
}

fn point(k: &[u8]) -> Coordinates {
    let (x, y) = bls12381().scalar_base_mult(k);
    assert!(bls12381().is_on_curve(&x, &y));
    (x, y)
}

fn fuzz(op: FuzzOperation) {
    let curve = bls12381();
    match op {
        FuzzOperation::ScalarBaseMult { k } => {
            let (x, y) = point(&k);
            let params = curve.params();
            assert_eq!(curve.scalar_mult(&params.gx, &params.gy, &k).unwrap(), (x, y));
        }
        FuzzOperation::ScalarMult { base, k } => {
            let (x, y) = point(&base);
            let (rx, ry) = curve.scalar_mult(&x, &y, &k).unwrap();
            assert!(curve.is_on_curve(&rx, &ry));
        }
        FuzzOperation::Add { a, b } => {
            let (x1, y1) = point(&a);
            let (x2, y2) = point(&b);
            let sum = curve.add(&x1, &y1, &x2, &y2).unwrap();
            assert_eq!(sum, curve.add(&x2, &y2, &x1, &y1).unwrap());
            assert!(curve.is_on_curve(&sum.0, &sum.1));
        }
        FuzzOperation::Double { a } => {
            let (x, y) = point(&a);
            assert_eq!(
                curve.double(&x, &y).unwrap(),
                curve.add(&x, &y, &x, &y).unwrap()
            );
        }
        FuzzOperation::Identity { a } => {
            let (x, y) = point(&a);
            let zero = BigUint::default();
            assert_eq!(curve.add(&x, &y, &zero, &zero).unwrap(), (x, y));
        }
        FuzzOperation::HashToScalar { message } => {
            assert_eq!(hash_to_scalar(&message), hash_to_scalar(&message));
        }
        FuzzOperation::ScalarFromOkm { okm } => {
            let expected = BigUint::from_bytes_be(&okm) % &curve.params().n;
            let derived = BigUint::from_bytes_be(&scalar_from_okm(&okm).serialize());
            assert_eq!(derived, expected);
        }
    }
}

fuzz_target!(|ops: Vec<FuzzOperation>| {
    for op in ops {
        fuzz(op);
    }
});
