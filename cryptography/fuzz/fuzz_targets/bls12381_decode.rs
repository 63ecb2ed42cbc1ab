#![no_main]

use arbitrary::Arbitrary;
use commonware_codec::DecodeExt;
use g2curve_cryptography::{
    bls12381,
    bls12381::keys::{PrivateKey, PublicKey},
    Curve,
};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    x: Vec<u8>,
    y: Vec<u8>,
    public_key: Vec<u8>,
    private_key: Vec<u8>,
}

fn fuzz(input: FuzzInput) {
    let curve = bls12381();
    let x = BigUint::from_bytes_be(&input.x);
    let y = BigUint::from_bytes_be(&input.y);

    // Checking arbitrary coordinates must never panic and must agree with the validating API
    let on_curve = curve.is_on_curve(&x, &y);
    if let Ok(public) = PublicKey::new(x.clone(), y.clone()) {
        assert!(on_curve);
        assert_eq!(public.x(), &x);
        assert_eq!(public.y(), &y);
        assert_eq!(PublicKey::try_from(public.to_vec()).unwrap(), public);
    }
    if !on_curve {
        assert!(curve.double(&x, &y).is_err());
        assert!(curve.scalar_mult(&x, &y, &input.private_key).is_err());
    }

    let decoded = PublicKey::decode(input.public_key.as_slice());
    match PublicKey::try_from(input.public_key.as_slice()) {
        Ok(public) => {
            assert!(curve.is_on_curve(public.x(), public.y()));
            assert_eq!(public.as_ref(), input.public_key.as_slice());
            assert_eq!(decoded.unwrap(), public);
        }
        Err(_) => assert!(decoded.is_err()),
    }

    let decoded = PrivateKey::decode(input.private_key.as_slice());
    match PrivateKey::try_from(input.private_key.as_slice()) {
        Ok(private) => {
            assert_eq!(private.to_bytes().as_slice(), input.private_key.as_slice());
            assert_eq!(decoded.unwrap(), private);
        }
        Err(_) => assert!(decoded.is_err()),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
