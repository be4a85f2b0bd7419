#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier::{KeyPair, Paillier};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());
    let public = keypair.public_key();
    let n = public.n();

    let (a_bytes, b_bytes) = data.split_at(data.len() / 2);
    let a = BigUint::from_bytes_be(a_bytes) % n;
    let b = BigUint::from_bytes_be(b_bytes) % n;

    let ca = Paillier::encrypt(public, &a).unwrap();
    let cb = Paillier::encrypt(public, &b).unwrap();

    let sum = Paillier::add(public, &ca, &cb).unwrap();
    assert_eq!(Paillier::decrypt(keypair, &sum).unwrap(), (&a + &b) % n);

    let product = Paillier::multiply_by_scalar(public, &ca, &b).unwrap();
    assert_eq!(Paillier::decrypt(keypair, &product).unwrap(), (&a * &b) % n);
});
