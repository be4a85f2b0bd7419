#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier::{KeyPair, Paillier};
use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());
    let public = keypair.public_key();
    let n = public.n();

    // Ensure plaintext < n
    let plaintext = BigUint::from_bytes_be(data) % n;

    let ciphertext = Paillier::encrypt(public, &plaintext).unwrap();
    let decrypted = Paillier::decrypt(keypair, &ciphertext).unwrap();

    assert_eq!(plaintext, decrypted);
});
