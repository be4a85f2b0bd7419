#![no_main]

use libfuzzer_sys::fuzz_target;
use paillier::{Ciphertext, Error, KeyPair, Paillier};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

// Arbitrary bytes must decrypt to a value below n or fail cleanly.
fuzz_target!(|data: &[u8]| {
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());
    let ciphertext = Ciphertext::from_bytes(data);

    match Paillier::decrypt(keypair, &ciphertext) {
        Ok(m) => assert!(&m < keypair.public_key().n()),
        Err(Error::CiphertextOutOfRange | Error::InvalidCiphertext) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
