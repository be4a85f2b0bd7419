// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::error::Result;
use crate::keypair::{KeyPair, PublicKey};
use crate::{Decrypt, Encrypt, Homomorphic};

/// Function-style entry points taking the key explicitly.
///
/// Equivalent to the [`Encrypt`], [`Decrypt`] and [`Homomorphic`] trait
/// methods; all randomness comes from the operating system RNG.
pub struct Paillier;

impl Paillier {
    /// Generates a key pair whose modulus has exactly `bit_length` bits.
    pub fn generate_key_pair(bit_length: usize) -> Result<KeyPair> {
        KeyPair::generate_with_size(bit_length)
    }

    /// Encrypts `plaintext < n` under `pub_key`.
    pub fn encrypt(pub_key: &PublicKey, plaintext: &BigUint) -> Result<Ciphertext> {
        pub_key.encrypt(plaintext)
    }

    /// Decrypts a ciphertext produced under `keypair`'s public key.
    pub fn decrypt(keypair: &KeyPair, ciphertext: &Ciphertext) -> Result<BigUint> {
        keypair.decrypt(ciphertext)
    }

    /// Homomorphic addition: E(a) · E(b) mod n² = E(a + b mod n).
    pub fn add(pub_key: &PublicKey, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        pub_key.add(a, b)
    }

    /// Homomorphic scalar multiplication: E(m)^k mod n² = E(k · m mod n).
    pub fn multiply_by_scalar(
        pub_key: &PublicKey,
        ciphertext: &Ciphertext,
        scalar: &BigUint,
    ) -> Result<Ciphertext> {
        pub_key.multiply_by_scalar(ciphertext, scalar)
    }
}
