// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod decrypt;
mod encrypt;
mod homomorphic;

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::error::Result;

/// Probabilistic encryption of a single plaintext integer.
pub trait Encrypt {
    /// Encrypt `plaintext`, which must be strictly smaller than the public
    /// modulus `n`.
    ///
    /// Every call draws a fresh nonce, so encrypting the same plaintext twice
    /// yields different ciphertexts.
    fn encrypt(&self, plaintext: &BigUint) -> Result<Ciphertext>;
}

/// Recovers the plaintext integer from a ciphertext.
pub trait Decrypt {
    /// Recover the plaintext `m` from a ciphertext `c`.
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint>;
}

/// Operations on ciphertexts that act on the underlying plaintexts.
pub trait Homomorphic {
    /// Ciphertext of `(m_a + m_b) mod n`.
    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext>;

    /// Ciphertext of `(k · m) mod n` for a plaintext scalar `k < n`.
    fn multiply_by_scalar(&self, ciphertext: &Ciphertext, scalar: &BigUint) -> Result<Ciphertext>;
}
