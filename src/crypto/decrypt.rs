// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Decrypt;
use crate::arithmetic::{Arithmetic, StdArithmetic};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::{KeyPair, PrivateKey};
use crate::util::l_function;

use num_bigint_dig::BigUint;
use num_traits::One;
use zeroize::Zeroizing;

impl PrivateKey {
    /// Decrypt using the modular exponentiation of `arith`.
    ///
    /// m = L(c^λ mod n²) · μ mod n
    pub fn decrypt_with<A: Arithmetic>(&self, ciphertext: &Ciphertext, arith: &A) -> Result<BigUint> {
        let public = &self.public_key;
        let c = ciphertext.value();
        public.check_ciphertext(c)?;

        let u = Zeroizing::new(arith.mod_pow(c, &self.lambda, &public.n_squared));

        // Anything produced by encryption under this key satisfies u ≡ 1 (mod n).
        if !(&*u % &public.n).is_one() {
            return Err(Error::InvalidCiphertext);
        }

        let l = Zeroizing::new(l_function(&u, &public.n).ok_or(Error::InvalidCiphertext)?);
        Ok((&*l * &self.mu) % &public.n)
    }
}

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        let arith: StdArithmetic = StdArithmetic::default();
        self.decrypt_with(ciphertext, &arith)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        self.secret.decrypt(ciphertext)
    }
}
