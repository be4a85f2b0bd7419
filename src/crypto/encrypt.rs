// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Encrypt;
use crate::arithmetic::{Arithmetic, StdArithmetic};
use crate::ciphertext::Ciphertext;
use crate::error::Result;
use crate::keypair::{KeyPair, PublicKey};

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::Zeroizing;

impl PublicKey {
    /// Encrypt with randomness drawn from `arith`.
    ///
    /// c = g^m · rⁿ mod n²
    pub fn encrypt_with<A: Arithmetic>(
        &self,
        plaintext: &BigUint,
        arith: &mut A,
    ) -> Result<Ciphertext> {
        self.check_plaintext(plaintext)?;

        let r = self.nonce(arith)?;

        let gm = arith.mod_pow(&self.g, plaintext, &self.n_squared);
        let rn = arith.mod_pow(&r, &self.n, &self.n_squared);
        let c = (gm * rn) % &self.n_squared;

        Ok(Ciphertext::new(c))
    }

    /// Sample r uniformly from [1, n) with gcd(r, n) = 1.
    fn nonce<A: Arithmetic>(&self, arith: &mut A) -> Result<Zeroizing<BigUint>> {
        loop {
            let r = Zeroizing::new(arith.random_below(&self.n)?);
            if !r.is_zero() && r.gcd(&self.n).is_one() {
                return Ok(r);
            }
        }
    }
}

impl Encrypt for PublicKey {
    fn encrypt(&self, plaintext: &BigUint) -> Result<Ciphertext> {
        let mut arith: StdArithmetic = StdArithmetic::default();
        self.encrypt_with(plaintext, &mut arith)
    }
}

impl Encrypt for KeyPair {
    fn encrypt(&self, plaintext: &BigUint) -> Result<Ciphertext> {
        self.public.encrypt(plaintext)
    }
}
