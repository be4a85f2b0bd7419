// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Homomorphic;
use crate::arithmetic::{Arithmetic, StdArithmetic};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::{KeyPair, PublicKey};

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

impl PublicKey {
    /// Scalar multiplication with randomness drawn from `arith`.
    ///
    /// Scalars 0 and 1 never return `1` or the input ciphertext: 0 yields a
    /// fresh encryption of zero and 1 re-randomizes the input by adding one.
    /// Other scalars return `c^k mod n²` as is.
    pub fn multiply_by_scalar_with<A: Arithmetic>(
        &self,
        ciphertext: &Ciphertext,
        scalar: &BigUint,
        arith: &mut A,
    ) -> Result<Ciphertext> {
        self.check_ciphertext(ciphertext.value())?;
        if scalar >= &self.n {
            return Err(Error::ScalarOutOfRange);
        }

        if scalar.is_zero() {
            return self.encrypt_with(&BigUint::zero(), arith);
        }

        if scalar.is_one() {
            let zero = self.encrypt_with(&BigUint::zero(), arith)?;
            return self.add(ciphertext, &zero);
        }

        Ok(Ciphertext::new(arith.mod_pow(ciphertext.value(), scalar, &self.n_squared)))
    }
}

impl Homomorphic for PublicKey {
    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        self.check_ciphertext(a.value())?;
        self.check_ciphertext(b.value())?;

        Ok(Ciphertext::new((a.value() * b.value()) % &self.n_squared))
    }

    fn multiply_by_scalar(&self, ciphertext: &Ciphertext, scalar: &BigUint) -> Result<Ciphertext> {
        let mut arith: StdArithmetic = StdArithmetic::default();
        self.multiply_by_scalar_with(ciphertext, scalar, &mut arith)
    }
}

impl Homomorphic for KeyPair {
    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        self.public.add(a, b)
    }

    fn multiply_by_scalar(&self, ciphertext: &Ciphertext, scalar: &BigUint) -> Result<Ciphertext> {
        self.public.multiply_by_scalar(ciphertext, scalar)
    }
}
