// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Number-theoretic primitives consumed by key generation and encryption.
//!
//! The scheme only ever talks to the [`Arithmetic`] trait. [`StdArithmetic`]
//! is the default provider, backed by `num-bigint-dig` and any cryptographically
//! secure `rand` generator (the operating system RNG unless told otherwise).

mod prime;

use num_bigint_dig::{BigUint, ModInverse, RandBigInt, ToBigInt};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{Error, Result};

/// Arbitrary-precision arithmetic and secure randomness.
///
/// Only the randomized operations must be supplied; the deterministic ones
/// default to the `num-bigint-dig` implementations.
pub trait Arithmetic {
    /// A probable prime with exactly `bit_length` bits.
    fn probable_prime(&mut self, bit_length: usize) -> Result<BigUint>;

    /// A uniformly distributed integer in `[0, bound)`.
    fn random_below(&mut self, bound: &BigUint) -> Result<BigUint>;

    /// `base^exponent mod modulus`.
    fn mod_pow(&self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        base.modpow(exponent, modulus)
    }

    /// `value⁻¹ mod modulus`, or `None` when `gcd(value, modulus) != 1`.
    fn mod_inverse(&self, value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
        if modulus.is_zero() || value.is_zero() {
            return None;
        }

        let inverse = value.clone().mod_inverse(modulus)?;
        let modulus = modulus.to_bigint()?;

        // normalize into [0, modulus)
        let inverse = if inverse.is_negative() { inverse + &modulus } else { inverse };
        (inverse % modulus).to_biguint()
    }

    /// Least common multiple of `a` and `b`.
    fn lcm(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a.lcm(b)
    }
}

impl<A: Arithmetic + ?Sized> Arithmetic for &mut A {
    fn probable_prime(&mut self, bit_length: usize) -> Result<BigUint> {
        (**self).probable_prime(bit_length)
    }

    fn random_below(&mut self, bound: &BigUint) -> Result<BigUint> {
        (**self).random_below(bound)
    }

    fn mod_pow(&self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        (**self).mod_pow(base, exponent, modulus)
    }

    fn mod_inverse(&self, value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
        (**self).mod_inverse(value, modulus)
    }

    fn lcm(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (**self).lcm(a, b)
    }
}

/// Default provider over a cryptographically secure RNG.
///
/// ```
/// use paillier::StdArithmetic;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let system: StdArithmetic = StdArithmetic::default(); // OsRng
/// let seeded = StdArithmetic::new(StdRng::seed_from_u64(42)); // reproducible, tests only
/// # let _ = (system, seeded);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StdArithmetic<R = OsRng> {
    rng: R,
}

impl<R: RngCore + CryptoRng> StdArithmetic<R> {
    /// Create a provider drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> Arithmetic for StdArithmetic<R> {
    fn probable_prime(&mut self, bit_length: usize) -> Result<BigUint> {
        prime::probable_prime(bit_length, &mut self.rng)
    }

    fn random_below(&mut self, bound: &BigUint) -> Result<BigUint> {
        if bound.is_zero() {
            return Err(Error::Provider("random bound must be positive".into()));
        }

        Ok(self.rng.gen_biguint_below(bound))
    }
}
