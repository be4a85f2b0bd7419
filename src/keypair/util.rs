// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use num_bigint_dig::BigUint;
use zeroize::Zeroizing;

use super::{KeyPair, PrivateKey, PublicKey};
use crate::arithmetic::Arithmetic;
use crate::error::Result;
use crate::util::l_function;

/// Why a generation attempt was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RetryReason {
    /// The provider returned the same prime twice.
    IdenticalPrimes,
    /// `p * q` landed one bit off the requested size.
    ModulusSize { actual: usize },
    /// `L(g^λ mod n²)` has no inverse modulo `n`.
    NoInverse,
}

impl fmt::Display for RetryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdenticalPrimes => f.write_str("identical primes"),
            Self::ModulusSize { actual } => write!(f, "modulus has {actual} bits"),
            Self::NoInverse => f.write_str("decryption coefficient does not exist"),
        }
    }
}

/// Outcome of a single key generation attempt.
pub(super) enum Attempt {
    Ready(KeyPair),
    Retry(RetryReason),
}

/// Runs one attempt of the generation procedure with fresh primes.
///
/// Transient failures come back as [`Attempt::Retry`]; only provider errors
/// are reported through `Err`.
pub(super) fn attempt<A: Arithmetic>(bit_length: usize, arith: &mut A) -> Result<Attempt> {
    let half = bit_length / 2;
    let p = Zeroizing::new(arith.probable_prime(half + 1)?);
    let q = Zeroizing::new(arith.probable_prime(half)?);

    if *p == *q {
        return Ok(Attempt::Retry(RetryReason::IdenticalPrimes));
    }

    let n = &*p * &*q;
    if n.bits() != bit_length {
        return Ok(Attempt::Retry(RetryReason::ModulusSize { actual: n.bits() }));
    }

    let n_squared = &n * &n;
    let g = generator_candidate(&n, &n_squared, arith)?;

    Ok(match assemble(&p, &q, n, n_squared, g, bit_length, arith) {
        Some(keypair) => Attempt::Ready(keypair),
        None => Attempt::Retry(RetryReason::NoInverse),
    })
}

/// g = (αn + 1) · βⁿ mod n², with α, β uniform in [0, n).
///
/// `αn + 1` has order dividing `n` and `βⁿ` is an n-th residue, so `g` has
/// the shape decryption needs without checking any gcd condition here; a bad
/// draw only shows up as a missing inverse for μ.
pub(super) fn generator_candidate<A: Arithmetic>(
    n: &BigUint,
    n_squared: &BigUint,
    arith: &mut A,
) -> Result<BigUint> {
    let alpha = arith.random_below(n)?;
    let beta = arith.random_below(n)?;

    let g = ((alpha * n + 1u32) * arith.mod_pow(&beta, n, n_squared)) % n_squared;
    Ok(g)
}

/// Builds the key pair from its secret primes, or `None` when μ does not exist.
pub(super) fn assemble<A: Arithmetic>(
    p: &BigUint,
    q: &BigUint,
    n: BigUint,
    n_squared: BigUint,
    g: BigUint,
    bit_length: usize,
    arith: &A,
) -> Option<KeyPair> {
    let lambda = carmichael_lambda(p, q, arith);
    let mu = decryption_coefficient(&g, &lambda, &n, &n_squared, arith)?;

    let public = PublicKey { n, n_squared, g, bit_length };
    let secret = PrivateKey { public_key: public.clone(), lambda, mu };

    Some(KeyPair { public, secret })
}

/// λ = lcm(p - 1, q - 1)
pub(super) fn carmichael_lambda<A: Arithmetic>(p: &BigUint, q: &BigUint, arith: &A) -> BigUint {
    let p_minus_1 = Zeroizing::new(p - 1u32);
    let q_minus_1 = Zeroizing::new(q - 1u32);

    arith.lcm(&p_minus_1, &q_minus_1)
}

/// μ = L(g^λ mod n²)⁻¹ mod n
pub(super) fn decryption_coefficient<A: Arithmetic>(
    g: &BigUint,
    lambda: &BigUint,
    n: &BigUint,
    n_squared: &BigUint,
    arith: &A,
) -> Option<BigUint> {
    let u = arith.mod_pow(g, lambda, n_squared);
    let l = l_function(&u, n)?;

    arith.mod_inverse(&l, n)
}
