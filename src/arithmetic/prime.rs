// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Probable prime search for the default arithmetic provider.
//!
//! Candidates are drawn uniformly with the top and bottom bits forced, cheaply
//! filtered against small primes and then handed to Miller-Rabin. Only the top
//! bit is forced: forcing the top two bits would make every `p * q` product
//! one bit longer than `|p| + |q| - 1`, and key generation relies on both
//! product sizes being reachable.

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::RngCore;

use crate::{Error, Result};

/// Odd primes up to 251 used to reject candidates before Miller-Rabin.
const SIEVE_PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Candidates at or below this size are left entirely to Miller-Rabin, since
/// they may themselves be one of the sieve primes.
const SIEVE_MIN_BITS: usize = 9;

/// Number of `+2` steps taken from a random starting point before redrawing.
const MAX_INCREMENT: u32 = 4_096;

/// Smallest bit length for which a prime with the top bit set exists (3).
pub const MIN_PRIME_BITS: usize = 2;

/// Returns a probable prime with exactly `bit_length` bits.
///
/// # Errors
///
/// Returns [`Error::Provider`] if `bit_length < MIN_PRIME_BITS`.
pub fn probable_prime<R: RngCore + ?Sized>(bit_length: usize, rng: &mut R) -> Result<BigUint> {
    if bit_length < MIN_PRIME_BITS {
        return Err(Error::Provider(format!(
            "cannot generate a {bit_length}-bit prime"
        )));
    }

    let rounds = miller_rabin_rounds(bit_length);

    loop {
        let mut candidate = generate_candidate(bit_length, rng);

        for _ in 0..MAX_INCREMENT {
            if candidate.bits() != bit_length {
                break;
            }

            let sieved = bit_length > SIEVE_MIN_BITS && has_small_factor(&candidate);
            if !sieved && probably_prime(&candidate, rounds) {
                return Ok(candidate);
            }

            candidate += 2u32;
        }
    }
}

/// Random odd integer with exactly `bits` bits.
#[inline]
fn generate_candidate<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> BigUint {
    let mut candidate = rng.gen_biguint(bits);

    candidate |= BigUint::one() << (bits - 1);
    candidate |= BigUint::one();

    candidate
}

/// True if `n` is divisible by one of the sieve primes.
#[inline]
fn has_small_factor(n: &BigUint) -> bool {
    SIEVE_PRIMES.iter().any(|&prime| (n % prime).is_zero())
}

/// Miller-Rabin round count by size, after FIPS 186-4 Table C.1.
#[inline]
const fn miller_rabin_rounds(bits: usize) -> usize {
    match bits {
        0..=256 => 40,
        257..=512 => 15,
        513..=1024 => 10,
        1025..=2048 => 6,
        2049..=4096 => 4,
        _ => 3,
    }
}
