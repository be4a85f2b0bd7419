// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod util;

use crate::arithmetic::{Arithmetic, StdArithmetic};
use crate::error::{Error, Result};

use num_bigint_dig::BigUint;
use num_bigint_dig::prime::probably_prime;
use num_traits::{One, Zero};
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use util::{Attempt, RetryReason};

/// Miller-Rabin rounds applied to caller-supplied factors.
const PRIMALITY_ROUNDS: usize = 20;

/// Public parameters of the cryptosystem.
///
/// `n = pq` for two distinct secret primes, `n_squared = n²`, and `g` is a
/// generator of the shape produced by key generation. Everything here may
/// be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) n_squared: BigUint,
    pub(crate) g: BigUint,
    pub(crate) bit_length: usize,
}

impl PublicKey {
    /// Construct a public key from `n` and `g`.
    ///
    /// Requires `n > 1` and `0 < g < n²`.
    pub fn new(n: BigUint, g: BigUint) -> Result<Self> {
        if n <= BigUint::one() || g.is_zero() {
            return Err(Error::InvalidPublicKey);
        }

        let n_squared = &n * &n;
        if g >= n_squared {
            return Err(Error::InvalidPublicKey);
        }

        let bit_length = n.bits();
        Ok(Self { n, n_squared, g, bit_length })
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return `n²`, the ciphertext modulus.
    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }

    /// Return the generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return the bit length of the modulus.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    pub(crate) fn check_plaintext(&self, m: &BigUint) -> Result<()> {
        if m >= &self.n {
            return Err(Error::PlaintextOutOfRange);
        }
        Ok(())
    }

    pub(crate) fn check_ciphertext(&self, c: &BigUint) -> Result<()> {
        if c >= &self.n_squared {
            return Err(Error::CiphertextOutOfRange);
        }
        Ok(())
    }
}

/// Secret key material.
///
/// `lambda = lcm(p - 1, q - 1)` and `mu = L(g^lambda mod n²)⁻¹ mod n`. The
/// primes themselves are not kept. Secret fields are zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,
    pub(crate) lambda: BigUint,
    pub(crate) mu: BigUint,
}

impl PrivateKey {
    /// Return a reference to the associated public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Return λ.
    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    /// Return μ.
    pub fn mu(&self) -> &BigUint {
        &self.mu
    }
}

/// A complete key pair consisting of public and private components.
///
/// Immutable once built and safe to share between threads. Secret material
/// is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    #[zeroize(skip)]
    pub(crate) public: PublicKey,
    pub(crate) secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters (3072-bit modulus).
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build()
    }

    /// Generate a key pair with a custom modulus size.
    pub fn generate_with_size(bit_length: usize) -> Result<Self> {
        KeyPairBuilder::new().bit_length(bit_length).build()
    }

    /// Assemble a key pair from known primes and generator.
    ///
    /// No randomness is consumed and no size policy is applied, so this is
    /// meant for known-answer tests and for restoring keys whose factors are
    /// already held elsewhere.
    pub fn from_primes(p: &BigUint, q: &BigUint, g: BigUint) -> Result<Self> {
        let two = BigUint::from(2u32);
        if p < &two || q < &two {
            return Err(Error::KeyGenerationFailed("Primes must be at least 2".into()));
        }
        if p == q {
            return Err(Error::KeyGenerationFailed("Primes must be distinct".into()));
        }
        if !probably_prime(p, PRIMALITY_ROUNDS) || !probably_prime(q, PRIMALITY_ROUNDS) {
            return Err(Error::KeyGenerationFailed("Factors must be prime".into()));
        }

        let n = p * q;
        let n_squared = &n * &n;
        if g.is_zero() || g >= n_squared {
            return Err(Error::KeyGenerationFailed("Generator must lie in (0, n²)".into()));
        }

        let bit_length = n.bits();
        let arith: StdArithmetic = StdArithmetic::default();

        util::assemble(p, q, n, n_squared, g, bit_length, &arith).ok_or_else(|| {
            Error::KeyGenerationFailed("L(g^lambda mod n²) is not invertible mod n".into())
        })
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

/// Builder for generating key pairs with configurable parameters.
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    bit_length: usize,
    max_attempts: Option<usize>,
}

impl KeyPairBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self { bit_length: Self::DEFAULT_BITS, max_attempts: None }
    }

    /// Modulus size used when none is configured.
    pub const DEFAULT_BITS: usize = 3072;

    /// Minimum recommended for production (NIST/ENISA standard)
    pub const MIN_SECURE_BITS: usize = 2048;

    /// Absolute minimum enforced in production builds
    /// Can be bypassed with `allow-weak-keys` feature flag
    #[cfg(not(feature = "allow-weak-keys"))]
    pub const ABSOLUTE_MIN_BITS: usize = 512;

    #[cfg(feature = "allow-weak-keys")]
    pub const ABSOLUTE_MIN_BITS: usize = 64;

    /// Set the desired modulus bit length.
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.bit_length = bits;
        self
    }

    /// Give up after `attempts` discarded generation attempts.
    ///
    /// Unbounded by default. A zero bound fails before the first attempt.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Generate the key pair using the operating system RNG.
    pub fn build(self) -> Result<KeyPair> {
        let arith: StdArithmetic = StdArithmetic::default();
        self.build_with(arith)
    }

    /// Generate the key pair with a caller-supplied arithmetic provider.
    pub fn build_with<A: Arithmetic>(self, mut arith: A) -> Result<KeyPair> {
        if self.bit_length < Self::ABSOLUTE_MIN_BITS {
            return Err(Error::InvalidKeySize {
                min: Self::ABSOLUTE_MIN_BITS,
                actual: self.bit_length,
            });
        }

        if self.bit_length < Self::MIN_SECURE_BITS {
            warn!(
                bits = self.bit_length,
                recommended = Self::MIN_SECURE_BITS,
                "requested key size is cryptographically weak"
            );
        }

        let mut attempts = 0usize;
        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(Error::RetriesExhausted { attempts });
            }
            attempts += 1;

            match util::attempt(self.bit_length, &mut arith)? {
                Attempt::Ready(keypair) => {
                    debug!(bits = self.bit_length, attempts, "generated key pair");
                    return Ok(keypair);
                }
                Attempt::Retry(reason) => log_retry(attempts, reason),
            }
        }
    }
}

fn log_retry(attempt: usize, reason: RetryReason) {
    debug!(attempt, %reason, "discarded key generation attempt");
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use num_integer::Integer;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn toy_keypair() -> KeyPair {
        KeyPair::from_primes(&BigUint::from(17u32), &BigUint::from(19u32), BigUint::from(848u32))
            .unwrap()
    }

    /// Records the primes it hands out so tests can check key invariants.
    struct Recording {
        inner: StdArithmetic<StdRng>,
        primes: Vec<BigUint>,
    }

    impl Arithmetic for Recording {
        fn probable_prime(&mut self, bit_length: usize) -> Result<BigUint> {
            let p = self.inner.probable_prime(bit_length)?;
            self.primes.push(p.clone());
            Ok(p)
        }

        fn random_below(&mut self, bound: &BigUint) -> Result<BigUint> {
            self.inner.random_below(bound)
        }
    }

    /// Always hands out the same prime, so no attempt can ever succeed.
    struct StuckPrimes;

    impl Arithmetic for StuckPrimes {
        fn probable_prime(&mut self, _bit_length: usize) -> Result<BigUint> {
            Ok(BigUint::from(65_537u32))
        }

        fn random_below(&mut self, _bound: &BigUint) -> Result<BigUint> {
            Ok(BigUint::one())
        }
    }

    /// Fails like an exhausted entropy source.
    struct NoEntropy;

    impl Arithmetic for NoEntropy {
        fn probable_prime(&mut self, _bit_length: usize) -> Result<BigUint> {
            Err(Error::Provider("entropy source exhausted".into()))
        }

        fn random_below(&mut self, _bound: &BigUint) -> Result<BigUint> {
            Err(Error::Provider("entropy source exhausted".into()))
        }
    }

    #[test]
    fn known_answer_toy_key() {
        let keypair = toy_keypair();
        let public = keypair.public_key();
        let secret = keypair.private_key();

        assert_eq!(public.n(), &BigUint::from(323u32));
        assert_eq!(public.n_squared(), &BigUint::from(104_329u32));
        assert_eq!(public.g(), &BigUint::from(848u32));
        assert_eq!(secret.lambda(), &BigUint::from(144u32));
        assert_eq!(secret.mu(), &BigUint::one());
        assert_eq!(secret.public_key(), public);
    }

    #[test]
    fn generated_key_invariants() {
        let mut arith = Recording {
            inner: StdArithmetic::new(StdRng::seed_from_u64(2024)),
            primes: Vec::new(),
        };

        let keypair = KeyPairBuilder::new().bit_length(512).build_with(&mut arith).unwrap();
        let public = keypair.public_key();
        let secret = keypair.private_key();

        // the successful attempt drew the last two primes
        let q = arith.primes.pop().unwrap();
        let p = arith.primes.pop().unwrap();

        assert_ne!(p, q);
        assert_eq!(&(&p * &q), public.n());
        assert_eq!(public.n().bits(), 512);
        assert_eq!(public.bit_length(), 512);
        assert_eq!(public.n_squared(), &(public.n() * public.n()));
        assert!(public.g() < public.n_squared());

        let lambda = (&p - 1u32).lcm(&(&q - 1u32));
        assert_eq!(secret.lambda(), &lambda);

        let u = public.g().modpow(&lambda, public.n_squared());
        let l = (u - 1u32) / public.n();
        assert_eq!((l * secret.mu()) % public.n(), BigUint::one());
    }

    #[test]
    fn odd_bit_length() {
        let arith = StdArithmetic::new(StdRng::seed_from_u64(11));
        let keypair = KeyPairBuilder::new().bit_length(513).build_with(arith).unwrap();

        assert_eq!(keypair.public_key().n().bits(), 513);
    }

    #[test]
    fn generate_with_size_uses_system_rng() {
        let keypair = KeyPair::generate_with_size(512).unwrap();

        assert_eq!(keypair.public_key().n().bits(), 512);
        assert_eq!(keypair.private_key().public_key(), keypair.public_key());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = KeyPairBuilder::new()
            .bit_length(512)
            .build_with(StdArithmetic::new(StdRng::seed_from_u64(5)))
            .unwrap();
        let b = KeyPairBuilder::new()
            .bit_length(512)
            .build_with(StdArithmetic::new(StdRng::seed_from_u64(5)))
            .unwrap();

        assert!(a == b);
    }

    #[test]
    fn rejects_small_key_size() {
        let result = KeyPair::generate_with_size(KeyPairBuilder::ABSOLUTE_MIN_BITS - 1);

        assert!(matches!(result, Err(Error::InvalidKeySize { .. })));
    }

    #[test]
    fn bounded_retries_are_exhausted() {
        let result = KeyPairBuilder::new().bit_length(512).max_attempts(3).build_with(StuckPrimes);

        assert_eq!(result.err(), Some(Error::RetriesExhausted { attempts: 3 }));
    }

    #[test]
    fn zero_attempts_never_generates() {
        let arith = StdArithmetic::new(StdRng::seed_from_u64(3));
        let result = KeyPairBuilder::new().bit_length(512).max_attempts(0).build_with(arith);

        assert_eq!(result.err(), Some(Error::RetriesExhausted { attempts: 0 }));
    }

    #[test]
    fn provider_failures_propagate() {
        let result = KeyPairBuilder::new().bit_length(512).build_with(NoEntropy);

        assert!(matches!(result, Err(Error::Provider(_))));
    }

    #[test]
    fn from_primes_rejects_bad_input() {
        let p = BigUint::from(17u32);
        let q = BigUint::from(19u32);

        assert!(KeyPair::from_primes(&p, &p, BigUint::from(848u32)).is_err());
        assert!(KeyPair::from_primes(&p, &BigUint::one(), BigUint::from(2u32)).is_err());
        assert!(KeyPair::from_primes(&p, &q, BigUint::zero()).is_err());
        assert!(KeyPair::from_primes(&p, &q, BigUint::from(104_329u32)).is_err());
    }

    #[test]
    fn from_primes_rejects_composite_factors() {
        // 9 * 3 = 27 looks like a valid modulus but decrypts wrongly
        let result =
            KeyPair::from_primes(&BigUint::from(9u32), &BigUint::from(3u32), BigUint::from(28u32));
        assert!(matches!(result, Err(Error::KeyGenerationFailed(_))));

        let result =
            KeyPair::from_primes(&BigUint::from(17u32), &BigUint::from(323u32), BigUint::from(2u32));
        assert!(matches!(result, Err(Error::KeyGenerationFailed(_))));
    }

    #[test]
    fn from_primes_rejects_non_invertible_generator() {
        // g = 1 gives L(g^λ mod n²) = 0
        let result =
            KeyPair::from_primes(&BigUint::from(17u32), &BigUint::from(19u32), BigUint::one());

        assert!(matches!(result, Err(Error::KeyGenerationFailed(_))));
    }

    #[test]
    fn public_key_validation() {
        let n = BigUint::from(323u32);

        assert!(PublicKey::new(n.clone(), BigUint::from(848u32)).is_ok());
        assert_eq!(PublicKey::new(n.clone(), BigUint::zero()), Err(Error::InvalidPublicKey));
        assert_eq!(
            PublicKey::new(n.clone(), BigUint::from(104_329u32)),
            Err(Error::InvalidPublicKey)
        );
        assert_eq!(PublicKey::new(BigUint::one(), BigUint::one()), Err(Error::InvalidPublicKey));
    }

    #[test]
    fn keys_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<PublicKey>();
        assert_send_sync::<PrivateKey>();
        assert_send_sync::<KeyPair>();
    }
}
