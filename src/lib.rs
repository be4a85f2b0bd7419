// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paillier Cryptosystem
//!
//! Probabilistic public-key encryption with additive homomorphism, based on
//! the decisional composite residuosity assumption for n = pq.
//!
//! Reference: [Paillier (1999), EUROCRYPT](https://link.springer.com/chapter/10.1007/3-540-48910-X_16)
//!
//! Multiplying two ciphertexts yields an encryption of the sum of their
//! plaintexts, and raising a ciphertext to a known scalar yields an encryption
//! of the product, both without access to the private key.
//!
//! ## Security
//!
//! Private key material (λ, μ) is zeroized on drop via the `zeroize` crate,
//! and the primes p and q never outlive key generation. Multiplying by the
//! scalars 0 or 1 re-randomizes the result so it cannot be recognized.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paillier::{Decrypt, Encrypt, Homomorphic, KeyPair};
//! use num_bigint_dig::BigUint;
//!
//! let keypair = KeyPair::generate_with_size(2048).expect("key generation failed");
//! let public = keypair.public_key();
//!
//! let a = public.encrypt(&BigUint::from(123u32)).expect("encryption failed");
//! let b = public.encrypt(&BigUint::from(456u32)).expect("encryption failed");
//!
//! let sum = public.add(&a, &b).expect("addition failed");
//! let product = public.multiply_by_scalar(&a, &BigUint::from(456u32)).expect("multiplication failed");
//!
//! assert_eq!(keypair.decrypt(&sum).unwrap(), BigUint::from(579u32));
//! assert_eq!(keypair.decrypt(&product).unwrap(), BigUint::from(56_088u32));
//! ```

mod arithmetic;
mod ciphertext;
mod crypto;
mod error;
mod keypair;
mod paillier;
mod util;

pub use arithmetic::{Arithmetic, StdArithmetic};
pub use ciphertext::Ciphertext;
pub use crypto::{Decrypt, Encrypt, Homomorphic};
pub use error::{Error, Result};
pub use keypair::{KeyPair, KeyPairBuilder, PrivateKey, PublicKey};
pub use paillier::Paillier;
