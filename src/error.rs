// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during cryptographic operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key size: must be at least {min} bits, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("Plaintext must be smaller than the public modulus n")]
    PlaintextOutOfRange,

    #[error("Ciphertext must be smaller than n²")]
    CiphertextOutOfRange,

    #[error("Scalar must be smaller than the public modulus n")]
    ScalarOutOfRange,

    #[error("Ciphertext is invalid or corrupted")]
    InvalidCiphertext,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error("Key generation gave up after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    #[error("Arithmetic provider failure: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
