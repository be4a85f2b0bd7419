// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::{CheckedSub, One, Zero};

/// L(x) = (x - 1) / n
///
/// Integer division; exact whenever `x ≡ 1 (mod n)`, which holds for
/// `g^λ mod n²` under a valid key and for `c^λ mod n²` of a valid ciphertext.
/// Returns `None` for `x == 0` or `n == 0`, where L is undefined.
#[inline]
pub(crate) fn l_function(x: &BigUint, n: &BigUint) -> Option<BigUint> {
    if n.is_zero() {
        return None;
    }

    x.checked_sub(&BigUint::one()).map(|shifted| shifted / n)
}
