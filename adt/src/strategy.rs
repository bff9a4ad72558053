/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for randomized test input.
//!
//! These strategies are used in `proptest`-based tests to construct
//! container values over arbitrary payloads, including the float
//! specials (NaN and the two zeros) that the equality laws must
//! survive.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::Either;
use crate::Maybe;
use crate::Pair;

/// Generate a [`Maybe`] whose `Just` payload is drawn from `payload`.
pub fn gen_maybe<A>(payload: A) -> impl Strategy<Value = Maybe<A::Value>>
where
    A: Strategy,
    A::Value: Clone,
{
    prop_oneof![
        proptest::strategy::Just(Maybe::Nothing),
        payload.prop_map(Maybe::Just),
    ]
}

/// Generate an [`Either`] with payloads drawn from `left` and `right`.
pub fn gen_either<L, R>(left: L, right: R) -> impl Strategy<Value = Either<L::Value, R::Value>>
where
    L: Strategy,
    R: Strategy,
{
    prop_oneof![
        left.prop_map(Either::Left),
        right.prop_map(Either::Right),
    ]
}

/// Generate a [`Pair`] with components drawn from `first` and
/// `second`.
pub fn gen_pair<A, B>(first: A, second: B) -> impl Strategy<Value = Pair<A::Value, B::Value>>
where
    A: Strategy,
    B: Strategy,
{
    (first, second).prop_map(|(a, b)| Pair(a, b))
}

/// Generate a float biased toward the values equality laws trip over:
/// NaN, the two zeros, and ordinary finite numbers.
pub fn gen_weird_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        proptest::strategy::Just(f64::NAN),
        proptest::strategy::Just(0.0_f64),
        proptest::strategy::Just(-0.0_f64),
        any::<f64>(),
    ]
}
