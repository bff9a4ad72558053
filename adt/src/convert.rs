/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Conversions between the optional and two-branch types.

use crate::Either;
use crate::Maybe;

/// Convert an [`Either`] to a [`Maybe`], discarding a `Left`'s
/// payload.
pub fn either_to_maybe<E, A>(value: Either<E, A>) -> Maybe<A> {
    match value {
        Either::Left(_) => Maybe::Nothing,
        Either::Right(x) => Maybe::Just(x),
    }
}

/// Convert a [`Maybe`] to an [`Either`], substituting `left` for
/// `Nothing`.
pub fn maybe_to_either<E, A>(left: E, value: Maybe<A>) -> Either<E, A> {
    match value {
        Maybe::Nothing => Either::Left(left),
        Maybe::Just(x) => Either::Right(x),
    }
}
