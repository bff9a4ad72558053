/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Applicative: Apply with a way to lift a bare value.

use super::Apply;

/// An [`Apply`] that can lift a bare value into the container.
///
/// Laws (not enforced by type system):
///
/// - **Identity**: `Self::pure(|x| x).ap(v) == v`
/// - **Homomorphism**: `Self::pure(f).ap(Self::pure(x)) == Self::pure(f(x))`
/// - **Interchange**:
///   `u.ap(Self::pure(y)) == Self::pure(|f| f(y)).ap(u)`
pub trait Applicative: Apply {
    /// Lift a value into the container.
    fn pure(item: Self::Item) -> Self;
}
