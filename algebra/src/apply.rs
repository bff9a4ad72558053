/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Apply: applying a container of functions to a container of values.

use super::Functor;

/// A functor whose contents, when they are functions, can be applied
/// to the contents of a sibling container.
///
/// The receiver holds the function; the argument holds the value. An
/// empty function-holder short-circuits without consulting the value
/// side.
///
/// Laws (not enforced by type system):
///
/// - **Composition**:
///   `u.ap(v.ap(w)) == u.map(compose).ap(v).ap(w)` for the container's
///   notion of function composition.
pub trait Apply: Functor {
    /// Apply the contained function(s) to the contents of `value`.
    fn ap<A, B>(self, value: Self::Mapped<A>) -> Self::Mapped<B>
    where
        Self::Item: FnMut(A) -> B;
}
